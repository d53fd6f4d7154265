use bytes::Bytes;
use kstruct_core::{Cursor, DecodeError};

#[test]
fn reads_big_endian_and_tracks_position() {
    let mut cursor = Cursor::from(vec![0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0xff]);
    assert_eq!(cursor.read_i16().expect("i16"), 1);
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.read_u32().expect("u32"), 2);
    assert_eq!(cursor.remaining(), 1);
    assert_eq!(cursor.read_i8().expect("i8"), -1);
    assert!(cursor.is_empty());
}

#[test]
fn short_read_reports_position_and_counts() {
    let mut cursor = Cursor::from(&[1u8, 2, 3][..]);
    cursor.read_u8().expect("u8");
    let err = cursor.read_i32().expect_err("read should fail");
    assert_eq!(
        err,
        DecodeError::UnexpectedEof {
            position: 1,
            needed: 4,
            remaining: 2,
        }
    );
    // A failed fixed-width read consumes nothing.
    assert_eq!(cursor.position(), 1);
}

#[test]
fn read_bytes_advances_and_rest_peeks() {
    let mut cursor = Cursor::new(Bytes::from_static(b"abcdef"));
    assert_eq!(cursor.read_bytes(2).expect("bytes").as_ref(), b"ab");
    assert_eq!(cursor.rest(), b"cdef");
    assert_eq!(cursor.position(), 2);
    assert!(cursor.read_bytes(5).is_err());
    assert_eq!(cursor.read_bytes(4).expect("bytes").as_ref(), b"cdef");
}

#[test]
fn f64_and_i64_round_trip_through_bits() {
    let mut data = Vec::new();
    data.extend_from_slice(&1.5f64.to_be_bytes());
    data.extend_from_slice(&(-9i64).to_be_bytes());
    let mut cursor = Cursor::from(data);
    assert_eq!(cursor.read_f64().expect("f64"), 1.5);
    assert_eq!(cursor.read_i64().expect("i64"), -9);
}
