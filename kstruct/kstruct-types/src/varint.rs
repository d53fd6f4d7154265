//! Variable-length integers: unsigned LEB128 and its zigzag-signed forms.

use kstruct_core::{Cursor, DecodeError, EncodeError, FieldType, Value};

pub(crate) fn put_uvarint(out: &mut Vec<u8>, mut v: u64) {
    while v >= 0x80 {
        out.push((v as u8 & 0x7f) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
}

/// Read an unsigned varint of at most `max_bytes` bytes.
pub(crate) fn read_uvarint(cursor: &mut Cursor, max_bytes: usize) -> Result<u64, DecodeError> {
    let start = cursor.position();
    let mut value = 0u64;
    for i in 0..max_bytes {
        let b = cursor.read_u8()?;
        value |= u64::from(b & 0x7f) << (7 * i);
        if b & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DecodeError::MalformedVarint { position: start })
}

pub(crate) fn read_uvarint32(cursor: &mut Cursor) -> Result<u32, DecodeError> {
    let start = cursor.position();
    let v = read_uvarint(cursor, 5)?;
    u32::try_from(v).map_err(|_| DecodeError::MalformedVarint { position: start })
}

/// Unsigned 32-bit varint, used by compact lengths and tagged fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedVarInt32;

impl FieldType for UnsignedVarInt32 {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let wide = value
            .as_integer()
            .ok_or_else(|| value.type_mismatch("UnsignedVarInt32"))?;
        let v = u32::try_from(wide).map_err(|_| EncodeError::OutOfRange {
            type_name: "UnsignedVarInt32",
            value: wide,
        })?;
        let mut out = Vec::with_capacity(5);
        put_uvarint(&mut out, u64::from(v));
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        read_uvarint32(cursor).map(Value::U32)
    }
}

/// Zigzag-encoded signed 32-bit varint.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarInt32;

impl FieldType for VarInt32 {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let wide = value
            .as_integer()
            .ok_or_else(|| value.type_mismatch("VarInt32"))?;
        let v = i32::try_from(wide).map_err(|_| EncodeError::OutOfRange {
            type_name: "VarInt32",
            value: wide,
        })?;
        let zigzag = ((v << 1) ^ (v >> 31)) as u32;
        let mut out = Vec::with_capacity(5);
        put_uvarint(&mut out, u64::from(zigzag));
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        let raw = read_uvarint32(cursor)?;
        Ok(Value::I32(((raw >> 1) as i32) ^ -((raw & 1) as i32)))
    }
}

/// Zigzag-encoded signed 64-bit varint.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarInt64;

impl FieldType for VarInt64 {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let v = value
            .as_integer()
            .ok_or_else(|| value.type_mismatch("VarInt64"))?;
        let zigzag = ((v << 1) ^ (v >> 63)) as u64;
        let mut out = Vec::with_capacity(10);
        put_uvarint(&mut out, zigzag);
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        let raw = read_uvarint(cursor, 10)?;
        Ok(Value::I64(((raw >> 1) as i64) ^ -((raw & 1) as i64)))
    }
}
