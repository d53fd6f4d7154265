//! Length-prefixed UTF-8 strings. Both forms can carry a null.

use kstruct_core::{Cursor, DecodeError, EncodeError, FieldType, Value};

use crate::varint::{put_uvarint, read_uvarint32};

fn read_utf8(cursor: &mut Cursor, len: usize) -> Result<Value, DecodeError> {
    let position = cursor.position();
    let raw = cursor.read_bytes(len)?;
    let s = std::str::from_utf8(&raw).map_err(|source| DecodeError::InvalidUtf8 { position, source })?;
    Ok(Value::string(s))
}

/// String with a signed 16-bit length prefix; length `-1` is null.
#[derive(Debug, Clone, Copy, Default)]
pub struct KString;

impl FieldType for KString {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let Some(s) = value.try_str()? else {
            return Ok((-1i16).to_be_bytes().to_vec());
        };
        let len = i16::try_from(s.len()).map_err(|_| EncodeError::TooLong {
            type_name: "KString",
            len: s.len(),
            max: i16::MAX as usize,
        })?;
        let mut out = Vec::with_capacity(2 + s.len());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(s.as_bytes());
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        let position = cursor.position();
        match cursor.read_i16()? {
            -1 => Ok(Value::Null),
            len if len < 0 => Err(DecodeError::InvalidLength {
                type_name: "KString",
                length: i64::from(len),
                position,
            }),
            len => read_utf8(cursor, len as usize),
        }
    }
}

/// String with an unsigned varint prefix of `length + 1`; `0` is null.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactString;

impl FieldType for CompactString {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        match value.try_str()? {
            None => put_uvarint(&mut out, 0),
            Some(s) => {
                if s.len() >= u32::MAX as usize {
                    return Err(EncodeError::TooLong {
                        type_name: "CompactString",
                        len: s.len(),
                        max: u32::MAX as usize - 1,
                    });
                }
                put_uvarint(&mut out, s.len() as u64 + 1);
                out.extend_from_slice(s.as_bytes());
            }
        }
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        match read_uvarint32(cursor)? {
            0 => Ok(Value::Null),
            n => read_utf8(cursor, n as usize - 1),
        }
    }
}
