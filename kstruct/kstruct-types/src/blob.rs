//! Length-prefixed opaque byte strings.

use kstruct_core::{Cursor, DecodeError, EncodeError, FieldType, Value};

use crate::varint::{put_uvarint, read_uvarint32};

/// Longest prefix shown by [`FieldType::repr`] before eliding.
const REPR_LIMIT: usize = 100;

fn repr_bytes(value: &Value) -> String {
    match value {
        Value::Bytes(b) if b.len() > REPR_LIMIT => {
            format!("0x{}...", hex::encode(&b[..REPR_LIMIT]))
        }
        Value::Bytes(b) => format!("0x{}", hex::encode(b)),
        other => other.to_string(),
    }
}

fn read_blob(cursor: &mut Cursor, len: usize) -> Result<Value, DecodeError> {
    let raw = cursor.read_bytes(len)?;
    Ok(Value::bytes(raw))
}

/// Bytes with a signed 32-bit length prefix; length `-1` is null.
#[derive(Debug, Clone, Copy, Default)]
pub struct KBytes;

impl FieldType for KBytes {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let Some(b) = value.try_bytes()? else {
            return Ok((-1i32).to_be_bytes().to_vec());
        };
        let len = i32::try_from(b.len()).map_err(|_| EncodeError::TooLong {
            type_name: "KBytes",
            len: b.len(),
            max: i32::MAX as usize,
        })?;
        let mut out = Vec::with_capacity(4 + b.len());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(b);
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        let position = cursor.position();
        match cursor.read_i32()? {
            -1 => Ok(Value::Null),
            len if len < 0 => Err(DecodeError::InvalidLength {
                type_name: "KBytes",
                length: i64::from(len),
                position,
            }),
            len => read_blob(cursor, len as usize),
        }
    }

    fn repr(&self, value: &Value) -> String {
        repr_bytes(value)
    }
}

/// Bytes with an unsigned varint prefix of `length + 1`; `0` is null.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactBytes;

impl FieldType for CompactBytes {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        match value.try_bytes()? {
            None => put_uvarint(&mut out, 0),
            Some(b) => {
                if b.len() >= u32::MAX as usize {
                    return Err(EncodeError::TooLong {
                        type_name: "CompactBytes",
                        len: b.len(),
                        max: u32::MAX as usize - 1,
                    });
                }
                put_uvarint(&mut out, b.len() as u64 + 1);
                out.extend_from_slice(b);
            }
        }
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        match read_uvarint32(cursor)? {
            0 => Ok(Value::Null),
            n => read_blob(cursor, n as usize - 1),
        }
    }

    fn repr(&self, value: &Value) -> String {
        repr_bytes(value)
    }
}
