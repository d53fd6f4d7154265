//! Homogeneous, length-prefixed sequences of another field type.

use std::sync::Arc;

use kstruct_core::{Cursor, DecodeError, EncodeError, FieldType, Value};

use crate::varint::{put_uvarint, read_uvarint32};

fn encode_items(
    item: &dyn FieldType,
    items: &[Value],
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    for (i, value) in items.iter().enumerate() {
        let bits = item.encode(value).map_err(|e| e.in_field(format!("[{i}]")))?;
        out.extend_from_slice(&bits);
    }
    Ok(())
}

fn decode_items(
    item: &dyn FieldType,
    cursor: &mut Cursor,
    len: usize,
) -> Result<Value, DecodeError> {
    // The count is untrusted; cap the preallocation by the bytes left.
    let mut out = Vec::with_capacity(len.min(cursor.remaining()));
    for i in 0..len {
        out.push(item.decode(cursor).map_err(|e| e.in_field(format!("[{i}]")))?);
    }
    Ok(Value::Array(out))
}

fn repr_items(item: &dyn FieldType, value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(|v| item.repr(v)).collect();
            format!("[{}]", parts.join(", "))
        }
        other => other.to_string(),
    }
}

/// Array with a signed 32-bit element count; count `-1` is null.
#[derive(Debug, Clone)]
pub struct Array {
    item: Arc<dyn FieldType>,
}

impl Array {
    pub fn new(item: impl FieldType + 'static) -> Self {
        Self {
            item: Arc::new(item),
        }
    }

    pub fn shared(item: Arc<dyn FieldType>) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &Arc<dyn FieldType> {
        &self.item
    }
}

impl FieldType for Array {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let Some(items) = value.try_array()? else {
            return Ok((-1i32).to_be_bytes().to_vec());
        };
        let len = i32::try_from(items.len()).map_err(|_| EncodeError::TooLong {
            type_name: "Array",
            len: items.len(),
            max: i32::MAX as usize,
        })?;
        let mut out = len.to_be_bytes().to_vec();
        encode_items(self.item.as_ref(), items, &mut out)?;
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        let position = cursor.position();
        match cursor.read_i32()? {
            -1 => Ok(Value::Null),
            len if len < 0 => Err(DecodeError::InvalidLength {
                type_name: "Array",
                length: i64::from(len),
                position,
            }),
            len => decode_items(self.item.as_ref(), cursor, len as usize),
        }
    }

    fn repr(&self, value: &Value) -> String {
        repr_items(self.item.as_ref(), value)
    }
}

/// Array with an unsigned varint prefix of `count + 1`; `0` is null.
#[derive(Debug, Clone)]
pub struct CompactArray {
    item: Arc<dyn FieldType>,
}

impl CompactArray {
    pub fn new(item: impl FieldType + 'static) -> Self {
        Self {
            item: Arc::new(item),
        }
    }

    pub fn shared(item: Arc<dyn FieldType>) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &Arc<dyn FieldType> {
        &self.item
    }
}

impl FieldType for CompactArray {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        match value.try_array()? {
            None => put_uvarint(&mut out, 0),
            Some(items) => {
                if items.len() >= u32::MAX as usize {
                    return Err(EncodeError::TooLong {
                        type_name: "CompactArray",
                        len: items.len(),
                        max: u32::MAX as usize - 1,
                    });
                }
                put_uvarint(&mut out, items.len() as u64 + 1);
                encode_items(self.item.as_ref(), items, &mut out)?;
            }
        }
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        match read_uvarint32(cursor)? {
            0 => Ok(Value::Null),
            n => decode_items(self.item.as_ref(), cursor, n as usize - 1),
        }
    }

    fn repr(&self, value: &Value) -> String {
        repr_items(self.item.as_ref(), value)
    }
}
