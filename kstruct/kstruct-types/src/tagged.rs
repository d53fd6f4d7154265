//! Tagged fields trailing flexible-version messages.
//!
//! The value is an array of `[tag, data]` pairs, each pair itself an
//! [`Value::Array`] of an integer tag and [`Value::Bytes`]. On the wire:
//! a varint count, then per field a varint tag, a varint size and the data.
//! Tags are written in strictly ascending order.

use kstruct_core::{Cursor, DecodeError, EncodeError, FieldType, Value};

use crate::varint::{put_uvarint, read_uvarint32};

#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedFields;

impl TaggedFields {
    /// Build the value for a set of tagged fields.
    pub fn value<I, B>(fields: I) -> Value
    where
        I: IntoIterator<Item = (u32, B)>,
        B: AsRef<[u8]>,
    {
        Value::Array(
            fields
                .into_iter()
                .map(|(tag, data)| Value::Array(vec![Value::U32(tag), Value::bytes(data)]))
                .collect(),
        )
    }
}

fn invalid(detail: impl Into<String>) -> EncodeError {
    EncodeError::Invalid {
        type_name: "TaggedFields",
        detail: detail.into(),
    }
}

fn tagged_pair(value: &Value) -> Result<(u32, &[u8]), EncodeError> {
    let pair = value.try_array()?.unwrap_or_default();
    let [tag, data] = pair else {
        return Err(invalid(format!("expected [tag, data] pair, got {value}")));
    };
    let wide = tag
        .as_integer()
        .ok_or_else(|| tag.type_mismatch("integer tag"))?;
    let tag = u32::try_from(wide).map_err(|_| EncodeError::OutOfRange {
        type_name: "TaggedFields",
        value: wide,
    })?;
    let data = data
        .try_bytes()?
        .ok_or_else(|| invalid(format!("tag {tag} has null data")))?;
    Ok((tag, data))
}

impl FieldType for TaggedFields {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let items = value.try_array()?.unwrap_or_default();
        let mut pairs = items
            .iter()
            .map(tagged_pair)
            .collect::<Result<Vec<_>, _>>()?;
        pairs.sort_by_key(|(tag, _)| *tag);
        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(invalid(format!("duplicate tag {}", w[0].0)));
        }

        let mut out = Vec::new();
        put_uvarint(&mut out, pairs.len() as u64);
        for (tag, data) in pairs {
            put_uvarint(&mut out, u64::from(tag));
            put_uvarint(&mut out, data.len() as u64);
            out.extend_from_slice(data);
        }
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        let count = read_uvarint32(cursor)? as usize;
        let mut out = Vec::with_capacity(count.min(cursor.remaining()));
        let mut prev: Option<u32> = None;
        for _ in 0..count {
            let position = cursor.position();
            let tag = read_uvarint32(cursor)?;
            if prev.is_some_and(|p| tag <= p) {
                return Err(DecodeError::Invalid {
                    type_name: "TaggedFields",
                    detail: format!("invalid or out-of-order tag {tag}"),
                    position,
                });
            }
            prev = Some(tag);
            let size = read_uvarint32(cursor)? as usize;
            let data = cursor.read_bytes(size)?;
            out.push(Value::Array(vec![Value::U32(tag), Value::bytes(data)]));
        }
        Ok(Value::Array(out))
    }
}
