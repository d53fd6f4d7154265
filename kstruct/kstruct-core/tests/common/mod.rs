//! Minimal field types used to exercise the core without the Kafka type set.

#![allow(dead_code)]

use std::sync::Arc;

use kstruct_core::{
    Cursor, DecodeError, EncodeError, Field, FieldType, Schema, StructType, Value,
};

/// Big-endian `u32`.
#[derive(Debug)]
pub struct U32Be;

impl FieldType for U32Be {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        match value {
            Value::U32(v) => Ok(v.to_be_bytes().to_vec()),
            other => Err(other.type_mismatch("U32").into()),
        }
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        cursor.read_u32().map(Value::U32)
    }
}

/// One length byte followed by UTF-8.
#[derive(Debug)]
pub struct ShortStr;

impl FieldType for ShortStr {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let s = value.try_str()?.unwrap_or_default();
        let len = u8::try_from(s.len()).map_err(|_| EncodeError::TooLong {
            type_name: "ShortStr",
            len: s.len(),
            max: u8::MAX as usize,
        })?;
        let mut out = vec![len];
        out.extend_from_slice(s.as_bytes());
        Ok(out)
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        let len = cursor.read_u8()? as usize;
        let position = cursor.position();
        let bytes = cursor.read_bytes(len)?;
        let s = std::str::from_utf8(&bytes)
            .map_err(|source| DecodeError::InvalidUtf8 { position, source })?;
        Ok(Value::string(s))
    }

    fn repr(&self, value: &Value) -> String {
        match value {
            Value::String(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

pub fn schema(fields: Vec<Field>) -> Arc<Schema> {
    Arc::new(Schema::new(fields).expect("schema should be valid"))
}

/// `Record(id: U32Be, name: ShortStr)`.
pub fn record_type() -> StructType {
    StructType::new(
        "Record",
        schema(vec![Field::new("id", U32Be), Field::new("name", ShortStr)]),
    )
}
