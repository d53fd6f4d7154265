//! Textual record layouts given on the command line.
//!
//! A layout is a comma-separated list of `name:type` pairs. Types are the
//! Kafka primitives by lower-case name, plus `array<T>` and
//! `compact_array<T>`.

use std::{str::FromStr, sync::Arc};

use anyhow::{Context, Result, anyhow, bail};
use kstruct::{
    Field, FieldType, Schema, StructType, Value,
    types::{
        Array, Boolean, CompactArray, CompactBytes, CompactString, Float64, Int8, Int16, Int32,
        Int64, KBytes, KString, TaggedFields, UInt32, UnsignedVarInt32, VarInt32, VarInt64,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scalar {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt32,
    Float64,
    Bool,
    VarInt,
    VarLong,
    UVarInt,
    String,
    Bytes,
    CompactString,
    CompactBytes,
    TaggedFields,
}

impl Scalar {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint32" => Self::UInt32,
            "float64" => Self::Float64,
            "bool" => Self::Bool,
            "varint" => Self::VarInt,
            "varlong" => Self::VarLong,
            "uvarint" => Self::UVarInt,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            "compact_string" => Self::CompactString,
            "compact_bytes" => Self::CompactBytes,
            "tagged_fields" => Self::TaggedFields,
            _ => return None,
        })
    }

    fn field_type(self) -> Arc<dyn FieldType> {
        match self {
            Self::Int8 => Arc::new(Int8),
            Self::Int16 => Arc::new(Int16),
            Self::Int32 => Arc::new(Int32),
            Self::Int64 => Arc::new(Int64),
            Self::UInt32 => Arc::new(UInt32),
            Self::Float64 => Arc::new(Float64),
            Self::Bool => Arc::new(Boolean),
            Self::VarInt => Arc::new(VarInt32),
            Self::VarLong => Arc::new(VarInt64),
            Self::UVarInt => Arc::new(UnsignedVarInt32),
            Self::String => Arc::new(KString),
            Self::Bytes => Arc::new(KBytes),
            Self::CompactString => Arc::new(CompactString),
            Self::CompactBytes => Arc::new(CompactBytes),
            Self::TaggedFields => Arc::new(TaggedFields),
        }
    }

    /// String values are taken verbatim; one pair of surrounding double
    /// quotes is stripped, so `"null"` is the four-letter string. Other
    /// values are trimmed.
    fn parse_value(self, text: &str) -> Result<Value> {
        let trimmed = text.trim();
        Ok(match self {
            Self::Int8 => Value::I8(trimmed.parse()?),
            Self::Int16 => Value::I16(trimmed.parse()?),
            Self::Int32 | Self::VarInt => Value::I32(trimmed.parse()?),
            Self::Int64 | Self::VarLong => Value::I64(trimmed.parse()?),
            Self::UInt32 | Self::UVarInt => Value::U32(trimmed.parse()?),
            Self::Float64 => Value::F64(trimmed.parse()?),
            Self::Bool => Value::Bool(trimmed.parse()?),
            Self::String | Self::CompactString => Value::string(
                text.strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .unwrap_or(text),
            ),
            Self::Bytes | Self::CompactBytes => Value::from(hex::decode(trimmed)?),
            Self::TaggedFields if trimmed.is_empty() => Value::Array(vec![]),
            Self::TaggedFields => bail!("tagged fields can only be given empty"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TypeSpec {
    Scalar(Scalar),
    Array(Box<TypeSpec>),
    CompactArray(Box<TypeSpec>),
}

impl TypeSpec {
    fn field_type(&self) -> Arc<dyn FieldType> {
        match self {
            Self::Scalar(s) => s.field_type(),
            Self::Array(item) => Arc::new(Array::shared(item.field_type())),
            Self::CompactArray(item) => Arc::new(CompactArray::shared(item.field_type())),
        }
    }

    fn parse_value(&self, text: &str) -> Result<Value> {
        if text.trim() == "null" {
            return Ok(Value::Null);
        }
        match self {
            Self::Scalar(s) => s.parse_value(text),
            Self::Array(item) | Self::CompactArray(item) => {
                let text = text.trim();
                if !matches!(**item, Self::Scalar(_)) {
                    bail!("nested array values are not supported");
                }
                let inner = text
                    .strip_prefix('[')
                    .and_then(|t| t.strip_suffix(']'))
                    .ok_or_else(|| anyhow!("array values are written as [a,b,...]"))?;
                if inner.trim().is_empty() {
                    return Ok(Value::Array(vec![]));
                }
                inner
                    .split(',')
                    .map(|part| item.parse_value(part.trim()))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
        }
    }
}

impl FromStr for TypeSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(item) = s.strip_prefix("array<").and_then(|t| t.strip_suffix('>')) {
            return Ok(Self::Array(Box::new(item.parse()?)));
        }
        if let Some(item) = s
            .strip_prefix("compact_array<")
            .and_then(|t| t.strip_suffix('>'))
        {
            return Ok(Self::CompactArray(Box::new(item.parse()?)));
        }
        Scalar::from_name(s)
            .map(Self::Scalar)
            .ok_or_else(|| anyhow!("unknown field type '{s}'"))
    }
}

/// Ordered `name:type` list parsed from `--schema`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSpec {
    fields: Vec<(String, TypeSpec)>,
}

impl RecordSpec {
    pub fn struct_type(&self, type_name: &str) -> Result<StructType> {
        let fields = self
            .fields
            .iter()
            .map(|(name, ty)| Field::shared(name.clone(), ty.field_type()))
            .collect();
        Ok(StructType::new(type_name, Arc::new(Schema::new(fields)?)))
    }

    /// Parse `text` according to the type of `field`.
    ///
    /// Names outside the layout are passed through as strings so that record
    /// construction reports them.
    pub fn parse_value(&self, field: &str, text: &str) -> Result<Value> {
        match self.fields.iter().find(|(name, _)| name == field) {
            Some((_, ty)) => ty.parse_value(text),
            None => Ok(Value::string(text)),
        }
    }
}

impl FromStr for RecordSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut fields = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, ty) = part
                .split_once(':')
                .with_context(|| format!("expected name:type, got '{part}'"))?;
            fields.push((name.trim().to_string(), ty.parse()?));
        }
        Ok(Self { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_array_types() {
        let spec: RecordSpec = "id:uint32, ids:compact_array<array<int16>>".parse().unwrap();
        assert_eq!(
            spec.fields,
            vec![
                ("id".to_string(), TypeSpec::Scalar(Scalar::UInt32)),
                (
                    "ids".to_string(),
                    TypeSpec::CompactArray(Box::new(TypeSpec::Array(Box::new(
                        TypeSpec::Scalar(Scalar::Int16)
                    ))))
                ),
            ]
        );
    }

    #[test]
    fn rejects_unknown_types_and_missing_colons() {
        assert!("id:uint128".parse::<RecordSpec>().is_err());
        assert!("id".parse::<RecordSpec>().is_err());
    }

    #[test]
    fn builds_a_record_type_and_encodes_parsed_values() {
        let spec: RecordSpec = "id:uint32,name:string,ids:array<int32>".parse().unwrap();
        let ty = spec.struct_type("Demo").unwrap();
        let values = [("id", "7"), ("name", "kafka"), ("ids", "[1, 2]")]
            .into_iter()
            .map(|(n, t)| (n, spec.parse_value(n, t).unwrap()));
        let record = ty.named(values).unwrap();

        let mut expected = b"\x00\x00\x00\x07\x00\x05kafka".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2]);
        assert_eq!(record.encode().unwrap(), expected);
        assert_eq!(
            ty.decode_bytes(&expected).unwrap().to_string(),
            "Demo(id=7, name=\"kafka\", ids=[1, 2])"
        );
    }

    #[test]
    fn null_and_bytes_values() {
        let spec: RecordSpec = "b:bytes,s:compact_string".parse().unwrap();
        assert_eq!(spec.parse_value("b", "0a0b").unwrap(), Value::bytes([10u8, 11]));
        assert_eq!(spec.parse_value("s", "null").unwrap(), Value::Null);
    }

    #[test]
    fn string_values_keep_whitespace_and_quoted_null() {
        let spec: RecordSpec = "s:string,n:int16,ss:array<string>".parse().unwrap();
        assert_eq!(spec.parse_value("s", "  padded ").unwrap(), Value::string("  padded "));
        assert_eq!(spec.parse_value("s", "\"null\"").unwrap(), Value::string("null"));
        assert_eq!(spec.parse_value("s", " null ").unwrap(), Value::Null);
        assert_eq!(spec.parse_value("n", " 12 ").unwrap(), Value::I16(12));
        assert_eq!(
            spec.parse_value("ss", "[a, \"null\"]").unwrap(),
            Value::Array(vec![Value::string("a"), Value::string("null")])
        );
    }

    #[test]
    fn duplicate_field_names_fail_schema_construction() {
        let spec: RecordSpec = "a:int8,a:int16".parse().unwrap();
        assert!(spec.struct_type("Dup").is_err());
    }
}
