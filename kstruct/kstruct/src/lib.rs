//! Declare binary protocol records once, as ordered lists of named field
//! types, and get their byte encoding and decoding for free.
//!
//! ```
//! use std::sync::Arc;
//!
//! use kstruct::{Field, Schema, StructType, Value, types::{KString, UInt32}};
//!
//! let schema = Schema::new(vec![Field::new("id", UInt32), Field::new("name", KString)])?;
//! let record_type = StructType::new("IdName", Arc::new(schema));
//!
//! let record = record_type.named([("id", Value::U32(7)), ("name", Value::string("kafka"))])?;
//! let wire = record.encode()?;
//! assert_eq!(wire, b"\x00\x00\x00\x07\x00\x05kafka");
//! assert_eq!(record_type.decode_bytes(&wire)?, record);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use kstruct_core as core;
pub use kstruct_core::{
    Cursor, DecodeError, EncodeError, Field, FieldType, Schema, SchemaError, Struct, StructArgs,
    StructError, StructType, Value, ValueTypeError,
};
pub use kstruct_types as types;
