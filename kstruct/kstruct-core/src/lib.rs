//! Field type contract and schema-driven composite records for binary wire
//! protocols.
//!
//! A record layout is declared once as a [`Schema`] (ordered, named
//! [`FieldType`]s). [`StructType`] attaches a name to a schema, builds
//! [`Struct`] instances from positional or named [`Value`]s, and derives the
//! byte encoding of those instances from the schema.

mod cursor;
mod error;
mod field_type;
mod record;
mod schema;
mod value;

pub use cursor::Cursor;
pub use error::{DecodeError, EncodeError, SchemaError, StructError, ValueTypeError};
pub use field_type::FieldType;
pub use record::{Struct, StructArgs, StructType};
pub use schema::{Field, Schema};
pub use value::Value;
