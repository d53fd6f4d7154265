//! Schema-defined composite records.
//!
//! A [`StructType`] names a [`Schema`] and is itself a [`FieldType`], so records
//! can be nested inside other records. A [`Struct`] is one instance: a value
//! for every field of its type's schema.
//!
//! Two encode entry points exist with the same byte semantics:
//! - [`StructType::encode_values`] works on raw values in schema order,
//!   without building an instance.
//! - [`Struct::encode`] works on the values held by an instance, looked up by
//!   field name.
//!
//! Instances own their values and share the schema through an `Arc`; nothing
//! in an instance points back at the instance itself, so dropping the last
//! handle frees it immediately.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use tracing::{debug, trace};

use crate::{
    cursor::Cursor,
    error::{DecodeError, EncodeError, StructError},
    field_type::FieldType,
    schema::Schema,
    value::Value,
};

/// Arguments for building a [`Struct`]: either all positional or all named.
#[derive(Debug, Clone)]
pub enum StructArgs {
    /// Values in schema order. An empty list leaves every field `Null`.
    Positional(Vec<Value>),
    /// `(field name, value)` pairs. Omitted fields are `Null`.
    Named(Vec<(String, Value)>),
}

/// A record type: a name plus the schema shared by all of its instances.
#[derive(Clone)]
pub struct StructType {
    name: Arc<str>,
    schema: Arc<Schema>,
}

impl StructType {
    pub fn new(name: impl AsRef<str>, schema: Arc<Schema>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            schema,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn construct(&self, args: StructArgs) -> Result<Struct, StructError> {
        match args {
            StructArgs::Positional(values) => self.positional(values),
            StructArgs::Named(pairs) => self.named(pairs),
        }
    }

    pub fn positional(&self, values: Vec<Value>) -> Result<Struct, StructError> {
        let expected = self.schema.len();
        let values = match values.len() {
            n if n == expected => values,
            0 => vec![Value::Null; expected],
            given => {
                debug!(record = %self.name, expected, given, "rejected positional construction");
                return Err(StructError::ArgCount {
                    type_name: self.name.to_string(),
                    expected,
                    given,
                });
            }
        };
        Ok(Struct {
            ty: self.clone(),
            values,
        })
    }

    pub fn named<I, K, V>(&self, pairs: I) -> Result<Struct, StructError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut slots: Vec<Option<Value>> = vec![None; self.schema.len()];
        let mut unknown = Vec::new();

        for (name, value) in pairs {
            let name = name.into();
            match self.schema.index_of(&name) {
                Some(i) if slots[i].is_some() => {
                    debug!(record = %self.name, field = %name, "rejected duplicate keyword");
                    return Err(StructError::DuplicateArgument {
                        type_name: self.name.to_string(),
                        name,
                    });
                }
                Some(i) => slots[i] = Some(value.into()),
                None => unknown.push(name),
            }
        }

        if !unknown.is_empty() {
            debug!(record = %self.name, ?unknown, "rejected unknown keywords");
            return Err(StructError::UnknownFields {
                type_name: self.name.to_string(),
                unknown,
                valid: self.schema.names().map(str::to_string).collect(),
            });
        }

        Ok(Struct {
            ty: self.clone(),
            values: slots
                .into_iter()
                .map(|v| v.unwrap_or(Value::Null))
                .collect(),
        })
    }

    /// Encode raw values given in schema order, without an instance.
    pub fn encode_values(&self, values: &[Value]) -> Result<Vec<u8>, EncodeError> {
        trace!(record = %self.name, "encoding raw values");
        self.schema.encode(values)
    }

    pub fn decode_struct(&self, cursor: &mut Cursor) -> Result<Struct, DecodeError> {
        trace!(record = %self.name, position = cursor.position(), "decoding record");
        let values = self.schema.decode(cursor)?;
        Ok(Struct {
            ty: self.clone(),
            values,
        })
    }

    /// Decode from a self-contained buffer. Trailing bytes are left unchecked.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<Struct, DecodeError> {
        self.decode_struct(&mut Cursor::from(data))
    }

    fn same_schema(&self, other: &StructType) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema)
    }
}

impl fmt::Debug for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.schema)
    }
}

impl FieldType for StructType {
    /// Accepts only an instance of this record type. Raw values go through
    /// [`StructType::encode_values`].
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        match value {
            Value::Struct(s) if self.same_schema(&s.ty) => s.encode(),
            Value::Struct(s) => Err(EncodeError::SchemaMismatch {
                expected: self.name.to_string(),
                found: s.ty.name.to_string(),
            }),
            other => Err(other.type_mismatch(format!("Struct {}", self.name)).into()),
        }
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        self.decode_struct(cursor).map(Value::Struct)
    }
}

/// One record: a value for every field of its type's schema.
#[derive(Clone)]
pub struct Struct {
    ty: StructType,
    values: Vec<Value>,
}

impl Struct {
    pub fn struct_type(&self) -> &StructType {
        &self.ty
    }

    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.ty.schema
    }

    /// Value stored under `name`.
    pub fn get(&self, name: &str) -> Result<&Value, StructError> {
        self.ty
            .schema
            .index_of(name)
            .map(|i| &self.values[i])
            .ok_or_else(|| StructError::FieldNotFound {
                type_name: self.ty.name.to_string(),
                name: name.to_string(),
            })
    }

    /// `(field name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.ty.schema.names().zip(self.values.iter())
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Encode the values held by this instance.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        trace!(record = %self.ty.name, "encoding record");
        self.ty.schema.encode(&self.values)
    }
}

impl PartialEq for Struct {
    fn eq(&self, other: &Self) -> bool {
        self.ty.same_schema(&other.ty) && self.values == other.values
    }
}

impl Eq for Struct {}

impl Hash for Struct {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.encode() {
            Ok(bytes) => bytes.hash(state),
            // Equal instances share a schema and fail to encode identically.
            Err(_) => Arc::as_ptr(&self.ty.schema).hash(state),
        }
    }
}

impl fmt::Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.ty.name)?;
        for (i, (field, value)) in self.ty.schema.fields().iter().zip(&self.values).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", field.name, field.ty.repr(value))?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
