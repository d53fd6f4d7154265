//! Ordered field declarations shared by every instance of a record type.

use std::{collections::HashSet, fmt, ops::Deref, sync::Arc};

use crate::{
    cursor::Cursor,
    error::{DecodeError, EncodeError, SchemaError},
    field_type::FieldType,
    value::Value,
};

/// One named, typed slot of a schema.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: Arc<dyn FieldType>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl FieldType + 'static) -> Self {
        Self {
            name: name.into(),
            ty: Arc::new(ty),
        }
    }

    /// Build a field around a field type that is already shared.
    pub fn shared(name: impl Into<String>, ty: Arc<dyn FieldType>) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Immutable, ordered list of fields. The order is the wire order.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Concatenate the encodings of `values`, taken in schema order.
    ///
    /// No framing is added. Encoding stops at the first failing field.
    pub fn encode(&self, values: &[Value]) -> Result<Vec<u8>, EncodeError> {
        if values.len() != self.fields.len() {
            return Err(EncodeError::ValueCount {
                expected: self.fields.len(),
                given: values.len(),
            });
        }
        let mut out = Vec::new();
        for (field, value) in self.fields.iter().zip(values) {
            let bits = field
                .ty
                .encode(value)
                .map_err(|e| e.in_field(&field.name))?;
            out.extend_from_slice(&bits);
        }
        Ok(out)
    }

    /// Decode one value per field, in schema order, from a shared cursor.
    pub fn decode(&self, cursor: &mut Cursor) -> Result<Vec<Value>, DecodeError> {
        let mut values = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = field
                .ty
                .decode(cursor)
                .map_err(|e| e.in_field(&field.name))?;
            values.push(value);
        }
        Ok(values)
    }
}

impl Deref for Schema {
    type Target = [Field];

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", field.name, field.ty)?;
        }
        f.write_str(")")
    }
}
