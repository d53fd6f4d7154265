//! The capability every field type provides so it can be used inside a schema.

use std::fmt::Debug;

use crate::{
    cursor::Cursor,
    error::{DecodeError, EncodeError},
    value::Value,
};

/// Encode/decode contract implemented by every field type, primitive or composite.
///
/// Implementations are stateless transformers: they own no record state and
/// are shared by reference between every schema that uses them.
pub trait FieldType: Debug + Send + Sync {
    /// Encode one value. Fails if the value is outside the type's domain.
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError>;

    /// Decode one value, consuming exactly the bytes [`encode`](Self::encode)
    /// produces for it.
    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError>;

    /// Diagnostic rendering of a value. Not meant to round-trip.
    fn repr(&self, value: &Value) -> String {
        value.to_string()
    }

    /// Decode one value from a self-contained buffer.
    fn decode_slice(&self, data: &[u8]) -> Result<Value, DecodeError> {
        self.decode(&mut Cursor::from(data))
    }
}
