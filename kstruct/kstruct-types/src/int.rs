//! Fixed-width big-endian scalars.

use kstruct_core::{Cursor, DecodeError, EncodeError, FieldType, Value};

/// Narrow any integer [`Value`] into `T`, failing on overflow.
fn integer<T: TryFrom<i64>>(value: &Value, type_name: &'static str) -> Result<T, EncodeError> {
    let wide = value
        .as_integer()
        .ok_or_else(|| value.type_mismatch(type_name))?;
    T::try_from(wide).map_err(|_| EncodeError::OutOfRange {
        type_name,
        value: wide,
    })
}

macro_rules! fixed_int {
    ($(#[$doc:meta])* $name:ident, $prim:ty, $variant:ident, $read:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl FieldType for $name {
            fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
                let v: $prim = integer(value, stringify!($name))?;
                Ok(v.to_be_bytes().to_vec())
            }

            fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
                cursor.$read().map(Value::$variant)
            }
        }
    };
}

fixed_int!(
    /// Signed 8-bit integer.
    Int8, i8, I8, read_i8
);
fixed_int!(
    /// Signed 16-bit big-endian integer.
    Int16, i16, I16, read_i16
);
fixed_int!(
    /// Signed 32-bit big-endian integer.
    Int32, i32, I32, read_i32
);
fixed_int!(
    /// Signed 64-bit big-endian integer.
    Int64, i64, I64, read_i64
);
fixed_int!(
    /// Unsigned 32-bit big-endian integer.
    UInt32, u32, U32, read_u32
);

/// IEEE 754 double, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float64;

impl FieldType for Float64 {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        match value {
            Value::F64(v) => Ok(v.to_be_bytes().to_vec()),
            other => Err(other.type_mismatch("F64").into()),
        }
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        cursor.read_f64().map(Value::F64)
    }
}

/// One byte; any non-zero byte decodes as `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl FieldType for Boolean {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        match value {
            Value::Bool(v) => Ok(vec![u8::from(*v)]),
            other => Err(other.type_mismatch("Bool").into()),
        }
    }

    fn decode(&self, cursor: &mut Cursor) -> Result<Value, DecodeError> {
        cursor.read_u8().map(|b| Value::Bool(b != 0))
    }
}
