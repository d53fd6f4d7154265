//! Error types for schemas, record construction, encoding and decoding.

/// A [`Value`](crate::Value) held a different variant than the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}

/// A schema definition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The same field name appears more than once.
    #[error("duplicate field '{name}' in schema")]
    DuplicateField { name: String },
}

/// Construction of, or lookup on, a [`Struct`](crate::Struct) failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructError {
    /// Positional construction with a non-zero count that does not match the schema.
    #[error("{type_name} expects {expected} positional values, got {given}")]
    ArgCount {
        type_name: String,
        expected: usize,
        given: usize,
    },

    /// Named construction used names outside the schema.
    #[error("{type_name}: keyword(s) not in schema {valid:?}: {}", .unknown.join(", "))]
    UnknownFields {
        type_name: String,
        unknown: Vec<String>,
        valid: Vec<String>,
    },

    /// Named construction supplied the same name twice.
    #[error("{type_name}: keyword '{name}' given more than once")]
    DuplicateArgument { type_name: String, name: String },

    /// Lookup of a name that is not part of the schema.
    #[error("{name} is not in the schema of {type_name}")]
    FieldNotFound { type_name: String, name: String },
}

/// A value could not be encoded by its field type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// The value variant is not accepted by the field type.
    #[error(transparent)]
    ValueType(#[from] ValueTypeError),

    /// Integer value outside the range of the wire type.
    #[error("{value} is out of range for {type_name}")]
    OutOfRange { type_name: &'static str, value: i64 },

    /// A length-prefixed value is longer than its prefix can express.
    #[error("{type_name} length {len} exceeds maximum {max}")]
    TooLong {
        type_name: &'static str,
        len: usize,
        max: usize,
    },

    /// The value has the right variant but violates a rule of the wire type.
    #[error("invalid {type_name} value: {detail}")]
    Invalid {
        type_name: &'static str,
        detail: String,
    },

    /// Number of raw values does not match the schema.
    #[error("expected {expected} values for schema, got {given}")]
    ValueCount { expected: usize, given: usize },

    /// A nested record belongs to another record type.
    #[error("expected a {expected} record, found {found}")]
    SchemaMismatch { expected: String, found: String },

    /// Encoding of one named field failed.
    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<EncodeError>,
    },
}

impl EncodeError {
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}

/// Bytes could not be decoded by a field type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// Fewer bytes remain than the field type needs.
    #[error("unexpected EOF at offset {position}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        position: usize,
        needed: usize,
        remaining: usize,
    },

    /// A length or count prefix is negative (other than the null marker) or too large.
    #[error("invalid {type_name} length {length} at offset {position}")]
    InvalidLength {
        type_name: &'static str,
        length: i64,
        position: usize,
    },

    /// String bytes are not valid UTF-8.
    #[error("invalid UTF-8 at offset {position}: {source}")]
    InvalidUtf8 {
        position: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// A variable-length integer ran past its maximum width.
    #[error("malformed varint at offset {position}")]
    MalformedVarint { position: usize },

    /// Bytes are well-formed but violate a rule of the wire type.
    #[error("invalid {type_name} at offset {position}: {detail}")]
    Invalid {
        type_name: &'static str,
        detail: String,
        position: usize,
    },

    /// Decoding of one named field failed.
    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}
