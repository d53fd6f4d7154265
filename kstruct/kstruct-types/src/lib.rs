//! Kafka protocol primitive field types for `kstruct` records.
//!
//! All fixed-width integers are big-endian. Nullable types (strings, bytes,
//! arrays) map the wire null marker to [`Value::Null`](kstruct_core::Value::Null).
//!
//! | type | wire form |
//! |------|-----------|
//! | [`Int8`] .. [`Int64`], [`UInt32`], [`Float64`] | fixed width |
//! | [`Boolean`] | one byte |
//! | [`VarInt32`], [`VarInt64`] | zigzag varint |
//! | [`UnsignedVarInt32`] | varint |
//! | [`KString`], [`KBytes`], [`Array`] | `i16` / `i32` / `i32` prefix, `-1` = null |
//! | [`CompactString`], [`CompactBytes`], [`CompactArray`] | varint `len + 1`, `0` = null |
//! | [`TaggedFields`] | varint count of `(tag, size, data)` |

mod array;
mod blob;
mod int;
mod string;
mod tagged;
mod varint;

pub use array::{Array, CompactArray};
pub use blob::{CompactBytes, KBytes};
pub use int::{Boolean, Float64, Int8, Int16, Int32, Int64, UInt32};
pub use string::{CompactString, KString};
pub use tagged::TaggedFields;
pub use varint::{UnsignedVarInt32, VarInt32, VarInt64};
