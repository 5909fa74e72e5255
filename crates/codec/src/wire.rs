//! Conversion traits between typed values and the JSON wire model, plus the
//! text-level entry points.
//!
//! Every codec type implements [`FromWire`] and [`ToWire`] over
//! `serde_json::Value`. The text helpers (`from_str`, `to_string`, ...) are
//! thin wrappers that parse or print JSON around those traits.

use crate::error::CodecError;
use serde_json::{Map, Value};

/// A flat JSON object as it appears on the wire.
pub type WireObject = Map<String, Value>;

/// Decode a typed value from its wire representation.
pub trait FromWire: Sized {
    fn from_wire(value: &Value) -> Result<Self, CodecError>;

    /// Called when the value's key is absent from an enclosing record.
    ///
    /// Required types report `MissingField`; optional types produce their
    /// empty value instead.
    fn from_absent(field: &str) -> Result<Self, CodecError> {
        Err(CodecError::MissingField {
            field: field.to_string(),
        })
    }
}

/// Encode a typed value into its wire representation.
pub trait ToWire {
    fn to_wire(&self) -> Result<Value, CodecError>;

    /// Whether an enclosing record should omit this value's key entirely.
    fn is_absent(&self) -> bool {
        false
    }
}

/// Decode a typed value from an already parsed JSON value.
pub fn from_value<T: FromWire>(value: &Value) -> Result<T, CodecError> {
    T::from_wire(value)
}

/// Parse JSON text and decode it.
pub fn from_str<T: FromWire>(text: &str) -> Result<T, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    T::from_wire(&value)
}

/// Parse JSON bytes and decode them.
pub fn from_slice<T: FromWire>(bytes: &[u8]) -> Result<T, CodecError> {
    let value: Value = serde_json::from_slice(bytes)?;
    T::from_wire(&value)
}

/// Encode a value into a JSON value.
pub fn to_value<T: ToWire + ?Sized>(value: &T) -> Result<Value, CodecError> {
    value.to_wire()
}

/// Encode a value into compact JSON text.
pub fn to_string<T: ToWire + ?Sized>(value: &T) -> Result<String, CodecError> {
    let wire = value.to_wire()?;
    Ok(serde_json::to_string(&wire)?)
}
