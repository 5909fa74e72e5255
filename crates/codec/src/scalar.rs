//! Fixed-width scalars: integers, floats, booleans, strings and timestamps.
//!
//! Numeric decoding never truncates or wraps. An integral wire value that
//! does not fit the declared width or sign is a `NumericOverflow`; a value
//! with a fractional part is a `TypeMismatch` for every integer type.

use crate::error::CodecError;
use crate::wire::{FromWire, ToWire};
use serde_json::{Number, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Widen any integral JSON number to `i128` so each target type can range
/// check it with `TryFrom`.
fn integral(value: &Value, target: &'static str) -> Result<i128, CodecError> {
    let number = match value {
        Value::Number(n) => n,
        other => return Err(CodecError::mismatch(target, other)),
    };
    if let Some(i) = number.as_i64() {
        return Ok(i128::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Ok(i128::from(u));
    }
    let f = number
        .as_f64()
        .ok_or_else(|| CodecError::mismatch(target, value))?;
    if f.fract() != 0.0 {
        return Err(CodecError::TypeMismatch {
            expected: format!("integral {}", target),
            got: number.to_string(),
        });
    }
    // Saturates for huge magnitudes, which the caller's range check rejects.
    Ok(f as i128)
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromWire for $t {
                fn from_wire(value: &Value) -> Result<Self, CodecError> {
                    let wide = integral(value, stringify!($t))?;
                    <$t>::try_from(wide).map_err(|_| CodecError::NumericOverflow {
                        target: stringify!($t),
                        value: value.to_string(),
                    })
                }
            }

            impl ToWire for $t {
                fn to_wire(&self) -> Result<Value, CodecError> {
                    Ok(Value::from(*self))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

fn finite(f: f64, target: &'static str) -> Result<Value, CodecError> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| CodecError::TypeMismatch {
            expected: format!("finite {}", target),
            got: f.to_string(),
        })
}

impl FromWire for f64 {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        value.as_f64().ok_or_else(|| CodecError::mismatch("f64", value))
    }
}

impl ToWire for f64 {
    fn to_wire(&self) -> Result<Value, CodecError> {
        finite(*self, "f64")
    }
}

impl FromWire for f32 {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        let f = value.as_f64().ok_or_else(|| CodecError::mismatch("f32", value))?;
        if f.abs() > f64::from(f32::MAX) {
            return Err(CodecError::NumericOverflow {
                target: "f32",
                value: value.to_string(),
            });
        }
        Ok(f as f32)
    }
}

impl ToWire for f32 {
    fn to_wire(&self) -> Result<Value, CodecError> {
        finite(f64::from(*self), "f32")
    }
}

impl FromWire for bool {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        value
            .as_bool()
            .ok_or_else(|| CodecError::mismatch("boolean", value))
    }
}

impl ToWire for bool {
    fn to_wire(&self) -> Result<Value, CodecError> {
        Ok(Value::Bool(*self))
    }
}

impl FromWire for String {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| CodecError::mismatch("string", value))
    }
}

impl ToWire for String {
    fn to_wire(&self) -> Result<Value, CodecError> {
        Ok(Value::String(self.clone()))
    }
}

impl ToWire for str {
    fn to_wire(&self) -> Result<Value, CodecError> {
        Ok(Value::String(self.to_string()))
    }
}

/// Timestamps travel as RFC 3339 strings.
impl FromWire for OffsetDateTime {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        let text = value
            .as_str()
            .ok_or_else(|| CodecError::mismatch("RFC 3339 timestamp", value))?;
        OffsetDateTime::parse(text, &Rfc3339).map_err(|e| CodecError::TypeMismatch {
            expected: "RFC 3339 timestamp".to_string(),
            got: format!("'{}' ({})", text, e),
        })
    }
}

impl ToWire for OffsetDateTime {
    fn to_wire(&self) -> Result<Value, CodecError> {
        self.format(&Rfc3339)
            .map(Value::String)
            .map_err(|e| CodecError::TypeMismatch {
                expected: "RFC 3339 representable timestamp".to_string(),
                got: e.to_string(),
            })
    }
}
