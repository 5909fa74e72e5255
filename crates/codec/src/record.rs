//! Plain records: named field sets mapped key by key onto a flat JSON object.
//!
//! Record field sets double as union variant payloads, so decoding works on
//! a borrowed [`WireObject`] and ignores keys it does not declare.

use crate::error::CodecError;
use crate::wire::{FromWire, ToWire, WireObject};
use serde_json::Value;

/// A named field set that reads from and writes into a flat wire object.
pub trait FieldSet: Sized {
    /// Wire keys of the declared fields, in declaration order.
    const KEYS: &'static [&'static str];

    /// Extract the declared fields from `obj`. Undeclared keys are ignored.
    fn decode_fields(obj: &WireObject) -> Result<Self, CodecError>;

    /// Insert every present field into `obj`.
    fn encode_fields(&self, obj: &mut WireObject) -> Result<(), CodecError>;
}

/// Borrow `value` as an object or report what it was instead.
pub fn expect_object<'a>(value: &'a Value, expected: &str) -> Result<&'a WireObject, CodecError> {
    value
        .as_object()
        .ok_or_else(|| CodecError::mismatch(format!("{} object", expected), value))
}

/// Decode the value stored under `key`, deferring to
/// [`FromWire::from_absent`] when the key is missing.
pub fn decode_field<T: FromWire>(obj: &WireObject, key: &str) -> Result<T, CodecError> {
    match obj.get(key) {
        Some(value) => T::from_wire(value),
        None => T::from_absent(key),
    }
}

/// Encode `value` under `key` unless it reports itself absent.
pub fn encode_field<T: ToWire + ?Sized>(
    obj: &mut WireObject,
    key: &str,
    value: &T,
) -> Result<(), CodecError> {
    if !value.is_absent() {
        obj.insert(key.to_string(), value.to_wire()?);
    }
    Ok(())
}

/// Decode a whole record from a wire value.
pub fn decode_record<R: FieldSet>(value: &Value, name: &str) -> Result<R, CodecError> {
    R::decode_fields(expect_object(value, name)?)
}

/// Encode a whole record into a fresh wire object.
pub fn encode_record<R: FieldSet>(record: &R) -> Result<Value, CodecError> {
    let mut obj = WireObject::new();
    record.encode_fields(&mut obj)?;
    Ok(Value::Object(obj))
}

/// Declare a record whose fields map onto fixed wire keys.
///
/// Each field is written `name: Type => "wireKey"`. `Option<T>` fields may
/// be absent on the wire and are omitted when `None`.
///
/// ```
/// tagwire_codec::wire_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Point {
///         pub x: i32 => "x",
///         pub label: Option<String> => "label",
///     }
/// }
///
/// let p: Point = tagwire_codec::from_str(r#"{"x": 3}"#).unwrap();
/// assert_eq!(p, Point { x: 3, label: None });
/// assert_eq!(tagwire_codec::to_string(&p).unwrap(), r#"{"x":3}"#);
/// ```
#[macro_export]
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $ty, )*
        }

        impl $crate::FieldSet for $name {
            const KEYS: &'static [&'static str] = &[$($key),*];

            #[allow(unused_variables)]
            fn decode_fields(obj: &$crate::WireObject) -> Result<Self, $crate::CodecError> {
                Ok($name {
                    $( $field: $crate::decode_field(obj, $key)?, )*
                })
            }

            #[allow(unused_variables)]
            fn encode_fields(&self, obj: &mut $crate::WireObject) -> Result<(), $crate::CodecError> {
                $( $crate::encode_field(obj, $key, &self.$field)?; )*
                Ok(())
            }
        }

        impl $crate::FromWire for $name {
            fn from_wire(value: &$crate::serde_json::Value) -> Result<Self, $crate::CodecError> {
                $crate::decode_record(value, stringify!($name))
            }
        }

        impl $crate::ToWire for $name {
            fn to_wire(&self) -> Result<$crate::serde_json::Value, $crate::CodecError> {
                $crate::encode_record(self)
            }
        }
    };
}
