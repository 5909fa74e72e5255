//! Closed string enumerations.
//!
//! Decoding policy is explicit and chosen per field by type:
//!
//! - a field typed `E` (any [`WireEnum`]) is strict: a literal outside the
//!   declared set is a `TypeMismatch`;
//! - a field typed [`Open<E>`] is open: unknown literals are preserved as
//!   [`Open::Unknown`] and re-encoded verbatim.

use crate::error::CodecError;
use crate::wire::{FromWire, ToWire};
use serde_json::Value;
use std::fmt;

/// A closed set of string literals.
///
/// Implemented by [`wire_enum!`](crate::wire_enum).
pub trait WireEnum: Sized + Copy + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Every literal, in declaration order.
    const LITERALS: &'static [&'static str];

    fn from_literal(literal: &str) -> Option<Self>;

    fn as_literal(&self) -> &'static str;
}

/// Strict decode of an enum literal.
pub fn decode_enum<E: WireEnum>(value: &Value) -> Result<E, CodecError> {
    let literal = value
        .as_str()
        .ok_or_else(|| CodecError::mismatch(format!("{} literal", E::NAME), value))?;
    E::from_literal(literal).ok_or_else(|| CodecError::TypeMismatch {
        expected: format!("one of {:?}", E::LITERALS),
        got: format!("'{}'", literal),
    })
}

/// An enum value that tolerates literals added by newer schemas.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Open<E> {
    Known(E),
    Unknown(String),
}

impl<E: WireEnum> Open<E> {
    pub fn as_literal(&self) -> &str {
        match self {
            Open::Known(e) => e.as_literal(),
            Open::Unknown(s) => s,
        }
    }

    pub fn known(&self) -> Option<E> {
        match self {
            Open::Known(e) => Some(*e),
            Open::Unknown(_) => None,
        }
    }
}

impl<E> From<E> for Open<E> {
    fn from(e: E) -> Self {
        Open::Known(e)
    }
}

impl<E: WireEnum> FromWire for Open<E> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        let literal = value
            .as_str()
            .ok_or_else(|| CodecError::mismatch(format!("{} literal", E::NAME), value))?;
        Ok(match E::from_literal(literal) {
            Some(e) => Open::Known(e),
            None => Open::Unknown(literal.to_string()),
        })
    }
}

impl<E: WireEnum> ToWire for Open<E> {
    fn to_wire(&self) -> Result<Value, CodecError> {
        Ok(Value::String(self.as_literal().to_string()))
    }
}

impl<E: WireEnum> fmt::Display for Open<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_literal())
    }
}

/// Declare a closed string enumeration.
///
/// ```
/// tagwire_codec::wire_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Color {
///         Red = "RED",
///         Green = "GREEN",
///     }
/// }
///
/// let c: Color = tagwire_codec::from_str("\"GREEN\"").unwrap();
/// assert_eq!(c, Color::Green);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const LITERALS: &'static [&'static str] = &[ $( $literal, )+ ];

            fn from_literal(literal: &str) -> Option<Self> {
                match literal {
                    $( $literal => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn as_literal(&self) -> &'static str {
                match self {
                    $( $name::$variant => $literal, )+
                }
            }
        }

        impl $crate::FromWire for $name {
            fn from_wire(value: &$crate::serde_json::Value) -> Result<Self, $crate::CodecError> {
                $crate::decode_enum(value)
            }
        }

        impl $crate::ToWire for $name {
            fn to_wire(&self) -> Result<$crate::serde_json::Value, $crate::CodecError> {
                Ok($crate::serde_json::Value::String(
                    $crate::WireEnum::as_literal(self).to_string(),
                ))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireEnum::as_literal(self))
            }
        }
    };
}
