//! serde adapters so codec types can sit inside serde-derived structs.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! tagwire_codec::wire_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq)]
//!     pub enum Mode { Fast = "fast", Slow = "slow" }
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     #[serde(with = "tagwire_codec::serde_bridge")]
//!     mode: Mode,
//! }
//!
//! let s: Settings = serde_json::from_str(r#"{"mode":"slow"}"#).unwrap();
//! assert_eq!(s.mode, Mode::Slow);
//! ```

use crate::wire::{FromWire, ToWire};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ToWire + ?Sized,
    S: Serializer,
{
    value
        .to_wire()
        .map_err(serde::ser::Error::custom)?
        .serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromWire,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    T::from_wire(&value).map_err(serde::de::Error::custom)
}

/// Newtype that gives any codec type a serde implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire<T>(pub T);

impl<T: ToWire> Serialize for Wire<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de, T: FromWire> Deserialize<'de> for Wire<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(Wire)
    }
}
