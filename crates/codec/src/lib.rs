//! tagwire-codec: runtime codec for schema-derived data models.
//!
//! Typed records, closed enumerations, collections and tagged unions move
//! between Rust values and a `serde_json::Value` wire model through the
//! [`FromWire`] and [`ToWire`] traits. Tagged unions are encoded as one flat
//! object: the discriminator key sits next to the active variant's fields.
//!
//! Types are declared with [`wire_record!`], [`wire_enum!`] and
//! [`wire_union!`], which bake wire keys, literals and the discriminator key
//! into the type. Decoding reports a typed [`CodecError`]; an unrecognized
//! discriminator is always [`CodecError::UnknownVariant`], never a default.

mod collection;
pub mod enumeration;
pub mod error;
pub mod record;
pub mod registry;
mod scalar;
pub mod serde_bridge;
pub mod union;
pub mod wire;

pub use enumeration::{decode_enum, Open, WireEnum};
pub use error::{describe, CodecError, ErrorKind};
pub use record::{decode_field, decode_record, encode_field, encode_record, expect_object, FieldSet};
pub use registry::{VariantDecoder, VariantEntry, VariantRegistry};
pub use union::{decode_union, encode_union, read_discriminator, TaggedUnion};
pub use wire::{from_slice, from_str, from_value, to_string, to_value, FromWire, ToWire, WireObject};

#[doc(hidden)]
pub use serde_json;
