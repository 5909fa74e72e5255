//! Tagged unions: a discriminator key selects which variant's fields share
//! the flat wire object with it.
//!
//! A union is a Rust enum whose variants each wrap one payload field set, so
//! a value only ever carries the active variant's data. The discriminator
//! key and the literal of every variant are constants of the type; the
//! literal table lives in a static [`VariantRegistry`].
//!
//! Decoding runs in a fixed order:
//!
//! 1. the input must be an object (`TypeMismatch` otherwise);
//! 2. the discriminator must be present and a string (`MalformedDiscriminator`);
//! 3. the literal must be registered (`UnknownVariant`);
//! 4. the variant's fields are parsed from the same object, errors propagate.

use crate::error::{describe, CodecError};
use crate::record::expect_object;
use crate::registry::VariantRegistry;
use crate::wire::WireObject;
use serde_json::Value;
use tracing::{debug, trace};

/// A sum type encoded as one flat object with a discriminator key.
///
/// Implemented by [`wire_union!`](crate::wire_union).
pub trait TaggedUnion: Sized + 'static {
    /// Type name used in errors and logs.
    const NAME: &'static str;

    /// Wire key holding the discriminator literal.
    const DISCRIMINATOR: &'static str;

    fn registry() -> &'static VariantRegistry<Self>;

    /// Discriminator literal of the active variant.
    fn tag(&self) -> &'static str;

    /// Write the active variant's fields into `obj`.
    fn encode_payload(&self, obj: &mut WireObject) -> Result<(), CodecError>;
}

fn unknown_variant<U: TaggedUnion>(tag: &str) -> CodecError {
    CodecError::UnknownVariant {
        union: U::NAME,
        discriminator: U::DISCRIMINATOR,
        tag: tag.to_string(),
    }
}

fn malformed<U: TaggedUnion>(reason: String) -> CodecError {
    CodecError::MalformedDiscriminator {
        union: U::NAME,
        discriminator: U::DISCRIMINATOR,
        reason,
    }
}

/// Read the discriminator literal out of a wire object.
pub fn read_discriminator<'a, U: TaggedUnion>(obj: &'a WireObject) -> Result<&'a str, CodecError> {
    match obj.get(U::DISCRIMINATOR) {
        Some(Value::String(tag)) => Ok(tag.as_str()),
        Some(other) => {
            debug!(
                union_name = U::NAME,
                discriminator = U::DISCRIMINATOR,
                "discriminator is not a string"
            );
            Err(malformed::<U>(format!("expected string, got {}", describe(other))))
        }
        None => {
            debug!(
                union_name = U::NAME,
                discriminator = U::DISCRIMINATOR,
                "discriminator key missing"
            );
            Err(malformed::<U>("key is missing".to_string()))
        }
    }
}

/// Decode a tagged union from its flat wire object.
///
/// Keys other than the discriminator and the matched variant's fields are
/// ignored.
pub fn decode_union<U: TaggedUnion>(value: &Value) -> Result<U, CodecError> {
    let obj = expect_object(value, U::NAME)?;
    let tag = read_discriminator::<U>(obj)?;
    let entry = U::registry().lookup(tag).ok_or_else(|| {
        debug!(union_name = U::NAME, tag, "unknown variant");
        unknown_variant::<U>(tag)
    })?;
    trace!(union_name = U::NAME, tag, "decoding variant");
    entry.decode(obj)
}

/// Encode a tagged union into one flat object holding the discriminator and
/// the active variant's fields side by side.
///
/// A payload that writes the discriminator key itself is rejected with
/// `MalformedDiscriminator` rather than overwritten.
pub fn encode_union<U: TaggedUnion>(value: &U) -> Result<Value, CodecError> {
    let tag = value.tag();
    let entry = U::registry().lookup(tag).ok_or_else(|| {
        debug!(union_name = U::NAME, tag, "refusing to encode unregistered variant");
        unknown_variant::<U>(tag)
    })?;
    trace!(union_name = U::NAME, tag, "encoding variant");
    let mut obj = WireObject::new();
    value.encode_payload(&mut obj)?;
    if obj.contains_key(U::DISCRIMINATOR) {
        debug!(union_name = U::NAME, tag, "payload shadows discriminator key");
        return Err(malformed::<U>(format!(
            "variant {:?} has a field under the discriminator key",
            tag
        )));
    }
    obj.insert(
        U::DISCRIMINATOR.to_string(),
        Value::String(entry.tag().to_string()),
    );
    Ok(Value::Object(obj))
}

/// Declare a tagged union.
///
/// The first line of the body names the discriminator key; every following
/// line maps a literal to a variant wrapping a field set declared with
/// [`wire_record!`](crate::wire_record).
///
/// No payload may declare a field under the discriminator key. Such a union
/// fails constant evaluation and does not compile.
///
/// ```
/// tagwire_codec::wire_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Opened { pub by: String => "by" }
/// }
/// tagwire_codec::wire_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Closed {}
/// }
/// tagwire_codec::wire_union! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum DoorEvent {
///         discriminator = "kind";
///         "opened" => Opened(Opened),
///         "closed" => Closed(Closed),
///     }
/// }
///
/// let ev: DoorEvent = tagwire_codec::from_str(r#"{"kind":"opened","by":"ann"}"#).unwrap();
/// assert_eq!(ev, DoorEvent::Opened(Opened { by: "ann".into() }));
/// ```
#[macro_export]
macro_rules! wire_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            discriminator = $disc:literal;
            $( $(#[$vmeta:meta])* $tag:literal => $variant:ident($payload:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant($payload), )+
        }

        const _: () = {
            $(
                if $crate::registry::contains_key(<$payload as $crate::FieldSet>::KEYS, $disc) {
                    panic!("variant payload declares a field under the discriminator key");
                }
            )+
        };

        impl $crate::TaggedUnion for $name {
            const NAME: &'static str = stringify!($name);
            const DISCRIMINATOR: &'static str = $disc;

            fn registry() -> &'static $crate::VariantRegistry<Self> {
                static REGISTRY: $crate::VariantRegistry<$name> = $crate::VariantRegistry::new(
                    stringify!($name),
                    &[
                        $(
                            $crate::VariantEntry::new($tag, |obj| {
                                <$payload as $crate::FieldSet>::decode_fields(obj)
                                    .map($name::$variant)
                            }),
                        )+
                    ],
                );
                &REGISTRY
            }

            fn tag(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $tag, )+
                }
            }

            fn encode_payload(
                &self,
                obj: &mut $crate::WireObject,
            ) -> Result<(), $crate::CodecError> {
                match self {
                    $( $name::$variant(payload) => $crate::FieldSet::encode_fields(payload, obj), )+
                }
            }
        }

        impl $crate::FromWire for $name {
            fn from_wire(value: &$crate::serde_json::Value) -> Result<Self, $crate::CodecError> {
                $crate::decode_union(value)
            }
        }

        impl $crate::ToWire for $name {
            fn to_wire(&self) -> Result<$crate::serde_json::Value, $crate::CodecError> {
                $crate::encode_union(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::registry::VariantEntry;
    use crate::record::FieldSet;
    use crate::wire::{FromWire, ToWire};
    use serde_json::json;

    crate::wire_record! {
        #[derive(Debug, Clone, PartialEq)]
        struct Deposit {
            amount: u32 => "amount",
        }
    }

    crate::wire_record! {
        #[derive(Debug, Clone, PartialEq)]
        struct Transfer {
            amount: u32 => "amount",
            to: String => "to",
        }
    }

    crate::wire_union! {
        #[derive(Debug, Clone, PartialEq)]
        enum Txn {
            discriminator = "op";
            "deposit" => Deposit(Deposit),
            "transfer" => Transfer(Transfer),
        }
    }

    #[test]
    fn test_decode_dispatches_on_discriminator() {
        let txn = Txn::from_wire(&json!({"op": "transfer", "amount": 5, "to": "bob"})).unwrap();
        assert_eq!(
            txn,
            Txn::Transfer(Transfer {
                amount: 5,
                to: "bob".to_string()
            })
        );
        assert_eq!(txn.tag(), "transfer");
    }

    #[test]
    fn test_encode_is_flat() {
        let txn = Txn::Deposit(Deposit { amount: 9 });
        assert_eq!(txn.to_wire().unwrap(), json!({"op": "deposit", "amount": 9}));
    }

    #[test]
    fn test_unknown_variant() {
        let err = Txn::from_wire(&json!({"op": "refund", "amount": 5})).unwrap_err();
        match err {
            CodecError::UnknownVariant {
                union,
                discriminator,
                tag,
            } => {
                assert_eq!(union, "Txn");
                assert_eq!(discriminator, "op");
                assert_eq!(tag, "refund");
            }
            other => panic!("expected UnknownVariant, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_discriminator() {
        let err = Txn::from_wire(&json!({"amount": 5})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDiscriminator);
    }

    #[test]
    fn test_non_string_discriminator() {
        for tag in [json!(1), json!(null), json!(["deposit"]), json!(true)] {
            let err = Txn::from_wire(&json!({"op": tag, "amount": 5})).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedDiscriminator);
        }
    }

    #[test]
    fn test_non_object_is_type_mismatch() {
        let err = Txn::from_wire(&json!("deposit")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_variant_field_errors_are_not_unknown_variant() {
        let err = Txn::from_wire(&json!({"op": "transfer", "amount": 5})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);

        let err = Txn::from_wire(&json!({"op": "deposit", "amount": -5})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericOverflow);
    }

    #[test]
    fn test_other_variant_fields_are_ignored() {
        let txn = Txn::from_wire(&json!({"op": "deposit", "amount": 1, "to": "bob"})).unwrap();
        assert_eq!(txn, Txn::Deposit(Deposit { amount: 1 }));
        assert_eq!(txn.to_wire().unwrap(), json!({"op": "deposit", "amount": 1}));
    }

    #[test]
    fn test_registry_matches_variants() {
        let registry = Txn::registry();
        assert_eq!(registry.union_name(), "Txn");
        assert_eq!(registry.tags().collect::<Vec<_>>(), vec!["deposit", "transfer"]);
    }

    // A hand-written union whose registry lacks one of its variants, to
    // exercise the encoder's registry check.
    #[derive(Debug)]
    enum Partial {
        Known(Deposit),
        Unlisted(Deposit),
    }

    static PARTIAL: VariantRegistry<Partial> = VariantRegistry::new(
        "Partial",
        &[VariantEntry::new("known", |obj| {
            Deposit::decode_fields(obj).map(Partial::Known)
        })],
    );

    impl TaggedUnion for Partial {
        const NAME: &'static str = "Partial";
        const DISCRIMINATOR: &'static str = "kind";

        fn registry() -> &'static VariantRegistry<Self> {
            &PARTIAL
        }

        fn tag(&self) -> &'static str {
            match self {
                Partial::Known(_) => "known",
                Partial::Unlisted(_) => "unlisted",
            }
        }

        fn encode_payload(&self, obj: &mut WireObject) -> Result<(), CodecError> {
            match self {
                Partial::Known(p) | Partial::Unlisted(p) => p.encode_fields(obj),
            }
        }
    }

    #[test]
    fn test_encode_unregistered_variant_fails() {
        let err = encode_union(&Partial::Unlisted(Deposit { amount: 1 })).unwrap_err();
        match err {
            CodecError::UnknownVariant { union, tag, .. } => {
                assert_eq!(union, "Partial");
                assert_eq!(tag, "unlisted");
            }
            other => panic!("expected UnknownVariant, got {:?}", other),
        }
        let ok = encode_union(&Partial::Known(Deposit { amount: 1 })).unwrap();
        assert_eq!(ok, json!({"kind": "known", "amount": 1}));
    }

    // A hand-written union whose payload declares the discriminator key,
    // which `wire_union!` refuses to compile.
    crate::wire_record! {
        #[derive(Debug, Clone, PartialEq)]
        struct Labelled {
            kind: String => "kind",
        }
    }

    #[derive(Debug)]
    enum Colliding {
        Real(Labelled),
    }

    static COLLIDING: VariantRegistry<Colliding> = VariantRegistry::new(
        "Colliding",
        &[VariantEntry::new("real", |obj| {
            Labelled::decode_fields(obj).map(Colliding::Real)
        })],
    );

    impl TaggedUnion for Colliding {
        const NAME: &'static str = "Colliding";
        const DISCRIMINATOR: &'static str = "kind";

        fn registry() -> &'static VariantRegistry<Self> {
            &COLLIDING
        }

        fn tag(&self) -> &'static str {
            "real"
        }

        fn encode_payload(&self, obj: &mut WireObject) -> Result<(), CodecError> {
            match self {
                Colliding::Real(p) => p.encode_fields(obj),
            }
        }
    }

    #[test]
    fn test_payload_field_on_discriminator_key_is_rejected() {
        assert!(crate::registry::contains_key(Labelled::KEYS, Colliding::DISCRIMINATOR));
        let err = encode_union(&Colliding::Real(Labelled {
            kind: "fake".to_string(),
        }))
        .unwrap_err();
        match err {
            CodecError::MalformedDiscriminator {
                union,
                discriminator,
                ..
            } => {
                assert_eq!(union, "Colliding");
                assert_eq!(discriminator, "kind");
            }
            other => panic!("expected MalformedDiscriminator, got {:?}", other),
        }
    }

    #[test]
    fn test_declared_unions_keep_payload_keys_apart() {
        assert!(!crate::registry::contains_key(Deposit::KEYS, Txn::DISCRIMINATOR));
        assert!(!crate::registry::contains_key(Transfer::KEYS, Txn::DISCRIMINATOR));
    }

    #[test]
    fn test_read_discriminator() {
        let obj = json!({"op": "deposit"});
        assert_eq!(
            read_discriminator::<Txn>(obj.as_object().unwrap()).unwrap(),
            "deposit"
        );
    }
}
