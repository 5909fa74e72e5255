//! The `gamut` schema: one record touching every supported form.
//!
//! Scalars of every width, a reference to another record, a closed enum, a
//! string-keyed map, an untyped slot, a sequence and a tagged union keyed by
//! `"tag"`.

use serde_json::Value;
use std::collections::BTreeMap;
use tagwire_codec::{wire_enum, wire_record, wire_union};
use time::OffsetDateTime;

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Ref {
        pub a: String => "a",
    }
}

wire_record! {
    /// One field per scalar type.
    #[derive(Debug, Clone, PartialEq)]
    pub struct GamutType {
        pub a: bool => "a",
        pub b: String => "b",
        pub c: OffsetDateTime => "c",
        pub d: i8 => "d",
        pub e: u8 => "e",
        pub f: i16 => "f",
        pub g: u16 => "g",
        pub h: i32 => "h",
        pub i: u32 => "i",
        pub j: f32 => "j",
        pub k: f64 => "k",
        pub l: i64 => "l",
        pub m: u64 => "m",
    }
}

wire_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GamutEnum {
        Foo = "FOO",
        Bar = "BAR",
        Baz = "BAZ",
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GamutValues {
        pub a: String => "a",
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GamutElements {
        pub a: String => "a",
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GamutDiscriminatorA {
        pub a: String => "a",
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GamutDiscriminatorB {
        pub b: String => "b",
    }
}

wire_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GamutDiscriminator {
        discriminator = "tag";
        "a" => A(GamutDiscriminatorA),
        "b" => B(GamutDiscriminatorB),
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Gamut {
        pub reference: Ref => "ref",
        pub scalars: GamutType => "type",
        pub choice: GamutEnum => "enum",
        pub values: BTreeMap<String, GamutValues> => "values",
        /// Untyped: any JSON value, `null` included.
        pub empty: Value => "empty",
        pub elements: Vec<GamutElements> => "elements",
        pub discriminator: GamutDiscriminator => "discriminator",
    }
}
