//! Per-union tables mapping discriminator literals to variant decoders.
//!
//! A registry is built once, in a `static`, from a fixed slice of entries.
//! Literals must be pairwise distinct; [`VariantRegistry::new`] is a
//! `const fn` that rejects duplicates during constant evaluation, so a union
//! declared with a repeated literal does not compile.

use crate::error::CodecError;
use crate::wire::WireObject;
use std::fmt;

/// Decodes one variant's field set from the flat wire object.
pub type VariantDecoder<U> = fn(&WireObject) -> Result<U, CodecError>;

/// One discriminator literal and the decoder for its field shape.
pub struct VariantEntry<U> {
    tag: &'static str,
    decode: VariantDecoder<U>,
}

impl<U> VariantEntry<U> {
    pub const fn new(tag: &'static str, decode: VariantDecoder<U>) -> Self {
        VariantEntry { tag, decode }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Parse the variant's fields out of `obj`.
    pub fn decode(&self, obj: &WireObject) -> Result<U, CodecError> {
        (self.decode)(obj)
    }
}

impl<U> fmt::Debug for VariantEntry<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantEntry").field("tag", &self.tag).finish()
    }
}

/// The closed set of variants of one tagged union.
pub struct VariantRegistry<U: 'static> {
    union: &'static str,
    entries: &'static [VariantEntry<U>],
}

impl<U: 'static> VariantRegistry<U> {
    /// Build a registry from its entries.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a literal. Inside a `static` initializer
    /// this is a compile-time error.
    pub const fn new(union: &'static str, entries: &'static [VariantEntry<U>]) -> Self {
        if first_duplicate(entries).is_some() {
            panic!("duplicate discriminator literal in variant registry");
        }
        VariantRegistry { union, entries }
    }

    pub fn union_name(&self) -> &'static str {
        self.union
    }

    /// Find the entry registered for `tag`.
    pub fn lookup(&self, tag: &str) -> Option<&VariantEntry<U>> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// Registered literals in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<U: 'static> fmt::Debug for VariantRegistry<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("union", &self.union)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Returns the first literal that appears more than once.
pub const fn first_duplicate<U>(entries: &[VariantEntry<U>]) -> Option<&'static str> {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if str_eq(entries[i].tag, entries[j].tag) {
                return Some(entries[i].tag);
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// Whether `key` is one of `keys`. Usable in constant evaluation.
pub const fn contains_key(keys: &[&str], key: &str) -> bool {
    let mut i = 0;
    while i < keys.len() {
        if str_eq(keys[i], key) {
            return true;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
