//! Sequences, string-keyed mappings, optional slots and the untyped "any"
//! slot.
//!
//! Collections decode element-wise and abort on the first failing element,
//! returning that element's error unchanged. No partial collection is ever
//! produced.

use crate::error::CodecError;
use crate::wire::{FromWire, ToWire};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        let items = value
            .as_array()
            .ok_or_else(|| CodecError::mismatch("array", value))?;
        items.iter().map(T::from_wire).collect()
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> Result<Value, CodecError> {
        self.iter()
            .map(ToWire::to_wire)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: FromWire> FromWire for BTreeMap<String, T> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        let obj = value
            .as_object()
            .ok_or_else(|| CodecError::mismatch("object", value))?;
        obj.iter()
            .map(|(k, v)| T::from_wire(v).map(|t| (k.clone(), t)))
            .collect()
    }
}

impl<T: ToWire> ToWire for BTreeMap<String, T> {
    fn to_wire(&self) -> Result<Value, CodecError> {
        encode_entries(self.iter())
    }
}

impl<T: FromWire> FromWire for HashMap<String, T> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        let obj = value
            .as_object()
            .ok_or_else(|| CodecError::mismatch("object", value))?;
        obj.iter()
            .map(|(k, v)| T::from_wire(v).map(|t| (k.clone(), t)))
            .collect()
    }
}

impl<T: ToWire> ToWire for HashMap<String, T> {
    fn to_wire(&self) -> Result<Value, CodecError> {
        encode_entries(self.iter())
    }
}

fn encode_entries<'a, T: ToWire + 'a>(
    entries: impl Iterator<Item = (&'a String, &'a T)>,
) -> Result<Value, CodecError> {
    let mut obj = Map::new();
    for (k, v) in entries {
        obj.insert(k.clone(), v.to_wire()?);
    }
    Ok(Value::Object(obj))
}

/// An absent key decodes to `None`, and so does `null` unless `T` itself
/// accepts `null`. `None` is omitted from encoded records.
impl<T: FromWire> FromWire for Option<T> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::Null => Ok(T::from_wire(value).ok()),
            other => T::from_wire(other).map(Some),
        }
    }

    fn from_absent(_field: &str) -> Result<Self, CodecError> {
        Ok(None)
    }
}

impl<T: ToWire> ToWire for Option<T> {
    fn to_wire(&self) -> Result<Value, CodecError> {
        match self {
            Some(v) => v.to_wire(),
            None => Ok(Value::Null),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: FromWire> FromWire for Box<T> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        T::from_wire(value).map(Box::new)
    }

    fn from_absent(field: &str) -> Result<Self, CodecError> {
        T::from_absent(field).map(Box::new)
    }
}

impl<T: ToWire + ?Sized> ToWire for Box<T> {
    fn to_wire(&self) -> Result<Value, CodecError> {
        (**self).to_wire()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// The "any" slot: accepts every well-formed JSON value, `null` included.
/// An absent key reads as `null`.
impl FromWire for Value {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        Ok(value.clone())
    }

    fn from_absent(_field: &str) -> Result<Self, CodecError> {
        Ok(Value::Null)
    }
}

impl ToWire for Value {
    fn to_wire(&self) -> Result<Value, CodecError> {
        Ok(self.clone())
    }
}
