//! Error types surfaced by every encode and decode path.

use serde_json::Value;

/// All errors that can be returned while moving a value across the wire
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The discriminator holds a literal that is not registered for the union.
    /// Usually the payload was produced by a newer schema.
    #[error("unknown variant '{tag}' for discriminator '{discriminator}' of {union}")]
    UnknownVariant {
        union: &'static str,
        discriminator: &'static str,
        tag: String,
    },

    /// The discriminator key is absent or does not hold a string.
    #[error("malformed discriminator '{discriminator}' of {union}: {reason}")]
    MalformedDiscriminator {
        union: &'static str,
        discriminator: &'static str,
        reason: String,
    },

    /// A wire value does not match the declared shape of its field.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// A numeric value does not fit the declared width or sign.
    #[error("numeric overflow: {value} does not fit in {target}")]
    NumericOverflow { target: &'static str, value: String },

    /// A required record field is absent from the wire object.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// The input text is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fieldless mirror of [`CodecError`] for cheap matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownVariant,
    MalformedDiscriminator,
    TypeMismatch,
    NumericOverflow,
    MissingField,
    Json,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::UnknownVariant { .. } => ErrorKind::UnknownVariant,
            CodecError::MalformedDiscriminator { .. } => ErrorKind::MalformedDiscriminator,
            CodecError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CodecError::NumericOverflow { .. } => ErrorKind::NumericOverflow,
            CodecError::MissingField { .. } => ErrorKind::MissingField,
            CodecError::Json(_) => ErrorKind::Json,
        }
    }

    /// True when the input used a union variant this build does not know
    /// about, as opposed to input that is simply malformed.
    pub fn is_compatibility_gap(&self) -> bool {
        matches!(self, CodecError::UnknownVariant { .. })
    }

    /// Build a `TypeMismatch` describing the offending wire value.
    pub fn mismatch(expected: impl Into<String>, got: &Value) -> Self {
        CodecError::TypeMismatch {
            expected: expected.into(),
            got: describe(got).to_string(),
        }
    }
}

/// Returns a human-readable JSON type name for error messages.
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_mirrors_variant() {
        let err = CodecError::UnknownVariant {
            union: "Event",
            discriminator: "type",
            tag: "archived".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::UnknownVariant);
        assert!(err.is_compatibility_gap());

        let err = CodecError::MissingField {
            field: "id".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(!err.is_compatibility_gap());
    }

    #[test]
    fn test_display_messages() {
        let err = CodecError::UnknownVariant {
            union: "Event",
            discriminator: "type",
            tag: "archived".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown variant 'archived' for discriminator 'type' of Event"
        );

        let err = CodecError::NumericOverflow {
            target: "u8",
            value: "256".to_string(),
        };
        assert_eq!(err.to_string(), "numeric overflow: 256 does not fit in u8");
    }

    #[test]
    fn test_mismatch_describes_value() {
        let err = CodecError::mismatch("string", &json!([1, 2]));
        match err {
            CodecError::TypeMismatch { expected, got } => {
                assert_eq!(expected, "string");
                assert_eq!(got, "array");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_describe_numbers() {
        assert_eq!(describe(&json!(1)), "integer");
        assert_eq!(describe(&json!(-1)), "integer");
        assert_eq!(describe(&json!(1.5)), "float");
        assert_eq!(describe(&Value::Null), "null");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<Value, _> = serde_json::from_str("{not json");
        let err: CodecError = parse.unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Json);
    }
}
