//! # Typed Verification
//!
//! Pre-encode validation with a typed reason, so callers can pattern-match
//! on what went wrong instead of parsing an error string.
//!
//! Verification is optional: [`crate::message::Message::encode_checked`]
//! runs it, [`crate::message::Message::encode_to_bytes`] does not. Message
//! types with nothing to check inherit the default always-valid
//! implementation.

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Why a value failed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The value is not of the field's semantic type.
    TypeMismatch { expected: &'static str },
    /// A numeric value does not fit the field's declared range.
    OutOfRange { detail: String },
    /// A string/bytes value violates a length constraint.
    InvalidLength { limit: usize, actual: usize },
    /// A field the schema marks required is unset.
    MissingRequired,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::TypeMismatch { expected } => write!(f, "expected {expected}"),
            ValidationErrorKind::OutOfRange { detail } => write!(f, "out of range ({detail})"),
            ValidationErrorKind::InvalidLength { limit, actual } => {
                write!(f, "length {actual} exceeds limit {limit}")
            }
            ValidationErrorKind::MissingRequired => write!(f, "required but unset"),
        }
    }
}

/// A verification failure, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}`: {kind}")]
pub struct ValidationError {
    pub field: Cow<'static, str>,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn type_mismatch(field: &'static str, expected: &'static str) -> Self {
        Self {
            field: Cow::Borrowed(field),
            kind: ValidationErrorKind::TypeMismatch { expected },
        }
    }

    pub fn out_of_range(field: &'static str, detail: impl Into<String>) -> Self {
        Self {
            field: Cow::Borrowed(field),
            kind: ValidationErrorKind::OutOfRange {
                detail: detail.into(),
            },
        }
    }

    pub fn invalid_length(field: &'static str, limit: usize, actual: usize) -> Self {
        Self {
            field: Cow::Borrowed(field),
            kind: ValidationErrorKind::InvalidLength { limit, actual },
        }
    }

    pub fn missing_required(field: &'static str) -> Self {
        Self {
            field: Cow::Borrowed(field),
            kind: ValidationErrorKind::MissingRequired,
        }
    }
}
