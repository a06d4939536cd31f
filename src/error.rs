//! Error types for record normalization

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Failure to turn a raw service record into a typed entity.
///
/// The gateway routinely omits optional sub-objects; those degrade to absent
/// fields and are never errors. Normalization only aborts when a required key
/// is missing or a present value cannot be coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A key the record shape requires is absent (or null).
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A present value could not be coerced to its expected shape.
    #[error("malformed value in field `{field}`: {reason}")]
    MalformedValue {
        field: &'static str,
        reason: String,
    },
}

impl ParseError {
    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        ParseError::MalformedValue {
            field,
            reason: reason.into(),
        }
    }
}
