//! Draft error types

use thiserror::Error;

/// Errors raised by the draft editor
///
/// Both variants are recoverable: the draft is left unchanged and the
/// caller surfaces a warning to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Refusal to remove the last remaining line item
    #[error("an invoice must have at least one item")]
    LastItem,

    /// Required field is empty or unset
    #[error("required field missing: {0}")]
    RequiredField(&'static str),
}
