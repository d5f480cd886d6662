//! Error Types
//!
//! Validation errors double as the user-facing messages.

use thiserror::Error;

/// Form input rejected; shown inline under the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your to-do.")]
    EmptyTitle,
    #[error("Input limit is {limit} characters.")]
    TooLong { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("no item at index {index} (list has {len} items)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to decode stored list: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode list: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Please enter your to-do.");
        assert_eq!(
            ValidationError::TooLong { limit: 100 }.to_string(),
            "Input limit is 100 characters."
        );
    }
}
