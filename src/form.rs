//! Form State
//!
//! Transient state of the input box: value, remaining characters and
//! the Valid/Invalid status. Never persisted.

use crate::error::ValidationError;
use crate::models::truncate_chars;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Valid,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    value: String,
    remaining: usize,
    status: FormStatus,
    max_len: usize,
}

impl FormState {
    pub fn new(max_len: usize) -> Self {
        Self {
            value: String::new(),
            remaining: max_len,
            status: FormStatus::Valid,
            max_len,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Characters left before the limit
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn has_error(&self) -> bool {
        matches!(self.status, FormStatus::Invalid(_))
    }

    /// Message for the error banner, empty while valid
    pub fn error_message(&self) -> String {
        match &self.status {
            FormStatus::Valid => String::new(),
            FormStatus::Invalid(err) => err.to_string(),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Apply a keystroke: keep at most `max_len` characters and flag
    /// input that went over the limit.
    pub fn update(&mut self, raw: &str) {
        let limited = truncate_chars(raw, self.max_len);
        let overflowed = limited.len() < raw.len();

        self.value = limited.to_string();
        self.remaining = self.max_len - self.value.chars().count();
        self.status = if overflowed {
            FormStatus::Invalid(ValidationError::TooLong { limit: self.max_len })
        } else {
            FormStatus::Valid
        };
    }

    pub fn reject(&mut self, err: ValidationError) {
        self.status = FormStatus::Invalid(err);
    }

    /// Back to an empty, valid form after a successful add
    pub fn reset(&mut self) {
        self.value.clear();
        self.remaining = self.max_len;
        self.status = FormStatus::Valid;
    }
}
