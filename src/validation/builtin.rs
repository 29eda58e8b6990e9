//! Built-in string validators.
//!
//! Lengths are measured in UTF-8 bytes (`str::len`). Length parameters are
//! `usize`, so a negative bound cannot be constructed.

use crate::types::ValidationError;
use crate::validation::Validator;

/// Rejects the empty string.
///
/// Created by [`not_empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotEmpty;

impl Validator for NotEmpty {
    #[inline]
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::new("value cannot be empty"))
        } else {
            Ok(())
        }
    }
}

/// Rejects strings shorter than `min` bytes.
///
/// Created by [`min_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    #[inline]
    pub fn new(min: usize) -> Self {
        Self { min }
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }
}

impl Validator for MinLength {
    #[inline]
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.len() < self.min {
            Err(ValidationError::new(format!("minimum length is {}", self.min)))
        } else {
            Ok(())
        }
    }
}

/// Rejects strings longer than `max` bytes.
///
/// Created by [`max_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    max: usize,
}

impl MaxLength {
    #[inline]
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Validator for MaxLength {
    #[inline]
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.len() > self.max {
            Err(ValidationError::new(format!("maximum length is {}", self.max)))
        } else {
            Ok(())
        }
    }
}

/// Validator failing with `value cannot be empty` on `""`.
///
/// # Examples
///
/// ```
/// use sugar_rail::validation::{not_empty, Validator};
///
/// assert!(not_empty().validate("x").is_ok());
/// assert_eq!(not_empty().validate("").unwrap_err().reason(), "value cannot be empty");
/// ```
#[must_use]
#[inline]
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Validator failing with `minimum length is {n}` when the input is shorter than `n`.
///
/// # Examples
///
/// ```
/// use sugar_rail::validation::{min_length, Validator};
///
/// assert!(min_length(3).validate("abc").is_ok());
/// assert_eq!(min_length(3).validate("ab").unwrap_err().reason(), "minimum length is 3");
/// ```
#[must_use]
#[inline]
pub fn min_length(n: usize) -> MinLength {
    MinLength::new(n)
}

/// Validator failing with `maximum length is {n}` when the input is longer than `n`.
///
/// # Examples
///
/// ```
/// use sugar_rail::validation::{max_length, Validator};
///
/// assert!(max_length(5).validate("abcde").is_ok());
/// assert_eq!(max_length(5).validate("abcdef").unwrap_err().reason(), "maximum length is 5");
/// ```
#[must_use]
#[inline]
pub fn max_length(n: usize) -> MaxLength {
    MaxLength::new(n)
}
