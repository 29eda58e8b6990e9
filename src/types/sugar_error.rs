use std::fmt::{self, Display};
use std::io;

use crate::types::{PanicError, ValidationError};

/// Error type for every fallible operation in this crate.
///
/// The `Display` output of each variant is the message an operator sees when
/// the error is escalated with [`must`](crate::rescue::must).
///
/// # Examples
///
/// ```
/// use sugar_rail::types::SugarError;
///
/// let err = SugarError::RequiredEnv("DATABASE_URL".to_string());
/// assert_eq!(err.to_string(), "required env var missing: DATABASE_URL");
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum SugarError {
    /// A validator chain rejected a string.
    Validation(ValidationError),
    /// Text could not be parsed as an integer.
    InvalidInt(String),
    /// Text could not be parsed as a float.
    InvalidFloat(String),
    /// The input stream ended before a line was read.
    InputClosed,
    /// Reading input or writing a prompt failed.
    Io(io::Error),
    /// An optional environment variable was unset or empty and no default was given.
    MissingEnv(String),
    /// A required environment variable was unset or empty.
    RequiredEnv(String),
    /// An environment variable was set but could not be interpreted.
    InvalidEnv {
        kind: &'static str,
        key: String,
        value: String,
    },
    /// A panic was contained and turned into an error.
    Panicked(PanicError),
}

impl SugarError {
    /// Returns the validation reason when this error came from a validator chain.
    pub fn validation_reason(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Display for SugarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(reason) => write!(f, "invalid string input: {}", reason),
            Self::InvalidInt(input) => write!(f, "invalid integer input: {:?}", input),
            Self::InvalidFloat(input) => write!(f, "invalid float input: {:?}", input),
            Self::InputClosed => f.write_str("input error"),
            Self::Io(err) => write!(f, "{}", err),
            Self::MissingEnv(key) => write!(f, "missing env var: {}", key),
            Self::RequiredEnv(key) => write!(f, "required env var missing: {}", key),
            Self::InvalidEnv { kind, key, value } => {
                write!(f, "invalid {} env var {}={:?}", kind, key, value)
            },
            Self::Panicked(panic) => write!(f, "panicked: {}", panic),
        }
    }
}

impl std::error::Error for SugarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(reason) => Some(reason),
            Self::Io(err) => Some(err),
            Self::Panicked(panic) => Some(panic),
            _ => None,
        }
    }
}

impl From<ValidationError> for SugarError {
    #[inline]
    fn from(reason: ValidationError) -> Self {
        Self::Validation(reason)
    }
}

impl From<io::Error> for SugarError {
    #[inline]
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PanicError> for SugarError {
    #[inline]
    fn from(panic: PanicError) -> Self {
        Self::Panicked(panic)
    }
}
