use std::any::Any;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A panic that was contained at a call boundary.
///
/// Only the message survives; the original payload is dropped once the
/// message has been extracted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    pub(crate) const UNKNOWN: &'static str = "unknown panic";

    /// Creates a `PanicError` carrying `message`.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Extracts the message from a payload returned by
    /// [`std::panic::catch_unwind`].
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything else
    /// (for example a value passed to [`std::panic::panic_any`]) is reported as
    /// `"unknown panic"`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            Self::UNKNOWN.to_string()
        };

        Self { message }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PanicError {}
