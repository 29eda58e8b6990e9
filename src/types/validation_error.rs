use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reason a single validator rejected a value.
///
/// A `ValidationError` is plain data: producing one never aborts. Whoever runs
/// the validator decides whether to escalate it.
///
/// # Examples
///
/// ```
/// use sugar_rail::types::ValidationError;
///
/// let reason = ValidationError::new("value cannot be empty");
/// assert_eq!(reason.to_string(), "value cannot be empty");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    reason: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a reason from a static or owned message.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(reason: S) -> Self {
        Self { reason: reason.into() }
    }

    /// Returns the human-readable reason.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[inline]
    pub fn into_reason(self) -> Cow<'static, str> {
        self.reason
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for ValidationError {}

impl From<&'static str> for ValidationError {
    #[inline]
    fn from(reason: &'static str) -> Self {
        Self::new(reason)
    }
}

impl From<String> for ValidationError {
    #[inline]
    fn from(reason: String) -> Self {
        Self::new(reason)
    }
}
