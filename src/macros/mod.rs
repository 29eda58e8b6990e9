//! Macros for building validator chains, plus the crate's internal logging shims.
//!
//! - [`macro@crate::validators`] - builds a [`ValidatorChain`](crate::validation::ValidatorChain)
//!   from a comma-separated list of validators, preserving declaration order.
//!
//! # Examples
//!
//! ```
//! use sugar_rail::validators;
//! use sugar_rail::validation::{max_length, min_length, not_empty};
//!
//! let chain = validators![not_empty(), min_length(3), max_length(5)];
//! assert_eq!(chain.len(), 3);
//! assert!(chain.validate("abcd").is_ok());
//! ```

/// Builds a [`ValidatorChain`](crate::validation::ValidatorChain) from validators
/// listed in evaluation order.
///
/// Accepts any value implementing [`Validator`](crate::validation::Validator),
/// including closures of shape `Fn(&str) -> Result<(), ValidationError>`.
///
/// # Examples
///
/// ```
/// use sugar_rail::validators;
/// use sugar_rail::types::ValidationError;
/// use sugar_rail::validation::not_empty;
///
/// let no_spaces = |s: &str| {
///     if s.contains(' ') {
///         Err(ValidationError::new("value cannot contain spaces"))
///     } else {
///         Ok(())
///     }
/// };
///
/// let chain = validators![not_empty(), no_spaces];
/// let err = chain.validate("a b").unwrap_err();
/// assert_eq!(err.reason(), "value cannot contain spaces");
///
/// let empty = validators![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! validators {
    () => {
        $crate::validation::ValidatorChain::new()
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::validation::ValidatorChain::new()$(.with($validator))+
    };
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
