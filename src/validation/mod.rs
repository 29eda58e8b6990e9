//! Composable string validators.
//!
//! A validator checks one constraint against a string and reports the reason
//! when it does not hold. Validators are combined into a [`ValidatorChain`],
//! which evaluates them in declaration order and stops at the first failure.
//!
//! # Key Components
//!
//! - [`Validator`] - the single-method trait every check implements; closures
//!   of shape `Fn(&str) -> Result<(), ValidationError>` qualify automatically
//! - [`not_empty`], [`min_length`], [`max_length`] - built-in checks
//! - [`ValidatorChain`] - ordered, short-circuiting composition
//!
//! # Examples
//!
//! ```
//! use sugar_rail::validation::{max_length, min_length, not_empty, ValidatorChain};
//!
//! let chain = ValidatorChain::new()
//!     .with(not_empty())
//!     .with(min_length(3))
//!     .with(max_length(5));
//!
//! assert_eq!(chain.validate("ab").unwrap_err().reason(), "minimum length is 3");
//! assert_eq!(chain.apply("abcd").unwrap(), "abcd");
//! ```
//!
//! [`ValidationError`]: crate::types::ValidationError
pub mod builtin;
pub mod chain;
pub mod validator;

pub use self::builtin::*;
pub use self::chain::*;
pub use self::validator::*;
