//! Small error-handling sugar: composable validators, panic-safe execution and
//! validated input.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `sugar_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Validator Chains
//!
//! ```
//! use sugar_rail::validators;
//! use sugar_rail::validation::{max_length, min_length, not_empty};
//!
//! let username = validators![not_empty(), min_length(3), max_length(5)];
//!
//! assert_eq!(username.validate("ab").unwrap_err().reason(), "minimum length is 3");
//! assert_eq!(username.apply("abcd").unwrap(), "abcd");
//! assert_eq!(
//!     username.apply("abcdef").unwrap_err().to_string(),
//!     "invalid string input: maximum length is 5"
//! );
//! ```
//!
//! ## Contained Failures
//!
//! ```
//! use sugar_rail::{must, or, try_run};
//!
//! let (value, ok) = try_run(|| must("abc".parse::<i32>()));
//! let result = or(value, ok, 0);
//!
//! assert_eq!(result, 0);
//! ```
//!
//! ## Typed Environment
//!
//! ```
//! use std::collections::HashMap;
//! use sugar_rail::env::Env;
//!
//! let env = Env::new(HashMap::from([("WORKERS".to_string(), "4".to_string())]));
//! assert_eq!(env.int("WORKERS", Some(1)).unwrap(), 4);
//! assert!(env.required("API_TOKEN").is_err());
//! ```

/// Typed environment variable access
pub mod env;
/// Prompted, validated line input
pub mod input;
/// Validator chain construction and internal logging macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Panic-safe execution: `catch`, `try_run`, `or`, `must`, `check`, `ignore`
pub mod rescue;
/// Extension traits over `Result`
pub mod traits;
/// Error types shared by every module
pub mod types;
/// Composable string validators
pub mod validation;

pub use rescue::{catch, check, ignore, must, or, try_or, try_run};
pub use traits::*;
pub use types::{ErrorVec, PanicError, SugarError, SugarResult, ValidationError};
pub use validation::*;
