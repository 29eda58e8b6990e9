//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use sugar_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`validators!`]
//! - **Validators**: [`not_empty`], [`min_length`], [`max_length`], [`Validator`], [`ValidatorChain`]
//! - **Rescue**: [`catch`], [`try_run`], [`try_or`], [`or`], [`must`], [`check`], [`ignore`]
//! - **Traits**: [`ResultExt`], [`UnitResultExt`]
//! - **Types**: [`SugarError`], [`SugarResult`], [`ValidationError`], [`PanicError`]
//!
//! # Examples
//!
//! ```
//! use sugar_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> SugarResult<u16> {
//!     validators![not_empty(), max_length(5)].validate(raw)?;
//!     Ok(try_or(|| raw.parse::<u16>().must(), 8080))
//! }
//!
//! assert_eq!(parse_port("9000").unwrap(), 9000);
//! assert_eq!(parse_port("99999").unwrap(), 8080);
//! assert!(parse_port("").is_err());
//! ```

// Macros
pub use crate::validators;

// Validators
pub use crate::validation::{max_length, min_length, not_empty, Validator, ValidatorChain};

// Rescue
pub use crate::rescue::{catch, check, ignore, must, or, try_or, try_run};

// Traits
pub use crate::traits::{ResultExt, UnitResultExt};

// Types
pub use crate::types::{PanicError, SugarError, SugarResult, ValidationError};
