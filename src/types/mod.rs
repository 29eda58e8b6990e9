//! Error types shared by every module of the crate.
//!
//! # Examples
//!
//! ```
//! use sugar_rail::types::{SugarError, ValidationError};
//!
//! let err = SugarError::from(ValidationError::new("minimum length is 5"));
//! assert_eq!(err.to_string(), "invalid string input: minimum length is 5");
//! ```
use smallvec::SmallVec;

pub mod panic_error;
pub mod sugar_error;
pub mod validation_error;

pub use panic_error::*;
pub use sugar_error::*;
pub use validation_error::*;

/// SmallVec-backed collection used when several reasons are gathered at once.
///
/// Inline storage covers the common case of one or two failures without a
/// heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias for fallible operations of this crate.
pub type SugarResult<T> = Result<T, SugarError>;
