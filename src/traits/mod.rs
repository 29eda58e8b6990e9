//! Extension traits over `Result`.
//!
//! - [`ResultExt`]: `must`, `or_fallback` and `ignore` as methods
//! - [`UnitResultExt`]: `check` for results that carry no value
//!
//! # Examples
//!
//! ```
//! use sugar_rail::traits::{ResultExt, UnitResultExt};
//!
//! let created: Result<(), std::io::Error> = Ok(());
//! created.check();
//!
//! let count = "12".parse::<usize>().must();
//! assert_eq!(count, 12);
//! ```

pub mod result_ext;

pub use result_ext::{ResultExt, UnitResultExt};
