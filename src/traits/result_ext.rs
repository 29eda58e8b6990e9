//! Method-call forms of the [`rescue`](crate::rescue) adapters for `Result`.
//!
//! # Examples
//!
//! ```
//! use sugar_rail::traits::ResultExt;
//!
//! let port: u16 = "8080".parse::<u16>().must();
//! assert_eq!(port, 8080);
//!
//! let retries: u32 = "many".parse::<u32>().or_fallback(3);
//! assert_eq!(retries, 3);
//! ```

use std::fmt::Display;

use crate::rescue;

/// Extension trait escalating or discarding `Result` errors without a `match`.
pub trait ResultExt<T, E> {
    /// Returns the success value, or panics with the error's message.
    ///
    /// # Panics
    ///
    /// Panics when `self` is `Err`, reporting the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugar_rail::traits::ResultExt;
    ///
    /// let value = Ok::<_, String>(7).must();
    /// assert_eq!(value, 7);
    /// ```
    fn must(self) -> T
    where
        E: Display;

    /// Returns the success value, or `fallback` when `self` is `Err`.
    ///
    /// The error is dropped.
    fn or_fallback(self, fallback: T) -> T;

    /// Discards the result on purpose, making the decision visible at the call site.
    fn ignore(self);
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    #[inline]
    fn must(self) -> T
    where
        E: Display,
    {
        rescue::must(self)
    }

    #[inline]
    fn or_fallback(self, fallback: T) -> T {
        self.unwrap_or(fallback)
    }

    #[inline]
    fn ignore(self) {
        rescue::ignore(self)
    }
}

/// Extension trait for results that carry no value, only a possible error.
///
/// # Examples
///
/// ```should_panic
/// use sugar_rail::traits::UnitResultExt;
///
/// Err::<(), _>("permission denied").check();
/// ```
pub trait UnitResultExt<E> {
    /// Does nothing on `Ok`, panics with the error's message on `Err`.
    ///
    /// # Panics
    ///
    /// Panics when `self` is `Err`, reporting the caller's location.
    fn check(self)
    where
        E: Display;
}

impl<E> UnitResultExt<E> for Result<(), E> {
    #[track_caller]
    #[inline]
    fn check(self)
    where
        E: Display,
    {
        rescue::check(self)
    }
}
