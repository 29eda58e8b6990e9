//! Panic-safe execution and its companion adapters.
//!
//! Call sites choose per call whether a failure is fatal or recoverable:
//!
//! | Function | On failure |
//! |----------|------------|
//! | [`must`] | panics with the error's message |
//! | [`check`] | panics with the error's message |
//! | [`ignore`] | nothing, the error is dropped |
//! | [`catch`] | returns `Err(PanicError)` |
//! | [`try_run`] | returns `(T::default(), false)` |
//! | [`or`] / [`try_or`] | substitutes a fallback |
//!
//! # Examples
//!
//! ```
//! use sugar_rail::rescue::{must, or, try_run};
//!
//! let (value, ok) = try_run(|| must("abc".parse::<i32>()));
//! assert!(!ok);
//! assert_eq!(or(value, ok, 0), 0);
//!
//! let (value, ok) = try_run(|| must("42".parse::<i32>()));
//! assert_eq!(or(value, ok, 0), 42);
//! ```
//!
//! Containment relies on unwinding. In a binary built with `panic = "abort"`
//! the process terminates before [`catch`] can observe the panic.
//!
//! A contained panic is not reported on stderr. The first call to [`catch`]
//! wraps the panic hook installed at that moment; the wrapper stays quiet while
//! the panicking thread is inside a boundary and delegates to the wrapped hook
//! otherwise. A hook installed later with [`std::panic::set_hook`] replaces the
//! wrapper and brings the reports back.
use std::cell::Cell;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use crate::macros::debug_event;
use crate::types::PanicError;

/// Runs `op` and contains any panic it raises as an explicit error.
///
/// Only panics unwinding out of `op` on the calling thread are intercepted,
/// and those are not printed. Panics on threads spawned by `op` are reported
/// as usual.
///
/// # Examples
///
/// ```
/// use sugar_rail::rescue::catch;
///
/// assert_eq!(catch(|| 2 + 2), Ok(4));
///
/// let err = catch(|| -> i32 { panic!("boom") }).unwrap_err();
/// assert_eq!(err.message(), "boom");
/// ```
pub fn catch<T, F>(op: F) -> Result<T, PanicError>
where
    F: FnOnce() -> T,
{
    install_quiet_hook();

    let result = {
        let _boundary = Boundary::enter();
        panic::catch_unwind(AssertUnwindSafe(op))
    };

    result.map_err(|payload| {
        let err = PanicError::from_payload(payload);
        debug_event!(panic_message = err.message(), "contained panic");
        err
    })
}

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks the current thread as inside a [`catch`] for as long as it lives.
struct Boundary;

impl Boundary {
    fn enter() -> Self {
        DEPTH.with(|depth| depth.set(depth.get() + 1));
        Boundary
    }
}

impl Drop for Boundary {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

fn inside_boundary() -> bool {
    DEPTH.try_with(|depth| depth.get() > 0).unwrap_or(false)
}

fn install_quiet_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    // take_hook panics on a thread that is already unwinding
    if std::thread::panicking() {
        return;
    }
    HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !inside_boundary() {
                previous(info);
            }
        }));
    });
}

/// Runs `op`, returning `(result, true)` on completion and
/// `(T::default(), false)` if it panics.
///
/// When the flag is `false` the value is only the default and carries no
/// information from the failed run.
///
/// # Examples
///
/// ```
/// use sugar_rail::rescue::try_run;
///
/// assert_eq!(try_run(|| 42), (42, true));
///
/// let divisor = std::hint::black_box(0);
/// assert_eq!(try_run(|| 10 / divisor), (0, false));
/// ```
pub fn try_run<T, F>(op: F) -> (T, bool)
where
    T: Default,
    F: FnOnce() -> T,
{
    match catch(op) {
        Ok(value) => (value, true),
        Err(_) => (T::default(), false),
    }
}

/// Returns `value` when `ok` is true, otherwise `fallback`.
///
/// # Examples
///
/// ```
/// use sugar_rail::rescue::or;
///
/// assert_eq!(or(5, true, 0), 5);
/// assert_eq!(or(5, false, 0), 0);
/// ```
#[inline]
pub fn or<T>(value: T, ok: bool, fallback: T) -> T {
    if ok {
        value
    } else {
        fallback
    }
}

/// Runs `op` and returns its result, or `fallback` if it panics.
///
/// Unlike [`try_run`] followed by [`or`], this does not need `T: Default`.
///
/// # Examples
///
/// ```
/// use sugar_rail::rescue::try_or;
///
/// let items: Vec<&str> = Vec::new();
/// assert_eq!(try_or(|| items[0], "none"), "none");
/// ```
#[inline]
pub fn try_or<T, F>(op: F, fallback: T) -> T
where
    F: FnOnce() -> T,
{
    catch(op).unwrap_or(fallback)
}

/// Returns the success value, or panics with the error's message.
///
/// # Panics
///
/// Panics when `result` is `Err`. The panic is reported at the caller's location.
///
/// # Examples
///
/// ```
/// use sugar_rail::rescue::must;
///
/// let port: u16 = must("8080".parse());
/// assert_eq!(port, 8080);
/// ```
#[track_caller]
#[inline]
pub fn must<T, E>(result: Result<T, E>) -> T
where
    E: Display,
{
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

/// Does nothing on `Ok`, panics with the error's message on `Err`.
///
/// # Panics
///
/// Panics when `result` is `Err`. The panic is reported at the caller's location.
///
/// # Examples
///
/// ```should_panic
/// use sugar_rail::rescue::check;
///
/// check(Err::<(), _>("disk full"));
/// ```
#[track_caller]
#[inline]
pub fn check<E>(result: Result<(), E>)
where
    E: Display,
{
    if let Err(err) = result {
        panic!("{}", err);
    }
}

/// Explicitly discards a value, typically an error nobody needs to handle.
///
/// Never panics.
///
/// # Examples
///
/// ```
/// use sugar_rail::rescue::ignore;
///
/// ignore(std::fs::remove_file("/nonexistent/cache.tmp"));
/// ```
#[inline]
pub fn ignore<T>(value: T) {
    drop(value);
}
