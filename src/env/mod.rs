//! Typed access to environment variables.
//!
//! [`Env`] reads from any [`EnvSource`] and returns errors as values; the free
//! functions ([`env_string`], [`env_int`], [`env_bool`], [`must_env`]) read the
//! process environment and escalate with [`must`](crate::rescue::must).
//!
//! An unset variable and a variable set to the empty string are treated the
//! same way.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use sugar_rail::env::Env;
//!
//! let vars = HashMap::from([
//!     ("PORT".to_string(), "8080".to_string()),
//!     ("DEBUG".to_string(), "yes".to_string()),
//! ]);
//! let env = Env::new(vars);
//!
//! assert_eq!(env.int("PORT", None).unwrap(), 8080);
//! assert!(env.bool("DEBUG", Some(false)).unwrap());
//! assert_eq!(env.string("HOST", Some("localhost")), "localhost");
//! ```
use std::collections::HashMap;

use crate::macros::debug_event;
use crate::rescue::must;
use crate::types::{SugarError, SugarResult};

/// Somewhere environment variables can be looked up.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` when it is unset.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S> EnvSource for &S
where
    S: EnvSource + ?Sized,
{
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Typed reader over an [`EnvSource`].
#[derive(Debug, Clone, Default)]
pub struct Env<S> {
    source: S,
}

impl Env<ProcessEnv> {
    #[inline]
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> Env<S> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.source.lookup(key).filter(|value| !value.is_empty())
    }

    /// Returns the value of `key`, falling back to `default`, then to `""`.
    pub fn string(&self, key: &str, default: Option<&str>) -> String {
        match self.non_empty(key) {
            Some(value) => value,
            None => default.unwrap_or_default().to_owned(),
        }
    }

    /// Parses `key` as an `i64`.
    ///
    /// A missing or unparsable value yields `default` when one is given.
    /// Otherwise a missing value is [`SugarError::MissingEnv`] and an
    /// unparsable one is [`SugarError::InvalidEnv`].
    pub fn int(&self, key: &str, default: Option<i64>) -> SugarResult<i64> {
        self.typed(key, default, "int", |value| value.parse().ok())
    }

    /// Interprets `key` as a boolean.
    ///
    /// Accepts `true`, `1`, `yes`, `y`, `on` and `false`, `0`, `no`, `n`, `off`,
    /// ignoring ASCII case. Missing and unrecognized values follow the same
    /// rules as [`int`](Self::int).
    pub fn bool(&self, key: &str, default: Option<bool>) -> SugarResult<bool> {
        self.typed(key, default, "bool", parse_bool)
    }

    /// Returns the value of `key`, or [`SugarError::RequiredEnv`] when it is
    /// unset or empty.
    pub fn required(&self, key: &str) -> SugarResult<String> {
        self.non_empty(key)
            .ok_or_else(|| SugarError::RequiredEnv(key.to_owned()))
    }

    fn typed<T, F>(
        &self,
        key: &str,
        default: Option<T>,
        kind: &'static str,
        parse: F,
    ) -> SugarResult<T>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        let Some(value) = self.non_empty(key) else {
            return match default {
                Some(fallback) => {
                    debug_event!(key, kind, "env var missing, using default");
                    Ok(fallback)
                },
                None => Err(SugarError::MissingEnv(key.to_owned())),
            };
        };

        if let Some(parsed) = parse(&value) {
            return Ok(parsed);
        }

        match default {
            Some(fallback) => {
                debug_event!(key, value = %value, kind, "invalid env var, using default");
                Ok(fallback)
            },
            None => Err(SugarError::InvalidEnv { kind, key: key.to_owned(), value }),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Returns the value of `key` in the process environment, falling back to
/// `default`, then to `""`.
pub fn env_string(key: &str, default: Option<&str>) -> String {
    Env::process().string(key, default)
}

/// Reads `key` from the process environment as an `i64`.
///
/// # Panics
///
/// Panics when the variable is missing or unparsable and no default is given.
#[track_caller]
pub fn env_int(key: &str, default: Option<i64>) -> i64 {
    must(Env::process().int(key, default))
}

/// Reads `key` from the process environment as a boolean.
///
/// # Panics
///
/// Panics when the variable is missing or unrecognized and no default is given.
#[track_caller]
pub fn env_bool(key: &str, default: Option<bool>) -> bool {
    must(Env::process().bool(key, default))
}

/// Returns the value of a required variable from the process environment.
///
/// # Panics
///
/// Panics with `required env var missing: {key}` when it is unset or empty.
#[track_caller]
pub fn must_env(key: &str) -> String {
    must(Env::process().required(key))
}
