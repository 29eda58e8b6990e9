//! Line-oriented prompts with validation.
//!
//! [`Prompter`] works over any `BufRead`/`Write` pair and returns errors as
//! values. The free functions [`input`], [`input_int`] and [`input_float`]
//! read from stdin and escalate failures with [`must`](crate::rescue::must),
//! for scripts where bad input should stop the program.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use sugar_rail::input::Prompter;
//! use sugar_rail::validation::{max_length, min_length, not_empty};
//! use sugar_rail::validators;
//!
//! let mut prompter = Prompter::new(Cursor::new("  alice \n"), Vec::new());
//! let name = prompter
//!     .read_string("name: ", &validators![not_empty(), min_length(3), max_length(20)])
//!     .unwrap();
//!
//! assert_eq!(name, "alice");
//! assert_eq!(prompter.into_inner().1, b"name: ");
//! ```
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use crate::macros::debug_event;
use crate::rescue::must;
use crate::types::{SugarError, SugarResult};
use crate::validation::Validator;

/// Writes prompts to `W` and reads trimmed answers from `R`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    #[inline]
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[inline]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prints `prompt` (if non-empty), reads one line and trims surrounding whitespace.
    ///
    /// Returns [`SugarError::InputClosed`] when the reader is already at end of input.
    pub fn read_line(&mut self, prompt: &str) -> SugarResult<String> {
        if !prompt.is_empty() {
            self.writer.write_all(prompt.as_bytes())?;
            self.writer.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SugarError::InputClosed);
        }

        Ok(line.trim().to_owned())
    }

    /// Reads a line and checks it against `validators`.
    ///
    /// Only the first failing validator is reported, as
    /// [`SugarError::Validation`].
    pub fn read_string<V>(&mut self, prompt: &str, validators: &V) -> SugarResult<String>
    where
        V: Validator + ?Sized,
    {
        let input = self.read_line(prompt)?;
        validators.validate(&input)?;
        Ok(input)
    }

    /// Reads a line and parses it as an `i64`.
    ///
    /// Unparsable input yields `default` when one is given, otherwise
    /// [`SugarError::InvalidInt`].
    pub fn read_int(&mut self, prompt: &str, default: Option<i64>) -> SugarResult<i64> {
        let input = self.read_line(prompt)?;
        parse_or_default(input, default, SugarError::InvalidInt)
    }

    /// Reads a line and parses it as an `f64`.
    ///
    /// Unparsable input yields `default` when one is given, otherwise
    /// [`SugarError::InvalidFloat`].
    pub fn read_float(&mut self, prompt: &str, default: Option<f64>) -> SugarResult<f64> {
        let input = self.read_line(prompt)?;
        parse_or_default(input, default, SugarError::InvalidFloat)
    }
}

fn parse_or_default<T, F>(input: String, default: Option<T>, invalid: F) -> SugarResult<T>
where
    T: FromStr,
    F: FnOnce(String) -> SugarError,
{
    match input.parse::<T>() {
        Ok(value) => Ok(value),
        Err(_) => match default {
            Some(value) => {
                debug_event!(input = %input, "unparsable input, using default");
                Ok(value)
            },
            None => Err(invalid(input)),
        },
    }
}

/// Prompts on stdout, reads stdin and validates the answer.
///
/// # Panics
///
/// Panics with `invalid string input: {reason}` when a validator rejects the
/// answer, or when stdin is closed or unreadable.
#[track_caller]
pub fn input<V>(prompt: &str, validators: &V) -> String
where
    V: Validator + ?Sized,
{
    must(Prompter::stdio().read_string(prompt, validators))
}

/// Prompts on stdout and reads an integer from stdin.
///
/// # Panics
///
/// Panics when the answer is not an integer and no default is given, or when
/// stdin is closed or unreadable.
#[track_caller]
pub fn input_int(prompt: &str, default: Option<i64>) -> i64 {
    must(Prompter::stdio().read_int(prompt, default))
}

/// Prompts on stdout and reads a float from stdin.
///
/// # Panics
///
/// Panics when the answer is not a number and no default is given, or when
/// stdin is closed or unreadable.
#[track_caller]
pub fn input_float(prompt: &str, default: Option<f64>) -> f64 {
    must(Prompter::stdio().read_float(prompt, default))
}
