use std::fmt;

use smallvec::SmallVec;

use crate::macros::trace_event;
use crate::types::{ErrorVec, SugarError, ValidationError};
use crate::validation::Validator;

/// An ordered list of validators evaluated with short-circuit semantics.
///
/// Insertion order is evaluation order. [`validate`](Self::validate) stops at
/// the first failing validator and reports only its reason; later validators
/// are never run.
///
/// A chain is itself a [`Validator`], so chains nest.
///
/// # Examples
///
/// ```
/// use sugar_rail::validation::{max_length, min_length, not_empty, ValidatorChain};
///
/// let chain = ValidatorChain::new()
///     .with(not_empty())
///     .with(min_length(3))
///     .with(max_length(5));
///
/// let err = chain.apply("abcdef").unwrap_err();
/// assert_eq!(err.to_string(), "invalid string input: maximum length is 5");
/// ```
#[must_use]
#[derive(Default)]
pub struct ValidatorChain<'a> {
    validators: SmallVec<[Box<dyn Validator + 'a>; 4]>,
}

impl<'a> ValidatorChain<'a> {
    #[inline]
    pub fn new() -> Self {
        Self { validators: SmallVec::new() }
    }

    /// Appends a validator and returns the chain, for builder-style construction.
    #[inline]
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validator + 'a,
    {
        self.push(validator);
        self
    }

    /// Appends a validator to the end of the chain.
    #[inline]
    pub fn push<V>(&mut self, validator: V)
    where
        V: Validator + 'a,
    {
        self.validators.push(Box::new(validator));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs the validators in order and returns the first failure, if any.
    ///
    /// An empty chain accepts every input.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        for validator in &self.validators {
            if let Err(reason) = validator.validate(input) {
                trace_event!(reason = %reason, "validator chain rejected input");
                return Err(reason);
            }
        }
        Ok(())
    }

    /// Validates `input` and returns it as an owned string.
    ///
    /// The failure is wrapped in [`SugarError::Validation`], whose message reads
    /// `invalid string input: {reason}`.
    pub fn apply(&self, input: &str) -> Result<String, SugarError> {
        self.validate(input)?;
        Ok(input.to_owned())
    }

    /// Runs every validator and collects all failure reasons in order.
    ///
    /// This does not change how [`validate`](Self::validate) behaves; it exists
    /// for reporting, e.g. listing every rule a value breaks.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugar_rail::validators;
    /// use sugar_rail::validation::{min_length, not_empty};
    ///
    /// let chain = validators![not_empty(), min_length(2)];
    /// let reasons: Vec<_> = chain.failures("").iter().map(|r| r.to_string()).collect();
    /// assert_eq!(reasons, ["value cannot be empty", "minimum length is 2"]);
    /// ```
    pub fn failures(&self, input: &str) -> ErrorVec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|validator| validator.validate(input).err())
            .collect()
    }
}

impl Validator for ValidatorChain<'_> {
    #[inline]
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        ValidatorChain::validate(self, input)
    }
}

impl<'a> Extend<Box<dyn Validator + 'a>> for ValidatorChain<'a> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Box<dyn Validator + 'a>>,
    {
        self.validators.extend(iter);
    }
}

impl<'a> FromIterator<Box<dyn Validator + 'a>> for ValidatorChain<'a> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Validator + 'a>>,
    {
        Self { validators: iter.into_iter().collect() }
    }
}

impl fmt::Debug for ValidatorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("len", &self.validators.len())
            .finish()
    }
}
