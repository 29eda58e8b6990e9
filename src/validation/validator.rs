use crate::types::ValidationError;

/// A single check against a string value.
///
/// Implementations must not panic; a failed check is reported as data through
/// the `Err` variant and the caller decides whether to escalate it.
///
/// Any closure or function of shape `Fn(&str) -> Result<(), ValidationError>`
/// is a `Validator`, so custom checks need no registration step.
///
/// # Examples
///
/// ```
/// use sugar_rail::types::ValidationError;
/// use sugar_rail::validation::Validator;
///
/// fn lowercase(input: &str) -> Result<(), ValidationError> {
///     if input.chars().any(char::is_uppercase) {
///         Err(ValidationError::new("value must be lowercase"))
///     } else {
///         Ok(())
///     }
/// }
///
/// assert!(lowercase.validate("abc").is_ok());
/// assert!(lowercase.validate("aBc").is_err());
/// ```
pub trait Validator {
    /// Checks `input`, returning the failure reason when the constraint does not hold.
    fn validate(&self, input: &str) -> Result<(), ValidationError>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Result<(), ValidationError>,
{
    #[inline]
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self(input)
    }
}
