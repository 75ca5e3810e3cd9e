use crate::error::SecureError;

pub struct Validator;

impl Validator {
    /// Durations in directives such as `max-age` cannot be negative.
    /// Rejected values are reported, never clamped.
    pub fn non_negative(directive: &'static str, value: i64) -> Result<i64, SecureError> {
        if value < 0 {
            return Err(SecureError::InvalidDirectiveValue { directive, value });
        }
        Ok(value)
    }
}
