//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`Validatable`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`] and the identity
//!   helpers [`is_validation_error`], [`wrap_error`], [`cause_chain`]
//! - **Runner**: [`validate`], the first-failure pipeline every other
//!   combinator is measured against
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! let err = validate("ab", [&min_length(3)]).unwrap_err();
//! assert_eq!(err.message, "must be at least 3 characters");
//! assert!(validate("abc", [&min_length(3)]).is_ok());
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{
    ErrorCause, ErrorParams, ValidationError, ValidationErrors, cause_chain, is_validation_error,
    wrap_error,
};
pub use traits::{BoxValidator, Validate, ValidateExt};
pub use validatable::Validatable;

/// Applies validators in order and returns the first failure.
///
/// Validators after the first failing one are not invoked. Passes iff
/// every validator passes; an empty list always passes.
///
/// Accepts any iterable of validator references: an array of
/// references to one validator type, a slice of `&dyn Validate`, or a
/// `Vec<BoxValidator<T>>`.
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// // Heterogeneous validators go through trait objects.
/// let checks: [&dyn Validate<Input = str>; 2] = [&min_length(3), &max_length(5)];
/// assert!(validate("abcd", checks).is_ok());
/// assert!(validate("abcdef", checks).is_err());
/// ```
pub fn validate<'a, V, I>(value: &V::Input, validators: I) -> Result<(), ValidationError>
where
    V: Validate + ?Sized + 'a,
    I: IntoIterator<Item = &'a V>,
{
    for (position, validator) in validators.into_iter().enumerate() {
        if let Err(error) = validator.validate(value) {
            tracing::trace!(position, code = %error.code, "validation short-circuited");
            return Err(error);
        }
    }
    Ok(())
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting<'a> {
        calls: &'a Cell<usize>,
        pass: bool,
    }

    impl Validate for Counting<'_> {
        type Input = str;

        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            self.calls.set(self.calls.get() + 1);
            if self.pass {
                Ok(())
            } else {
                Err(ValidationError::new("counting", "counted failure"))
            }
        }
    }

    #[test]
    fn test_empty_list_passes() {
        let none: [&Counting<'_>; 0] = [];
        assert!(validate("anything", none).is_ok());
    }

    #[test]
    fn test_stops_at_first_failure() {
        let calls = Cell::new(0);
        let pass = Counting { calls: &calls, pass: true };
        let fail = Counting { calls: &calls, pass: false };

        let result = validate("x", [&pass, &fail, &pass, &fail]);

        assert_eq!(result.unwrap_err().code, "counting");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_all_pass_runs_everything() {
        let calls = Cell::new(0);
        let pass = Counting { calls: &calls, pass: true };

        assert!(validate("x", [&pass, &pass, &pass]).is_ok());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_boxed_list() {
        struct Never;
        impl Validate for Never {
            type Input = str;
            fn validate(&self, _input: &str) -> Result<(), ValidationError> {
                Err(ValidationError::custom("never"))
            }
        }

        let list: Vec<BoxValidator<str>> = vec![Box::new(Never)];
        assert_eq!(validate("x", &list).unwrap_err().message, "never");
    }
}
