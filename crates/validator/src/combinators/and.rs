//! AND combinator - logical conjunction of validators
//!
//! [`And`] pairs two validators, [`AndAll`] runs a dynamic list. Both use
//! the same first-failure semantics as [`validate`](crate::foundation::validate).
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! let validator = and(min_length(5), max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hi").is_err()); // fails min_length
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The right validator is not invoked when
/// the left one fails; the left error is returned as is.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an `AndAll` combinator from a list of validators.
///
/// Use [`BoxValidator`](crate::foundation::BoxValidator) to mix validator
/// types in one list. An empty list always passes.
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// let password = and_all(vec![
///     min_length(8).boxed(),
///     matches_pattern("[A-Z]").unwrap().boxed(),
///     matches_pattern("[0-9]").unwrap().boxed(),
/// ]);
/// assert!(password.validate("Secret123").is_ok());
/// assert!(password.validate("secret123").is_err());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines a list of validators with logical AND.
///
/// Validation stops at the first failure (short-circuits).
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// Returns the validators in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        crate::foundation::validate(input, &self.validators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_length, min_length};

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(min_length(5), max_length(10));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_left_fails_first() {
        let validator = And::new(min_length(5), max_length(1));
        let err = validator.validate("hi").unwrap_err();
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn test_and_right_fails() {
        let validator = And::new(min_length(1), max_length(3));
        let err = validator.validate("hello").unwrap_err();
        assert_eq!(err.code, "max_length");
    }

    #[test]
    fn test_and_chain() {
        let validator = min_length(3).and(max_length(10)).and(min_length(5));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hey").is_err());
    }

    #[test]
    fn test_and_all() {
        let combined = and_all(vec![min_length(3), min_length(5), min_length(7)]);
        assert!(combined.validate("helloworld").is_ok());
        assert_eq!(combined.validate("hello").unwrap_err().message, "must be at least 7 characters");
    }

    #[test]
    fn test_and_all_empty_passes() {
        let combined = and_all(Vec::<crate::foundation::BoxValidator<str>>::new());
        assert!(combined.validate("").is_ok());
        assert!(combined.validate("anything").is_ok());
    }
}
