//! OR combinator - logical disjunction of validators
//!
//! [`Or`] pairs two validators, [`OrAny`] tries a dynamic list in order.
//! The first success wins. When every alternative fails:
//!
//! - a single alternative's error is returned verbatim;
//! - two or more produce an `"or_failed"` error whose message starts with
//!   `all validators failed` and whose cause is the join of every failure,
//!   in input order.
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! let code = or(length_range(3, 3), length_range(5, 5));
//! assert!(code.validate("abc").is_ok());
//! assert!(code.validate("abcde").is_ok());
//!
//! let err = code.validate("ab").unwrap_err();
//! assert!(err.message.starts_with("all validators failed"));
//! ```

use std::sync::Arc;

use crate::foundation::{Validate, ValidationError};

/// Builds the error reported when every alternative failed.
fn all_failed(mut errors: Vec<ValidationError>) -> ValidationError {
    if errors.len() == 1 {
        if let Some(only) = errors.pop() {
            return only;
        }
    }

    match ValidationError::join(errors) {
        Some(joined) => ValidationError::new(
            "or_failed",
            format!("all validators failed: {}", joined.message),
        )
        .with_cause(Arc::new(joined)),
        None => ValidationError::new("or_failed", "all validators failed"),
    }
}

/// Combines two validators with logical OR.
///
/// If the first validator passes, the second is not evaluated.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_error) = self.left.validate(input) else {
            return Ok(());
        };
        let Err(right_error) = self.right.validate(input) else {
            return Ok(());
        };
        Err(all_failed(vec![left_error, right_error]))
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Creates an `OrAny` combinator from a list of validators.
///
/// An empty list always fails, since no alternative can pass.
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// let contact = or_any(vec![
///     matches_pattern(r"^[^@\s]+@[^@\s]+$").unwrap().boxed(),
///     matches_pattern(r"^\+\d{10,}$").unwrap().boxed(),
/// ]);
/// assert!(contact.validate("me@example.com").is_ok());
/// assert!(contact.validate("+4712345678").is_ok());
/// assert!(contact.validate("nope").is_err());
/// ```
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}

/// Tries a list of validators until one passes.
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> OrAny<V> {
    /// Returns the alternatives in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = Vec::with_capacity(self.validators.len());

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        Err(all_failed(errors))
    }
}
