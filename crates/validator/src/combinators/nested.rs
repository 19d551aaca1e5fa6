//! Nested value validation
//!
//! Delegates to a value's own [`Validatable`] routine and returns its
//! result verbatim. Types that opt into the capability without overriding
//! it have nothing to validate and always pass.
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! struct User {
//!     name: String,
//! }
//!
//! impl Validatable for User {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         validate(self.name.as_str(), [&not_empty()])
//!     }
//! }
//!
//! let users = vec![User { name: "ada".into() }, User { name: String::new() }];
//!
//! // Validatable for Vec<T> tags each failing element with its index.
//! let error = validate(&users, [&nested()]).unwrap_err();
//! assert_eq!(error.field.as_deref(), Some("[1]"));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validatable, Validate, ValidationError};

// ============================================================================
// NESTED VALIDATOR
// ============================================================================

/// Validates a value by calling its [`Validatable`] implementation.
///
/// Lets a self-validating type take part in a validator pipeline next to
/// ordinary validators.
pub struct Nested<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Nested<T> {
    /// Creates a nested validator.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for Nested<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Nested<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Nested<T> {}

impl<T: ?Sized> fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nested")
    }
}

impl<T> Validate for Nested<T>
where
    T: Validatable + ?Sized,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        Validatable::validate(input)
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates a nested validator for types that implement [`Validatable`].
///
/// # Type Parameters
///
/// * `T` - A type implementing [`Validatable`]
#[must_use]
pub fn nested<T>() -> Nested<T>
where
    T: Validatable + ?Sized,
{
    Nested::new()
}

/// Runs a value's own validation routine.
pub fn validate_nested<T>(value: &T) -> Result<(), ValidationError>
where
    T: Validatable + ?Sized,
{
    value.validate()
}

// ============================================================================
// TESTS
// ============================================================================
