//! Presence validators
//!
//! - [`Required`] rejects the type's default ("zero") value
//! - [`NotNone`] rejects `None`
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! assert!(required::<u32>().validate(&7).is_ok());
//! assert_eq!(required::<u32>().validate(&0).unwrap_err().message, "required");
//!
//! assert!(not_none::<String>().validate(&Some(String::new())).is_ok());
//! assert!(not_none::<String>().validate(&None).is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Validates that a value differs from `T::default()`.
///
/// For strings that means non-empty, for numbers non-zero.
pub struct Required<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Required<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Required<T> {}

impl<T> fmt::Debug for Required<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Required")
    }
}

impl<T> Validate for Required<T>
where
    T: Default + PartialEq,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input == T::default() {
            Err(ValidationError::new("required", "required"))
        } else {
            Ok(())
        }
    }
}

/// Creates a `Required` validator.
#[must_use]
pub fn required<T: Default + PartialEq>() -> Required<T> {
    Required {
        _phantom: PhantomData,
    }
}

crate::validator! {
    /// Validates that an `Option` is `Some`.
    pub NotNone<T> for Option<T>;
    rule(input) { input.is_some() }
    error(input) { ValidationError::new("not_none", "cannot be none") }
    fn not_none();
}
