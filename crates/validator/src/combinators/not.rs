//! NOT combinator - logical negation of validators
//!
//! [`Not`] succeeds when the inner validator fails and fails with a
//! generic message when it passes. The inner failure message is dropped:
//! it describes the opposite of what is now being checked.
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! // Username must not be a reserved name.
//! let validator = not(one_of(vec!["admin", "root"]));
//! assert!(validator.validate(&"alice").is_ok());
//! assert!(validator.validate(&"root").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
