//! WHEN / UNLESS combinators - conditional validation
//!
//! The gate is a boolean fixed when the combinator is built. When it is
//! closed, the inner validator is never invoked and validation passes.
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! let strict_mode = false;
//!
//! let validator = when(strict_mode, min_length(10));
//! assert!(validator.validate("short").is_ok()); // gate closed
//!
//! let validator = unless(strict_mode, min_length(10));
//! assert!(validator.validate("short").is_err()); // gate open
//! ```

use crate::foundation::{Validate, ValidationError};

/// Applies a validator only while its gate is open.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct When<V> {
    /// The inner validator to apply conditionally.
    pub(crate) validator: V,
    /// Whether the inner validator runs.
    pub(crate) condition: bool,
}

impl<V> When<V> {
    /// Creates a new `When` combinator.
    ///
    /// # Arguments
    ///
    /// * `validator` - The validator to apply conditionally
    /// * `condition` - `true` if validation should run
    pub fn new(validator: V, condition: bool) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns whether the inner validator will run.
    pub fn is_active(&self) -> bool {
        self.condition
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.validator
    }
}

impl<V> Validate for When<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.condition {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Runs `validator` only if `condition` is true.
pub fn when<V>(condition: bool, validator: V) -> When<V> {
    When::new(validator, condition)
}

/// Runs `validator` only if `condition` is false.
///
/// Equivalent to `when(!condition, validator)`.
pub fn unless<V>(condition: bool, validator: V) -> When<V> {
    When::new(validator, !condition)
}
