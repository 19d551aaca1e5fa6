//! Core traits for the validation system
//!
//! This module defines the contract every validator implements and the
//! extension trait that provides the fluent combinator API.

use std::borrow::Borrow;
use std::sync::Arc;

use crate::combinators::{And, Each, Not, Optional, Or, When, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator is a pure function from a borrowed input to pass/fail.
/// It holds only immutable configuration, so one instance can be shared
/// and reused across unrelated validation calls and threads.
///
/// # Examples
///
/// ```
/// use protego_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.len() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::new(
///                 "min_length",
///                 format!("must be at least {} characters", self.min),
///             ))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 3 }.validate("abc").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` if the value passes, `Err(ValidationError)` otherwise.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased validator that can be stored in heterogeneous lists and
/// shared across threads.
pub type BoxValidator<T> = Box<dyn Validate<Input = T> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every type that implements [`Validate`].
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// let username = min_length(3).and(max_length(20));
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("al").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure and returns its error.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Short-circuits on the first success. When both fail the error
    /// aggregates both failures.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Runs the validator only if `condition` is true.
    fn when(self, condition: bool) -> When<Self> {
        When::new(self, condition)
    }

    /// Runs the validator only if `condition` is false.
    fn unless(self, condition: bool) -> When<Self> {
        When::new(self, !condition)
    }

    /// Replaces the failure message.
    fn with_message(self, message: impl Into<std::borrow::Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Applies the validator to every element of a slice.
    fn each<T>(self) -> Each<Self, T>
    where
        T: Borrow<Self::Input>,
    {
        Each::new(self)
    }

    /// Makes the validator accept `Option`, passing on `None`.
    fn optional<T>(self) -> Optional<Self, T>
    where
        T: Borrow<Self::Input>,
    {
        Optional::new(self)
    }

    /// Erases the validator's type.
    fn boxed(self) -> BoxValidator<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
