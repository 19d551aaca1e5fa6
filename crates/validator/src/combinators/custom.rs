//! CUSTOM combinator - lifts a plain function into a validator
//!
//! Any `Fn(&T) -> Result<(), E>` becomes a validator, as long as `E` can be
//! boxed into a `dyn Error`. Failures are folded in with
//! [`ValidationError::wrap`], so a `ValidationError` returned by the
//! function passes through untouched and anything else becomes a
//! `"wrapped"` error that keeps the original as its cause.
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! let even = custom(|n: &i64| {
//!     if n % 2 == 0 { Ok(()) } else { Err(ValidationError::custom("must be even")) }
//! });
//! assert!(even.validate(&4).is_ok());
//! assert_eq!(even.validate(&3).unwrap_err().message, "must be even");
//!
//! // Foreign errors are wrapped.
//! let port = custom(|s: &str| s.parse::<u16>().map(drop));
//! assert!(port.validate("8080").is_ok());
//! assert_eq!(port.validate("http").unwrap_err().code, "wrapped");
//! ```

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// A validator backed by a function.
pub struct Custom<F, T: ?Sized, E> {
    check: F,
    _marker: PhantomData<fn(&T) -> E>,
}

impl<F, T: ?Sized, E> Custom<F, T, E>
where
    F: Fn(&T) -> Result<(), E>,
{
    /// Wraps `check` as a validator.
    pub fn new(check: F) -> Self {
        Self {
            check,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, T: ?Sized, E> Clone for Custom<F, T, E> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T: ?Sized, E> fmt::Debug for Custom<F, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

impl<F, T: ?Sized, E> Validate for Custom<F, T, E>
where
    F: Fn(&T) -> Result<(), E>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (self.check)(input).map_err(ValidationError::wrap)
    }
}

/// Lifts a function into a validator.
pub fn custom<T, E, F>(check: F) -> Custom<F, T, E>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), E>,
{
    Custom::new(check)
}
