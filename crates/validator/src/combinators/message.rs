//! MESSAGE combinator - custom error messages

use std::borrow::Cow;
use std::sync::Arc;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Useful for providing user-friendly messages. The original failure is
/// kept as the cause of the new error, and its code is kept unless one is
/// set with [`with_code`](WithMessage::with_code).
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// let validator = min_length(8).with_message("password is too short");
///
/// let error = validator.validate("short").unwrap_err();
/// assert_eq!(error.message, "password is too short");
/// assert_eq!(error.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the custom code, if set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self.code.clone().unwrap_or_else(|| original.code.clone());
            let mut error = ValidationError::new(code, self.message.clone());
            error.field.clone_from(&original.field);
            error.with_cause(Arc::new(original))
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================
