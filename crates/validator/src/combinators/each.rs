//! EACH combinator - validates each element of a collection

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a slice.
///
/// Every element is checked, regardless of earlier failures. Each failure
/// is re-wrapped with its position (`field = "[i]"`, message prefixed with
/// `index i`). A single failure is returned as that positional error; two
/// or more are folded into one `"each_failed"` error whose `nested` holds
/// the positional errors in order.
///
/// Elements only have to borrow as the inner validator's input, so a
/// `str` validator runs over `[&str]` and `[String]` alike.
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// let validator = each(min_length(3));
///
/// assert!(validator.validate(&["foo", "bar", "baz"]).is_ok());
///
/// let error = validator.validate(&["test", "ab", "test3"]).unwrap_err();
/// assert_eq!(error.field.as_deref(), Some("[1]"));
/// assert_eq!(error.message, "index 1: must be at least 3 characters");
/// ```
pub struct Each<V, T> {
    inner: V,
    fail_fast: bool,
    _element: PhantomData<fn(&T)>,
}

impl<V, T> Each<V, T> {
    /// Creates a new EACH combinator.
    ///
    /// By default, validates all elements and collects all errors.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            fail_fast: false,
            _element: PhantomData,
        }
    }

    /// Creates an EACH combinator that stops on first error.
    pub fn fail_fast(inner: V) -> Self {
        Self::new(inner).with_fail_fast(true)
    }

    /// Sets whether to stop on first error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
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

impl<V: Clone, T> Clone for Each<V, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            fail_fast: self.fail_fast,
            _element: PhantomData,
        }
    }
}

impl<V: fmt::Debug, T> fmt::Debug for Each<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Each")
            .field("inner", &self.inner)
            .field("fail_fast", &self.fail_fast)
            .finish()
    }
}

impl<V, T> Validate for Each<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut failures: Vec<(usize, ValidationError)> = Vec::new();

        for (index, element) in input.iter().enumerate() {
            if let Err(e) = self.inner.validate(element.borrow()) {
                if self.fail_fast {
                    return Err(e.at_index(index));
                }
                failures.push((index, e));
            }
        }

        match failures.len() {
            0 => Ok(()),
            1 => {
                let (index, error) = failures.remove(0);
                Err(error.at_index(index))
            }
            failed => {
                let indices: Vec<String> = failures.iter().map(|(i, _)| i.to_string()).collect();
                let nested: Vec<ValidationError> = failures
                    .into_iter()
                    .map(|(index, e)| e.at_index(index))
                    .collect();
                let messages: Vec<&str> = nested.iter().map(|e| e.message.as_ref()).collect();

                let error = ValidationError::new(
                    "each_failed",
                    format!(
                        "{} of {} elements failed validation: {}",
                        failed,
                        input.len(),
                        messages.join("; ")
                    ),
                )
                .with_param("failed_count", failed.to_string())
                .with_param("total_count", input.len().to_string())
                .with_param("failed_indices", indices.join(","));

                Err(error.with_nested(nested))
            }
        }
    }
}

/// Creates an EACH combinator that validates all elements.
pub fn each<V, T>(validator: V) -> Each<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    Each::new(validator)
}

/// Creates an EACH combinator that stops at the first failing element.
pub fn each_fail_fast<V, T>(validator: V) -> Each<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    Each::fail_fast(validator)
}

// ============================================================================
// TESTS
// ============================================================================
