//! OPTIONAL combinator - validates Option types

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Makes a validator work with `Option` values.
///
/// `None` passes; `Some(value)` is handed to the inner validator.
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// let nickname = optional(min_length(3));
/// assert!(nickname.validate(&None::<String>).is_ok());
/// assert!(nickname.validate(&Some("bob".to_string())).is_ok());
/// assert!(nickname.validate(&Some("b".to_string())).is_err());
/// ```
pub struct Optional<V, T> {
    pub(crate) inner: V,
    _value: PhantomData<fn(&T)>,
}

impl<V, T> Optional<V, T> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _value: PhantomData,
        }
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

impl<V: Clone, T> Clone for Optional<V, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V: fmt::Debug, T> fmt::Debug for Optional<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional").field("inner", &self.inner).finish()
    }
}

impl<V, T> Validate for Optional<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value.borrow()),
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V, T>(validator: V) -> Optional<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() >= self.min {
                Ok(())
            } else {
                Err(ValidationError::new("min_length", "too short"))
            }
        }
    }

    #[test]
    fn test_optional_none() {
        let validator = Optional::new(MinLength { min: 5 });
        let input: Option<String> = None;
        assert!(validator.validate(&input).is_ok());
    }

    #[test]
    fn test_optional_some_valid() {
        let validator = Optional::new(MinLength { min: 5 });
        let input = Some("hello".to_string());
        assert!(validator.validate(&input).is_ok());
    }

    #[test]
    fn test_optional_some_invalid() {
        let validator = Optional::new(MinLength { min: 5 });
        let input = Some("hi");
        assert_eq!(validator.validate(&input).unwrap_err().code, "min_length");
    }

    #[test]
    fn test_optional_helper_with_sized_input() {
        struct Positive;
        impl Validate for Positive {
            type Input = i32;
            fn validate(&self, input: &i32) -> Result<(), ValidationError> {
                if *input > 0 {
                    Ok(())
                } else {
                    Err(ValidationError::new("positive", "must be positive"))
                }
            }
        }

        let validator = optional(Positive);
        assert!(validator.validate(&None).is_ok());
        assert!(validator.validate(&Some(1)).is_ok());
        assert!(validator.validate(&Some(-1)).is_err());
    }
}
