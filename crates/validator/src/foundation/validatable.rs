//! Self-validation capability
//!
//! Types that know how to check their own invariants implement
//! [`Validatable`]. The [`Nested`](crate::combinators::Nested) combinator
//! and [`validate_nested`](crate::combinators::validate_nested) call into
//! it, so a parent value can delegate to the values it contains.
//!
//! The default method passes. Types with nothing to check opt in with an
//! empty impl, which is how the std primitives below are covered.

use crate::foundation::{ValidationError, ValidationErrors};

/// Trait for types that can validate themselves.
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// struct Address {
///     city: String,
/// }
///
/// impl Validatable for Address {
///     fn validate(&self) -> Result<(), ValidationError> {
///         validate(self.city.as_str(), [&min_length(2)])
///     }
/// }
///
/// assert!(validate_nested(&Address { city: "Oslo".into() }).is_ok());
/// assert!(validate_nested(&Address { city: "O".into() }).is_err());
/// ```
pub trait Validatable {
    /// Validates the instance. Passes unless overridden.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

macro_rules! nothing_to_validate {
    ($($ty:ty),+ $(,)?) => {
        $(impl Validatable for $ty {})+
    };
}

nothing_to_validate!(
    str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.as_ref().map_or(Ok(()), Validatable::validate)
    }
}

impl<T: Validatable> Validatable for [T] {
    /// Validates every element, tagging failures with their index.
    fn validate(&self) -> Result<(), ValidationError> {
        let errors: ValidationErrors = self
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                item.validate().err().map(|e| e.at_index(index))
            })
            .collect();

        errors.into_error().map_or(Ok(()), Err)
    }
}

impl<T: Validatable> Validatable for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.as_slice().validate()
    }
}
