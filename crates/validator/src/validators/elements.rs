//! Collection element validators

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// UNIQUE ITEMS
// ============================================================================

/// Validates that all elements of a collection are distinct.
///
/// Reports the first repeated element. The set used for the check is
/// local to each call.
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
///
/// let ids = unique_items::<u32>();
/// assert!(ids.validate(&[1, 2, 3]).is_ok());
/// assert_eq!(ids.validate(&[1, 2, 1]).unwrap_err().message, "duplicate item at index 2");
/// ```
pub struct UniqueItems<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for UniqueItems<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UniqueItems<T> {}

impl<T> fmt::Debug for UniqueItems<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UniqueItems")
    }
}

impl<T> Validate for UniqueItems<T>
where
    T: Eq + Hash,
{
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(input.len());
        match input.iter().position(|item| !seen.insert(item)) {
            Some(index) => Err(ValidationError::new(
                "unique_items",
                format!("duplicate item at index {index}"),
            )
            .with_param("index", index.to_string())),
            None => Ok(()),
        }
    }
}

/// Creates a validator that rejects repeated elements.
#[must_use]
pub fn unique_items<T: Eq + Hash>() -> UniqueItems<T> {
    UniqueItems {
        _phantom: PhantomData,
    }
}
