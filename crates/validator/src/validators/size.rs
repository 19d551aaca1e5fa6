//! Collection size validators
//!
//! All of them validate slices (`[T]`), so a `&Vec<T>` works through
//! deref.

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY ITEMS
// ============================================================================

crate::validator! {
    /// Validates that a collection has at least one element.
    pub NotEmptyItems<T> for [T];
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty_items", "cannot be empty") }
    fn not_empty_items();
}

// ============================================================================
// MIN ITEMS
// ============================================================================

crate::validator! {
    /// Validates that a collection has at least a minimum number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use protego_validator::prelude::*;
    ///
    /// let tags = min_items::<&str>(2);
    /// assert!(tags.validate(&["a", "b"]).is_ok());
    /// assert_eq!(tags.validate(&["a"]).unwrap_err().message, "must have at least 2 items");
    /// ```
    pub MinItems<T> { min: usize } for [T];
    rule(self, input) { input.len() >= self.min }
    error(self, input) {
        ValidationError::new("min_items", format!("must have at least {} items", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn min_items(min: usize);
}

// ============================================================================
// MAX ITEMS
// ============================================================================

crate::validator! {
    /// Validates that a collection has at most a maximum number of elements.
    pub MaxItems<T> { max: usize } for [T];
    rule(self, input) { input.len() <= self.max }
    error(self, input) {
        ValidationError::new("max_items", format!("must have at most {} items", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn max_items(max: usize);
}
