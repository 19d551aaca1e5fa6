//! Set membership validators

use std::fmt::Debug;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is one of an allowed list.
    ///
    /// # Examples
    ///
    /// ```
    /// use protego_validator::prelude::*;
    ///
    /// let status = one_of(vec!["active", "pending"]);
    /// assert!(status.validate(&"active").is_ok());
    /// assert_eq!(
    ///     status.validate(&"deleted").unwrap_err().message,
    ///     r#"must be one of: ["active", "pending"]"#
    /// );
    /// ```
    #[derive(PartialEq, Eq)]
    pub OneOf<T: PartialEq + Debug> { allowed: Vec<T> } for T;
    rule(self, input) { self.allowed.contains(input) }
    error(self, input) {
        ValidationError::new("one_of", format!("must be one of: {:?}", self.allowed))
    }
    fn one_of(allowed: Vec<T>);
}

crate::validator! {
    /// Validates that a value is not in a forbidden list.
    #[derive(PartialEq, Eq)]
    pub NoneOf<T: PartialEq + Debug> { forbidden: Vec<T> } for T;
    rule(self, input) { !self.forbidden.contains(input) }
    error(self, input) {
        ValidationError::new("none_of", format!("cannot be one of: {:?}", self.forbidden))
    }
    fn none_of(forbidden: Vec<T>);
}
