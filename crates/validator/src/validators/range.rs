//! Numeric range validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(value: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    ///
    /// # Examples
    ///
    /// ```
    /// use protego_validator::prelude::*;
    ///
    /// let percent = in_range(0.0, 100.0);
    /// assert!(percent.validate(&42.5).is_ok());
    /// assert_eq!(percent.validate(&101.0).unwrap_err().message, "must be between 0 and 100");
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::new("in_range", format!("must be between {} and {}", self.min, self.max))
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn in_range(min: T, max: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min() {
        assert!(min(18).validate(&18).is_ok());
        let err = min(18).validate(&17).unwrap_err();
        assert_eq!(err.message, "must be at least 18");
        assert_eq!(err.param("actual"), Some("17"));
    }

    #[test]
    fn test_max() {
        assert!(max(10_u8).validate(&10).is_ok());
        assert_eq!(max(10_u8).validate(&11).unwrap_err().message, "must be at most 10");
    }

    #[test]
    fn test_in_range_inclusive() {
        let v = in_range(1_i64, 5);
        assert!(v.validate(&1).is_ok());
        assert!(v.validate(&5).is_ok());
        assert_eq!(v.validate(&0).unwrap_err().message, "must be between 1 and 5");
        assert_eq!(v.validate(&6).unwrap_err().code, "in_range");
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(in_range(0.0_f64, 1.0).validate(&f64::NAN).is_err());
        assert!(min(0.0_f64).validate(&f64::NAN).is_err());
    }
}
