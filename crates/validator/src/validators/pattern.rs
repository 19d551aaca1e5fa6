//! String pattern validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is compiled once, at construction. An invalid pattern
    /// is a construction error, never a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use protego_validator::prelude::*;
    ///
    /// let slug = matches_pattern(r"^[a-z0-9-]+$").unwrap();
    /// assert!(slug.validate("hello-world").is_ok());
    /// assert!(slug.validate("Hello World").is_err());
    ///
    /// assert!(matches_pattern("(unclosed").is_err());
    /// ```
    pub MatchesPattern { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("pattern", format!("must match pattern {}", self.pattern.as_str()))
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_pattern(pattern: &str) -> regex::Error;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_matches_pattern() {
        let digits = matches_pattern(r"^\d+$").unwrap();
        assert!(digits.validate("12345").is_ok());

        let err = digits.validate("12a45").unwrap_err();
        assert_eq!(err.code, "pattern");
        assert_eq!(err.param("pattern"), Some(r"^\d+$"));
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        assert!(MatchesPattern::new("[").is_err());
    }
}
