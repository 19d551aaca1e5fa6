//! String length validators
//!
//! Lengths count chars unless a validator is switched to
//! [`LengthMode::Bytes`] with `with_mode`. Byte counting is only
//! meaningful for ASCII input.
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! // "crème" is 5 chars but 6 bytes.
//! assert!(max_length(5).validate("crème").is_ok());
//! assert!(max_length(5).with_mode(LengthMode::Bytes).validate("crème").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Unit a string length is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// UTF-8 bytes.
    Bytes,
    /// Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Returns the length of `input` in this unit.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

fn bound_error(
    code: &'static str,
    message: String,
    bound: (&'static str, usize),
    actual: usize,
) -> ValidationError {
    ValidationError::new(code, message)
        .with_param(bound.0, bound.1.to_string())
        .with_param("actual", actual.to_string())
}

crate::validator! {
    /// Rejects the empty string.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "must not be empty") }
    fn not_empty();
}

crate::validator! {
    /// Lower bound on string length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) {
        bound_error(
            "min_length",
            format!("must be at least {} characters", self.min),
            ("min", self.min),
            self.mode.measure(input),
        )
    }
    new(min: usize) { Self { min, mode: LengthMode::default() } }
    fn min_length(min: usize);
}

crate::validator! {
    /// Upper bound on string length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) {
        bound_error(
            "max_length",
            format!("must be at most {} characters", self.max),
            ("max", self.max),
            self.mode.measure(input),
        )
    }
    new(max: usize) { Self { max, mode: LengthMode::default() } }
    fn max_length(max: usize);
}

impl MinLength {
    /// Switches the unit lengths are counted in.
    #[must_use]
    pub fn with_mode(self, mode: LengthMode) -> Self {
        Self { mode, ..self }
    }
}

impl MaxLength {
    /// Switches the unit lengths are counted in.
    #[must_use]
    pub fn with_mode(self, mode: LengthMode) -> Self {
        Self { mode, ..self }
    }
}

/// Inclusive bounds on string length, measured once per call.
///
/// `min > max` is not rejected at construction; such a range accepts
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
    pub mode: LengthMode,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            mode: LengthMode::default(),
        }
    }

    /// Switches the unit lengths are counted in.
    #[must_use]
    pub fn with_mode(self, mode: LengthMode) -> Self {
        Self { mode, ..self }
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let actual = self.mode.measure(input);
        if self.min <= actual && actual <= self.max {
            return Ok(());
        }
        Err(bound_error(
            "length_range",
            format!("must be between {} and {} characters", self.min, self.max),
            ("min", self.min),
            actual,
        )
        .with_param("max", self.max.to_string()))
    }
}

/// Creates a [`LengthRange`] counting chars.
#[must_use]
pub fn length_range(min: usize, max: usize) -> LengthRange {
    LengthRange::new(min, max)
}
