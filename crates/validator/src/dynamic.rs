//! Validators over dynamically typed values
//!
//! Values decoded from a self-describing format arrive as
//! [`serde_json::Value`], with their static type erased. The shims here
//! adapt a validator written for a concrete type so it can run on such a
//! value: the value is narrowed to the target type first, and the inner
//! validator only sees values that narrowed cleanly.
//!
//! | Shim | Target | Accepts |
//! |------|--------|---------|
//! | [`string_value`] | `str` | strings |
//! | [`int_value`] | `i64` | integers, and whole floats inside the `i64` range |
//! | [`float_value`] | `f64` | any number |
//! | [`bool_value`] | `bool` | booleans |
//!
//! Anything else fails with code `"type_mismatch"` and a message naming
//! the expected kind, without invoking the inner validator.
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//! use serde_json::json;
//!
//! let age = int_value(in_range(0, 150));
//!
//! assert!(age.validate(&json!(42)).is_ok());
//! assert!(age.validate(&json!(42.0)).is_ok()); // whole float narrows
//! assert_eq!(age.validate(&json!(42.5)).unwrap_err().message, "must be an integer");
//! assert_eq!(age.validate(&json!("42")).unwrap_err().message, "must be a number");
//! ```

use std::borrow::Borrow;
use std::marker::PhantomData;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// NARROWING
// ============================================================================

/// A target type a dynamic value can be narrowed to.
///
/// Uses a GAT so strings narrow to a borrowed `&str` while scalars are
/// copied out.
pub trait ValueKind {
    /// The type the inner validator accepts.
    type Target: ?Sized;

    /// The narrowed value, borrowable as the target.
    type Output<'a>: Borrow<Self::Target>;

    /// Narrows `value`, or explains why it cannot be narrowed.
    fn narrow(value: &Value) -> Result<Self::Output<'_>, ValidationError>;
}

fn type_mismatch(expected: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new("type_mismatch", message).with_param("expected", expected)
}

/// Narrows to `str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringKind;

impl ValueKind for StringKind {
    type Target = str;
    type Output<'a> = &'a str;

    fn narrow(value: &Value) -> Result<&str, ValidationError> {
        value
            .as_str()
            .ok_or_else(|| type_mismatch("string", "must be a string"))
    }
}

/// Narrows to `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntKind;

// 2^63 as f64; i64::MAX itself is not representable.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl ValueKind for IntKind {
    type Target = i64;
    type Output<'a> = i64;

    fn narrow(value: &Value) -> Result<i64, ValidationError> {
        let Value::Number(number) = value else {
            return Err(type_mismatch("integer", "must be a number"));
        };

        if let Some(int) = number.as_i64() {
            return Ok(int);
        }

        match number.as_f64() {
            Some(float)
                if number.is_f64()
                    && float.fract() == 0.0
                    && float >= -I64_UPPER
                    && float < I64_UPPER =>
            {
                Ok(float as i64)
            }
            _ => Err(type_mismatch("integer", "must be an integer")),
        }
    }
}

/// Narrows to `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatKind;

impl ValueKind for FloatKind {
    type Target = f64;
    type Output<'a> = f64;

    fn narrow(value: &Value) -> Result<f64, ValidationError> {
        value
            .as_f64()
            .ok_or_else(|| type_mismatch("number", "must be a number"))
    }
}

/// Narrows to `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoolKind;

impl ValueKind for BoolKind {
    type Target = bool;
    type Output<'a> = bool;

    fn narrow(value: &Value) -> Result<bool, ValidationError> {
        value
            .as_bool()
            .ok_or_else(|| type_mismatch("boolean", "must be a boolean"))
    }
}

// ============================================================================
// SHIM
// ============================================================================

/// Runs a concretely typed validator on a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueAs<V, K> {
    inner: V,
    _kind: PhantomData<K>,
}

impl<V, K> ValueAs<V, K> {
    /// Wraps `inner` so it runs on values narrowed by `K`.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _kind: PhantomData,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, K> Validate for ValueAs<V, K>
where
    K: ValueKind,
    V: Validate<Input = K::Target>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let narrowed = K::narrow(input)?;
        self.inner.validate(narrowed.borrow())
    }
}

/// A string validator lifted to dynamic values.
pub type StringValue<V> = ValueAs<V, StringKind>;
/// An integer validator lifted to dynamic values.
pub type IntValue<V> = ValueAs<V, IntKind>;
/// A float validator lifted to dynamic values.
pub type FloatValue<V> = ValueAs<V, FloatKind>;
/// A boolean validator lifted to dynamic values.
pub type BoolValue<V> = ValueAs<V, BoolKind>;

/// Lifts a `str` validator to dynamic values.
pub fn string_value<V: Validate<Input = str>>(validator: V) -> StringValue<V> {
    ValueAs::new(validator)
}

/// Lifts an `i64` validator to dynamic values.
pub fn int_value<V: Validate<Input = i64>>(validator: V) -> IntValue<V> {
    ValueAs::new(validator)
}

/// Lifts an `f64` validator to dynamic values.
pub fn float_value<V: Validate<Input = f64>>(validator: V) -> FloatValue<V> {
    ValueAs::new(validator)
}

/// Lifts a `bool` validator to dynamic values.
pub fn bool_value<V: Validate<Input = bool>>(validator: V) -> BoolValue<V> {
    ValueAs::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
