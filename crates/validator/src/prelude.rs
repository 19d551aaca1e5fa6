//! Prelude module for convenient imports.
//!
//! Provides a single `use protego_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! let age = in_range(18, 100);
//! let tags = min_items::<String>(1).and(max_items::<String>(10));
//!
//! assert!(username.validate("alice").is_ok());
//! assert!(age.validate(&30).is_ok());
//! assert!(tags.validate(&["rust".to_string()]).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, runner
// ============================================================================

pub use crate::foundation::{
    BoxValidator, Validatable, Validate, ValidateExt, ValidationError, ValidationErrors,
    ValidationResult, cause_chain, is_validation_error, validate, wrap_error,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, AndAll, Custom, Each, KeyedMap, MapKeyRule, MapValidator, Nested, Not, Optional, Or,
    OrAny, When, WithMessage, and, and_all, custom, each, each_fail_fast, map_key, nested, not,
    optional, or, or_any, unless, validate_map, validate_nested, validate_string_map,
    validate_value_map, when, with_message,
};

// ============================================================================
// DYNAMIC: serde_json::Value shims
// ============================================================================

pub use crate::dynamic::{bool_value, float_value, int_value, string_value};
