//! Built-in validators
//!
//! Small leaf validators that plug into the combinators.
//!
//! # Categories
//!
//! - **String**: length, pattern
//! - **Numeric**: range
//! - **Membership**: allowed / forbidden values
//! - **Presence**: default values, `None`
//! - **Collection**: size, uniqueness
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! let username = not_empty().and(length_range(3, 20));
//! let age = in_range(18, 130);
//! let tags = not_empty_items::<String>().and(unique_items());
//!
//! assert!(username.validate("alice").is_ok());
//! assert!(age.validate(&42).is_ok());
//! assert!(tags.validate(&["a".to_string(), "b".to_string()]).is_ok());
//! ```

// String validators
pub mod length;
pub mod pattern;

// Numeric validators
pub mod range;

// Value validators
pub mod membership;
pub mod nullable;

// Collection validators
pub mod elements;
pub mod size;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use elements::{UniqueItems, unique_items};
pub use length::{
    LengthMode, LengthRange, MaxLength, MinLength, NotEmpty, length_range, max_length, min_length,
    not_empty,
};
pub use membership::{NoneOf, OneOf, none_of, one_of};
pub use nullable::{NotNone, Required, not_none, required};
pub use pattern::{MatchesPattern, matches_pattern};
pub use range::{InRange, Max, Min, in_range, max, min};
pub use size::{MaxItems, MinItems, NotEmptyItems, max_items, min_items, not_empty_items};
