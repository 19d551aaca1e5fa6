//! Validator combinators
//!
//! Operators that build new validators out of existing ones:
//!
//! - **Logic**: [`and`], [`and_all`], [`or`], [`or_any`], [`not`]
//! - **Gating**: [`when`], [`unless`]
//! - **Errors**: [`with_message`], [`custom`]
//! - **Structure**: [`each`], [`optional`], [`nested`], and the keyed map
//!   validators [`validate_map`], [`validate_string_map`],
//!   [`validate_value_map`], [`MapValidator`]
//!
//! Short-circuiting combinators (`and`, maps) return the first failure.
//! Aggregating combinators (`or`, `each`) fold several failures together
//! with [`ValidationError::join`](crate::foundation::ValidationError::join).

pub mod and;
pub mod custom;
pub mod each;
pub mod map;
pub mod message;
pub mod nested;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, AndAll, and, and_all};
pub use custom::{Custom, custom};
pub use each::{Each, each, each_fail_fast};
pub use map::{
    KeyedMap, MapKeyRule, MapValidator, map_key, validate_map, validate_string_map,
    validate_value_map,
};
pub use message::{WithMessage, with_message};
pub use nested::{Nested, nested, validate_nested};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, OrAny, or, or_any};
pub use when::{When, unless, when};
