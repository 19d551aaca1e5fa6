//! # protego-validator
//!
//! A composable validation engine: small validators combined into
//! pipelines with fixed short-circuit and aggregation rules, and one error
//! type that every failure surfaces as.
//!
//! ## Quick Start
//!
//! ```
//! use protego_validator::prelude::*;
//!
//! // Sequential runner: first failure wins.
//! assert!(validate("alice", [&min_length(3)]).is_ok());
//! let err = validate("ab", [&min_length(3)]).unwrap_err();
//! assert_eq!(err.message, "must be at least 3 characters");
//!
//! // Compose validators with .and() / .or() / .not()
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//!
//! // Element-wise aggregation tags failures with their index.
//! let err = each(min_length(3)).validate(&["test", "ab", "test3"]).unwrap_err();
//! assert_eq!(err.field.as_deref(), Some("[1]"));
//! ```
//!
//! ## Error model
//!
//! Every failure is a [`ValidationError`](foundation::ValidationError).
//! Foreign errors are folded in with
//! [`ValidationError::wrap`](foundation::ValidationError::wrap), which is
//! idempotent, and the original stays reachable through
//! [`Error::source`](std::error::Error::source).
//! [`is_validation_error`](foundation::is_validation_error) walks that
//! chain.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! [`custom`](combinators::custom) to lift a closure, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Modules
//!
//! - [`foundation`]: the `Validate` contract, errors and the runner
//! - [`combinators`]: logic, gating, message override, elements, maps
//! - [`dynamic`]: shims from `serde_json::Value` to concrete types
//! - [`validators`]: built-in leaf validators

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod dynamic;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
