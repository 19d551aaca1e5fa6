//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: Define a leaf validator (struct + `Validate` impl + factory fn)
//! - [`compose!`]: AND-chain multiple validators
//! - [`any_of!`]: OR-chain multiple validators
//!
//! # Examples
//!
//! ```
//! use protego_validator::prelude::*;
//! use protego_validator::validator;
//!
//! validator! {
//!     /// Rejects strings with surrounding whitespace.
//!     pub Trimmed for str;
//!     rule(input) { input.trim() == input }
//!     error(input) { ValidationError::new("trimmed", "must not start or end with whitespace") }
//!     fn trimmed();
//! }
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq)]
//!     pub MultipleOf { factor: i64 } for i64;
//!     rule(self, input) { input % self.factor == 0 }
//!     error(self, input) {
//!         ValidationError::new("multiple_of", format!("must be a multiple of {}", self.factor))
//!     }
//!     fn multiple_of(factor: i64);
//! }
//!
//! assert!(trimmed().validate("tag").is_ok());
//! assert!(trimmed().validate(" tag").is_err());
//! assert!(multiple_of(5).validate(&15).is_ok());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate`
/// implementation, constructor, and an optional factory function.
///
/// `#[derive(Debug, Clone)]` is always applied (unit shapes also get
/// `Copy, PartialEq, Eq, Hash`). Add extra derives via `#[derive(...)]`.
/// The trailing `fn factory(..);` line is optional in every shape.
///
/// # Shapes
///
/// **Unit validator** (zero-sized, no fields):
/// ```ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "must not be empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` taking every field):
/// ```ignore
/// validator! {
///     pub Prefix { prefix: String } for str;
///     rule(self, input) { input.starts_with(&self.prefix) }
///     error(self, input) { ValidationError::new("prefix", "wrong prefix") }
///     fn prefix(prefix: String);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```ignore
/// validator! {
///     pub MinLength { min: usize, mode: LengthMode } for str;
///     rule(self, input) { self.mode.measure(input) >= self.min }
///     error(self, input) { ValidationError::new("min_length", "too short") }
///     new(min: usize) { Self { min, mode: LengthMode::Chars } }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```ignore
/// validator! {
///     pub MatchesPattern { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::new("pattern", "no match") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches_pattern(pattern: &str) -> regex::Error;
/// }
/// ```
///
/// **Generic validator** (one type parameter, bounds are plain identifiers):
/// ```ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::new("min", format!("must be at least {}", self.min)) }
///     fn min(min: T);
/// }
/// ```
///
/// **Phantom generic** (unbounded type parameter, with or without fields):
/// ```ignore
/// validator! {
///     pub MinItems<T> { min: usize } for [T];
///     rule(self, input) { input.len() >= self.min }
///     error(self, input) { ValidationError::new("min_items", "too few items") }
///     fn min_items(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared `Validate` impl ───────────────────────────────────────────
    (
        @impl [$($gen:tt)*] [$($ty:tt)+] for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        impl<$($gen)*> $crate::foundation::Validate for $($ty)+ {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Unit validator ───────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        $(fn $factory:ident();)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::validator! {
            @impl [] [$name] for $input;
            rule(self, $inp) $rule
            error($einp) $err
        }

        $(
            #[must_use]
            $vis const fn $factory() -> $name {
                $name
            }
        )?
    };

    // ── Generic struct with bounds, with factory ────────────────────────
    //
    // The factory repeats the bound list, so it cannot sit inside an
    // optional group; this arm emits it and delegates the rest.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct with bounds ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator! {
            @impl [$gen: $first_bound $(+ $rest_bound)*] [$name<$gen>] for $input;
            rule($self_, $inp) $rule
            error($einp) $err
        }
    };

    // ── Phantom generic unit ─────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        $(fn $factory:ident();)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<$gen> {
            _phantom: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub const fn new() -> Self {
                Self { _phantom: ::std::marker::PhantomData }
            }
        }

        impl<$gen> ::std::default::Default for $name<$gen> {
            fn default() -> Self {
                Self::new()
            }
        }

        $crate::validator! {
            @impl [$gen] [$name<$gen>] for $input;
            rule(self, $inp) $rule
            error($einp) $err
        }

        $(
            #[must_use]
            $vis const fn $factory<$gen>() -> $name<$gen> {
                $name::new()
            }
        )?
    };

    // ── Phantom generic struct ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
            _phantom: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field,)+ _phantom: ::std::marker::PhantomData }
            }
        }

        $crate::validator! {
            @impl [$gen] [$name<$gen>] for $input;
            rule($self_, $inp) $rule
            error($einp) $err
        }

        $(
            #[must_use]
            $vis fn $factory<$gen>($($farg: $faty),*) -> $name<$gen> {
                $name::new($($farg),*)
            }
        )?
    };

    // ── Struct with fields, auto new ─────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator! {
            @impl [] [$name] for $input;
            rule($self_, $inp) $rule
            error($einp) $err
        }

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // ── Struct with fields, custom new ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator! {
            @impl [] [$name] for $input;
            rule($self_, $inp) $rule
            error($einp) $err
        }

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // ── Struct with fields, fallible new ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Builds the validator, or reports why the configuration is invalid.
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator! {
            @impl [] [$name] for $input;
            rule($self_, $inp) $rule
            error($einp) $err
        }

        $(
            /// Builds the validator, or reports why the configuration is invalid.
            $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
                $name::new($($farg),*)
            }
        )?
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// Needs [`ValidateExt`](crate::foundation::ValidateExt) in scope.
///
/// ```
/// use protego_validator::prelude::*;
/// use protego_validator::compose;
///
/// let username = compose![not_empty(), min_length(3), max_length(20)];
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("al").is_err());
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic.
///
/// Needs [`ValidateExt`](crate::foundation::ValidateExt) in scope.
///
/// ```
/// use protego_validator::prelude::*;
/// use protego_validator::any_of;
///
/// let zip = any_of![length_range(5, 5), length_range(9, 9)];
/// assert!(zip.validate("12345").is_ok());
/// assert!(zip.validate("123456789").is_ok());
/// assert!(zip.validate("1234").is_err());
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
