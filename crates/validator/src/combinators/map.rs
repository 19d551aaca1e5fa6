//! Keyed map validation
//!
//! Validates maps against a list of [`MapKeyRule`]s. Each rule names a key,
//! whether it must be present, and the validators its value must pass.
//!
//! Map validation short-circuits like the sequential runner:
//!
//! 1. Rules are checked in order. A missing required key fails with
//!    `key "name" is required`.
//! 2. A present key runs its validators in order; the first failure is
//!    re-wrapped as `key "age": <message>`, keeping the inner code.
//! 3. Unless extra keys are allowed, a key no rule names fails with
//!    `key "extra" not expected`. With several such keys the
//!    lexicographically smallest one is reported.
//!
//! String-valued maps use `str` rules; maps of `serde_json::Value` use
//! `Value` rules, typically through the [`dynamic`](crate::dynamic) shims.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use protego_validator::prelude::*;
//!
//! let rules = [
//!     MapKeyRule::required("name").rule(min_length(1)),
//!     MapKeyRule::optional("age").rule(matches_pattern(r"^\d+$").unwrap()),
//! ];
//!
//! let mut form = HashMap::new();
//! form.insert("age".to_string(), "30".to_string());
//!
//! let error = validate_string_map(&form, false, &rules).unwrap_err();
//! assert_eq!(error.message, r#"key "name" is required"#);
//!
//! form.insert("name".to_string(), "x".to_string());
//! assert!(validate_string_map(&form, false, &rules).is_ok());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::marker::PhantomData;

use serde_json::Value;

use crate::foundation::{BoxValidator, Validate, ValidationError};

// ============================================================================
// KEYED MAP ABSTRACTION
// ============================================================================

/// A map with string keys that can be validated by key.
pub trait KeyedMap {
    /// The type rules validate values as.
    type Value: ?Sized;

    /// Looks up the value stored under `key`.
    fn value_of(&self, key: &str) -> Option<&Self::Value>;

    /// Iterates every key in the map, in no particular order.
    fn key_names(&self) -> impl Iterator<Item = &str>;
}

impl<S: BuildHasher> KeyedMap for HashMap<String, String, S> {
    type Value = str;

    fn value_of(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl KeyedMap for BTreeMap<String, String> {
    type Value = str;

    fn value_of(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl<S: BuildHasher> KeyedMap for HashMap<String, Value, S> {
    type Value = Value;

    fn value_of(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl KeyedMap for BTreeMap<String, Value> {
    type Value = Value;

    fn value_of(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl KeyedMap for serde_json::Map<String, Value> {
    type Value = Value;

    fn value_of(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

// ============================================================================
// KEY RULES
// ============================================================================

/// A rule for one map key: its name, whether it is required, and the
/// validators its value must pass, in order.
///
/// # Type Parameters
///
/// * `T` - The value type the validators accept (`str` or `serde_json::Value`)
pub struct MapKeyRule<T: ?Sized> {
    key: Cow<'static, str>,
    required: bool,
    validators: Vec<BoxValidator<T>>,
}

impl<T: ?Sized> MapKeyRule<T> {
    /// Creates a rule for a key that must be present.
    pub fn required(key: impl Into<Cow<'static, str>>) -> Self {
        map_key(key, true)
    }

    /// Creates a rule for a key that may be absent.
    pub fn optional(key: impl Into<Cow<'static, str>>) -> Self {
        map_key(key, false)
    }

    /// Appends a validator for the key's value.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Returns the key this rule applies to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if the key must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Checks a value that is present under this rule's key.
    fn check(&self, value: &T) -> Result<(), ValidationError> {
        crate::foundation::validate(value, &self.validators)
            .map_err(|e| e.contextualize(self.key.clone(), format_args!("key \"{}\"", self.key)))
    }
}

impl<T: ?Sized> fmt::Debug for MapKeyRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapKeyRule")
            .field("key", &self.key)
            .field("required", &self.required)
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Creates a rule for `key` with no validators yet.
pub fn map_key<T: ?Sized>(key: impl Into<Cow<'static, str>>, required: bool) -> MapKeyRule<T> {
    MapKeyRule {
        key: key.into(),
        required,
        validators: Vec::new(),
    }
}

// ============================================================================
// VALIDATION ENTRY POINTS
// ============================================================================

/// Validates a map against key rules.
///
/// See the [module docs](self) for the order of checks and the messages.
pub fn validate_map<M>(
    map: &M,
    allow_extra_keys: bool,
    rules: &[MapKeyRule<M::Value>],
) -> Result<(), ValidationError>
where
    M: KeyedMap + ?Sized,
{
    for rule in rules {
        match map.value_of(&rule.key) {
            Some(value) => rule.check(value).inspect_err(|e| {
                tracing::debug!(key = %rule.key, code = %e.code, "map value rejected");
            })?,
            None if rule.required => {
                tracing::debug!(key = %rule.key, "required map key missing");
                return Err(ValidationError::new(
                    "required_key",
                    format!("key \"{}\" is required", rule.key),
                )
                .with_field(rule.key.clone())
                .with_param("key", rule.key.clone()));
            }
            None => {}
        }
    }

    if allow_extra_keys {
        return Ok(());
    }

    let unexpected = map
        .key_names()
        .filter(|name| rules.iter().all(|rule| rule.key != *name))
        .min();

    match unexpected {
        Some(name) => {
            tracing::debug!(key = name, "unexpected map key");
            Err(ValidationError::new(
                "unexpected_key",
                format!("key \"{name}\" not expected"),
            )
            .with_field(name.to_owned())
            .with_param("key", name.to_owned()))
        }
        None => Ok(()),
    }
}

/// Validates a string-valued map.
pub fn validate_string_map<M>(
    map: &M,
    allow_extra_keys: bool,
    rules: &[MapKeyRule<str>],
) -> Result<(), ValidationError>
where
    M: KeyedMap<Value = str> + ?Sized,
{
    validate_map(map, allow_extra_keys, rules)
}

/// Validates a map of dynamically typed values.
pub fn validate_value_map<M>(
    map: &M,
    allow_extra_keys: bool,
    rules: &[MapKeyRule<Value>],
) -> Result<(), ValidationError>
where
    M: KeyedMap<Value = Value> + ?Sized,
{
    validate_map(map, allow_extra_keys, rules)
}

// ============================================================================
// REUSABLE MAP VALIDATOR
// ============================================================================

/// A set of key rules packaged as a validator.
///
/// Extra keys are rejected unless enabled with
/// [`allow_extra_keys`](MapValidator::allow_extra_keys).
///
/// # Examples
///
/// ```
/// use protego_validator::prelude::*;
/// use serde_json::{json, Map, Value};
///
/// let config = MapValidator::<Map<String, Value>>::new()
///     .key(MapKeyRule::required("port").rule(int_value(in_range(1, 65535))))
///     .key(MapKeyRule::optional("debug").rule(bool_value(one_of(vec![true, false]))));
///
/// let Value::Object(ok) = json!({ "port": 8080.0 }) else { unreachable!() };
/// assert!(config.validate(&ok).is_ok());
///
/// let Value::Object(bad) = json!({ "port": "8080" }) else { unreachable!() };
/// assert_eq!(config.validate(&bad).unwrap_err().message, r#"key "port": must be a number"#);
/// ```
pub struct MapValidator<M: KeyedMap + ?Sized> {
    rules: Vec<MapKeyRule<M::Value>>,
    allow_extra_keys: bool,
    _map: PhantomData<fn(&M)>,
}

impl<M: KeyedMap + ?Sized> MapValidator<M> {
    /// Creates a validator with no rules that rejects extra keys.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            allow_extra_keys: false,
            _map: PhantomData,
        }
    }

    /// Adds a key rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn key(mut self, rule: MapKeyRule<M::Value>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets whether keys without a rule are accepted.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_extra_keys(mut self, allow: bool) -> Self {
        self.allow_extra_keys = allow;
        self
    }

    /// Returns the key rules in evaluation order.
    pub fn rules(&self) -> &[MapKeyRule<M::Value>] {
        &self.rules
    }
}

impl<M: KeyedMap + ?Sized> Default for MapValidator<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: KeyedMap + ?Sized> fmt::Debug for MapValidator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapValidator")
            .field("rules", &self.rules)
            .field("allow_extra_keys", &self.allow_extra_keys)
            .finish()
    }
}

impl<M: KeyedMap + ?Sized> Validate for MapValidator<M> {
    type Input = M;

    fn validate(&self, input: &M) -> Result<(), ValidationError> {
        validate_map(input, self.allow_extra_keys, &self.rules)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NotEmpty;

    impl Validate for NotEmpty {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Err(ValidationError::new("not_empty", "must not be empty"))
            } else {
                Ok(())
            }
        }
    }

    struct IsNumber;

    impl Validate for IsNumber {
        type Input = Value;

        fn validate(&self, input: &Value) -> Result<(), ValidationError> {
            if input.is_number() {
                Ok(())
            } else {
                Err(ValidationError::new("type_mismatch", "must be a number"))
            }
        }
    }

    fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn person_rules() -> Vec<MapKeyRule<str>> {
        vec![
            MapKeyRule::required("name").rule(NotEmpty),
            MapKeyRule::optional("age").rule(NotEmpty),
        ]
    }

    #[test]
    fn test_missing_required_key() {
        let map = string_map(&[("age", "30")]);
        let error = validate_string_map(&map, false, &person_rules()).unwrap_err();

        assert_eq!(error.code, "required_key");
        assert_eq!(error.message, "key \"name\" is required");
        assert_eq!(error.field.as_deref(), Some("name"));
    }

    #[test]
    fn test_unexpected_key() {
        let map = string_map(&[("name", "x"), ("age", "30"), ("extra", "y")]);
        let error = validate_string_map(&map, false, &person_rules()).unwrap_err();

        assert_eq!(error.code, "unexpected_key");
        assert_eq!(error.message, "key \"extra\" not expected");
    }

    #[test]
    fn test_extra_keys_allowed() {
        let map = string_map(&[("name", "x"), ("extra", "y")]);
        assert!(validate_string_map(&map, true, &person_rules()).is_ok());
    }

    #[test]
    fn test_optional_absent_passes() {
        let map = string_map(&[("name", "x")]);
        assert!(validate_string_map(&map, false, &person_rules()).is_ok());
    }

    #[test]
    fn test_smallest_unexpected_key_reported() {
        let mut map: HashMap<String, String> = HashMap::new();
        for key in ["zeta", "name", "beta", "mu"] {
            map.insert(key.to_string(), "v".to_string());
        }
        let error = validate_string_map(&map, false, &person_rules()).unwrap_err();
        assert_eq!(error.field.as_deref(), Some("beta"));
    }

    #[test]
    fn test_value_failure_is_keyed() {
        let map = string_map(&[("name", "")]);
        let error = validate_string_map(&map, false, &person_rules()).unwrap_err();

        assert_eq!(error.code, "not_empty");
        assert_eq!(error.message, "key \"name\": must not be empty");
        let cause = error.cause().unwrap().downcast_ref::<ValidationError>().unwrap();
        assert_eq!(cause.message, "must not be empty");
    }

    #[test]
    fn test_rule_order_short_circuits() {
        let rules = vec![
            MapKeyRule::required("a").rule(NotEmpty),
            MapKeyRule::required("b").rule(NotEmpty),
        ];
        let map = string_map(&[("a", "")]);
        let error = validate_string_map(&map, false, &rules).unwrap_err();
        assert_eq!(error.field.as_deref(), Some("a"));
    }

    #[test]
    fn test_value_map() {
        let Value::Object(object) = json!({ "port": 80, "host": "x" }) else {
            unreachable!()
        };
        let rules = vec![
            MapKeyRule::required("port").rule(IsNumber),
            map_key("host", false),
        ];
        assert!(validate_value_map(&object, false, &rules).is_ok());

        let Value::Object(object) = json!({ "port": "80" }) else {
            unreachable!()
        };
        let error = validate_value_map(&object, false, &rules).unwrap_err();
        assert_eq!(error.message, "key \"port\": must be a number");
    }

    #[test]
    fn test_map_validator_as_validator() {
        let validator = MapValidator::<HashMap<String, Value>>::new()
            .key(MapKeyRule::required("port").rule(IsNumber))
            .allow_extra_keys(true);

        let mut map = HashMap::new();
        map.insert("port".to_string(), json!(443));
        map.insert("tls".to_string(), json!(true));

        assert!(validator.validate(&map).is_ok());
        assert_eq!(validator.rules().len(), 1);
    }
}
