//! Error types for validation failures
//!
//! Every failure produced by this crate is a [`ValidationError`]. Leaf
//! validators construct one directly, foreign errors are folded in with
//! [`ValidationError::wrap`], combinators re-wrap failures with positional
//! or keyed context, and aggregates are formed with [`ValidationError::join`].
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

/// Shared, thread-safe handle to the error a [`ValidationError`] was caused by.
pub type ErrorCause = Arc<dyn Error + Send + Sync + 'static>;

/// Ordered key-value parameters attached to an error (typically 0-2).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Carries a human-readable message and, optionally, the error it was
/// caused by. The cause is what [`Error::source`] returns, so a chain of
/// contextualized failures can be walked down to the original leaf.
///
/// # Examples
///
/// ## Simple error
///
/// ```
/// use protego_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "must be at least 3 characters");
/// assert_eq!(error.to_string(), "must be at least 3 characters");
/// ```
///
/// ## Wrapping a foreign error
///
/// ```
/// use protego_validator::foundation::{is_validation_error, ValidationError};
///
/// let parse = "x".parse::<i32>().unwrap_err();
/// let error = ValidationError::wrap(parse);
/// assert!(is_validation_error(Some(&error)));
/// assert_eq!(error.message, "invalid digit found in string");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "required_key", "or_failed"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Position or key the failure belongs to.
    ///
    /// Examples: "[2]", "email"
    pub field: Option<Cow<'static, str>>,

    /// Parameters describing the failure.
    ///
    /// Example: `[("min", "5"), ("actual", "3")]`
    pub params: ErrorParams,

    /// Constituents of an aggregated failure, in input order.
    pub nested: Vec<ValidationError>,

    cause: Option<ErrorCause>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// ```
    /// use protego_validator::foundation::ValidationError;
    ///
    /// // Static strings, no allocation:
    /// let error = ValidationError::new("required", "required");
    ///
    /// // Dynamic strings allocate:
    /// let error = ValidationError::new("min", format!("must be at least {}", 5));
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
            cause: None,
        }
    }

    /// Creates an error from a plain message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Folds any error into a validation error.
    ///
    /// A `ValidationError` is returned unchanged and a [`ValidationErrors`]
    /// collection is joined. Anything else becomes a `"wrapped"` error
    /// whose message is the foreign error's `Display` output and whose
    /// cause is the foreign error itself.
    pub fn wrap<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let boxed: Box<dyn Error + Send + Sync + 'static> = error.into();
        let boxed = match boxed.downcast::<Self>() {
            Ok(validation) => return *validation,
            Err(other) => other,
        };
        match boxed.downcast::<ValidationErrors>() {
            Ok(collection) => collection
                .into_error()
                .unwrap_or_else(|| Self::new("multiple_failures", "validation failed")),
            Err(foreign) => {
                let message = foreign.to_string();
                Self::new("wrapped", message).with_cause(ErrorCause::from(foreign))
            }
        }
    }

    /// Joins failures into one aggregated error.
    ///
    /// Returns `None` for no failures and the failure itself when there is
    /// exactly one. Two or more become a `"multiple_failures"` error whose
    /// message lists every constituent message and whose `nested` keeps
    /// the constituents in order.
    #[must_use]
    pub fn join(mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => {
                let message = errors
                    .iter()
                    .map(|e| e.message.as_ref())
                    .collect::<Vec<_>>()
                    .join("; ");
                Some(Self::new("multiple_failures", message).with_nested(errors))
            }
        }
    }

    /// Re-wraps this error with positional or keyed context.
    ///
    /// The code is kept, the message becomes `"{prefix}: {message}"`,
    /// `field` is set and the original error becomes the cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn contextualize(
        self,
        field: impl Into<Cow<'static, str>>,
        prefix: impl fmt::Display,
    ) -> Self {
        let message = format!("{prefix}: {}", self.message);
        Self::new(self.code.clone(), message)
            .with_field(field)
            .with_cause(Arc::new(self))
    }

    /// Contextualizes a per-element failure with field `"[i]"`, prefix
    /// `"index i"` and an `index` param.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_index(self, index: usize) -> Self {
        self.contextualize(format!("[{index}]"), format_args!("index {index}"))
            .with_param("index", index.to_string())
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Sets the error this one was caused by.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Returns the immediate cause, or `None` for a leaf error.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the shared handle to the cause.
    #[must_use]
    pub fn cause_handle(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error aggregates other errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Flattens this error and its nested errors into a list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// Converts the error tree to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "cause": self.cause.as_ref().map(ToString::to_string),
            "nested": self.nested.iter().map(Self::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    /// `{}` prints the message; `{:#}` adds field, code, params and nested errors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }

        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {:#}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

// ============================================================================
// IDENTITY AND UNWRAPPING
// ============================================================================

/// Folds an optional error into an optional validation error.
///
/// Absence stays absence; otherwise behaves like [`ValidationError::wrap`].
pub fn wrap_error<E>(error: Option<E>) -> Option<ValidationError>
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    error.map(ValidationError::wrap)
}

/// Returns true if the error, or anything in its cause chain, was produced
/// by this crate. Absence of an error is not a validation error.
pub fn is_validation_error(error: Option<&(dyn Error + 'static)>) -> bool {
    cause_chain(error).any(|e| e.is::<ValidationError>() || e.is::<ValidationErrors>())
}

/// Iterates an error and its causes, outermost first.
pub fn cause_chain<'a>(
    error: Option<&'a (dyn Error + 'static)>,
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(error, |&e| e.source())
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
///
/// Used by the aggregating combinators to gather failures before joining
/// them into a single [`ValidationError`].
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Joins the collection into a single error, see [`ValidationError::join`].
    #[must_use]
    pub fn into_error(self) -> Option<ValidationError> {
        ValidationError::join(self.errors)
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.to_string(), "Test error");
        assert!(error.cause().is_none());
    }

    #[test]
    fn test_custom_is_validation_error() {
        let error = ValidationError::custom("test error");
        assert!(is_validation_error(Some(&error)));
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_wrap_foreign_error() {
        let original = io::Error::new(io::ErrorKind::InvalidData, "original error");
        let wrapped = ValidationError::wrap(original);

        assert_eq!(wrapped.code, "wrapped");
        assert_eq!(wrapped.message, "original error");
        let cause = wrapped.cause().expect("wrapped error keeps its cause");
        let io_cause = cause.downcast_ref::<io::Error>().expect("cause is the io error");
        assert_eq!(io_cause.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let once = ValidationError::wrap(io::Error::other("boom"));
        let handle = once.cause_handle().cloned().unwrap();
        let twice = ValidationError::wrap(once);

        assert_eq!(twice.code, "wrapped");
        assert!(Arc::ptr_eq(twice.cause_handle().unwrap(), &handle));
    }

    #[test]
    fn test_wrap_preserves_validation_error() {
        let original = ValidationError::new("min_length", "too short").with_field("name");
        let wrapped = ValidationError::wrap(original);

        assert_eq!(wrapped.code, "min_length");
        assert_eq!(wrapped.field.as_deref(), Some("name"));
        assert!(wrapped.cause().is_none());
    }

    #[test]
    fn test_wrap_error_absent() {
        assert!(wrap_error(None::<io::Error>).is_none());
        assert!(wrap_error(Some("plain")).is_some());
    }

    #[test]
    fn test_is_validation_error_rejects_foreign_and_absent() {
        let foreign = io::Error::other("regular error");
        assert!(!is_validation_error(Some(&foreign)));
        assert!(!is_validation_error(None));
    }

    #[test]
    fn test_join_counts() {
        assert!(ValidationError::join(Vec::new()).is_none());

        let single = ValidationError::join(vec![ValidationError::new("a", "first")]).unwrap();
        assert_eq!(single.code, "a");
        assert!(!single.has_nested());

        let joined = ValidationError::join(vec![
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ])
        .unwrap();
        assert_eq!(joined.code, "multiple_failures");
        assert_eq!(joined.message, "first; second");
        assert_eq!(joined.nested.len(), 2);
    }

    #[test]
    fn test_contextualize_keeps_cause() {
        let inner = ValidationError::new("min_length", "must be at least 3 characters");
        let outer = inner.contextualize("[1]", "index 1");

        assert_eq!(outer.code, "min_length");
        assert_eq!(outer.message, "index 1: must be at least 3 characters");
        assert_eq!(outer.field.as_deref(), Some("[1]"));

        let cause = outer.cause().unwrap().downcast_ref::<ValidationError>().unwrap();
        assert_eq!(cause.message, "must be at least 3 characters");
    }

    #[test]
    fn test_at_index_tags_position() {
        let err = ValidationError::new("min_length", "too short").at_index(4);

        assert_eq!(err.code, "min_length");
        assert_eq!(err.message, "index 4: too short");
        assert_eq!(err.field.as_deref(), Some("[4]"));
        assert_eq!(err.param("index"), Some("4"));
    }

    #[test]
    fn test_cause_chain_walks_to_leaf() {
        let leaf = ValidationError::wrap(io::Error::other("disk"));
        let outer = leaf.contextualize("config", "key \"config\"");

        let messages: Vec<String> = cause_chain(Some(&outer)).map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["key \"config\": disk", "disk", "disk"]);
    }

    #[test]
    fn test_flatten() {
        let error = ValidationError::new("root", "Root error").with_nested(vec![
            ValidationError::new("child1", "Child 1")
                .with_nested(vec![ValidationError::new("grandchild", "Grandchild")]),
            ValidationError::new("child2", "Child 2"),
        ]);

        assert_eq!(error.flatten().len(), 4);
    }

    #[test]
    fn test_alternate_display() {
        let error = ValidationError::new("min", "too small")
            .with_field("age")
            .with_param("min", "18");
        assert_eq!(format!("{error:#}"), "[age] min: too small (params: [min=18])");
    }

    #[test]
    fn test_to_json_value() {
        let error = ValidationError::new("min", "too small").with_field("age");
        let value = error.to_json_value();
        assert_eq!(value["code"], "min");
        assert_eq!(value["field"], "age");
        assert!(value["cause"].is_null());
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_error().is_none());

        errors.add(ValidationError::new("error1", "First error"));
        errors.add(ValidationError::new("error2", "Second error"));

        assert_eq!(errors.len(), 2);
        assert!(is_validation_error(Some(&errors)));
        let joined = errors.into_error().unwrap();
        assert_eq!(joined.nested.len(), 2);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
