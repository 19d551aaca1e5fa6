//! Property-based tests for the composition rules.

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use protego_validator::prelude::*;

/// Passes or fails according to a fixed verdict and counts its calls.
struct Verdict<'a> {
    pass: bool,
    name: String,
    calls: &'a AtomicUsize,
}

impl<'a> Verdict<'a> {
    fn new(index: usize, pass: bool, calls: &'a AtomicUsize) -> Self {
        Self {
            pass,
            name: format!("v{index}"),
            calls,
        }
    }
}

impl Validate for Verdict<'_> {
    type Input = str;

    fn validate(&self, _input: &str) -> Result<(), ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.pass {
            Ok(())
        } else {
            Err(ValidationError::new("verdict", format!("{} rejected", self.name)))
        }
    }
}

fn verdicts<'a>(outcomes: &[bool], counters: &'a [AtomicUsize]) -> Vec<Verdict<'a>> {
    outcomes
        .iter()
        .zip(counters)
        .enumerate()
        .map(|(i, (&pass, calls))| Verdict::new(i, pass, calls))
        .collect()
}

fn counters(n: usize) -> Vec<AtomicUsize> {
    (0..n).map(|_| AtomicUsize::new(0)).collect()
}

// ============================================================================
// SEQUENTIAL RUNNER: first failure wins, later validators never run
// ============================================================================

proptest! {
    #[test]
    fn runner_returns_first_failure(outcomes in prop::collection::vec(any::<bool>(), 0..8)) {
        let calls = counters(outcomes.len());
        let validators = verdicts(&outcomes, &calls);

        let result = validate("input", &validators);

        match outcomes.iter().position(|pass| !pass) {
            Some(first) => {
                let err = result.unwrap_err();
                prop_assert_eq!(err.message.as_ref(), format!("v{first} rejected"));
                for (i, count) in calls.iter().enumerate() {
                    let expected = usize::from(i <= first);
                    prop_assert_eq!(count.load(Ordering::SeqCst), expected);
                }
            }
            None => {
                prop_assert!(result.is_ok());
                prop_assert!(calls.iter().all(|c| c.load(Ordering::SeqCst) == 1));
            }
        }
    }

    #[test]
    fn and_all_matches_runner(outcomes in prop::collection::vec(any::<bool>(), 0..8)) {
        let calls = counters(outcomes.len());
        let combined = and_all(verdicts(&outcomes, &calls));

        prop_assert_eq!(combined.validate("x").is_ok(), outcomes.iter().all(|p| *p));
    }

    #[test]
    fn or_any_passes_iff_some_alternative_passes(
        outcomes in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let calls = counters(outcomes.len());
        let combined = or_any(verdicts(&outcomes, &calls));

        prop_assert_eq!(combined.validate("x").is_ok(), outcomes.iter().any(|p| *p));
    }
}

#[test]
fn and_all_of_nothing_passes() {
    let empty: Vec<BoxValidator<str>> = Vec::new();
    assert!(and_all(empty).validate("anything").is_ok());
}

#[test]
fn or_any_of_nothing_fails() {
    let empty: Vec<BoxValidator<str>> = Vec::new();
    let err = or_any(empty).validate("anything").unwrap_err();
    assert!(err.message.starts_with("all validators failed"));
    assert!(err.source().is_none());
}

// ============================================================================
// LOGIC LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let combined = a.and(b);

        let expected = a.validate(&s).is_ok() && b.validate(&s).is_ok();
        prop_assert_eq!(combined.validate(&s).is_ok(), expected);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,20}") {
        let a = min_length(5);
        let b = max_length(3);
        let combined = a.or(b);

        let expected = a.validate(&s).is_ok() || b.validate(&s).is_ok();
        prop_assert_eq!(combined.validate(&s).is_ok(), expected);
    }

    #[test]
    fn double_negation_preserves_outcome(s in ".{0,12}") {
        let v = length_range(2, 6);
        prop_assert_eq!(v.not().not().validate(&s).is_ok(), v.validate(&s).is_ok());
    }

    #[test]
    fn in_range_accepts_exactly_the_closed_interval(n in -200i64..200) {
        prop_assert_eq!(in_range(-50i64, 50).validate(&n).is_ok(), (-50..=50).contains(&n));
    }
}

// ============================================================================
// OR ERROR SHAPE
// ============================================================================

#[test]
fn single_alternative_failure_is_returned_verbatim() {
    let calls = counters(1);
    let err = or_any(verdicts(&[false], &calls)).validate("x").unwrap_err();

    assert_eq!(err.code, "verdict");
    assert_eq!(err.message, "v0 rejected");
}

#[test]
fn both_alternatives_failing_keep_both_messages_in_the_chain() {
    let calls = counters(2);
    let mut pair = verdicts(&[false, false], &calls).into_iter();
    let (Some(left), Some(right)) = (pair.next(), pair.next()) else {
        unreachable!()
    };

    let err = left.or(right).validate("x").unwrap_err();
    assert!(err.message.starts_with("all validators failed"));

    let chain: Vec<String> = cause_chain(Some(&err)).map(ToString::to_string).collect();
    assert!(chain.iter().any(|m| m.contains("v0 rejected")));
    assert!(chain.iter().any(|m| m.contains("v1 rejected")));
}

// ============================================================================
// GATING
// ============================================================================

proptest! {
    #[test]
    fn inactive_gate_never_invokes(pass in any::<bool>(), s in ".{0,8}") {
        let calls = AtomicUsize::new(0);
        let gated = when(false, Verdict::new(0, pass, &calls));

        prop_assert!(gated.validate(&s).is_ok());
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn active_gate_is_transparent(pass in any::<bool>()) {
        let calls = AtomicUsize::new(0);
        let gated = unless(false, Verdict::new(0, pass, &calls));

        prop_assert_eq!(gated.validate("x").is_ok(), pass);
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

// ============================================================================
// ELEMENT AGGREGATION
// ============================================================================

proptest! {
    #[test]
    fn each_reports_every_failing_index(
        items in prop::collection::vec("[a-z]{0,5}", 0..10),
    ) {
        let failing: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, s)| s.chars().count() < 3)
            .map(|(i, _)| i)
            .collect();

        let result = each(min_length(3)).validate(items.as_slice());

        match failing.as_slice() {
            [] => prop_assert!(result.is_ok()),
            [only] => {
                let err = result.unwrap_err();
                let field = format!("[{only}]");
                prop_assert_eq!(err.field.as_deref(), Some(field.as_str()));
            }
            many => {
                let err = result.unwrap_err();
                prop_assert_eq!(err.nested.len(), many.len());
                for index in many {
                    let needle = format!("index {index}");
                    prop_assert!(err.message.contains(&needle));
                }
            }
        }
    }
}

// ============================================================================
// WRAP IDEMPOTENCE
// ============================================================================

proptest! {
    #[test]
    fn wrapping_a_validation_error_is_identity(message in "[a-z ]{1,20}") {
        let original = ValidationError::new("probe", message.clone());
        let wrapped = ValidationError::wrap(original);

        prop_assert_eq!(wrapped.code.as_ref(), "probe");
        prop_assert_eq!(wrapped.message.as_ref(), message.as_str());
        prop_assert!(wrapped.cause().is_none());
    }

    #[test]
    fn wrapping_a_foreign_error_keeps_its_text(message in "[a-z ]{1,20}") {
        let wrapped = ValidationError::wrap(message.clone());

        prop_assert_eq!(wrapped.message.as_ref(), message.as_str());
        prop_assert!(is_validation_error(Some(&wrapped)));
        prop_assert_eq!(wrapped.cause().map(ToString::to_string), Some(message));
    }
}
