//! Unit tests for construction, matching, and conversion.

use std::collections::HashSet;

use rstest::rstest;
use test_helpers::{FormatFailure, MissingKey, parse_decimal};

use crate::fault::Fault;

use super::Outcome;

#[test]
fn wrap_then_match_returns_the_value() {
    let matched = Outcome::success(11).fold(|v| v, |fault| panic!("unexpected fault: {fault}"));
    assert_eq!(matched, 11);
}

#[test]
fn failure_matches_into_the_failure_arm() {
    let outcome: Outcome<i32> = Outcome::failure(MissingKey::new("port"));
    let matched = outcome.fold(|_| String::new(), |fault| fault.to_string());
    assert_eq!(matched, "missing key: port");
}

#[test]
fn visit_dispatches_exactly_one_callback() {
    let seen = std::cell::RefCell::new(Vec::new());
    Outcome::success(3).visit(|v| seen.borrow_mut().push(*v), |_| seen.borrow_mut().push(-1));
    Outcome::<i32>::failure(Fault::message("down"))
        .visit(|v| seen.borrow_mut().push(*v), |_| seen.borrow_mut().push(-1));
    assert_eq!(seen.into_inner(), vec![3, -1]);
}

#[rstest]
#[case(Outcome::success(1), true)]
#[case(Outcome::failure(Fault::message("down")), false)]
fn predicates_track_the_variant(#[case] outcome: Outcome<i32>, #[case] success: bool) {
    assert_eq!(outcome.is_success(), success);
    assert_eq!(outcome.is_failure(), !success);
    assert_eq!(outcome.value().is_some(), success);
    assert_eq!(outcome.fault().is_some(), !success);
}

#[test]
fn results_convert_in_both_directions() {
    let ok: Outcome<i64> = parse_decimal("17").into();
    assert_eq!(ok, Outcome::success(17));

    let err: Outcome<i64> = parse_decimal("seventeen").into();
    let fault = err.into_result().expect_err("expected a failure");
    assert!(fault.is::<FormatFailure>());
}

#[test]
fn capture_outcome_passes_returned_outcomes_through() {
    let failing = Outcome::capture_outcome(|| Outcome::<i32>::failure(MissingKey::new("host")));
    assert_eq!(failing, Outcome::failure(MissingKey::new("host")));

    let panicking = Outcome::capture_outcome(|| -> Outcome<i32> { panic!("mid-flight") });
    assert!(panicking.is_failure());
}

#[rstest]
#[case(Outcome::success(5), Outcome::success(5), true)]
#[case(Outcome::success(5), Outcome::success(6), false)]
#[case(Outcome::success(5), Outcome::failure(MissingKey::new("k")), false)]
#[case(
    Outcome::failure(MissingKey::new("k")),
    Outcome::failure(MissingKey::new("k")),
    true
)]
#[case(
    Outcome::failure(MissingKey::new("k")),
    Outcome::failure(MissingKey::new("j")),
    false
)]
fn equality_is_structural_and_variant_sensitive(
    #[case] left: Outcome<i32>,
    #[case] right: Outcome<i32>,
    #[case] expected: bool,
) {
    assert_eq!(left == right, expected);
}

#[test]
fn hashing_discriminates_variants_and_payloads() {
    let mut set = HashSet::new();
    set.insert(Outcome::success(5));
    set.insert(Outcome::success(5));
    set.insert(Outcome::success(6));
    set.insert(Outcome::failure(MissingKey::new("k")));
    set.insert(Outcome::failure(MissingKey::new("k")));
    assert_eq!(set.len(), 3);
}

#[test]
fn faults_survive_the_from_conversion() {
    let fault = Fault::new(FormatFailure::new("truncated"));
    let outcome: Outcome<()> = Outcome::failure(fault.clone());
    assert_eq!(outcome.fault(), Some(&fault));
}
