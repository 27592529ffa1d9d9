//! Monadic composition laws for `and_then`, up to capture semantics.

use outcome::Outcome;
use rstest::rstest;
use test_helpers::{FormatFailure, MissingKey};

fn double_if_small(n: i32) -> Outcome<i32> {
    if n < 1000 {
        Outcome::success(n * 2)
    } else {
        Outcome::failure(FormatFailure::new("too large"))
    }
}

fn reject_negative(n: i32) -> Outcome<i32> {
    if n >= 0 {
        Outcome::success(n)
    } else {
        Outcome::failure(MissingKey::new("sign"))
    }
}

#[rstest]
#[case(5)]
#[case(-3)]
#[case(1200)]
fn left_identity(#[case] value: i32) {
    assert_eq!(
        Outcome::success(value).and_then(double_if_small),
        double_if_small(value)
    );
}

#[rstest]
#[case(Outcome::success(5))]
#[case(Outcome::failure(MissingKey::new("k")))]
fn right_identity(#[case] outcome: Outcome<i32>) {
    assert_eq!(outcome.clone().and_then(Outcome::success), outcome);
}

#[rstest]
#[case(Outcome::success(5))]
#[case(Outcome::success(-2))]
#[case(Outcome::success(600))]
#[case(Outcome::failure(MissingKey::new("k")))]
fn associativity(#[case] outcome: Outcome<i32>) {
    let nested = outcome.clone().and_then(double_if_small).and_then(reject_negative);
    let flat = outcome.and_then(|n| double_if_small(n).and_then(reject_negative));
    assert_eq!(nested, flat);
}

#[test]
fn bind_passes_a_positive_value_through() {
    let checked = Outcome::success(5).and_then(|x| {
        if x > 0 {
            Outcome::success(x)
        } else {
            Outcome::failure(MissingKey::new("sign"))
        }
    });
    assert_eq!(checked, Outcome::success(5));
}

#[test]
fn failures_short_circuit_the_whole_chain() {
    let failing: Outcome<i32> = Outcome::failure(FormatFailure::new("bad input"));
    let chained = failing
        .clone()
        .and_then(double_if_small)
        .map(|n| n + 1)
        .and_then(reject_negative);
    assert_eq!(chained, failing);
}
