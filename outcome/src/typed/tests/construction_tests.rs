//! Tests covering constructors, conversions and explicit extraction.

use rstest::rstest;

use super::failed_with;
use crate::{Error, IntoOutcome, Outcome, OutcomeOf, Status};

#[rstest]
#[case::zero(0)]
#[case::positive(42)]
#[case::negative(-7)]
fn create_wraps_present_values(#[case] value: i32) {
    let outcome = OutcomeOf::create(Some(value));
    assert!(outcome.succeeded());
    assert!(outcome.errors().is_empty());
    assert_eq!(outcome.into_value(), Some(value));
}

#[test]
fn create_treats_absence_as_failure() {
    let outcome: OutcomeOf<String> = OutcomeOf::create(None);
    assert!(outcome.failed());
    assert!(outcome.errors().is_empty());
    assert!(outcome.into_value().is_none());
}

#[test]
fn success_never_inspects_its_value() {
    let outcome: OutcomeOf<Option<u8>> = OutcomeOf::success(None);
    assert!(outcome.succeeded());
    assert_eq!(outcome.into_value(), Some(None));
}

#[test]
fn factories_disagree_on_the_absent_value() {
    let created: OutcomeOf<Option<u8>> = OutcomeOf::create(None);
    let wrapped: OutcomeOf<Option<u8>> = None.into_outcome();
    assert!(created.failed());
    assert!(wrapped.succeeded());
    assert_eq!(wrapped.value(), Some(&None));
}

#[test]
fn untyped_factories_delegate() {
    let created = Outcome::create(Some("x"));
    let succeeded = Outcome::success(0_u64);
    assert_eq!(created.value(), Some(&"x"));
    assert_eq!(succeeded.value(), Some(&0));
    assert!(Outcome::create::<u8>(None).failed());
}

#[test]
fn zero_success_is_only_distinguishable_by_flag() {
    let zero = OutcomeOf::success(0);
    let failed = OutcomeOf::<i32>::fail();
    assert!(zero.succeeded());
    assert!(failed.failed());
    assert_eq!(zero.unwrap_or_default(), failed.unwrap_or_default());
}

#[rstest]
#[case::error(OutcomeOf::error("bad input"))]
#[case::errors_from(OutcomeOf::errors_from("bad input"))]
#[case::from_error(OutcomeOf::from(Error::new("bad input")))]
#[case::from_list(OutcomeOf::from(vec![Error::new("bad input")]))]
fn single_error_forms_agree(#[case] outcome: OutcomeOf<u8>) {
    assert!(outcome.failed());
    assert_eq!(outcome.errors(), ["bad input"]);
    assert!(outcome.value().is_none());
}

#[test]
fn errors_preserve_order_and_first_error() {
    let outcome = failed_with(&["bad input", "missing field"]);
    assert_eq!(outcome.errors(), ["bad input", "missing field"]);
    assert_eq!(outcome.first_error_message(), "bad input");
}

#[test]
fn empty_failure_reports_blank_first_error() {
    let outcome = failed_with(&[]);
    assert!(outcome.failed());
    assert_eq!(outcome.first_error_message(), "");
    assert_eq!(outcome.first_error().into_owned(), Error::new(""));
}

#[rstest]
#[case::truthy(true, Some(0))]
#[case::falsy(false, None)]
fn boolean_conversion_uses_default_value(#[case] flag: bool, #[case] expected: Option<u32>) {
    let outcome = OutcomeOf::<u32>::from(flag);
    assert_eq!(outcome.succeeded(), flag);
    assert_eq!(outcome.into_value(), expected);
}

#[test]
fn pass_wraps_default() {
    let outcome = OutcomeOf::<String>::pass();
    assert_eq!(outcome.value().map(String::as_str), Some(""));
}

#[test]
fn partial_success_is_still_success() {
    let outcome = OutcomeOf::partial(5, ["cache miss"]);
    assert!(outcome.succeeded());
    assert_eq!(outcome.errors(), ["cache miss"]);
    assert_eq!(outcome.if_not_success(), None);
    assert_eq!(outcome.into_result().ok(), Some(5));
}

#[test]
fn extraction_requires_a_fallback() {
    assert_eq!(OutcomeOf::success(3).unwrap_or(9), 3);
    assert_eq!(OutcomeOf::<i32>::fail().unwrap_or(9), 9);
    let counted = failed_with(&["a", "b"]).unwrap_or_else(|errors| {
        i32::try_from(errors.len()).unwrap_or(i32::MAX)
    });
    assert_eq!(counted, 2);
}

#[test]
fn into_result_carries_every_error() {
    let failure = failed_with(&["a", "b"])
        .into_result()
        .expect_err("failure converts to Err");
    assert_eq!(failure.into_errors(), ["a", "b"]);
}

#[rstest]
#[case::ok(Ok(4), Some(4))]
#[case::err(Err("parse failure"), None)]
fn std_results_convert(#[case] result: Result<i32, &str>, #[case] expected: Option<i32>) {
    let outcome: OutcomeOf<i32> = OutcomeOf::from(result);
    assert_eq!(outcome.into_value(), expected);
}

#[test]
fn map_keeps_advisory_errors() {
    let mapped = OutcomeOf::partial(2, ["slow"]).map(|value| value * 10);
    assert_eq!(mapped.value(), Some(&20));
    assert_eq!(mapped.errors(), ["slow"]);
}

#[test]
fn and_then_accumulates_errors_across_steps() {
    let chained = OutcomeOf::partial(2, ["first"])
        .and_then(|value| OutcomeOf::<i32>::errors([format!("rejected {value}")]));
    assert!(chained.failed());
    assert_eq!(chained.errors(), ["first", "rejected 2"]);
}

#[test]
fn and_then_skips_failed_outcomes() {
    let mut ran = false;
    let chained = failed_with(&["stop"]).and_then(|value| {
        ran = true;
        OutcomeOf::success(value)
    });
    assert!(!ran);
    assert_eq!(chained.errors(), ["stop"]);
}

#[rstest]
#[case::success(OutcomeOf::partial(1, ["note"]), true)]
#[case::failure(failed_with(&["bad"]), false)]
fn decays_to_untyped_outcome(#[case] typed: OutcomeOf<i32>, #[case] succeeded: bool) {
    let errors = typed.errors().to_vec();
    let untyped = Outcome::from(typed);
    assert_eq!(untyped.succeeded(), succeeded);
    assert_eq!(untyped.errors(), errors.as_slice());
}

#[test]
fn into_parts_splits_value_and_errors() {
    let (value, errors) = OutcomeOf::partial('x', ["y"]).into_parts();
    assert_eq!(value, Some('x'));
    assert_eq!(errors, ["y"]);
}

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn outcomes_are_thread_safe_when_their_value_is() {
    assert_send_sync::<Outcome>();
    assert_send_sync::<OutcomeOf<String>>();
    assert_send_sync::<OutcomeOf<Vec<Error>>>();
}
