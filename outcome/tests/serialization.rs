//! Round-trip and wire-shape tests for serialised outcomes.

use anyhow::{Result, ensure};
use outcome::{Error, Outcome, OutcomeOf, Status};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;
use test_helpers::json::{round_trip, to_value};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Account {
    id: u64,
    owner: String,
}

fn account() -> Account {
    Account {
        id: 7,
        owner: "ada".to_owned(),
    }
}

#[rstest]
#[case::success(OutcomeOf::success(account()))]
#[case::partial(OutcomeOf::partial(account(), ["stale cache"]))]
#[case::failure(OutcomeOf::errors(["bad input", "missing field"]))]
#[case::silent_failure(OutcomeOf::fail())]
#[case::payload_failure(OutcomeOf::from(Error::from_payload(json!({"retry_after": 30}))))]
fn typed_outcomes_round_trip(#[case] original: OutcomeOf<Account>) -> Result<()> {
    let decoded = round_trip(&original)?;
    ensure!(decoded.succeeded() == original.succeeded(), "flag changed");
    ensure!(decoded.errors() == original.errors(), "errors changed");
    ensure!(decoded.value() == original.value(), "value changed");
    Ok(())
}

#[rstest]
#[case::pass(Outcome::pass())]
#[case::fail(Outcome::fail())]
#[case::errors(Outcome::errors(["one", "two"]))]
#[case::partial(Outcome::partial(["advisory"]))]
fn untyped_outcomes_round_trip(#[case] original: Outcome) -> Result<()> {
    let decoded = round_trip(&original)?;
    ensure!(decoded == original, "decoded {decoded:?} != {original:?}");
    Ok(())
}

#[test]
fn derived_accessors_are_not_serialised() -> Result<()> {
    let value = to_value(&Outcome::errors(["bad input", "missing field"]))?;
    ensure!(
        value
            == json!({
                "succeeded": false,
                "errors": [{"message": "bad input"}, {"message": "missing field"}],
            }),
        "unexpected shape {value}"
    );
    Ok(())
}

#[test]
fn untyped_empty_object_defaults_every_field() -> Result<()> {
    let decoded: Outcome = serde_json::from_value(json!({}))?;
    ensure!(decoded == Outcome::fail(), "expected default failure, got {decoded:?}");
    Ok(())
}

#[test]
fn typed_value_is_written_on_success() -> Result<()> {
    let value = to_value(&OutcomeOf::success(account()))?;
    ensure!(
        value == json!({"succeeded": true, "errors": [], "value": {"id": 7, "owner": "ada"}}),
        "unexpected shape {value}"
    );
    Ok(())
}

#[test]
fn success_of_absent_value_round_trips() -> Result<()> {
    let original: OutcomeOf<Option<Account>> = OutcomeOf::success(None);
    let decoded = round_trip(&original)?;
    ensure!(decoded.succeeded(), "absent value must stay a success");
    ensure!(decoded.value() == Some(&None), "value changed");
    Ok(())
}

#[test]
fn typed_outcome_decodes_as_untyped() -> Result<()> {
    let encoded = to_value(&OutcomeOf::partial(account(), ["note"]))?;
    let decoded: Outcome = serde_json::from_value(encoded)?;
    ensure!(decoded.succeeded(), "flag lost");
    ensure!(decoded.errors() == ["note"], "errors lost");
    Ok(())
}

#[test]
fn payload_survives_round_trip() -> Result<()> {
    let original: Outcome = Error::from_payload(json!({"field": "email"})).into();
    let decoded = round_trip(&original)?;
    let payload = decoded.first_error().payload().cloned();
    ensure!(payload == Some(json!({"field": "email"})), "payload changed");
    ensure!(decoded.first_error_message().is_empty(), "payload error gained a message");
    Ok(())
}
