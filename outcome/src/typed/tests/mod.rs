//! Unit tests for the value-carrying outcome, split by concern.

use super::OutcomeOf;
use crate::Error;

pub(super) mod construction_tests;

pub(super) fn failed_with(messages: &[&str]) -> OutcomeOf<i32> {
    OutcomeOf::errors(messages.iter().copied().map(Error::new))
}
