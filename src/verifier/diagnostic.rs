//! Failure messages for unmet expectations.

use crate::expectation::CallExpectation;
use crate::mock::MockRef;
use crate::recorder::{Call, Recorder};

const NO_INTERACTIONS: &str = ". In fact, there are no interactions with this mock.";
const OTHER_INVOCATIONS: &str = ".\nOther Invocations:\n";

/// Expands a mode's raw failure (`actually called N times`) into the full
/// message shown to the user.
///
/// The message names the expected call and policy, then either notes that
/// the mock was never touched or lists the mock's calls to the same method
/// whose arguments did not match.
pub(super) fn call_failure(
    recorder: &Recorder,
    expectation: &CallExpectation,
    raw: &str,
) -> String {
    let receiver = expectation.receiver();
    let method = expectation.method();

    let mut message = format!(
        "Expected {}->{}({}) to be called {}, {raw}",
        receiver.name(),
        method,
        expectation.arguments().describe(),
        expectation.mode().describe(),
    );

    let mut interactions = recorder.calls_for(receiver).peekable();
    if interactions.peek().is_none() {
        message.push_str(NO_INTERACTIONS);
        return message;
    }

    let others: Vec<String> = interactions
        .filter(|call| {
            call.method() == method && !expectation.arguments().matches(call.arguments())
        })
        .map(|call| format!("  {call}"))
        .collect();
    if !others.is_empty() {
        message.push_str(OTHER_INVOCATIONS);
        message.push_str(&others.join("\n"));
    }

    message
}

/// Message for a mock that was expected to be left alone.
pub(super) fn unexpected_interactions(receiver: &MockRef, calls: &[&Call]) -> String {
    let lines: Vec<String> = calls.iter().map(|call| format!("  {call}")).collect();
    format!("Expected no interactions with {}, but found:\n{}", receiver.name(), lines.join("\n"))
}
