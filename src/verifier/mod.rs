//! Checks recorded calls against expectations.

mod diagnostic;

use crate::error::VerificationFailure;
use crate::expectation::CallExpectation;
use crate::mock::MockRef;
use crate::recorder::{Call, CallInfo, Recorder};

/// Audits the calls one mock received, as logged by a recorder.
///
/// Verification only reads the log; it can be repeated any number of times
/// with the same result while the log is unchanged.
#[derive(Debug)]
pub struct Verifier<'a> {
    recorder: &'a Recorder,
    receiver: MockRef,
}

impl<'a> Verifier<'a> {
    /// Binds a verifier to a recorder and the mock it audits.
    #[must_use]
    pub fn new(recorder: &'a Recorder, receiver: &MockRef) -> Self {
        Self { recorder, receiver: receiver.clone() }
    }

    /// The audited mock.
    #[must_use]
    pub fn receiver(&self) -> &MockRef {
        &self.receiver
    }

    /// Finds the calls matching `expectation` and applies its count policy.
    ///
    /// Returns the matched calls, in recording order, when the policy holds.
    ///
    /// # Errors
    ///
    /// Returns a [`VerificationFailure`] describing the expectation, the
    /// observed count and the mock's other calls to the same method when
    /// the policy does not hold.
    pub fn verify_call(
        &self,
        expectation: &CallExpectation,
    ) -> Result<Vec<CallInfo<'a>>, VerificationFailure> {
        let recorder = self.recorder;
        let matched: Vec<CallInfo<'a>> = recorder
            .all_calls()
            .filter(|call| self.is_match(call, expectation))
            .filter_map(|call| recorder.call_info(call))
            .collect();

        tracing::debug!(
            mock = self.receiver.name(),
            method = expectation.method(),
            matched = matched.len(),
            "verifying call"
        );

        match expectation.mode().verify(&matched) {
            Ok(()) => Ok(matched),
            Err(failure) => {
                let message = diagnostic::call_failure(recorder, expectation, failure.message());
                tracing::debug!(%message, "verification failed");
                Err(VerificationFailure::new(message))
            }
        }
    }

    /// Fails if the audited mock received any call at all.
    ///
    /// # Errors
    ///
    /// Returns a [`VerificationFailure`] listing every call the mock received.
    pub fn verify_no_interactions(&self) -> Result<(), VerificationFailure> {
        let calls: Vec<&Call> = self.recorder.calls_for(&self.receiver).collect();
        if calls.is_empty() {
            Ok(())
        } else {
            Err(VerificationFailure::new(diagnostic::unexpected_interactions(
                &self.receiver,
                &calls,
            )))
        }
    }

    fn is_match(&self, call: &Call, expectation: &CallExpectation) -> bool {
        *call.receiver() == self.receiver
            && call.method() == expectation.method()
            && expectation.arguments().matches(call.arguments())
    }
}
