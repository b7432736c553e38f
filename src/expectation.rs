//! What a verification looks for.

use crate::matchers::Arguments;
use crate::mock::MockRef;
use crate::verification::VerificationMode;

/// A method call pattern on a mock, plus how often it should have happened.
#[derive(Debug)]
pub struct CallExpectation {
    receiver: MockRef,
    method: String,
    arguments: Arguments,
    mode: Box<dyn VerificationMode>,
}

impl CallExpectation {
    /// Builds an expectation.
    pub fn new(
        receiver: &MockRef,
        method: impl Into<String>,
        arguments: Arguments,
        mode: impl VerificationMode + 'static,
    ) -> Self {
        Self { receiver: receiver.clone(), method: method.into(), arguments, mode: Box::new(mode) }
    }

    /// The mock the expectation is about.
    #[must_use]
    pub fn receiver(&self) -> &MockRef {
        &self.receiver
    }

    /// The expected method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The expected argument pattern.
    #[must_use]
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The count policy.
    #[must_use]
    pub fn mode(&self) -> &dyn VerificationMode {
        self.mode.as_ref()
    }
}
