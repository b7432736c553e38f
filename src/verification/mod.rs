//! Call-count policies applied to the set of matched calls.

pub mod times;

pub use times::Times;

use std::fmt;

use crate::error::VerificationFailure;
use crate::recorder::CallInfo;

/// A policy over how many calls matched an expectation.
///
/// Modes keep no state between verifications; each `verify` sees the
/// matched set fresh.
pub trait VerificationMode: fmt::Debug {
    /// Checks the matched calls against the policy.
    ///
    /// # Errors
    ///
    /// Returns a failure reading `actually called {n} times` when the
    /// policy is not met.
    fn verify(&self, matched: &[CallInfo<'_>]) -> Result<(), VerificationFailure>;

    /// Describes the policy, e.g. `exactly 1 times`.
    fn describe(&self) -> String;
}
