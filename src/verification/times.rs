//! The built-in count policies.

use std::fmt;

use super::VerificationMode;
use crate::error::VerificationFailure;
use crate::recorder::CallInfo;

/// How many times a call is expected to have happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    /// Exactly `n` matching calls.
    Exactly(usize),
    /// `n` or more matching calls.
    AtLeast(usize),
    /// `n` or fewer matching calls.
    AtMost(usize),
    /// Between `min` and `max` matching calls, inclusive.
    Between {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },
}

impl Times {
    /// Shorthand for `Exactly(0)`.
    #[must_use]
    pub fn never() -> Self {
        Self::Exactly(0)
    }

    /// Shorthand for `Exactly(1)`.
    #[must_use]
    pub fn once() -> Self {
        Self::Exactly(1)
    }

    /// Returns `true` if `count` satisfies the policy.
    #[must_use]
    pub fn allows(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
            Self::AtMost(n) => count <= n,
            Self::Between { min, max } => (min..=max).contains(&count),
        }
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n} times"),
            Self::AtLeast(n) => write!(f, "at least {n} times"),
            Self::AtMost(n) => write!(f, "at most {n} times"),
            Self::Between { min, max } => write!(f, "between {min} and {max} times"),
        }
    }
}

impl VerificationMode for Times {
    fn verify(&self, matched: &[CallInfo<'_>]) -> Result<(), VerificationFailure> {
        let count = matched.len();
        if self.allows(count) {
            Ok(())
        } else {
            Err(VerificationFailure::new(format!("actually called {count} times")))
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
