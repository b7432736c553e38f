//! Ordering of calls within a recorder.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::call::Call;

/// Ordinal of a call within the recorder that logged it.
///
/// Assigned when the call is recorded and strictly increasing in recording
/// order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Position(u64);

impl Position {
    pub(crate) fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// Raw ordinal value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` if this position was assigned before `other`.
    #[must_use]
    pub fn is_before(self, other: Position) -> bool {
        self < other
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A recorded call together with its position in the log.
///
/// Borrowed from the recorder; only ever built for calls that are in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallInfo<'a> {
    call: &'a Call,
    position: Position,
}

impl<'a> CallInfo<'a> {
    pub(crate) fn new(call: &'a Call, position: Position) -> Self {
        Self { call, position }
    }

    /// The recorded call.
    #[must_use]
    pub fn call(&self) -> &'a Call {
        self.call
    }

    /// Where the call sits in the log.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}
