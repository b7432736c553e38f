//! Identity and naming of test doubles.
//!
//! A `MockRef` is the handle the recorder and verifier use to tell mocks
//! apart. Two handles are the same mock when their ids match; the name is
//! only used when rendering diagnostics.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a single test double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MockId(Uuid);

impl MockId {
    /// Generates a fresh, unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A cheap, clonable reference to a test double: its identity plus the
/// human-readable name shown in failure messages.
#[derive(Debug, Clone)]
pub struct MockRef {
    id: MockId,
    name: Arc<str>,
}

impl MockRef {
    /// Creates a handle for a new mock with a freshly generated id.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_id(MockId::generate(), name)
    }

    /// Creates a handle for an existing identity.
    pub fn with_id(id: MockId, name: impl Into<Arc<str>>) -> Self {
        Self { id, name: name.into() }
    }

    /// The mock's identity.
    #[must_use]
    pub fn id(&self) -> MockId {
        self.id
    }

    /// The mock's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for MockRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MockRef {}

impl Hash for MockRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
