//! A single recorded invocation.

use std::fmt;

use serde_json::Value;

use crate::mock::MockRef;
use crate::value;

/// One invocation of a method on a test double.
///
/// Calls are immutable once built. Two calls with the same mock, method and
/// arguments are still distinct log entries; the recorder tells them apart
/// by where they live, not by their contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    receiver: MockRef,
    method: String,
    arguments: Vec<Value>,
}

impl Call {
    /// Builds a call record.
    pub fn new(receiver: &MockRef, method: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self { receiver: receiver.clone(), method: method.into(), arguments }
    }

    /// The mock the call was made on.
    #[must_use]
    pub fn receiver(&self) -> &MockRef {
        &self.receiver
    }

    /// The invoked method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The arguments, in call order.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}({})",
            self.receiver.name(),
            self.method,
            value::render_list(&self.arguments)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn displays_without_arguments() {
        let mock = MockRef::new("mock");
        assert_eq!(Call::new(&mock, "foo", vec![]).to_string(), "mock->foo()");
    }

    #[test]
    fn displays_rendered_arguments() {
        let mock = MockRef::new("mock");
        let call = Call::new(&mock, "foo", vec![json!("bar"), json!(3)]);
        assert_eq!(call.to_string(), "mock->foo(<string:bar>, <integer:3>)");
    }
}
