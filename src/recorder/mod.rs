//! Append-only log of calls made on test doubles.

pub mod call;
pub mod log;
pub mod position;

pub use call::Call;
pub use position::{CallInfo, Position};

use crate::mock::MockRef;

#[derive(Debug)]
struct Entry {
    call: Call,
    position: Position,
}

/// Records calls in order and assigns each one a `Position`.
///
/// A recorder belongs to a single test; it has no internal locking and
/// expects one writer at a time.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a call to the log and returns the position it was given.
    pub fn record_call(&mut self, call: Call) -> Position {
        let position = Position::new(self.next_seq);
        self.next_seq += 1;
        tracing::trace!(
            mock = call.receiver().name(),
            method = call.method(),
            position = position.value(),
            "recorded call"
        );
        self.entries.push(Entry { call, position });
        position
    }

    /// Every recorded call, in recording order, for any mock and method.
    pub fn all_calls(&self) -> impl ExactSizeIterator<Item = &Call> + '_ {
        self.entries.iter().map(|entry| &entry.call)
    }

    /// Calls recorded against one mock, in recording order.
    pub fn calls_for<'a>(&'a self, receiver: &'a MockRef) -> impl Iterator<Item = &'a Call> + 'a {
        self.all_calls().filter(move |call| call.receiver() == receiver)
    }

    /// Looks up the position of a call held by this recorder.
    ///
    /// The lookup is by reference: `call` must be borrowed from this
    /// recorder (e.g. via [`Recorder::all_calls`]). A structurally equal
    /// call that lives elsewhere yields `None`.
    #[must_use]
    pub fn call_info<'a>(&'a self, call: &Call) -> Option<CallInfo<'a>> {
        self.entries
            .iter()
            .find(|entry| std::ptr::eq(&entry.call, call))
            .map(|entry| CallInfo::new(&entry.call, entry.position))
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every recorded call. Positions keep counting from where they
    /// were, so calls recorded afterwards still sort after earlier ones.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.entries.len(), "cleared recorder");
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_in_order_with_increasing_positions() {
        let mock = MockRef::new("mock");
        let mut recorder = Recorder::new();
        let p0 = recorder.record_call(Call::new(&mock, "foo", vec![]));
        let p1 = recorder.record_call(Call::new(&mock, "bar", vec![]));
        let p2 = recorder.record_call(Call::new(&mock, "foo", vec![json!(1)]));

        assert!(p0.is_before(p1));
        assert!(p1.is_before(p2));

        let methods: Vec<&str> = recorder.all_calls().map(Call::method).collect();
        assert_eq!(methods, ["foo", "bar", "foo"]);
        assert_eq!(recorder.len(), 3);
    }

    #[test]
    fn identical_calls_resolve_to_their_own_positions() {
        let mock = MockRef::new("mock");
        let mut recorder = Recorder::new();
        let p0 = recorder.record_call(Call::new(&mock, "foo", vec![]));
        let p1 = recorder.record_call(Call::new(&mock, "foo", vec![]));

        let calls: Vec<&Call> = recorder.all_calls().collect();
        assert_eq!(calls[0], calls[1]);
        assert_eq!(recorder.call_info(calls[0]).unwrap().position(), p0);
        assert_eq!(recorder.call_info(calls[1]).unwrap().position(), p1);
    }

    #[test]
    fn call_info_for_foreign_call_is_none() {
        let mock = MockRef::new("mock");
        let mut recorder = Recorder::new();
        recorder.record_call(Call::new(&mock, "foo", vec![]));

        let outside = Call::new(&mock, "foo", vec![]);
        assert!(recorder.call_info(&outside).is_none());
    }

    #[test]
    fn calls_for_filters_by_receiver() {
        let a = MockRef::new("a");
        let b = MockRef::new("b");
        let mut recorder = Recorder::new();
        recorder.record_call(Call::new(&a, "foo", vec![]));
        recorder.record_call(Call::new(&b, "foo", vec![]));
        recorder.record_call(Call::new(&a, "bar", vec![]));

        let methods: Vec<&str> = recorder.calls_for(&a).map(Call::method).collect();
        assert_eq!(methods, ["foo", "bar"]);
    }

    #[test]
    fn clear_keeps_positions_monotonic() {
        let mock = MockRef::new("mock");
        let mut recorder = Recorder::new();
        let before = recorder.record_call(Call::new(&mock, "foo", vec![]));
        recorder.clear();
        assert!(recorder.is_empty());

        let after = recorder.record_call(Call::new(&mock, "foo", vec![]));
        assert!(before.is_before(after));
        assert_eq!(recorder.len(), 1);
    }
}
