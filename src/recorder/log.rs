//! YAML call logs: a recorder snapshot that can be written to disk and
//! loaded back for later inspection or verification.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Call, Recorder};
use crate::error::LogError;
use crate::mock::{MockId, MockRef};

/// One call as stored in a log file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedCall {
    /// Position the call had in the recorder.
    pub seq: u64,
    /// Name of the mock the call was made on.
    pub mock: String,
    /// Identity of the mock. When absent, calls are grouped by `mock` name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_id: Option<MockId>,
    /// Invoked method.
    pub method: String,
    /// Arguments, in call order.
    #[serde(default)]
    pub arguments: Vec<Value>,
}

/// A named, timestamped list of recorded calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallLog {
    /// Human-readable name for this log.
    pub name: String,
    /// When the snapshot was taken.
    pub recorded_at: DateTime<Utc>,
    /// Calls in recording order.
    pub calls: Vec<LoggedCall>,
}

#[derive(Hash, PartialEq, Eq)]
enum MockKey {
    Id(MockId),
    Name(String),
}

impl CallLog {
    /// Snapshots every call currently held by `recorder`.
    #[must_use]
    pub fn from_recorder(name: impl Into<String>, recorder: &Recorder) -> Self {
        let calls = recorder
            .entries
            .iter()
            .map(|entry| LoggedCall {
                seq: entry.position.value(),
                mock: entry.call.receiver().name().to_string(),
                mock_id: Some(entry.call.receiver().id()),
                method: entry.call.method().to_string(),
                arguments: entry.call.arguments().to_vec(),
            })
            .collect();
        Self { name: name.into(), recorded_at: Utc::now(), calls }
    }

    /// Rebuilds a recorder from the log.
    ///
    /// Calls are replayed in `seq` order. Returns the recorder together with
    /// the distinct mocks found, in order of first appearance.
    #[must_use]
    pub fn into_recorder(mut self) -> (Recorder, Vec<MockRef>) {
        self.calls.sort_by_key(|call| call.seq);

        let mut recorder = Recorder::new();
        let mut mocks: Vec<MockRef> = Vec::new();
        let mut by_key: HashMap<MockKey, usize> = HashMap::new();

        for logged in self.calls {
            let key = match logged.mock_id {
                Some(id) => MockKey::Id(id),
                None => MockKey::Name(logged.mock.clone()),
            };
            let index = *by_key.entry(key).or_insert_with(|| {
                let mock = match logged.mock_id {
                    Some(id) => MockRef::with_id(id, logged.mock.as_str()),
                    None => MockRef::new(logged.mock.as_str()),
                };
                mocks.push(mock);
                mocks.len() - 1
            });
            recorder.record_call(Call::new(&mocks[index], logged.method, logged.arguments));
        }

        (recorder, mocks)
    }

    /// Writes the log as YAML to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), LogError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|source| LogError::Serialize { name: self.name.clone(), source })?;
        std::fs::write(path, yaml)
            .map_err(|source| LogError::Write { path: path.to_path_buf(), source })
    }

    /// Reads a YAML log from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, LogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| LogError::Read { path: path.to_path_buf(), source })?;
        serde_yaml::from_str(&content)
            .map_err(|source| LogError::Parse { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_then_load_restores_calls_and_identity() {
        let dir = std::env::temp_dir().join("callcheck_log_save_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("calls.yaml");

        let a = MockRef::new("mock");
        let b = MockRef::new("mock");
        let mut recorder = Recorder::new();
        recorder.record_call(Call::new(&a, "foo", vec![json!("bar")]));
        recorder.record_call(Call::new(&b, "foo", vec![]));
        recorder.record_call(Call::new(&a, "baz", vec![json!(1), json!(null)]));

        CallLog::from_recorder("save-test", &recorder).save(&path).unwrap();
        let log = CallLog::load(&path).unwrap();
        assert_eq!(log.name, "save-test");
        assert_eq!(log.calls.len(), 3);

        let (restored, mocks) = log.into_recorder();
        assert_eq!(mocks, vec![a.clone(), b.clone()]);
        let lines: Vec<String> = restored.all_calls().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            ["mock->foo(<string:bar>)", "mock->foo()", "mock->baz(<integer:1>, <null>)"]
        );
        assert_eq!(restored.calls_for(&a).count(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn hand_written_log_groups_by_name_and_sorts_by_seq() {
        let yaml = r"
name: hand
recorded_at: 2025-03-15T14:30:00Z
calls:
  - seq: 2
    mock: other
    method: foo
  - seq: 0
    mock: mock
    method: foo
    arguments: [test]
  - seq: 1
    mock: mock
    method: bar
";
        let log: CallLog = serde_yaml::from_str(yaml).unwrap();
        let (recorder, mocks) = log.into_recorder();

        let names: Vec<&str> = mocks.iter().map(MockRef::name).collect();
        assert_eq!(names, ["mock", "other"]);
        let lines: Vec<String> = recorder.all_calls().map(ToString::to_string).collect();
        assert_eq!(lines, ["mock->foo(<string:test>)", "mock->bar()", "other->foo()"]);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let path = std::env::temp_dir().join("callcheck_definitely_missing.yaml");
        let err = CallLog::load(&path).unwrap_err();
        assert!(matches!(err, LogError::Read { .. }));
        assert!(err.to_string().contains("callcheck_definitely_missing.yaml"));
    }
}
