//! `callcheck show` command.

use std::path::Path;

use crate::recorder::log::CallLog;
use crate::recorder::Recorder;

/// Execute the `show` command.
///
/// Prints every call in the log with its position, optionally restricted
/// to mocks named `mock`.
///
/// # Errors
///
/// Returns an error string if the call log cannot be loaded.
pub fn run(path: &Path, mock: Option<&str>) -> Result<(), String> {
    let log = CallLog::load(path).map_err(|e| e.to_string())?;
    let (recorder, _) = log.into_recorder();

    let lines = format_calls(&recorder, mock);
    if lines.is_empty() {
        println!("No calls recorded.");
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn format_calls(recorder: &Recorder, mock: Option<&str>) -> Vec<String> {
    recorder
        .all_calls()
        .filter(|call| mock.map_or(true, |name| call.receiver().name() == name))
        .filter_map(|call| recorder.call_info(call))
        .map(|info| format!("#{}  {}", info.position(), info.call()))
        .collect()
}
