//! `callcheck verify` command.

use std::path::Path;

use serde_json::Value;

use crate::expectation::CallExpectation;
use crate::matchers::Arguments;
use crate::mock::MockRef;
use crate::recorder::log::CallLog;
use crate::recorder::Recorder;
use crate::verification::Times;
use crate::verifier::Verifier;

/// A verification requested from the command line.
#[derive(Debug)]
pub struct VerifyRequest<'a> {
    /// Name of the audited mock.
    pub mock: &'a str,
    /// Expected method.
    pub method: &'a str,
    /// Expected arguments as given on the command line.
    pub args: &'a [String],
    /// Accept any arguments instead of `args`.
    pub any_args: bool,
    /// Expected call count.
    pub times: Times,
}

/// Execute the `verify` command.
///
/// # Errors
///
/// Returns the verification failure message, or an error string if the
/// call log cannot be loaded.
pub fn run(path: &Path, request: &VerifyRequest<'_>) -> Result<(), String> {
    let log = CallLog::load(path).map_err(|e| e.to_string())?;
    let (recorder, mocks) = log.into_recorder();
    let report = check(&recorder, &mocks, request)?;
    println!("{report}");
    Ok(())
}

/// Runs the verification and renders the success report.
fn check(
    recorder: &Recorder,
    mocks: &[MockRef],
    request: &VerifyRequest<'_>,
) -> Result<String, String> {
    let mut named = mocks.iter().filter(|m| m.name() == request.mock);
    let mock = named.next().cloned().unwrap_or_else(|| MockRef::new(request.mock));
    if named.next().is_some() {
        eprintln!(
            "Warning: several mocks are named {:?}; verifying the first one recorded",
            request.mock
        );
    }

    let arguments = if request.any_args {
        Arguments::Any
    } else {
        Arguments::equal_to(request.args.iter().map(|raw| parse_arg(raw)))
    };
    let expectation = CallExpectation::new(&mock, request.method, arguments, request.times);

    let matched =
        Verifier::new(recorder, &mock).verify_call(&expectation).map_err(|e| e.to_string())?;

    let mut lines = vec![format!(
        "Verified {}->{}: {} matching call(s)",
        mock.name(),
        request.method,
        matched.len()
    )];
    lines.extend(matched.iter().map(|info| format!("  #{}  {}", info.position(), info.call())));
    Ok(lines.join("\n"))
}

/// Parses a command-line argument as JSON, falling back to a plain string.
fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
