//! Call recording and verification for test doubles.
//!
//! A [`recorder::Recorder`] logs every call made on a mock. A
//! [`verifier::Verifier`] later checks that log against a
//! [`expectation::CallExpectation`]: which method, which arguments (through
//! [`matchers::Arguments`]) and how often (a
//! [`verification::VerificationMode`] such as [`verification::Times`]).
//!
//! ```
//! use callcheck::expectation::CallExpectation;
//! use callcheck::matchers::Arguments;
//! use callcheck::mock::MockRef;
//! use callcheck::recorder::{Call, Recorder};
//! use callcheck::verification::Times;
//! use callcheck::verifier::Verifier;
//!
//! let mock = MockRef::new("mailer");
//! let mut recorder = Recorder::new();
//! recorder.record_call(Call::new(&mock, "send", vec!["hi".into()]));
//!
//! let expectation = CallExpectation::new(&mock, "send", Arguments::equal_to(["hi"]), Times::once());
//! let matched = Verifier::new(&recorder, &mock).verify_call(&expectation).unwrap();
//! assert_eq!(matched.len(), 1);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod expectation;
pub mod matchers;
pub mod mock;
pub mod recorder;
pub mod value;
pub mod verification;
pub mod verifier;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
