//! Command dispatch and handlers.

pub mod show;
pub mod verify;

use crate::cli::Command;
use crate::config::Config;

/// Dispatch a parsed command to its handler.
///
/// The call log comes from `--log`, or from `CALLCHECK_LOG` when the flag
/// is omitted.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    dispatch_with_config(command, &Config::from_env())
}

/// Dispatch a command with the given configuration.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_config(command: &Command, config: &Config) -> Result<(), String> {
    match command {
        Command::Show { log, mock } => {
            let path = config.resolve_log(log.as_deref())?;
            show::run(&path, mock.as_deref())
        }
        Command::Verify { log, mock, method, args, any_args, times } => {
            let path = config.resolve_log(log.as_deref())?;
            let request = verify::VerifyRequest {
                mock,
                method,
                args,
                any_args: *any_args,
                times: times.to_times()?,
            };
            verify::run(&path, &request)
        }
    }
}
