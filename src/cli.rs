//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::verification::Times;

/// Top-level CLI parser for `callcheck`.
#[derive(Debug, Parser)]
#[command(name = "callcheck", version, about = "Inspect and verify recorded mock calls")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the calls in a call log.
    Show {
        /// Call log file (defaults to `$CALLCHECK_LOG`).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Only show calls made on this mock.
        #[arg(long)]
        mock: Option<String>,
    },
    /// Verify that a call was made the expected number of times.
    Verify {
        /// Call log file (defaults to `$CALLCHECK_LOG`).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Name of the mock to audit.
        #[arg(long)]
        mock: String,
        /// Expected method name.
        #[arg(long)]
        method: String,
        /// Expected argument, as JSON (plain text is taken as a string).
        #[arg(long = "arg", value_name = "VALUE", conflicts_with = "any_args")]
        args: Vec<String>,
        /// Accept any arguments.
        #[arg(long)]
        any_args: bool,
        /// Expected call count.
        #[command(flatten)]
        times: TimesArgs,
    },
}

/// Mutually exclusive call-count flags. Without any, exactly once.
#[derive(Debug, Default, Args)]
#[group(multiple = false)]
pub struct TimesArgs {
    /// Exactly N calls.
    #[arg(long, value_name = "N")]
    pub times: Option<usize>,
    /// At least N calls.
    #[arg(long, value_name = "N")]
    pub at_least: Option<usize>,
    /// At most N calls.
    #[arg(long, value_name = "N")]
    pub at_most: Option<usize>,
    /// Between MIN and MAX calls, inclusive.
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    pub between: Option<Vec<usize>>,
    /// No calls at all.
    #[arg(long)]
    pub never: bool,
}

impl TimesArgs {
    /// Converts the flags into a count policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `--between` bounds are reversed.
    pub fn to_times(&self) -> Result<Times, String> {
        if let Some(n) = self.times {
            return Ok(Times::Exactly(n));
        }
        if let Some(n) = self.at_least {
            return Ok(Times::AtLeast(n));
        }
        if let Some(n) = self.at_most {
            return Ok(Times::AtMost(n));
        }
        if let Some(bounds) = &self.between {
            return match bounds.as_slice() {
                [min, max] if min <= max => Ok(Times::Between { min: *min, max: *max }),
                [min, max] => Err(format!("--between: MIN ({min}) is greater than MAX ({max})")),
                _ => Err("--between takes exactly two values".to_string()),
            };
        }
        if self.never {
            return Ok(Times::never());
        }
        Ok(Times::once())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, TimesArgs};
    use crate::verification::Times;
    use clap::Parser;

    fn parse_times(args: &[&str]) -> Times {
        let mut argv = vec!["callcheck", "verify", "--mock", "m", "--method", "foo"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Command::Verify { times, .. } => times.to_times().unwrap(),
            Command::Show { .. } => panic!("expected verify"),
        }
    }

    #[test]
    fn parses_show_subcommand() {
        let cli = Cli::parse_from(["callcheck", "show", "--mock", "mock"]);
        assert!(matches!(cli.command, Command::Show { mock: Some(ref m), log: None } if m == "mock"));
    }

    #[test]
    fn parses_verify_arguments() {
        let cli = Cli::parse_from([
            "callcheck", "verify", "--mock", "mock", "--method", "foo", "--arg", "test", "--arg",
            "3",
        ]);
        match cli.command {
            Command::Verify { mock, method, args, any_args, .. } => {
                assert_eq!(mock, "mock");
                assert_eq!(method, "foo");
                assert_eq!(args, ["test", "3"]);
                assert!(!any_args);
            }
            Command::Show { .. } => panic!("expected verify"),
        }
    }

    #[test]
    fn count_flags_map_to_times() {
        assert_eq!(parse_times(&[]), Times::once());
        assert_eq!(parse_times(&["--times", "3"]), Times::Exactly(3));
        assert_eq!(parse_times(&["--at-least", "2"]), Times::AtLeast(2));
        assert_eq!(parse_times(&["--at-most", "0"]), Times::AtMost(0));
        assert_eq!(parse_times(&["--between", "1", "4"]), Times::Between { min: 1, max: 4 });
        assert_eq!(parse_times(&["--never"]), Times::never());
    }

    #[test]
    fn count_flags_are_exclusive() {
        let result = Cli::try_parse_from([
            "callcheck", "verify", "--mock", "m", "--method", "foo", "--times", "1", "--never",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn any_args_conflicts_with_arg() {
        let result = Cli::try_parse_from([
            "callcheck", "verify", "--mock", "m", "--method", "foo", "--arg", "1", "--any-args",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn reversed_between_is_rejected() {
        let times = TimesArgs { between: Some(vec![4, 1]), ..TimesArgs::default() };
        assert!(times.to_times().is_err());
    }
}
