//! Argument parsing and exit-status mapping for the binaries
//!
//! Every failure, from a usage error to a failed git step, leaves the
//! process with status 1.

use super::output::Output;
use crate::core::share::ShareError;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

/// Exit status for any failure
pub const FAILURE: u8 = 1;

/// Parse arguments, printing help, version or usage errors.
///
/// Returns the exit status to use when parsing did not yield arguments:
/// 0 after `--help`/`--version`, 1 for usage errors (clap alone would
/// use 2).
pub fn parse_args<T, I, S>(args: I, usage: &str) -> Result<T, u8>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            // Printing can only fail if the terminal went away.
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Err(0),
                _ => {
                    eprintln!("{}", usage);
                    Err(FAILURE)
                }
            }
        }
    }
}

/// Exit status for the outcome of a command.
pub fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => err
            .downcast_ref::<ShareError>()
            .map(ShareError::exit_code)
            .unwrap_or(FAILURE),
    }
}

/// Report the outcome of a command and convert it to a process exit code.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    if let Err(err) = &result {
        Output::error(&format!("{:#}", err));
    }
    ExitCode::from(exit_status(&result))
}
