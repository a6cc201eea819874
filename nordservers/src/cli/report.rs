//! Error reporting and exit statuses

use std::io;

use clap::error::ErrorKind;
use colored::*;
use nordservers_core::NordError;

use super::commands::discovery_hint;

/// Exit status for an argument parsing failure.
///
/// `--help` and `--version` succeed; every rejected argument is a user input
/// error and exits 1, like an unknown country or server.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Print an error and return the exit status for it.
///
/// A closed output pipe (`nordservers | head`) is not an error: exit quietly.
pub fn report(err: &anyhow::Error, verbose: bool) -> i32 {
    if is_broken_pipe(err) {
        return 0;
    }

    let marker = "[!]".red().bold();
    match err.downcast_ref::<NordError>() {
        Some(nord_err) => {
            match discovery_hint(nord_err) {
                Some(hint) => eprintln!("{} {} {}", marker, nord_err, hint),
                None => eprintln!("{} {}", marker, nord_err),
            }
            if verbose && !nord_err.is_user_error() {
                eprintln!("Error details: {:?}", nord_err);
            }
            nord_err.exit_code()
        }
        None => {
            eprintln!("{} {:#}", marker, err);
            if verbose {
                eprintln!("Error details: {:?}", err);
            }
            1
        }
    }
}

/// Whether any cause in the chain is a broken pipe.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}
