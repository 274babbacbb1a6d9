//! Command-line interface for bracegap.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// File to rewrite in place
    pub input: PathBuf,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("bracegap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inserts a blank line after opening braces in a source file, in place")
        .override_usage("bracegap <file_path>")
        .arg(
            Arg::new("input")
                .help("File to rewrite")
                .value_name("file_path")
                .num_args(1)
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Parse CLI arguments from the process environment
///
/// Wrong argument counts are handled by clap: it prints a usage message and
/// exits with a non-zero status before any file is touched.
#[must_use]
pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    CliArgs {
        input: matches
            .get_one::<PathBuf>("input")
            .cloned()
            .unwrap_or_default(),
    }
}

/// Parse CLI arguments from an explicit iterator (for tests)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().get_matches_from(args);
    CliArgs {
        input: matches
            .get_one::<PathBuf>("input")
            .cloned()
            .unwrap_or_default(),
    }
}
