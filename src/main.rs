//! bracegap - blank-line inserter for brace-terminated lines

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::process::ExitCode;

use bracegap::{parse_args, rewrite_file};

fn main() -> ExitCode {
    let args = parse_args();

    if let Err(e) = rewrite_file(&args.input) {
        eprintln!("Error rewriting {}: {e}", args.input.display());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
