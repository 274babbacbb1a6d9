//! bracegap - blank-line inserter for brace-terminated lines
//!
//! Rewrites a single file in place, adding a blank line after every line
//! that ends with an opening brace unless the next line is already blank.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod error;
pub mod patterns;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use error::Result;
pub use process::{insert_blank_lines, rewrite_file};
