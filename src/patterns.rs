//! Regex pattern for brace-terminated lines
//!
//! The single pattern is compiled once at startup using `LazyLock`.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a line whose content ends with an opening brace immediately
/// followed by the line terminator. The pattern is applied to lines that
/// still carry their terminator, so a final line without a trailing
/// newline never matches (it has no successor anyway).
///
/// `\r?` tolerates CRLF-terminated input.
///
/// # Panics
///
/// Panics at first access if the pattern is invalid. This is acceptable
/// because the pattern is a compile-time constant verified by tests.
pub static BRACE_EOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\r?\n$").expect("Invalid brace-line pattern"));
