//! Brace-line rewrite pipeline
//!
//! Implements the single-pass rewrite:
//! - Stream the input line by line with a one-line lookahead
//! - Emit every line unchanged
//! - After a line ending in an opening brace, emit one extra blank line
//!   unless the next line is already blank (or there is no next line)
//!
//! The core entry point is [`insert_blank_lines`] which processes a buffered
//! reader and writes rewritten output to any `Write` implementation.
//! [`rewrite_file`] wraps it for in-place file rewriting.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, Read, Write};
use std::path::Path;

use crate::patterns::BRACE_EOL_RE;
use crate::Result;

/// Copy `input` to `output`, inserting a blank line after each line whose
/// content ends with an opening brace, unless the following line is already
/// blank. All original lines pass through byte-for-byte, terminators
/// included; only single `\n` lines are added.
///
/// Holds at most the current line and its successor in memory, so output
/// order and insertion decisions depend only on adjacent line pairs.
pub fn insert_blank_lines<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut current = String::new();
    if input.read_line(&mut current)? == 0 {
        // Empty input, nothing to emit
        return Ok(());
    }

    loop {
        let mut next = String::new();
        let at_eof = input.read_line(&mut next)? == 0;

        output.write_all(current.as_bytes())?;

        // Separate only when a non-blank successor exists. A brace line at
        // end of input gets no trailing blank.
        if !at_eof && BRACE_EOL_RE.is_match(&current) && !next.trim().is_empty() {
            output.write_all(b"\n")?;
        }

        if at_eof {
            return Ok(());
        }
        current = next;
    }
}

/// Rewrite `path` in place.
///
/// The file is fully buffered before any write begins, so a read failure
/// leaves it untouched. The write is a plain overwrite; a write failure may
/// leave the file partially written (no temp-file-and-rename is attempted).
pub fn rewrite_file(path: &Path) -> Result<()> {
    let mut contents = Vec::new();
    File::open(path)?.read_to_end(&mut contents)?;

    let reader = BufReader::new(Cursor::new(&contents));
    let mut output = Vec::with_capacity(contents.len());
    insert_blank_lines(reader, &mut output)?;

    fs::write(path, &output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the rewrite over an in-memory string
    fn rewrite(input: &str) -> String {
        let reader = BufReader::new(Cursor::new(input.as_bytes()));
        let mut output = Vec::new();
        insert_blank_lines(reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_inserts_blank_after_brace_line() {
        let input = "void f() {\nint x = 1;\n}\n";
        let expected = "void f() {\n\nint x = 1;\n}\n";
        assert_eq!(rewrite(input), expected);
    }

    #[test]
    fn test_existing_blank_is_not_doubled() {
        let input = "void f() {\n\nint x = 1;\n}\n";
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn test_idempotent() {
        let input = "struct a {\nint b;\n};\nvoid f() {\nreturn;\n}\n";
        let once = rewrite(input);
        let twice = rewrite(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_whitespace_only_successor_counts_as_blank() {
        // A successor of spaces/tabs is blank after trimming
        let input = "if (x) {\n   \t\ny = 1;\n}\n";
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn test_no_false_positive_on_inline_brace() {
        let input = "foo() { bar();\nbaz();\n";
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn test_brace_on_final_line_inserts_nothing() {
        let input = "int main() {\n";
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn test_final_line_without_newline_preserved() {
        let input = "void f() {\nreturn;\n}";
        let expected = "void f() {\n\nreturn;\n}";
        assert_eq!(rewrite(input), expected);
    }

    #[test]
    fn test_indented_brace_line() {
        let input = "outer() {\ninner {\nx = 1;\n}\n}\n";
        let expected = "outer() {\n\ninner {\n\nx = 1;\n}\n}\n";
        assert_eq!(rewrite(input), expected);
    }

    #[test]
    fn test_lone_brace_line() {
        let input = "{\nx();\n}\n";
        let expected = "{\n\nx();\n}\n";
        assert_eq!(rewrite(input), expected);
    }

    #[test]
    fn test_crlf_terminated_brace_line() {
        let input = "void f() {\r\nint x = 1;\r\n}\r\n";
        let expected = "void f() {\r\n\nint x = 1;\r\n}\r\n";
        assert_eq!(rewrite(input), expected);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(rewrite(""), "");
    }

    #[test]
    fn test_lines_preserved_in_order() {
        let input = "a {\nb\nc {\nd\ne\n";
        let output = rewrite(input);
        let originals: Vec<&str> = input.lines().collect();
        let kept: Vec<&str> = output.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(kept, originals);
    }

    #[test]
    fn test_consecutive_brace_lines() {
        // Each brace line sees a non-blank successor (the next brace line)
        let input = "a {\nb {\nc;\n";
        let expected = "a {\n\nb {\n\nc;\n";
        assert_eq!(rewrite(input), expected);
    }
}
