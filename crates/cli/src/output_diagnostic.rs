// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Diagnostics go to stderr so the report on stdout stays machine-readable.
//! ANSI colors are used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

use crate::testcase::CaseErrors;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print an informational note to stderr (dimmed on a terminal).
pub fn print_note(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_note(&mut io::stderr(), msg, is_tty);
}

fn write_note<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[2mNote: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Note: {}", msg);
    }
}

/// One-line description of a recorded case for verbose output.
pub fn describe_case(line: usize, errors: &CaseErrors) -> String {
    format!(
        "line {}: n={} mu err {:.3e}, sigma err {:.3e}, odds err {:.3e}",
        line,
        errors.cardinality,
        errors.location,
        errors.spread,
        errors.worst_odds()
    )
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
