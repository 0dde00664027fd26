//! Centralized warning and status messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Suppresses warnings and status lines. Passwords are still printed.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_classes() {
    warn("Warning: no character classes enabled, nothing generated.");
}

pub fn single_copy(count: usize) {
    warn(&format!(
        "Warning: only one password is copied to the clipboard ({count} requested)."
    ));
}

/// Clipboard write failed in one-shot mode, the password goes to the terminal.
pub fn clipboard_fallback(err: &str) {
    warn(&format!("Clipboard error: {err}. Printing to terminal instead."));
}

/// Copy status ("Copied!") - suppressed in quiet mode
pub fn copy_status<W: Write>(out: &mut W, msg: &str) {
    if !quiet() {
        let _ = writeln!(out, "*** {msg} ***");
    }
}
