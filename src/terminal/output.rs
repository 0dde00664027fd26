//! Terminal output utilities.
//!
//! Every line ends in `\r\n` so the same helpers work in raw mode.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const BLUE: &str = "\x1b[38;5;27m";
pub const GREY: &str = "\x1b[38;5;245m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Print one line, raw-mode safe.
pub fn line(content: &str) {
    print!("{content}\r\n");
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        line(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        line(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let display_len = console_width(content);
    let padding = INNER_WIDTH.saturating_sub(display_len);
    line(&format!("│ {}{} │", content, " ".repeat(padding)));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    line(&format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    ));
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    line(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    line(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 27;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);
    let lines = wrap_words(desc, desc_col);

    let first = lines.first().map(String::as_str).unwrap_or("");
    box_line(&format!("{flag_padded}{first}"));

    let indent = " ".repeat(flag_col);
    for rest in lines.iter().skip(1) {
        box_line(&format!("{indent}{rest}"));
    }
}

/// Split into lines of at most `width` characters, breaking between words.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split into fixed-width chunks. Passwords have no spaces to break on.
pub fn chunks(text: &str, width: usize) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        out.push(head);
        rest = tail;
    }
    out
}

/// Left-align `s` in `width` visible columns. Escape codes take no room.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(console_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
