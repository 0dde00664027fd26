//! Command-line flags and one-shot generation.

mod flags;
mod parse;
pub mod prompts;

use std::io::Write;

pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::clipboard::{Clipboard, CopyOutcome, SystemClipboard};
use crate::pass;
use crate::rand::{Rand, RandomSource};
use crate::settings::Settings;

/// Initial settings: defaults, then `--length`, then class flags in order.
pub fn settings_from(flags: &CliFlags) -> Settings {
    let mut settings = Settings::default();
    if let Some(length) = flags.length {
        settings.set_length(length);
    }
    for &(class, enabled) in &flags.classes {
        settings.options.set(class, enabled);
    }
    settings
}

/// Generate without opening the view: print, copy, or both.
pub fn run(flags: &CliFlags, settings: Settings) {
    prompts::set_quiet(flags.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if flags.clipboard {
        let mut clipboard = SystemClipboard::new();
        output(flags, &settings, &mut Rand::new(), Some(&mut clipboard), &mut out);
    } else {
        output::<_, SystemClipboard, _>(flags, &settings, &mut Rand::new(), None, &mut out);
    }
}

/// Print passwords to `out`, or copy one to `clipboard` when given.
///
/// A failed clipboard write prints the password instead so it is never lost.
fn output<R, C, W>(
    flags: &CliFlags,
    settings: &Settings,
    rng: &mut R,
    clipboard: Option<&mut C>,
    out: &mut W,
) where
    R: RandomSource,
    C: Clipboard,
    W: Write,
{
    if !settings.options.any() {
        prompts::no_classes();
        return;
    }

    let count = flags.number.unwrap_or(1);

    let Some(clipboard) = clipboard else {
        for _ in 0..count {
            if let Some(password) = pass::generate(&settings.options, settings.pass_length, rng) {
                print_line(out, password.as_str());
            }
        }
        return;
    };

    if count > 1 {
        prompts::single_copy(count);
    }
    let Some(password) = pass::generate(&settings.options, settings.pass_length, rng) else {
        return;
    };

    if flags.print {
        print_line(out, password.as_str());
    }
    match clipboard.write_text(password.as_str()) {
        Ok(()) => {
            tracing::info!("password copied to clipboard");
            if let Some(msg) = CopyOutcome::Copied.message() {
                prompts::copy_status(out, msg);
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "clipboard write failed in one-shot mode");
            prompts::clipboard_fallback(&e.to_string());
            if !flags.print {
                print_line(out, password.as_str());
            }
        }
    }
}

fn print_line<W: Write>(out: &mut W, line: &str) {
    let _ = out.write_all(line.as_bytes());
    let _ = out.write_all(b"\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::pass::CharacterClass;

    fn flags(list: &[&str]) -> CliFlags {
        let args: Vec<String> = std::iter::once("genpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        parse(&args).unwrap()
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn copy(list: &[&str], board: &mut MemoryClipboard) -> Vec<String> {
        let flags = flags(list);
        let settings = settings_from(&flags);
        let mut out = Vec::new();
        output(&flags, &settings, &mut Rand::new(), Some(board), &mut out);
        lines(&out)
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(settings_from(&flags(&[])), Settings::default());
    }

    #[test]
    fn length_flag_is_clamped() {
        assert_eq!(settings_from(&flags(&["-l", "0"])).pass_length, 1);
        assert_eq!(settings_from(&flags(&["-l", "-3"])).pass_length, 1);
        assert_eq!(settings_from(&flags(&["-l", "1000"])).pass_length, 256);
        assert_eq!(settings_from(&flags(&["-l", "20"])).pass_length, 20);
    }

    #[test]
    fn later_class_flag_wins() {
        let settings = settings_from(&flags(&["--symbols", "--no-lowercase", "--no-symbols"]));
        assert!(!settings.options.is_enabled(CharacterClass::Lowercase));
        assert!(!settings.options.is_enabled(CharacterClass::Symbols));
        assert!(settings.options.is_enabled(CharacterClass::Uppercase));
        assert!(settings.options.is_enabled(CharacterClass::Numbers));
    }

    #[test]
    fn prints_requested_count() {
        let flags = flags(&["-n", "3", "-l", "9"]);
        let settings = settings_from(&flags);
        let mut out = Vec::new();
        output::<_, MemoryClipboard, _>(&flags, &settings, &mut Rand::new(), None, &mut out);

        let printed = lines(&out);
        assert_eq!(printed.len(), 3);
        assert!(printed.iter().all(|p| p.len() == 9));
    }

    #[test]
    fn copy_writes_clipboard_without_printing_password() {
        let mut board = MemoryClipboard::default();
        let printed = copy(&["-b", "-l", "16"], &mut board);

        assert_eq!(board.contents.len(), 16);
        assert_eq!(printed, vec!["*** Copied! ***".to_string()]);
    }

    #[test]
    fn unavailable_clipboard_prints_password_instead() {
        let mut board = MemoryClipboard {
            fail_write: true,
            ..Default::default()
        };
        let printed = copy(&["-b", "--no-lowercase", "-l", "20"], &mut board);

        assert_eq!(board.writes, 1);
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].len(), 20);
        assert!(
            printed[0]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
        assert!(!printed.iter().any(|l| l.contains("Copied!")));
    }

    #[test]
    fn failed_copy_with_print_shows_password_once() {
        let mut board = MemoryClipboard {
            fail_write: true,
            ..Default::default()
        };
        let printed = copy(&["-b", "-p", "-l", "8"], &mut board);

        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].len(), 8);
    }

    #[test]
    fn no_classes_outputs_nothing() {
        let mut board = MemoryClipboard::default();
        let printed = copy(
            &["-b", "--no-lowercase", "--no-uppercase", "--no-numbers"],
            &mut board,
        );

        assert!(printed.is_empty());
        assert_eq!(board.writes, 0);
    }
}
