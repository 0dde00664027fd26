use std::time::Instant;

use super::view::View;
use crate::clipboard::Clipboard;
use crate::pass::{self, CharacterClass};
use crate::rand::{RandomSource, entropy_source};
use crate::terminal::{
    BLUE, BOLD, GREY, INNER_WIDTH, RED, RESET, UNDERLINE, box_bottom, box_line, box_line_center,
    box_opt, box_top, chunks, clear, flush, line, pad_right, print_rule,
};

/// Redraw the whole view.
pub fn draw<R: RandomSource, C: Clipboard>(view: &View<R, C>, now: Instant) {
    clear();
    if view.show_help {
        print_keys();
    } else {
        print_view(view, now);
    }
    flush();
}

fn print_view<R: RandomSource, C: Clipboard>(view: &View<R, C>, now: Instant) {
    let session = &view.session;
    let settings = &session.settings;

    box_top("genpass");
    box_line("");
    for part in chunks(session.display_text(now), INNER_WIDTH) {
        box_line_center(&format!("{BOLD}{part}{RESET}"));
    }
    box_line("");
    print_rule();

    let length = match &view.editor {
        Some(editor) => {
            let (before, after) = editor.text().split_at(editor.cursor());
            format!("{UNDERLINE}{before}{RESET}|{UNDERLINE}{after}{RESET}")
        }
        None => settings.pass_length.to_string(),
    };
    let bits = pass::entropy_bits(&settings.options, settings.pass_length);
    box_line(&format!(
        "  Length: {} Entropy: {bits:.1} bits ({}) • {} chars",
        pad_right(&length, 12),
        pass::strength(bits),
        settings.options.size()
    ));
    box_line("");

    let [lower, upper, numbers, symbols] = CharacterClass::ALL.map(|class| {
        let label = format!("{}) {}", key_for(class), class.label());
        let color = if settings.options.is_enabled(class) {
            BLUE
        } else {
            GREY
        };
        format!("{color}{label:<16}{RESET}")
    });
    box_line(&format!("  {lower}{upper}"));
    box_line(&format!("  {numbers}{symbols}"));
    box_line("");

    if !settings.options.any() {
        box_line(&format!("  {RED}Select at least one character class{RESET}"));
    } else {
        box_line("");
    }

    print_rule();
    if view.editor.is_some() {
        box_line_center("Enter: apply | Esc: cancel | CTRL+U: clear");
    } else {
        box_line_center("g) generate | c) copy | l) length | h) help | q) quit");
    }
    box_bottom();
}

fn key_for(class: CharacterClass) -> char {
    match class {
        CharacterClass::Lowercase => '1',
        CharacterClass::Uppercase => '2',
        CharacterClass::Numbers => '3',
        CharacterClass::Symbols => '4',
    }
}

fn print_keys() {
    box_top("Keys");
    box_line("");
    box_opt("  g, Enter, Space", "Generate a new password");
    box_opt("  c", "Copy the password. Ignored for one second after a copy.");
    box_opt("  1 2 3 4", "Toggle lowercase, uppercase, numbers, symbols");
    box_opt("  Up/Down, +/-", "Length by one");
    box_opt("  PageUp/PageDown", "Length by ten");
    box_opt("  l", "Type a length (1-256)");
    box_opt("  q, Esc, CTRL+C", "Quit");
    box_line("");
    box_line(&format!("  Entropy source: {}", entropy_source()));
    box_line("");
    box_line_center("Press any key to return");
    box_bottom();
}

pub fn print_help() {
    box_top("genpass");
    box_line_center("Password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without -p/-b/-n. Opens a view to toggle");
    box_line("     character classes, set the length, generate and copy.");
    box_line("  2) One-shot: -p prints, -b copies to the clipboard.");
    box_line("");
    box_line("USAGE:");
    box_line("  genpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, clamped to 1-256 (default: 12)");
    box_opt("      --symbols", "Enable symbols (!@#$%&?+-*)");
    box_opt("      --no-lowercase", "Disable lowercase letters");
    box_opt("      --no-uppercase", "Disable uppercase letters");
    box_opt("      --no-numbers", "Disable digits");
    box_opt("      --no-symbols", "Disable symbols");
    box_line("");
    box_line(" Output:");
    box_opt("  -p, --print", "Print a password and exit");
    box_opt("  -n, --number <N>", "How many to print");
    box_opt("  -b, --board", "Copy a password to the clipboard and exit");
    box_opt("  -q, --quiet", "Suppress warnings and status lines");
    box_opt("      --log-file <PATH>", "Append logs to a file. GENPASS_LOG sets the filter.");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  genpass                  Interactive view");
    box_line("  genpass -p -l 20         One password, 20 characters");
    box_line("  genpass -n 3 --symbols   Three passwords with symbols");
    box_line("  genpass -b               Copy a fresh password");
    box_line("");
    box_bottom();
    line("");
    flush();
}
