//! Key bindings and the inline length editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pass::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    Toggle(CharacterClass),
    Step(i64),
    EditLength,
    Help,
    Quit,
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key press in the main view to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if is_ctrl(&key, 'c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('g') | KeyCode::Char(' ') | KeyCode::Enter => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('1') => Action::Toggle(CharacterClass::Lowercase),
        KeyCode::Char('2') => Action::Toggle(CharacterClass::Uppercase),
        KeyCode::Char('3') => Action::Toggle(CharacterClass::Numbers),
        KeyCode::Char('4') => Action::Toggle(CharacterClass::Symbols),
        KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => Action::Step(1),
        KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => Action::Step(-1),
        KeyCode::PageUp => Action::Step(10),
        KeyCode::PageDown => Action::Step(-10),
        KeyCode::Char('l') => Action::EditLength,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Editing,
    Commit(i64),
    Cancel,
    Quit,
}

/// Enough for any i64 without overflow once parsed.
const MAX_DIGITS: usize = 18;

/// Signed numeric input with cursor movement.
#[derive(Debug)]
pub struct LengthEditor {
    input: String,
    /// 0-based insertion point in `input`.
    cursor: usize,
}

impl LengthEditor {
    pub fn new(initial: usize) -> Self {
        let input = initial.to_string();
        let cursor = input.len();
        Self { input, cursor }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn digit_count(&self) -> usize {
        self.input.chars().filter(|c| c.is_ascii_digit()).count()
    }

    /// Empty input and a lone sign count as 0, which the setter raises to 1.
    pub fn value(&self) -> i64 {
        match self.input.as_str() {
            "" | "-" => 0,
            s => s.parse().unwrap_or(0),
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> EditOutcome {
        if is_ctrl(&key, 'c') {
            return EditOutcome::Quit;
        }
        if is_ctrl(&key, 'u') {
            self.input.clear();
            self.cursor = 0;
            return EditOutcome::Editing;
        }

        match key.code {
            KeyCode::Esc => return EditOutcome::Cancel,
            KeyCode::Enter => return EditOutcome::Commit(self.value()),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.len() {
                    self.input.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.input.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.len(),
            KeyCode::Char('-') if self.cursor == 0 && !self.input.starts_with('-') => {
                self.input.insert(0, '-');
                self.cursor = 1;
            }
            KeyCode::Char(c)
                if c.is_ascii_digit()
                    && self.digit_count() < MAX_DIGITS
                    && !(self.cursor == 0 && self.input.starts_with('-')) =>
            {
                self.input.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        EditOutcome::Editing
    }
}
