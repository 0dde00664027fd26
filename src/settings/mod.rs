//! Password generation settings: enabled classes and length.

use crate::pass::{CharacterClass, OptionSet};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 256;
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub options: OptionSet,
    pub pass_length: usize,
}

impl Settings {
    pub fn toggle_class(&mut self, class: CharacterClass) {
        self.options.toggle(class);
        tracing::debug!(
            class = class.label(),
            enabled = self.options.is_enabled(class),
            "class toggled"
        );
    }

    /// Store a requested length, clamped to `MIN_LENGTH..=MAX_LENGTH`.
    pub fn set_length(&mut self, requested: i64) {
        self.pass_length = clamp_length(requested);
        tracing::debug!(requested, length = self.pass_length, "length set");
    }

    pub fn step_length(&mut self, delta: i64) {
        self.set_length(self.pass_length as i64 + delta);
    }
}

fn clamp_length(requested: i64) -> usize {
    requested.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: OptionSet::default(),
            pass_length: DEFAULT_LENGTH,
        }
    }
}
