use std::path::PathBuf;

use crate::pass::CharacterClass;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub print: bool,
    pub clipboard: bool,
    pub length: Option<i64>,
    pub number: Option<usize>,
    /// Class overrides in the order given: (class, enabled).
    pub classes: Vec<(CharacterClass, bool)>,
    pub log_file: Option<PathBuf>,
}

impl CliFlags {
    /// True when a password should be produced without opening the view.
    pub fn is_one_shot(&self) -> bool {
        self.print || self.clipboard || self.number.is_some()
    }
}
