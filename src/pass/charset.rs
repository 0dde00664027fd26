//! Character classes and the option set that selects them.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%&?+-*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Declaration order. Also the order alphabets are pooled in.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }
}

/// Which character classes are enabled. May be all-false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl OptionSet {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.is_enabled(class));
    }

    pub fn any(&self) -> bool {
        self.lowercase || self.uppercase || self.numbers || self.symbols
    }

    /// Enabled classes in declaration order, regardless of toggle order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
    }

    /// Alphabets of the enabled classes, as bytes. Every alphabet is ASCII.
    pub fn pools(&self) -> Vec<&'static [u8]> {
        self.enabled().map(|class| class.alphabet().as_bytes()).collect()
    }

    /// Size of the union alphabet.
    pub fn size(&self) -> usize {
        self.enabled().map(|class| class.alphabet().len()).sum()
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_exclude_symbols() {
        let options = OptionSet::default();
        assert!(options.lowercase && options.uppercase && options.numbers);
        assert!(!options.symbols);
        assert_eq!(options.size(), 62);
    }

    #[test]
    fn double_toggle_restores_options() {
        for class in CharacterClass::ALL {
            let mut options = OptionSet::default();
            let before = options;
            options.toggle(class);
            assert_ne!(options, before);
            options.toggle(class);
            assert_eq!(options, before);
        }
    }

    #[test]
    fn toggling_can_disable_everything() {
        let mut options = OptionSet::default();
        options.toggle(CharacterClass::Lowercase);
        options.toggle(CharacterClass::Uppercase);
        options.toggle(CharacterClass::Numbers);
        assert!(!options.any());
        assert!(options.pools().is_empty());
    }

    #[test]
    fn pools_follow_declaration_order() {
        let mut options = OptionSet {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        options.toggle(CharacterClass::Symbols);
        options.toggle(CharacterClass::Lowercase);

        let pools = options.pools();
        assert_eq!(pools, vec![LOWERCASE.as_bytes(), SYMBOLS.as_bytes()]);
    }

    #[test]
    fn symbol_alphabet_is_fixed() {
        assert_eq!(CharacterClass::Symbols.alphabet(), "!@#$%&?+-*");
        assert!(CharacterClass::ALL
            .iter()
            .all(|class| class.alphabet().is_ascii()));
    }
}
