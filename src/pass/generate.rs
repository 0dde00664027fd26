//! Password generation.

use std::fmt;

use zeroize::Zeroizing;

use super::charset::OptionSet;
use crate::rand::RandomSource;

/// Generated password. The buffer is wiped on drop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Password(Zeroizing::new(s.to_owned()))
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}

/// Generate a password from the enabled classes.
///
/// Each position first picks a class uniformly among the enabled ones, then a
/// character uniformly within that class. Returns `None` when nothing is
/// enabled.
pub fn generate<R: RandomSource + ?Sized>(
    options: &OptionSet,
    length: usize,
    rng: &mut R,
) -> Option<Password> {
    let pools = options.pools();
    if pools.is_empty() {
        return None;
    }

    let mut buf = Vec::with_capacity(length);
    for _ in 0..length {
        let pool = pools[rng.below(pools.len())];
        buf.push(pool[rng.below(pool.len())]);
    }

    // Safety: every alphabet is ASCII
    let pass = unsafe { String::from_utf8_unchecked(buf) };
    Some(Password(Zeroizing::new(pass)))
}

/// Entropy in bits of a password drawn with the two-stage scheme.
///
/// Per position: log2(k) bits for the class pick plus the mean log2 of the
/// enabled alphabet sizes.
pub fn entropy_bits(options: &OptionSet, length: usize) -> f64 {
    let sizes: Vec<f64> = options
        .enabled()
        .map(|class| class.alphabet().len() as f64)
        .collect();
    if sizes.is_empty() {
        return 0.0;
    }

    let k = sizes.len() as f64;
    let per_char = k.log2() + sizes.iter().map(|n| n.log2()).sum::<f64>() / k;
    length as f64 * per_char
}

/// Get entropy strength description.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharacterClass;
    use crate::rand::Rand;

    /// Replays scripted indices and records each bound it was asked for.
    struct Script {
        picks: Vec<usize>,
        bounds: Vec<usize>,
    }

    impl Script {
        fn new(picks: &[usize]) -> Self {
            Script {
                picks: picks.to_vec(),
                bounds: Vec::new(),
            }
        }
    }

    impl RandomSource for Script {
        fn next_u64(&mut self) -> u64 {
            unreachable!("scripted source only answers below()")
        }

        fn below(&mut self, bound: usize) -> usize {
            self.bounds.push(bound);
            let pick = self.picks.remove(0);
            assert!(pick < bound, "scripted pick {pick} out of 0..{bound}");
            pick
        }
    }

    fn only(classes: &[CharacterClass]) -> OptionSet {
        let mut options = OptionSet {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        for class in classes {
            options.set(*class, true);
        }
        options
    }

    fn union(options: &OptionSet) -> String {
        options.enabled().map(|class| class.alphabet()).collect()
    }

    #[test]
    fn length_and_alphabet_hold_for_every_subset() {
        let mut rng = Rand::new();
        for mask in 1u8..16 {
            let classes: Vec<CharacterClass> = CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, class)| class)
                .collect();
            let options = only(&classes);
            let alphabet = union(&options);

            for length in [1, 2, 12, 64, 255, 256] {
                let pass = generate(&options, length, &mut rng).unwrap();
                assert_eq!(pass.len(), length);
                assert!(pass.as_str().chars().all(|c| alphabet.contains(c)));
            }
        }
    }

    #[test]
    fn empty_option_set_generates_nothing() {
        let mut rng = Script::new(&[]);
        assert!(generate(&only(&[]), 12, &mut rng).is_none());
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn defaults_yield_alphanumerics() {
        let mut rng = Rand::new();
        let pass = generate(&OptionSet::default(), 12, &mut rng).unwrap();
        assert_eq!(pass.len(), 12);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn class_is_picked_before_character() {
        let options = only(&[CharacterClass::Lowercase, CharacterClass::Numbers]);
        let mut rng = Script::new(&[1, 3, 0, 25]);

        let pass = generate(&options, 2, &mut rng).unwrap();

        assert_eq!(pass.as_str(), "3z");
        // Class pick is over the two enabled classes, not the 36 characters.
        assert_eq!(rng.bounds, vec![2, 10, 2, 26]);
    }

    #[test]
    fn toggle_order_does_not_change_pool_order() {
        let mut options = only(&[]);
        options.toggle(CharacterClass::Symbols);
        options.toggle(CharacterClass::Uppercase);
        let mut rng = Script::new(&[0, 0, 1, 0]);

        let pass = generate(&options, 2, &mut rng).unwrap();

        assert_eq!(pass.as_str(), "A!");
    }

    #[test]
    fn classes_are_weighted_equally() {
        // Numbers have 10 characters against 26 lowercase, but each class
        // should still take about half the positions.
        let options = only(&[CharacterClass::Lowercase, CharacterClass::Numbers]);
        let mut rng = Rand::new();
        let pass = generate(&options, 256, &mut rng).unwrap();
        let digits = pass.as_str().chars().filter(|c| c.is_ascii_digit()).count();
        assert!((64..=192).contains(&digits), "digits: {digits}");
    }

    #[test]
    fn entropy_matches_two_stage_scheme() {
        let single = only(&[CharacterClass::Numbers]);
        assert!((entropy_bits(&single, 10) - 10.0 * 10f64.log2()).abs() < 1e-9);

        let pair = only(&[CharacterClass::Lowercase, CharacterClass::Numbers]);
        let expected = 1.0 + (26f64.log2() + 10f64.log2()) / 2.0;
        assert!((entropy_bits(&pair, 1) - expected).abs() < 1e-9);

        assert_eq!(entropy_bits(&only(&[]), 12), 0.0);
    }

    #[test]
    fn strength_labels() {
        assert_eq!(strength(20.0), "Weak");
        assert_eq!(strength(40.0), "Fair");
        assert_eq!(strength(71.4), "Strong");
        assert_eq!(strength(300.0), "Very Strong");
    }

    #[test]
    fn debug_hides_contents() {
        let pass = Password::from("Ab3");
        assert_eq!(format!("{pass:?}"), "Password(3 chars)");
    }
}
