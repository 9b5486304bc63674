//! Character classes and the options that select them.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes in the order their alphabets are concatenated.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }

    pub fn contains(self, ch: char) -> bool {
        ch.is_ascii() && self.alphabet().contains(&(ch as u8))
    }
}

/// Which character classes a generation request draws from.
///
/// All-false is a legal value; see [`GenerationOptions::effective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl GenerationOptions {
    pub const LOWERCASE_ONLY: Self = Self {
        lowercase: true,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    pub const NONE: Self = Self {
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn is_empty(&self) -> bool {
        !CharacterClass::ALL.iter().any(|&c| self.is_enabled(c))
    }

    /// Enabled classes in fixed class order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&c| self.is_enabled(c))
    }

    /// The options a generator actually uses. Selecting nothing falls back to
    /// lowercase only.
    pub fn effective(&self) -> Self {
        if self.is_empty() {
            log::debug!("no character class selected, falling back to lowercase");
            Self::LOWERCASE_ONLY
        } else {
            *self
        }
    }

    /// Concatenated alphabet of the effective classes.
    pub fn pool(&self) -> Vec<u8> {
        self.effective()
            .enabled()
            .flat_map(|c| c.alphabet().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabets_disjoint_and_non_empty() {
        let mut seen = HashSet::new();
        for class in CharacterClass::ALL {
            assert!(!class.alphabet().is_empty(), "{} is empty", class.name());
            for &b in class.alphabet() {
                assert!(seen.insert(b), "Byte {:?} appears twice", b as char);
            }
        }
        assert_eq!(seen.len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn test_enabled_keeps_class_order() {
        let options = GenerationOptions {
            lowercase: false,
            uppercase: true,
            digits: false,
            symbols: true,
        };
        let classes: Vec<_> = options.enabled().collect();
        assert_eq!(
            classes,
            vec![CharacterClass::Uppercase, CharacterClass::Symbols]
        );
    }

    #[test]
    fn test_empty_options_fall_back_to_lowercase() {
        assert!(GenerationOptions::NONE.is_empty());
        assert_eq!(
            GenerationOptions::NONE.effective(),
            GenerationOptions::LOWERCASE_ONLY
        );
        assert_eq!(GenerationOptions::NONE.pool(), LOWERCASE.to_vec());
    }

    #[test]
    fn test_pool_concatenates_in_order() {
        let pool = GenerationOptions::default().pool();
        assert_eq!(pool.len(), 88);
        assert!(pool.starts_with(LOWERCASE));
        assert!(pool.ends_with(SYMBOLS));
    }

    #[test]
    fn test_contains() {
        assert!(CharacterClass::Symbols.contains('?'));
        assert!(!CharacterClass::Symbols.contains('a'));
        assert!(!CharacterClass::Lowercase.contains('é'));
    }
}
