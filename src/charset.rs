use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes, in alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Whether `c` belongs to this class's literal set.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Digits => c.is_ascii_digit(),
            CharacterClass::Symbols => SYMBOLS.contains(c),
        }
    }
}

/// Which character classes are enabled for generation.
///
/// Nothing here forces at least one class on; an empty selection simply
/// yields an empty alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharacterClassSelection {
    pub const NONE: Self = Self {
        uppercase: false,
        lowercase: false,
        digits: false,
        symbols: false,
    };

    pub fn only(class: CharacterClass) -> Self {
        let mut selection = Self::NONE;
        selection.set(class, true);
        selection
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Digits => &mut self.digits,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn is_empty(&self) -> bool {
        !CharacterClass::ALL.iter().any(|class| self.is_enabled(*class))
    }

    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    /// Concatenates the literal sets of the enabled classes in fixed order.
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled()
            .flat_map(|class| class.characters().chars())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_set_has_no_duplicates() {
        let unique: HashSet<char> = SYMBOLS.chars().collect();
        assert_eq!(unique.len(), SYMBOLS.chars().count());
        assert_eq!(SYMBOLS.chars().count(), 27);
    }

    #[test]
    fn test_classes_are_disjoint() {
        for class in CharacterClass::ALL {
            for c in class.characters().chars() {
                assert!(class.contains(c));
                for other in CharacterClass::ALL.iter().filter(|o| **o != class) {
                    assert!(!other.contains(c), "{c} in both {class:?} and {other:?}");
                }
            }
        }
    }

    #[test]
    fn test_contains_rejects_unlisted_characters() {
        for c in ['\'', '"', '`', '~', '\\', ' ', 'é', 'Ω', '😀'] {
            assert!(
                CharacterClass::ALL.iter().all(|class| !class.contains(c)),
                "{c:?} should not belong to any class"
            );
        }
    }

    #[test]
    fn test_alphabet_order_and_size() {
        let alphabet = CharacterClassSelection::default().alphabet();
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 27);
        assert_eq!(alphabet.first(), Some(&'A'));
        assert_eq!(alphabet[26], 'a');
        assert_eq!(alphabet[52], '0');
        assert_eq!(alphabet[62], '!');
        assert_eq!(alphabet.last(), Some(&'/'));

        let digits_and_symbols = CharacterClassSelection {
            digits: true,
            symbols: true,
            ..CharacterClassSelection::NONE
        };
        let alphabet: String = digits_and_symbols.alphabet().into_iter().collect();
        assert_eq!(alphabet, format!("{DIGITS}{SYMBOLS}"));
    }

    #[test]
    fn test_empty_selection() {
        assert!(CharacterClassSelection::NONE.is_empty());
        assert!(CharacterClassSelection::NONE.alphabet().is_empty());
        assert!(!CharacterClassSelection::only(CharacterClass::Digits).is_empty());
    }

    #[test]
    fn test_set_and_only() {
        let mut selection = CharacterClassSelection::NONE;
        selection.set(CharacterClass::Symbols, true);
        assert_eq!(selection, CharacterClassSelection::only(CharacterClass::Symbols));
        assert_eq!(
            selection.enabled().collect::<Vec<_>>(),
            vec![CharacterClass::Symbols]
        );

        selection.set(CharacterClass::Symbols, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_deserializes_with_defaults() {
        let selection: CharacterClassSelection =
            serde_json::from_str(r#"{"symbols": false}"#).unwrap();
        assert!(selection.uppercase && selection.lowercase && selection.digits);
        assert!(!selection.symbols);
    }
}
