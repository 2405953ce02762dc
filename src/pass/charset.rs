//! Character classes and the universe built from them.

use std::fmt;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
/// The 32 printable ASCII punctuation characters.
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharacterClass {
    /// Canonical order; the universe is always concatenated in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which character classes are enabled for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl ClassSet {
    pub const fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            special: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
            special: false,
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Special => self.special,
        }
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.set(class, true);
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Digits => self.digits = enabled,
            CharacterClass::Special => self.special = enabled,
        }
    }

    /// Enabled classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenation of every enabled class's characters.
    pub fn universe(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.size());
        for class in self.iter() {
            chars.extend_from_slice(class.chars());
        }
        chars
    }

    /// Number of characters in the universe.
    pub fn size(&self) -> usize {
        self.iter().map(|c| c.chars().len()).sum()
    }

    /// Comma-separated class names, for log lines.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }
        self.iter().map(CharacterClass::name).collect::<Vec<_>>().join(",")
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::none();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tables_have_expected_sizes() {
        assert_eq!(CharacterClass::Lowercase.chars().len(), 26);
        assert_eq!(CharacterClass::Uppercase.chars().len(), 26);
        assert_eq!(CharacterClass::Digits.chars().len(), 10);
        assert_eq!(CharacterClass::Special.chars().len(), 32);
    }

    #[test]
    fn special_is_exactly_ascii_punctuation() {
        let expected: Vec<u8> = (0u8..128).filter(u8::is_ascii_punctuation).collect();
        assert_eq!(CharacterClass::Special.chars(), expected.as_slice());
    }

    #[test]
    fn classes_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a == b {
                    continue;
                }
                assert!(
                    a.chars().iter().all(|c| !b.chars().contains(c)),
                    "{a} overlaps {b}"
                );
            }
        }
    }

    #[test]
    fn iter_follows_canonical_order() {
        let set: ClassSet = [CharacterClass::Special, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Lowercase, CharacterClass::Special]);
        assert_eq!(set.describe(), "lowercase,special");
    }

    #[test]
    fn universe_is_union_of_enabled_classes() {
        let set = ClassSet {
            lowercase: true,
            digits: true,
            ..ClassSet::none()
        };
        let universe = set.universe();
        assert_eq!(universe.len(), 36);
        assert_eq!(set.size(), 36);
        assert!(universe.iter().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn empty_set() {
        let set = ClassSet::none();
        assert!(set.is_empty());
        assert!(set.universe().is_empty());
        assert_eq!(set.describe(), "none");
        assert_eq!(ClassSet::all().len(), 4);
        assert_eq!(ClassSet::default(), ClassSet::none());
    }

    #[test]
    fn contains_rejects_non_ascii() {
        assert!(CharacterClass::Lowercase.contains('q'));
        assert!(!CharacterClass::Lowercase.contains('é'));
        assert!(CharacterClass::Special.contains('~'));
        assert!(!CharacterClass::Special.contains(' '));
    }
}
