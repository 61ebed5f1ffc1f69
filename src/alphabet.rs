//! Alphabet construction from character-class toggles.
//!
//! The working alphabet is always a filtered view of a fixed superset:
//! lowercase letters, uppercase letters, digits, then a fixed run of symbol
//! characters. Filtering never reorders or duplicates characters.
//!
//! Classification note: the symbols toggle controls exactly the
//! non-alphanumeric characters of the superset. (The script this replaces
//! guarded the symbol filter with `isalnum() and (not isalpha() or not
//! isdigit())`, which for single characters reduces to "keep alphanumerics" -
//! that is the behavior kept here, with the three toggles composing
//! independently.)

/// Fixed superset every alphabet is drawn from, in canonical order.
pub const CHARSET_SUPERSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789~!@#$%^&*()";

/// Character-class inclusion toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetSpec {
    /// Include ASCII letters (both cases)
    pub letters: bool,
    /// Include ASCII digits
    pub digits: bool,
    /// Include the symbol characters `~!@#$%^&*()`
    pub symbols: bool,
}

impl Default for AlphabetSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphabetSpec {
    /// All classes enabled.
    pub fn new() -> Self {
        Self {
            letters: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn with_letters(mut self, enabled: bool) -> Self {
        self.letters = enabled;
        self
    }

    pub fn with_digits(mut self, enabled: bool) -> Self {
        self.digits = enabled;
        self
    }

    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.symbols = enabled;
        self
    }

    /// Whether a superset character survives this spec's filters.
    #[inline]
    fn keeps(&self, c: char) -> bool {
        if c.is_ascii_alphabetic() {
            self.letters
        } else if c.is_ascii_digit() {
            self.digits
        } else {
            self.symbols
        }
    }

    /// Build the filtered alphabet, preserving superset order.
    ///
    /// All toggles off yields an empty alphabet; that is not an error, the
    /// downstream sequence generator simply produces nothing.
    pub fn build(&self) -> Vec<char> {
        CHARSET_SUPERSET.chars().filter(|&c| self.keeps(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superset_has_no_duplicates() {
        let chars: Vec<char> = CHARSET_SUPERSET.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            assert!(!chars[i + 1..].contains(c), "duplicate character {:?}", c);
        }
    }

    #[test]
    fn test_all_enabled_is_full_superset() {
        let alphabet = AlphabetSpec::new().build();
        assert_eq!(alphabet, CHARSET_SUPERSET.chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_letters_only() {
        let alphabet = AlphabetSpec::new()
            .with_digits(false)
            .with_symbols(false)
            .build();
        assert_eq!(alphabet.len(), 52);
        assert!(alphabet.iter().all(|c| c.is_ascii_alphabetic()));
        // Superset order preserved: lowercase first, then uppercase
        assert_eq!(alphabet[0], 'a');
        assert_eq!(alphabet[26], 'A');
    }

    #[test]
    fn test_digits_only() {
        let alphabet = AlphabetSpec::new()
            .with_letters(false)
            .with_symbols(false)
            .build();
        assert_eq!(alphabet, "0123456789".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_symbols_only() {
        let alphabet = AlphabetSpec::new()
            .with_letters(false)
            .with_digits(false)
            .build();
        assert_eq!(alphabet, "~!@#$%^&*()".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_symbols_flag_touches_only_non_alphanumerics() {
        let with = AlphabetSpec::new().build();
        let without = AlphabetSpec::new().with_symbols(false).build();
        assert!(without.iter().all(|c| c.is_ascii_alphanumeric()));
        // Removing symbols must not disturb the alphanumeric prefix
        assert_eq!(&with[..62], &without[..]);
    }

    #[test]
    fn test_all_disabled_is_empty() {
        let alphabet = AlphabetSpec::new()
            .with_letters(false)
            .with_digits(false)
            .with_symbols(false)
            .build();
        assert!(alphabet.is_empty());
    }

    #[test]
    fn test_flag_combinations_respect_classes() {
        for letters in [false, true] {
            for digits in [false, true] {
                for symbols in [false, true] {
                    let alphabet = AlphabetSpec {
                        letters,
                        digits,
                        symbols,
                    }
                    .build();
                    for c in &alphabet {
                        if c.is_ascii_alphabetic() {
                            assert!(letters);
                        } else if c.is_ascii_digit() {
                            assert!(digits);
                        } else {
                            assert!(symbols);
                        }
                    }
                    let expected = CHARSET_SUPERSET
                        .chars()
                        .filter(|c| {
                            (c.is_ascii_alphabetic() && letters)
                                || (c.is_ascii_digit() && digits)
                                || (!c.is_ascii_alphanumeric() && symbols)
                        })
                        .count();
                    assert_eq!(alphabet.len(), expected);
                }
            }
        }
    }
}
