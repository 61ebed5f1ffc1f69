//! Odometer-order enumeration of fixed-length sequences.
//!
//! `Sequences` lazily yields every length-L string over an alphabet, with
//! repetition, in lexicographic order of the alphabet (rightmost position
//! varies fastest, like a mechanical odometer). Nothing is materialized up
//! front, so memory use is independent of the A^L output size; the same
//! alphabet and length always reproduce the same stream.

/// Lazy iterator over all fixed-length sequences drawn from an alphabet.
#[derive(Debug, Clone)]
pub struct Sequences {
    alphabet: Vec<char>,
    length: usize,
    /// Position of the next tuple as alphabet indices; None once exhausted.
    odometer: Option<Vec<usize>>,
}

impl Sequences {
    /// Create an enumeration of all `length`-tuples over `alphabet`.
    ///
    /// An empty alphabet with `length >= 1` yields nothing. `length == 0`
    /// yields exactly one empty string.
    pub fn new(alphabet: Vec<char>, length: usize) -> Self {
        let odometer = if alphabet.is_empty() && length > 0 {
            None
        } else {
            Some(vec![0; length])
        };
        Self {
            alphabet,
            length,
            odometer,
        }
    }

    /// Exact number of sequences this enumeration produces: A^L.
    ///
    /// Returns `None` when the count overflows `u128`.
    pub fn cardinality(&self) -> Option<u128> {
        if self.length == 0 {
            return Some(1);
        }
        let base = self.alphabet.len() as u128;
        if base == 0 {
            return Some(0);
        }
        let exp = u32::try_from(self.length).ok()?;
        base.checked_pow(exp)
    }

    /// Render the current odometer state as a string.
    fn render(&self, odometer: &[usize]) -> String {
        odometer.iter().map(|&i| self.alphabet[i]).collect()
    }

    /// Advance the odometer one step. Returns false on wrap-around.
    fn advance(&self, odometer: &mut [usize]) -> bool {
        for digit in odometer.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet.len() {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for Sequences {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut odometer = self.odometer.take()?;
        let word = self.render(&odometer);
        if self.advance(&mut odometer) {
            self.odometer = Some(odometer);
        }
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.odometer {
            None => (0, Some(0)),
            Some(_) => match self.cardinality() {
                Some(n) if n <= usize::MAX as u128 => {
                    // Fresh iterator; after partial consumption this is only
                    // an upper bound, which size_hint permits.
                    (0, Some(n as usize))
                }
                _ => (0, None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(alphabet: &str, length: usize) -> Vec<String> {
        Sequences::new(alphabet.chars().collect(), length).collect()
    }

    #[test]
    fn test_odometer_order() {
        assert_eq!(collect("ab", 2), vec!["aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_rightmost_varies_fastest() {
        let words = collect("abc", 3);
        assert_eq!(words.len(), 27);
        assert_eq!(words[0], "aaa");
        assert_eq!(words[1], "aab");
        assert_eq!(words[2], "aac");
        assert_eq!(words[3], "aba");
        assert_eq!(words[26], "ccc");
    }

    #[test]
    fn test_length_one_is_alphabet_order() {
        assert_eq!(collect("xyz", 1), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_alphabet_yields_nothing() {
        assert!(collect("", 1).is_empty());
        assert!(collect("", 4).is_empty());
    }

    #[test]
    fn test_zero_length_yields_single_empty_tuple() {
        assert_eq!(collect("abc", 0), vec![""]);
        // Degenerate both ways: empty alphabet, zero length
        assert_eq!(collect("", 0), vec![""]);
    }

    #[test]
    fn test_count_matches_cardinality() {
        for (alphabet, length) in [("ab", 5), ("abcd", 3), ("a", 7)] {
            let seq = Sequences::new(alphabet.chars().collect(), length);
            let expected = seq.cardinality().unwrap();
            assert_eq!(seq.count() as u128, expected);
        }
    }

    #[test]
    fn test_cardinality_edge_cases() {
        assert_eq!(Sequences::new(vec![], 3).cardinality(), Some(0));
        assert_eq!(Sequences::new(vec![], 0).cardinality(), Some(1));
        assert_eq!(Sequences::new(vec!['a', 'b'], 0).cardinality(), Some(1));
        // 2^127 fits in u128, 2^128 does not
        assert!(Sequences::new(vec!['a', 'b'], 127).cardinality().is_some());
        assert!(Sequences::new(vec!['a', 'b'], 128).cardinality().is_none());
    }

    #[test]
    fn test_restartable_and_deterministic() {
        let first: Vec<_> = Sequences::new("ab1".chars().collect(), 2).collect();
        let second: Vec<_> = Sequences::new("ab1".chars().collect(), 2).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
    }
}
