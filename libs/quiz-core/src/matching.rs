//! Edit-distance matching between a normalized guess and a municipality name.

use serde::{Deserialize, Serialize};

/// How a guess compares to a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Identical after normalization.
    Exact,
    /// Within tolerance; carries the edit distance.
    Fuzzy(usize),
    NoMatch,
}

/// Tolerance rules for fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    /// Guesses shorter than this (in chars) only match exactly.
    pub min_fuzzy_len: usize,
    /// Names longer than this (in chars) get `long_tolerance`.
    pub long_name_len: usize,
    pub short_tolerance: usize,
    pub long_tolerance: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_fuzzy_len: 3,
            long_name_len: 6,
            short_tolerance: 1,
            long_tolerance: 2,
        }
    }
}

impl MatchPolicy {
    /// Maximum accepted edit distance for a normalized name of `name_len` chars.
    pub fn tolerance(&self, name_len: usize) -> usize {
        if name_len > self.long_name_len {
            self.long_tolerance
        } else {
            self.short_tolerance
        }
    }

    /// Classify an already-normalized guess against an already-normalized name.
    pub fn classify(&self, guess: &str, name: &str) -> MatchKind {
        if guess == name {
            return MatchKind::Exact;
        }

        if guess.chars().count() < self.min_fuzzy_len {
            return MatchKind::NoMatch;
        }

        let distance = levenshtein_distance(guess, name);
        if distance <= self.tolerance(name.chars().count()) {
            MatchKind::Fuzzy(distance)
        } else {
            MatchKind::NoMatch
        }
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows of the (m+1) x (n+1) table
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_counts_code_points() {
        assert_eq!(levenshtein_distance("camaquã", "camaqua"), 1);
        assert_eq!(levenshtein_distance("ã", "a"), 1);
    }

    #[test]
    fn test_symmetry_and_triangle() {
        let words = ["pelotas", "pelota", "canoas", "uruguaiana", "", "rio grande"];
        for a in words {
            assert_eq!(levenshtein_distance(a, a), 0);
            for b in words {
                let ab = levenshtein_distance(a, b);
                assert_eq!(ab, levenshtein_distance(b, a));
                for c in words {
                    assert!(ab <= levenshtein_distance(a, c) + levenshtein_distance(c, b));
                }
            }
        }
    }

    #[test]
    fn test_tolerance_scales_with_name_length() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.tolerance(5), 1);
        assert_eq!(policy.tolerance(6), 1);
        assert_eq!(policy.tolerance(7), 2);
    }

    #[test]
    fn test_classify() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.classify("porto", "porto"), MatchKind::Exact);
        assert_eq!(policy.classify("porta", "porto"), MatchKind::Fuzzy(1));
        assert_eq!(policy.classify("purta", "porto"), MatchKind::NoMatch);
        assert_eq!(policy.classify("urugiana", "uruguaiana"), MatchKind::Fuzzy(2));
        assert_eq!(policy.classify("urugana", "uruguaiana"), MatchKind::NoMatch);
    }

    #[test]
    fn test_short_guess_never_fuzzy() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.classify("ij", "iju"), MatchKind::NoMatch);
        assert_eq!(policy.classify("iju", "iju"), MatchKind::Exact);
    }
}
