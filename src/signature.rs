//! Letter-frequency signatures.

use crate::lang::{Lang, data::PLACEHOLDER};
use std::collections::HashMap;

/// The distinct letters of a normalized text, most frequent first.
///
/// Letters with equal counts keep the order in which they first appear in
/// the text, so a signature is a pure function of its input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    letters: String,
    frequencies: Vec<(char, f64)>,
    total: usize,
}

impl Signature {
    /// Profiles an already-normalized run of letters.
    pub fn from_letters(letters: &str) -> Self {
        let mut index: HashMap<char, usize> = HashMap::new();
        let mut counts: Vec<(char, usize)> = Vec::new();
        let mut total = 0;

        for c in letters.chars() {
            total += 1;
            match index.get(&c) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(c, counts.len());
                    counts.push((c, 1));
                }
            }
        }

        // Stable: ties stay in first-appearance order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let frequencies = counts
            .iter()
            .map(|&(c, n)| (c, n as f64 / total as f64))
            .collect();
        let letters = counts.iter().map(|&(c, _)| c).collect();

        Self {
            letters,
            frequencies,
            total,
        }
    }

    /// The signature as a string of distinct letters.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// `(letter, count / total)` pairs in signature order.
    #[inline]
    pub fn frequencies(&self) -> &[(char, f64)] {
        &self.frequencies
    }

    /// Distinct letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Letters counted, repeats included.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn contains(&self, c: char) -> bool {
        self.frequencies.iter().any(|&(l, _)| l == c)
    }

    /// `lang`'s letters in table order, restricted to the letters of this
    /// signature and padded with [`PLACEHOLDER`] to the same length.
    pub fn reference(&self, lang: Lang) -> String {
        let mut out: String = lang
            .letters()
            .iter()
            .map(|l| l.letter)
            .filter(|&c| self.contains(c))
            .take(self.len())
            .collect();
        let matched = out.chars().count();
        out.extend(std::iter::repeat_n(PLACEHOLDER, self.len() - matched));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{DEU, ENG, RUS, SPA};

    #[test]
    fn ordered_by_descending_count() {
        let sig = Signature::from_letters("abbccc");
        assert_eq!(sig.as_str(), "cba");
        assert_eq!(sig.total(), 6);
        assert_eq!(sig.frequencies()[0], ('c', 0.5));
    }

    #[test]
    fn ties_keep_first_appearance() {
        let sig = Signature::from_letters("zyxxyz");
        assert_eq!(sig.as_str(), "zyx");
        let sig = Signature::from_letters("бааб");
        assert_eq!(sig.as_str(), "ба");
    }

    #[test]
    fn frequencies_sum_to_one() {
        let sig = Signature::from_letters("hallosagteeinfremdermanninblauengewändern");
        let sum: f64 = sig.frequencies().iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_signature() {
        let sig = Signature::from_letters("");
        assert!(sig.is_empty());
        assert_eq!(sig.reference(ENG), "");
    }

    #[test]
    fn reference_keeps_table_order() {
        let sig = Signature::from_letters("taaee");
        assert_eq!(sig.as_str(), "aet");
        assert_eq!(sig.reference(ENG), "eta");
        assert_eq!(sig.reference(SPA), "eat");
    }

    #[test]
    fn reference_is_padded_for_missing_letters() {
        let sig = Signature::from_letters("gewändern");
        assert_eq!(sig.as_str(), "engwädr");
        assert_eq!(sig.reference(ENG), "enrdwg0");
        assert_eq!(sig.reference(DEU), "enrdgwä");
        assert_eq!(sig.reference(RUS), "0000000");
    }

    #[test]
    fn reference_length_matches() {
        let sig = Signature::from_letters("приветмирhello");
        for lang in [ENG, DEU, SPA, RUS] {
            assert_eq!(sig.reference(lang).chars().count(), sig.len());
        }
    }
}
