//! Weighted positional distance.
//!
//! For every weighted letter, compare where it sits in the input signature
//! with where it sits in the language's reference signature:
//!
//! ```text
//! weight × |pos_input − pos_ref| / (pos_input + pos_ref)
//! ```
//!
//! A letter missing from a signature counts as position 0, which is also
//! the position of the leading letter; letters at 0 on both sides add
//! nothing.

use crate::{
    lang::Lang,
    metric::{Input, Metric, MetricError, Ranking},
};

/// Score returned by [`WeightedReference`] when the raw distance is not
/// positive.
pub const REFERENCE_CEILING: f64 = 100.0;

fn position(letters: &[char], c: char) -> usize {
    letters.iter().position(|&l| l == c).unwrap_or(0)
}

/// Sum of the positional term over `weights`.
pub fn positional_distance(
    input: &str,
    reference: &str,
    weights: impl IntoIterator<Item = (char, f64)>,
) -> f64 {
    let input: Vec<char> = input.chars().collect();
    let reference: Vec<char> = reference.chars().collect();

    let mut total = 0.0;
    for (c, weight) in weights {
        let p_in = position(&input, c);
        let p_ref = position(&reference, c);
        let sum = p_in + p_ref;
        if sum > 0 {
            total += p_in.abs_diff(p_ref) as f64 * weight / sum as f64;
        }
    }
    total
}

/// Weights each input letter by its own frequency in the input.
pub struct WeightedPosition;

impl Metric for WeightedPosition {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn ranking(&self) -> Ranking {
        Ranking::Lowest
    }

    fn score(&self, input: &Input<'_>, lang: Lang) -> Result<f64, MetricError> {
        let signature = input.signal()?;
        Ok(positional_distance(
            signature.as_str(),
            &signature.reference(lang),
            signature.frequencies().iter().copied(),
        ))
    }
}

/// Weights every letter of the language's table by its published frequency.
///
/// Raw distances are divided by 100; a distance of zero or less is replaced
/// by [`REFERENCE_CEILING`], so a language sharing nothing positional with
/// the input cannot win by default.
pub struct WeightedReference;

impl Metric for WeightedReference {
    fn name(&self) -> &'static str {
        "weighted_reference"
    }

    fn ranking(&self) -> Ranking {
        Ranking::Lowest
    }

    fn score(&self, input: &Input<'_>, lang: Lang) -> Result<f64, MetricError> {
        let signature = input.signal()?;
        let raw = positional_distance(
            signature.as_str(),
            &signature.reference(lang),
            lang.letters().iter().map(|l| (l.letter, l.percent)),
        );
        Ok(if raw <= 0.0 {
            REFERENCE_CEILING
        } else {
            raw / 100.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_metric_contract,
        lang::{ENG, RUS, all_langs},
        signature::Signature,
        testing::metric_contract::self_match_score,
    };

    #[test]
    fn contract() {
        assert_metric_contract!(WeightedPosition);
        assert_metric_contract!(WeightedReference);
    }

    #[test]
    fn identical_order_is_zero() {
        assert_eq!(
            positional_distance("abc", "abc", [('a', 0.5), ('b', 0.3), ('c', 0.2)]),
            0.0
        );
    }

    #[test]
    fn swapped_letters() {
        // b: |1-2|/3 * 0.3, c: |2-1|/3 * 0.2
        let d = positional_distance("abc", "acb", [('a', 0.5), ('b', 0.3), ('c', 0.2)]);
        assert!((d - 0.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn missing_letter_counts_full_weight() {
        let d = positional_distance("ab", "a0", [('a', 0.5), ('b', 0.5)]);
        assert_eq!(d, 0.5);
    }

    #[test]
    fn letters_absent_from_both_are_skipped() {
        assert_eq!(positional_distance("ab", "ab", [('z', 1.0)]), 0.0);
    }

    #[test]
    fn foreign_script_scores_near_full_weight() {
        let sig = Signature::from_letters("приветмир");
        let input = Input::new("", &sig);
        let leading = sig.frequencies()[0].1;
        let en = WeightedPosition.score(&input, ENG).unwrap();
        assert!((en - (1.0 - leading)).abs() < 1e-12);
        assert!(WeightedPosition.score(&input, RUS).unwrap() < en);
    }

    #[test]
    fn reference_variant_replaces_non_positive_scores() {
        let sig = Signature::from_letters("приветмир");
        let input = Input::new("", &sig);
        assert_eq!(
            WeightedReference.score(&input, ENG),
            Ok(REFERENCE_CEILING)
        );
        assert!(WeightedReference.score(&input, RUS).unwrap() < REFERENCE_CEILING);
    }

    #[test]
    fn self_match_is_zero() {
        for &lang in all_langs() {
            assert_eq!(self_match_score(&WeightedPosition, lang), 0.0, "{lang}");
        }
    }

    #[test]
    fn reference_self_match_hits_the_ceiling() {
        // A perfect positional match has no positive distance left to scale.
        for &lang in all_langs() {
            assert_eq!(
                self_match_score(&WeightedReference, lang),
                REFERENCE_CEILING,
                "{lang}"
            );
        }
    }
}
