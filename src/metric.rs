//! Language-comparison metrics.
//!
//! Every metric scores the input against each supported language on its own
//! scale, then [`rank`] turns the four scores into a [`MetricResult`]. The
//! confidence is the ratio between the best and the runner-up score and is
//! only meaningful within one metric: a Levenshtein confidence of 1.5 and a
//! similarity confidence of 1.5 say nothing about each other.

pub mod damerau;
pub mod levenshtein;
pub mod peculiar;
pub mod similarity;
pub mod weighted;

pub use damerau::{
    DamerauLevenshtein, EditCosts, EditDistance, UnitCostMatrix, UnitCostRows, WeightedCost,
};
pub use levenshtein::Levenshtein;
pub use peculiar::PeculiarCount;
pub use similarity::Similarity;
pub use weighted::{WeightedPosition, WeightedReference};

use crate::{
    compact::CompactError,
    lang::{Guess, Lang, all_langs},
    signature::Signature,
};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    #[error(transparent)]
    ByteSpaceExhausted(#[from] CompactError),

    #[error("normalized input contains no letters")]
    EmptySignal,
}

/// Which end of a metric's scale wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Counts and similarities: the highest score wins.
    Highest,
    /// Distances: the lowest score wins.
    Lowest,
}

/// What a metric sees of the text under classification.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    /// The text exactly as given, before any normalization.
    pub raw: &'a str,
    pub signature: &'a Signature,
}

impl<'a> Input<'a> {
    pub fn new(raw: &'a str, signature: &'a Signature) -> Self {
        Self { raw, signature }
    }

    /// The signature, or `EmptySignal` when normalization left no letters.
    #[inline]
    pub fn signal(&self) -> Result<&'a Signature, MetricError> {
        if self.signature.is_empty() {
            return Err(MetricError::EmptySignal);
        }
        Ok(self.signature)
    }
}

/// One language-comparison metric.
pub trait Metric: Send + Sync {
    /// Stable name – used for logging and report lookup.
    fn name(&self) -> &'static str;

    fn ranking(&self) -> Ranking;

    /// Raw score of `input` against `lang`.
    fn score(&self, input: &Input<'_>, lang: Lang) -> Result<f64, MetricError>;

    /// Scores every supported language and ranks them.
    fn measure(&self, input: &Input<'_>) -> Result<MetricReport, MetricError> {
        let scores = all_langs()
            .iter()
            .map(|&lang| Ok((lang, self.score(input, lang)?)))
            .collect::<Result<Scores, MetricError>>()?;
        Ok(MetricReport {
            name: self.name(),
            result: rank(&scores, self.ranking()),
            scores,
        })
    }
}

pub type Scores = SmallVec<[(Lang, f64); 4]>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricResult {
    pub guess: Guess,
    pub confidence: f64,
}

impl MetricResult {
    pub const fn undecided() -> Self {
        Self {
            guess: Guess::Default,
            confidence: 0.0,
        }
    }
}

/// A metric's verdict together with the per-language scores behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReport {
    pub name: &'static str,
    pub result: MetricResult,
    pub scores: Scores,
}

impl MetricReport {
    pub fn undecided(name: &'static str) -> Self {
        Self {
            name,
            result: MetricResult::undecided(),
            scores: Scores::new(),
        }
    }

    pub fn score(&self, lang: Lang) -> Option<f64> {
        self.scores.iter().find(|(l, _)| *l == lang).map(|&(_, s)| s)
    }
}

/// Picks the winner of `scores`. An exact tie between the two best scores
/// yields `{default, 0}`.
///
/// Confidence is best / runner-up for [`Ranking::Highest`] and
/// runner-up / best for [`Ranking::Lowest`]; when the divisor is zero the
/// dividend is used as is.
pub fn rank(scores: &[(Lang, f64)], ranking: Ranking) -> MetricResult {
    let mut ordered: Scores = scores.iter().copied().collect();
    // Stable: equal scores keep language order.
    match ranking {
        Ranking::Highest => ordered.sort_by(|a, b| b.1.total_cmp(&a.1)),
        Ranking::Lowest => ordered.sort_by(|a, b| a.1.total_cmp(&b.1)),
    }

    let Some(&(top, best)) = ordered.first() else {
        return MetricResult::undecided();
    };
    let Some(&(_, runner_up)) = ordered.get(1) else {
        return MetricResult {
            guess: Guess::Lang(top),
            confidence: best,
        };
    };

    if best == runner_up {
        return MetricResult::undecided();
    }

    let (dividend, divisor) = match ranking {
        Ranking::Highest => (best, runner_up),
        Ranking::Lowest => (runner_up, best),
    };
    let confidence = if divisor != 0.0 {
        dividend / divisor
    } else {
        dividend
    };

    MetricResult {
        guess: Guess::Lang(top),
        confidence,
    }
}

/// The five voting metrics plus the supplemental weighted variant.
pub struct MetricSet {
    pub peculiar: PeculiarCount,
    pub levenshtein: Levenshtein,
    pub damerau: DamerauLevenshtein,
    pub weighted: WeightedPosition,
    pub weighted_reference: WeightedReference,
    pub similarity: Similarity,
}

impl Default for MetricSet {
    fn default() -> Self {
        Self {
            peculiar: PeculiarCount,
            levenshtein: Levenshtein,
            damerau: DamerauLevenshtein::default(),
            weighted: WeightedPosition,
            weighted_reference: WeightedReference,
            similarity: Similarity,
        }
    }
}
