//! One classification call.
//!
//! A [`Session`] normalizes and profiles its text once, then computes each
//! metric lazily and at most once. Nothing outlives the session.

use crate::{
    metric::{Input, Metric, MetricError, MetricReport, MetricSet},
    normalizer::normalize,
    signature::Signature,
};
use std::{borrow::Cow, cell::OnceCell};
use tracing::{debug, trace, warn};

/// A metric's report, or the error that cost it its vote.
pub type Outcome = Result<MetricReport, MetricError>;

pub struct Session<'a> {
    raw: &'a str,
    cleaned: Cow<'a, str>,
    signature: Signature,
    metrics: &'a MetricSet,
    peculiar: OnceCell<Outcome>,
    levenshtein: OnceCell<Outcome>,
    damerau: OnceCell<Outcome>,
    weighted: OnceCell<Outcome>,
    weighted_reference: OnceCell<Outcome>,
    similarity: OnceCell<Outcome>,
}

impl<'a> Session<'a> {
    pub fn new(raw: &'a str, metrics: &'a MetricSet) -> Self {
        let cleaned = normalize(raw);
        let signature = Signature::from_letters(&cleaned);
        trace!(
            signature = signature.as_str(),
            letters = signature.total(),
            "profiled input"
        );
        Self {
            raw,
            cleaned,
            signature,
            metrics,
            peculiar: OnceCell::new(),
            levenshtein: OnceCell::new(),
            damerau: OnceCell::new(),
            weighted: OnceCell::new(),
            weighted_reference: OnceCell::new(),
            similarity: OnceCell::new(),
        }
    }

    #[inline]
    pub fn raw(&self) -> &str {
        self.raw
    }

    /// The contiguous letter sequence left after normalization.
    #[inline]
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    #[inline]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    fn run<'s, M: Metric>(&'s self, cell: &'s OnceCell<Outcome>, metric: &M) -> &'s Outcome {
        cell.get_or_init(|| {
            let input = Input::new(self.raw, &self.signature);
            let outcome = match metric.measure(&input) {
                Err(MetricError::EmptySignal) => Ok(MetricReport::undecided(metric.name())),
                other => other,
            };
            match &outcome {
                Ok(report) => debug!(
                    metric = report.name,
                    guess = %report.result.guess,
                    confidence = report.result.confidence,
                    "metric outcome"
                ),
                Err(err) => warn!(metric = metric.name(), error = %err, "metric vote skipped"),
            }
            outcome
        })
    }

    pub fn peculiar(&self) -> &Outcome {
        self.run(&self.peculiar, &self.metrics.peculiar)
    }

    pub fn levenshtein(&self) -> &Outcome {
        self.run(&self.levenshtein, &self.metrics.levenshtein)
    }

    pub fn damerau(&self) -> &Outcome {
        self.run(&self.damerau, &self.metrics.damerau)
    }

    pub fn weighted(&self) -> &Outcome {
        self.run(&self.weighted, &self.metrics.weighted)
    }

    pub fn weighted_reference(&self) -> &Outcome {
        self.run(&self.weighted_reference, &self.metrics.weighted_reference)
    }

    pub fn similarity(&self) -> &Outcome {
        self.run(&self.similarity, &self.metrics.similarity)
    }

    /// The weighted positional result, or its reference-weighted variant
    /// when the primary is undecided or failed.
    pub fn weighted_or_fallback(&self) -> &Outcome {
        match self.weighted() {
            Ok(report) if !report.result.guess.is_default() => self.weighted(),
            _ => self.weighted_reference(),
        }
    }

    /// Computes every metric and snapshots the results.
    pub fn measures(&self) -> Measures {
        Measures {
            peculiar: self.peculiar().clone(),
            levenshtein: self.levenshtein().clone(),
            damerau: self.damerau().clone(),
            weighted: self.weighted().clone(),
            weighted_reference: self.weighted_reference().clone(),
            similarity: self.similarity().clone(),
        }
    }
}

/// Every metric's outcome for one input, one field per metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Measures {
    pub peculiar: Outcome,
    pub levenshtein: Outcome,
    pub damerau: Outcome,
    pub weighted: Outcome,
    pub weighted_reference: Outcome,
    pub similarity: Outcome,
}

impl Measures {
    pub const NAMES: [&'static str; 6] = [
        "peculiar",
        "levenshtein",
        "damerau",
        "weighted",
        "weighted_reference",
        "similarity",
    ];

    pub fn get(&self, name: &str) -> Option<&Outcome> {
        match name {
            "peculiar" => Some(&self.peculiar),
            "levenshtein" => Some(&self.levenshtein),
            "damerau" => Some(&self.damerau),
            "weighted" => Some(&self.weighted),
            "weighted_reference" => Some(&self.weighted_reference),
            "similarity" => Some(&self.similarity),
            _ => None,
        }
    }

    /// `(name, outcome)` pairs in [`Measures::NAMES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Outcome)> {
        [
            &self.peculiar,
            &self.levenshtein,
            &self.damerau,
            &self.weighted,
            &self.weighted_reference,
            &self.similarity,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| (Self::NAMES[i], outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compact::CompactError,
        lang::{Guess, RUS},
    };

    #[test]
    fn profiles_once_up_front() {
        let metrics = MetricSet::default();
        let session = Session::new("Привет, мир!", &metrics);
        assert_eq!(session.raw(), "Привет, мир!");
        assert_eq!(session.cleaned(), "приветмир");
        assert_eq!(session.signature().as_str(), "рипветм");
    }

    #[test]
    fn metrics_are_memoized() {
        let metrics = MetricSet::default();
        let session = Session::new("Привет, мир!", &metrics);
        let first: *const Outcome = session.levenshtein();
        let second: *const Outcome = session.levenshtein();
        assert!(std::ptr::eq(first, second));
        assert_eq!(
            session.levenshtein().as_ref().map(|r| r.result.guess),
            Ok(Guess::Lang(RUS))
        );
    }

    #[test]
    fn empty_signal_becomes_undecided() {
        let metrics = MetricSet::default();
        let session = Session::new("12345 !!!", &metrics);
        for (name, outcome) in session.measures().iter() {
            let report = outcome.as_ref().unwrap();
            assert_eq!(report.name, name);
            assert!(report.result.guess.is_default(), "{name}");
            assert_eq!(report.result.confidence, 0.0);
        }
    }

    #[test]
    fn exhausted_byte_space_is_kept_as_error() {
        // 200 distinct CJK ideographs: letters, but far beyond the byte budget.
        let text: String = ('\u{4E00}'..='\u{4EC7}').collect();
        let metrics = MetricSet::default();
        let session = Session::new(&text, &metrics);
        let exhausted = Err(MetricError::ByteSpaceExhausted(
            CompactError::ByteSpaceExhausted { limit: 127 },
        ));
        assert_eq!(session.levenshtein(), &exhausted);
        assert_eq!(session.damerau(), &exhausted);
        assert_eq!(session.similarity(), &exhausted);
        assert!(session.peculiar().is_ok());
        assert!(session.weighted().is_ok());
    }

    #[test]
    fn fallback_used_when_weighted_is_undecided() {
        let metrics = MetricSet::default();
        let session = Session::new("", &metrics);
        let fallback = session.weighted_or_fallback().as_ref().unwrap();
        assert_eq!(fallback.name, "weighted_reference");

        let session = Session::new("Привет, мир!", &metrics);
        let primary = session.weighted_or_fallback().as_ref().unwrap();
        assert_eq!(primary.name, "weighted");
    }

    #[test]
    fn measures_lookup_by_name() {
        let metrics = MetricSet::default();
        let session = Session::new("Hola, ha dicho un hombre extraño.", &metrics);
        let measures = session.measures();
        for name in Measures::NAMES {
            assert!(measures.get(name).is_some(), "{name}");
        }
        assert!(measures.get("trigram").is_none());
        assert_eq!(measures.iter().count(), 6);
        assert_eq!(measures.get("damerau"), Some(&measures.damerau));
    }
}
