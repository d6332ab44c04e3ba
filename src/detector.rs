use thiserror::Error;

use crate::{
    lang::Guess,
    metric::{DamerauLevenshtein, EditDistance, MetricSet},
    report::Report,
    session::Session,
    vote::{Policy, Verdict, decide},
};
#[cfg(feature = "simd")]
use simdutf8::basic::from_utf8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LingoError {
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// A configured classifier. Holds no per-call state, so one instance can
/// serve any number of threads.
#[derive(Default)]
pub struct Detector {
    metrics: MetricSet,
    policy: Policy,
}

impl Detector {
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::default()
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    /// A fresh session over `text`, for callers that want individual metrics.
    pub fn session<'a>(&'a self, text: &'a str) -> Session<'a> {
        Session::new(text, &self.metrics)
    }

    pub fn verdict(&self, text: &str) -> Verdict {
        decide(&self.session(text), self.policy)
    }

    pub fn classify(&self, text: &str) -> Guess {
        self.verdict(text).guess
    }

    /// Classifies and keeps every intermediate measure.
    pub fn classify_detailed(&self, text: &str) -> Report {
        let session = self.session(text);
        let verdict = decide(&session, self.policy);
        Report::new(&session, verdict)
    }

    /// [`Detector::classify`] over raw bytes, which must be valid UTF-8.
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<Guess, LingoError> {
        #[cfg(feature = "simd")]
        let text = from_utf8(bytes).map_err(|e| LingoError::InvalidUtf8(e.to_string()))?;
        #[cfg(not(feature = "simd"))]
        let text =
            std::str::from_utf8(bytes).map_err(|e| LingoError::InvalidUtf8(e.to_string()))?;
        Ok(self.classify(text))
    }
}

#[derive(Default)]
pub struct DetectorBuilder {
    policy: Policy,
    damerau: Option<DamerauLevenshtein>,
}

impl DetectorBuilder {
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the default Damerau-Levenshtein strategy.
    pub fn damerau<T: EditDistance + 'static>(mut self, strategy: T) -> Self {
        self.damerau = Some(DamerauLevenshtein::with_strategy(strategy));
        self
    }

    pub fn build(self) -> Detector {
        let mut metrics = MetricSet::default();
        if let Some(damerau) = self.damerau {
            metrics.damerau = damerau;
        }
        Detector {
            metrics,
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lang::{DEU, SPA},
        metric::{EditCosts, UnitCostMatrix, WeightedCost},
    };

    #[test]
    fn builder_defaults() {
        let detector = Detector::builder().build();
        assert_eq!(detector.policy(), Policy::WeightedFirst);
        assert_eq!(
            detector.metrics().damerau.strategy().name(),
            DamerauLevenshtein::default().strategy().name()
        );
    }

    #[test]
    fn builder_sets_policy_and_strategy() {
        let detector = Detector::builder()
            .policy(Policy::Majority)
            .damerau(WeightedCost::new(EditCosts::HEAVY_TRANSPOSE))
            .build();
        assert_eq!(detector.policy(), Policy::Majority);
        assert_eq!(detector.metrics().damerau.strategy().name(), "weighted_cost");

        let detector = Detector::builder().damerau(UnitCostMatrix).build();
        assert_eq!(
            detector.metrics().damerau.strategy().name(),
            "unit_cost_matrix"
        );
    }

    #[test]
    fn verdict_carries_policy() {
        let detector = Detector::builder().policy(Policy::Majority).build();
        let verdict = detector.verdict("Hallo, sagte ein fremder Mann in blauen Gewändern.");
        assert_eq!(verdict.policy, Policy::Majority);
        assert_eq!(verdict.guess, Guess::Lang(DEU));
        assert!(verdict.confidence > 0.5 && verdict.confidence <= 1.0);
    }

    #[test]
    fn classify_bytes_accepts_utf8() {
        let text = "Hola, ha dicho un hombre extraño con túnicas azules.";
        assert_eq!(
            Detector::default().classify_bytes(text.as_bytes()),
            Ok(Guess::Lang(SPA))
        );
    }

    #[test]
    fn classify_bytes_rejects_invalid_utf8() {
        let bytes = [b'h', b'o', 0xC3, 0x28, b'l', b'a'];
        assert!(matches!(
            Detector::default().classify_bytes(&bytes),
            Err(LingoError::InvalidUtf8(_))
        ));
    }
}
