use crate::{
    lang::{Lang, peculiar_letters},
    metric::{Input, Metric, MetricError, Ranking},
};

/// Counts letters only one supported language uses (`ñ`, `ß`, Cyrillic).
///
/// Works on the raw input: accented words that normalization would drop
/// still count here, and so does nothing but exact-case matches.
pub struct PeculiarCount;

impl Metric for PeculiarCount {
    fn name(&self) -> &'static str {
        "peculiar"
    }

    fn ranking(&self) -> Ranking {
        Ranking::Highest
    }

    fn score(&self, input: &Input<'_>, lang: Lang) -> Result<f64, MetricError> {
        let peculiar = peculiar_letters(lang);
        if peculiar.is_empty() {
            return Ok(0.0);
        }
        let count = input.raw.chars().filter(|c| peculiar.contains(c)).count();
        Ok(count as f64)
    }
}
