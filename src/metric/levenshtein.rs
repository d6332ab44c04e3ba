use crate::{
    compact::{CompactError, compact_pair},
    lang::Lang,
    metric::{Input, Metric, MetricError, Ranking},
};

/// Unit-cost edit distance between the input signature and each language's
/// reference signature.
pub struct Levenshtein;

/// Insert, delete and substitute, each at cost 1.
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            cur[j + 1] = (prev[j + 1] + 1).min(cur[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Levenshtein distance over Unicode text via byte compaction.
pub fn levenshtein_str(a: &str, b: &str) -> Result<usize, CompactError> {
    let (a, b) = compact_pair(a, b)?;
    Ok(levenshtein(&a, &b))
}

impl Metric for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn ranking(&self) -> Ranking {
        Ranking::Lowest
    }

    fn score(&self, input: &Input<'_>, lang: Lang) -> Result<f64, MetricError> {
        let signature = input.signal()?;
        let distance = levenshtein_str(signature.as_str(), &signature.reference(lang))?;
        Ok(distance as f64)
    }
}
