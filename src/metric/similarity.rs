use crate::{
    compact::{CompactError, compact_pair},
    lang::Lang,
    metric::{Input, Metric, MetricError, Ranking},
};

/// Longest-common-substring similarity between the input signature and each
/// language's reference signature.
pub struct Similarity;

/// First longest common run: `(start in a, start in b, length)`.
fn longest_common_run(a: &[u8], b: &[u8]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    for i in 0..a.len() {
        for j in 0..b.len() {
            let len = a[i..]
                .iter()
                .zip(&b[j..])
                .take_while(|(x, y)| x == y)
                .count();
            if len > best.2 {
                best = (i, j, len);
            }
        }
    }
    best
}

/// Total length matched by taking the longest common run and recursing into
/// the parts left and right of it.
pub fn similar_len(a: &[u8], b: &[u8]) -> usize {
    let (i, j, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    len + similar_len(&a[..i], &b[..j]) + similar_len(&a[i + len..], &b[j + len..])
}

/// [`similar_len`] over Unicode text via byte compaction.
pub fn similar_len_str(a: &str, b: &str) -> Result<usize, CompactError> {
    let (a, b) = compact_pair(a, b)?;
    Ok(similar_len(&a, &b))
}

impl Metric for Similarity {
    fn name(&self) -> &'static str {
        "similarity"
    }

    fn ranking(&self) -> Ranking {
        Ranking::Highest
    }

    fn score(&self, input: &Input<'_>, lang: Lang) -> Result<f64, MetricError> {
        let signature = input.signal()?;
        let matched = similar_len_str(signature.as_str(), &signature.reference(lang))?;
        Ok(matched as f64)
    }
}
