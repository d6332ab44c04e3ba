//! Damerau-Levenshtein (optimal string alignment) distance.
//!
//! Three strategies sit behind [`EditDistance`]:
//!
//! * [`UnitCostMatrix`] – the canonical full `(n+1)×(m+1)` table.
//! * [`UnitCostRows`] – keeps only three rows; same distances, less memory.
//!   The default when the `fast-damerau` feature is on.
//! * [`WeightedCost`] – configurable per-operation costs. With
//!   [`EditCosts::UNIT`] it agrees with the other two.

use crate::{
    compact::compact_pair,
    lang::Lang,
    metric::{Input, Metric, MetricError, Ranking},
};
use std::sync::Arc;

/// Distance between two compacted byte strings.
pub trait EditDistance: Send + Sync {
    fn name(&self) -> &'static str;
    fn distance(&self, a: &[u8], b: &[u8]) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCosts {
    pub insert: usize,
    pub delete: usize,
    pub substitute: usize,
    pub transpose: usize,
}

impl EditCosts {
    pub const UNIT: Self = Self {
        insert: 1,
        delete: 1,
        substitute: 1,
        transpose: 1,
    };

    /// Transpositions ten times as expensive as any other edit.
    pub const HEAVY_TRANSPOSE: Self = Self {
        insert: 1,
        delete: 1,
        substitute: 1,
        transpose: 10,
    };
}

impl Default for EditCosts {
    fn default() -> Self {
        Self::UNIT
    }
}

#[inline(always)]
fn is_transposition(a: &[u8], b: &[u8], i: usize, j: usize) -> bool {
    i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCostMatrix;

impl EditDistance for UnitCostMatrix {
    fn name(&self) -> &'static str {
        "unit_cost_matrix"
    }

    fn distance(&self, a: &[u8], b: &[u8]) -> usize {
        let (n, m) = (a.len(), b.len());
        if n == 0 {
            return m;
        }
        if m == 0 {
            return n;
        }

        let mut d = vec![vec![0usize; m + 1]; n + 1];
        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in d[0].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..=n {
            for j in 1..=m {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                d[i][j] = (d[i - 1][j] + 1)
                    .min(d[i][j - 1] + 1)
                    .min(d[i - 1][j - 1] + cost);
                if is_transposition(a, b, i, j) {
                    d[i][j] = d[i][j].min(d[i - 2][j - 2] + cost);
                }
            }
        }
        d[n][m]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCostRows;

impl EditDistance for UnitCostRows {
    fn name(&self) -> &'static str {
        "unit_cost_rows"
    }

    fn distance(&self, a: &[u8], b: &[u8]) -> usize {
        let (n, m) = (a.len(), b.len());
        if n == 0 {
            return m;
        }
        if m == 0 {
            return n;
        }

        // Rows i-2, i-1 and i.
        let mut before: Vec<usize> = vec![0; m + 1];
        let mut prev: Vec<usize> = (0..=m).collect();
        let mut cur: Vec<usize> = vec![0; m + 1];

        for i in 1..=n {
            cur[0] = i;
            for j in 1..=m {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
                if is_transposition(a, b, i, j) {
                    cur[j] = cur[j].min(before[j - 2] + cost);
                }
            }
            std::mem::swap(&mut before, &mut prev);
            std::mem::swap(&mut prev, &mut cur);
        }
        prev[m]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedCost {
    pub costs: EditCosts,
}

impl WeightedCost {
    pub const fn new(costs: EditCosts) -> Self {
        Self { costs }
    }
}

impl EditDistance for WeightedCost {
    fn name(&self) -> &'static str {
        "weighted_cost"
    }

    fn distance(&self, a: &[u8], b: &[u8]) -> usize {
        let EditCosts {
            insert,
            delete,
            substitute,
            transpose,
        } = self.costs;
        let (n, m) = (a.len(), b.len());

        let mut d = vec![vec![0usize; m + 1]; n + 1];
        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i * delete;
        }
        for (j, cell) in d[0].iter_mut().enumerate() {
            *cell = j * insert;
        }

        for i in 1..=n {
            for j in 1..=m {
                let same = a[i - 1] == b[j - 1];
                let sub = if same { 0 } else { substitute };
                d[i][j] = (d[i - 1][j] + delete)
                    .min(d[i][j - 1] + insert)
                    .min(d[i - 1][j - 1] + sub);
                if is_transposition(a, b, i, j) {
                    let swap = if same { 0 } else { transpose };
                    d[i][j] = d[i][j].min(d[i - 2][j - 2] + swap);
                }
            }
        }
        d[n][m]
    }
}

/// The strategy used when none is configured.
pub fn default_strategy() -> Arc<dyn EditDistance> {
    if cfg!(feature = "fast-damerau") {
        Arc::new(UnitCostRows)
    } else {
        Arc::new(UnitCostMatrix)
    }
}

/// Damerau-Levenshtein distance between the input signature and each
/// language's reference signature.
#[derive(Clone)]
pub struct DamerauLevenshtein {
    strategy: Arc<dyn EditDistance>,
}

impl Default for DamerauLevenshtein {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
        }
    }
}

impl DamerauLevenshtein {
    pub fn with_strategy<T: EditDistance + 'static>(strategy: T) -> Self {
        Self {
            strategy: Arc::new(strategy),
        }
    }

    pub fn strategy(&self) -> &dyn EditDistance {
        self.strategy.as_ref()
    }
}

impl Metric for DamerauLevenshtein {
    fn name(&self) -> &'static str {
        "damerau"
    }

    fn ranking(&self) -> Ranking {
        Ranking::Lowest
    }

    fn score(&self, input: &Input<'_>, lang: Lang) -> Result<f64, MetricError> {
        let signature = input.signal()?;
        let (a, b) = compact_pair(signature.as_str(), &signature.reference(lang))?;
        Ok(self.strategy.distance(&a, &b) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_metric_contract, lang::all_langs, testing::metric_contract::self_match_score,
    };

    const PAIRS: &[(&[u8], &[u8], usize)] = &[
        (b"ca", b"abc", 3),
        (b"ab", b"ba", 1),
        (b"abcdef", b"abdcef", 1),
        (b"kitten", b"sitting", 3),
        (b"", b"xyz", 3),
        (b"xyz", b"", 3),
        (b"etaoin", b"etaoin", 0),
    ];

    fn strategies() -> [Box<dyn EditDistance>; 3] {
        [
            Box::new(UnitCostMatrix),
            Box::new(UnitCostRows),
            Box::new(WeightedCost::new(EditCosts::UNIT)),
        ]
    }

    #[test]
    fn contract() {
        assert_metric_contract!(DamerauLevenshtein::with_strategy(UnitCostMatrix));
        assert_metric_contract!(DamerauLevenshtein::with_strategy(UnitCostRows));
    }

    #[test]
    fn known_distances() {
        for strategy in strategies() {
            for &(a, b, expected) in PAIRS {
                assert_eq!(
                    strategy.distance(a, b),
                    expected,
                    "{} on {:?}/{:?}",
                    strategy.name(),
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn heavy_transpose_prefers_two_substitutions() {
        let weighted = WeightedCost::new(EditCosts::HEAVY_TRANSPOSE);
        assert_eq!(weighted.distance(b"ab", b"ba"), 2);
        assert_eq!(weighted.distance(b"kitten", b"sitting"), 3);
    }

    #[test]
    fn custom_insert_delete_costs() {
        let weighted = WeightedCost::new(EditCosts {
            insert: 2,
            delete: 3,
            substitute: 10,
            transpose: 1,
        });
        assert_eq!(weighted.distance(b"", b"ab"), 4);
        assert_eq!(weighted.distance(b"ab", b""), 6);
        // Substitution is dearer than delete + insert.
        assert_eq!(weighted.distance(b"a", b"b"), 5);
    }

    #[test]
    fn default_strategy_follows_feature() {
        let expected = if cfg!(feature = "fast-damerau") {
            "unit_cost_rows"
        } else {
            "unit_cost_matrix"
        };
        assert_eq!(DamerauLevenshtein::default().strategy().name(), expected);
    }

    #[test]
    fn self_match_is_zero() {
        for &lang in all_langs() {
            for metric in [
                DamerauLevenshtein::with_strategy(UnitCostMatrix),
                DamerauLevenshtein::with_strategy(UnitCostRows),
                DamerauLevenshtein::with_strategy(WeightedCost::new(EditCosts::HEAVY_TRANSPOSE)),
            ] {
                assert_eq!(self_match_score(&metric, lang), 0.0, "{lang}");
            }
        }
    }
}
