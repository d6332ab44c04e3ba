//! Ensemble vote over the per-metric winners.

use crate::{lang::Guess, session::Session};
use smallvec::SmallVec;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// The weighted positional result, falling back to its
    /// reference-weighted variant when undecided.
    #[default]
    WeightedFirst,
    /// The most frequent winner across the voting metrics.
    Majority,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::WeightedFirst => "weighted-first",
            Policy::Majority => "majority",
        })
    }
}

/// Votes per guess, in the order each guess was first cast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: SmallVec<[(Guess, usize); 5]>,
}

impl Tally {
    pub fn record(&mut self, guess: Guess) {
        match self.counts.iter_mut().find(|(g, _)| *g == guess) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((guess, 1)),
        }
    }

    /// Total votes cast.
    pub fn cast(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    pub fn count(&self, guess: Guess) -> usize {
        self.counts
            .iter()
            .find(|(g, _)| *g == guess)
            .map_or(0, |&(_, n)| n)
    }

    /// Most votes first; equal counts keep encounter order.
    pub fn ranked(&self) -> SmallVec<[(Guess, usize); 5]> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (Guess, usize)> + '_ {
        self.counts.iter().copied()
    }
}

impl FromIterator<Guess> for Tally {
    fn from_iter<I: IntoIterator<Item = Guess>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for guess in iter {
            tally.record(guess);
        }
        tally
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub guess: Guess,
    pub confidence: f64,
    pub policy: Policy,
}

impl Verdict {
    pub const fn undecided(policy: Policy) -> Self {
        Self {
            guess: Guess::Default,
            confidence: 0.0,
            policy,
        }
    }
}

/// Winners of peculiar count, Levenshtein, Damerau-Levenshtein, weighted
/// (or its fallback) and similarity. A metric that failed casts no vote.
pub fn tally(session: &Session<'_>) -> Tally {
    [
        session.peculiar(),
        session.levenshtein(),
        session.damerau(),
        session.weighted_or_fallback(),
        session.similarity(),
    ]
    .into_iter()
    .filter_map(|outcome| outcome.as_ref().ok())
    .map(|report| report.result.guess)
    .collect()
}

/// Top of the tally, passing over a leading `Default` when a language
/// follows it. Confidence is the winner's share of the votes cast, or 0
/// when nothing but `Default` was voted.
pub fn majority(tally: &Tally) -> Verdict {
    let ranked = tally.ranked();
    let winner = match ranked.as_slice() {
        [] => return Verdict::undecided(Policy::Majority),
        [(Guess::Default, _), next, ..] => *next,
        [top, ..] => *top,
    };
    if winner.0.is_default() {
        return Verdict::undecided(Policy::Majority);
    }
    Verdict {
        guess: winner.0,
        confidence: winner.1 as f64 / tally.cast() as f64,
        policy: Policy::Majority,
    }
}

pub fn decide(session: &Session<'_>, policy: Policy) -> Verdict {
    let verdict = match policy {
        Policy::WeightedFirst => match session.weighted_or_fallback() {
            Ok(report) => Verdict {
                guess: report.result.guess,
                confidence: report.result.confidence,
                policy,
            },
            Err(_) => Verdict::undecided(policy),
        },
        Policy::Majority => majority(&tally(session)),
    };
    debug!(
        policy = %verdict.policy,
        guess = %verdict.guess,
        confidence = verdict.confidence,
        "verdict"
    );
    verdict
}
