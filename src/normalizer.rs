// src/normalizer.rs
use crate::stage::{LowerCase, ResolveDiacritics, Stage, StripNonLetters};
use std::borrow::Cow;
use tracing::trace;

/// Case folding, diacritic resolution and letter extraction, in that order.
///
/// Diacritics are resolved after lowercasing so the rules only need the
/// lowercase bases, and before stripping so that word boundaries are still
/// visible when foreign words are dropped.
pub struct Normalizer {
    stages: [&'static dyn Stage; 3],
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            stages: [&LowerCase, &ResolveDiacritics, &StripNonLetters],
        }
    }
}

impl Normalizer {
    pub fn stages(&self) -> impl Iterator<Item = &'static dyn Stage> + '_ {
        self.stages.iter().copied()
    }

    /// Runs every stage; the result is a single run of letters.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current) {
                continue;
            }
            current = stage.apply(current);
            trace!(stage = stage.name(), output = %current, "stage applied");
        }

        current
    }
}

/// Shorthand for `Normalizer::default().normalize(text)`.
pub fn normalize(text: &str) -> Cow<'_, str> {
    Normalizer::default().normalize(text)
}
