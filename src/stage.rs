//! Normalization stage abstraction.
//!
//! Every stage is a zero-sized struct that rewrites text through `Cow<str>`:
//! when `needs_apply` reports nothing to do the input comes back borrowed,
//! so already-clean text is never copied.
//!
//! Stages cannot fail. Anything they do not understand is either kept
//! (`LowerCase`) or dropped (`ResolveDiacritics`, `StripNonLetters`).

pub mod lower_case;
pub mod resolve_diacritics;
pub mod strip_non_letters;

pub use lower_case::LowerCase;
pub use resolve_diacritics::ResolveDiacritics;
pub use strip_non_letters::StripNonLetters;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and reports.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` means `apply` would return the
    /// input unchanged.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
