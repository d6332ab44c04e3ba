//! Letter-frequency language guessing for English, German, Spanish and
//! Russian.
//!
//! ```
//! use lingo::{Guess, RUS, classify};
//!
//! assert_eq!(
//!     classify("Привет, сказал странный человек в синих одеждах."),
//!     Guess::Lang(RUS)
//! );
//! ```

pub mod compact;
pub mod detector;
pub mod lang;
pub mod metric;
pub mod normalizer;
pub mod report;
pub mod session;
pub mod signature;
pub mod stage;
pub mod vote;

pub use compact::{ByteCompactor, CompactError};
pub use detector::{Detector, DetectorBuilder, LingoError};
pub use lang::{DEU, ENG, Guess, Lang, RUS, SPA, all_langs, from_code};
pub use metric::{Metric, MetricError, MetricReport, MetricResult};
pub use normalizer::{Normalizer, normalize};
pub use report::Report;
pub use session::{Measures, Session};
pub use signature::Signature;
pub use vote::{Policy, Tally, Verdict};

use std::sync::LazyLock;

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::default);

/// Guesses the language of `text` with the default [`Detector`].
///
/// Never fails; text with no usable letters yields [`Guess::Default`].
pub fn classify(text: &str) -> Guess {
    DEFAULT_DETECTOR.classify(text)
}

/// [`classify`], keeping every intermediate measure.
pub fn classify_detailed(text: &str) -> Report {
    DEFAULT_DETECTOR.classify_detailed(text)
}
