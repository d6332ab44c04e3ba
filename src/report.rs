use crate::{
    lang::all_langs,
    session::{Measures, Session},
    vote::{Tally, Verdict, tally},
};
use std::fmt;

/// Everything one classification computed, for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub signature: String,
    /// Per-letter share of the normalized text, in signature order.
    pub frequencies: Vec<(char, f64)>,
    pub measures: Measures,
    pub tally: Tally,
    pub verdict: Verdict,
}

impl Report {
    pub(crate) fn new(session: &Session<'_>, verdict: Verdict) -> Self {
        Self {
            signature: session.signature().as_str().to_owned(),
            frequencies: session.signature().frequencies().to_vec(),
            measures: session.measures(),
            tally: tally(session),
            verdict,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "signature: {}", self.signature)?;
        for (name, outcome) in self.measures.iter() {
            match outcome {
                Ok(report) => {
                    write!(
                        f,
                        "{name:<20}{:<9}{:>10.4}  ",
                        report.result.guess.code(),
                        report.result.confidence
                    )?;
                    for &lang in all_langs() {
                        if let Some(score) = report.score(lang) {
                            write!(f, " {lang}={score:.4}")?;
                        }
                    }
                    writeln!(f)?;
                }
                Err(err) => writeln!(f, "{name:<20}skipped: {err}")?,
            }
        }
        write!(f, "votes:")?;
        for (guess, n) in self.tally.iter() {
            write!(f, " {guess}={n}")?;
        }
        writeln!(f)?;
        write!(
            f,
            "verdict ({}): {} {:.4}",
            self.verdict.policy, self.verdict.guess, self.verdict.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Detector, lang::Guess};

    #[test]
    fn display_lists_every_metric() {
        let report = Detector::default().classify_detailed("Hallo, sagte ein fremder Mann.");
        let text = report.to_string();
        for name in crate::session::Measures::NAMES {
            assert!(text.contains(name), "{name} missing from\n{text}");
        }
        assert!(text.starts_with(&format!("signature: {}\n", report.signature)));
        assert!(text.contains("verdict (weighted-first): "));
    }

    #[test]
    fn frequencies_follow_signature() {
        let report = Detector::default().classify_detailed("Привет, мир!");
        let letters: String = report.frequencies.iter().map(|&(c, _)| c).collect();
        assert_eq!(letters, report.signature);
        let sum: f64 = report.frequencies.iter().map(|&(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(report.verdict.guess, Guess::Lang(crate::lang::RUS));
    }

    #[test]
    fn skipped_metrics_are_shown() {
        let text: String = ('\u{4E00}'..='\u{4EC7}').collect();
        let report = Detector::default().classify_detailed(&text);
        assert!(report.to_string().contains("skipped: "));
        assert_eq!(report.tally.cast(), 2);
    }
}
