use crate::{
    lang::{Lang, all_langs},
    metric::{Input, Metric, MetricError, MetricResult},
    normalizer::normalize,
    signature::Signature,
};

/// Assert that a metric satisfies the universal contracts.
///
/// 1. `is_deterministic` → same input, same report
/// 2. `empty_signal_is_undecided` → no letters never picks a language
/// 3. `scores_are_finite` → no NaN, no infinities, no negatives
/// 4. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_metric_contract {
    ($metric:expr) => {{
        let metric = $metric;
        $crate::testing::metric_contract::is_deterministic(&metric);
        $crate::testing::metric_contract::empty_signal_is_undecided(&metric);
        $crate::testing::metric_contract::scores_are_finite(&metric);
        $crate::testing::metric_contract::no_panic_on_mixed_scripts(&metric);
    }};
}

const SAMPLES: &[&str] = &[
    "Привет, сказал странный человек в синих одеждах.",
    "I always loved grid view because I could easily display my record.",
    "Hallo, sagte ein fremder Mann in blauen Gewändern.",
    "Hola, ha dicho un hombre extraño con túnicas azules.",
    "x",
];

const MIXED: &[&str] = &[
    "Привет мир hello Welt ¡hola! straße",
    "北京 Tokyo Москва",
    "ΣΊΣΥΦΟΣ İstanbul",
    "a\u{0301}\u{0308}\u{0303} ñ ß ё",
];

pub fn signature_of(text: &str) -> Signature {
    Signature::from_letters(&normalize(text))
}

/// A text whose signature is exactly `lang`'s table order.
pub fn table_corpus(lang: Lang) -> String {
    let letters = lang.letters();
    letters
        .iter()
        .enumerate()
        .flat_map(|(i, l)| std::iter::repeat_n(l.letter, letters.len() - i))
        .collect()
}

pub fn is_deterministic<M: Metric>(metric: &M) {
    for &text in SAMPLES {
        let sig = signature_of(text);
        let input = Input::new(text, &sig);
        assert_eq!(
            metric.measure(&input),
            metric.measure(&input),
            "{}: non-deterministic on {text:?}",
            metric.name()
        );
    }
}

pub fn empty_signal_is_undecided<M: Metric>(metric: &M) {
    for text in ["", "1234 ... !?", "   "] {
        let sig = signature_of(text);
        let input = Input::new(text, &sig);
        match metric.measure(&input) {
            Err(MetricError::EmptySignal) => {}
            Ok(report) => assert_eq!(
                report.result,
                MetricResult::undecided(),
                "{}: decided on {text:?}",
                metric.name()
            ),
            Err(e) => panic!("{}: unexpected error {e}", metric.name()),
        }
    }
}

pub fn scores_are_finite<M: Metric>(metric: &M) {
    for &text in SAMPLES {
        let sig = signature_of(text);
        let input = Input::new(text, &sig);
        for &lang in all_langs() {
            let score = metric
                .score(&input, lang)
                .unwrap_or_else(|e| panic!("{}: {e} on {text:?}", metric.name()));
            assert!(
                score.is_finite() && score >= 0.0,
                "{}: bad score {score} for {lang} on {text:?}",
                metric.name()
            );
        }
    }
}

pub fn no_panic_on_mixed_scripts<M: Metric>(metric: &M) {
    for &text in MIXED {
        let sig = signature_of(text);
        let input = Input::new(text, &sig);
        let _ = metric.measure(&input);
    }
}

/// Score of `lang`'s own table corpus against `lang`.
pub fn self_match_score<M: Metric>(metric: &M, lang: Lang) -> f64 {
    let text = table_corpus(lang);
    let sig = Signature::from_letters(&text);
    let input = Input::new(&text, &sig);
    metric
        .score(&input, lang)
        .unwrap_or_else(|e| panic!("{}: {e} on {lang} corpus", metric.name()))
}
