use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            " déjà-vu ",
            "TEST",
            "",
            "Вы не видали еще",
            "Gewa\u{0308}ndern",
            "¿Qué pasó?",
        ]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal contracts.
///
/// 1. `zero_copy_when_no_changes` → borrowed output when `needs_apply` is false
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → `needs_apply` predicts whether `apply` changes text
/// 4. `produces_expected_output` → every `should_transform` pair holds
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::produces_expected_output(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

fn all_inputs<S: StageTestConfig>() -> impl Iterator<Item = &'static str> {
    S::samples()
        .iter()
        .copied()
        .chain(S::should_transform().iter().map(|(input, _)| *input))
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for input in all_inputs::<S>() {
        if stage.needs_apply(input) {
            continue;
        }
        let out = stage.apply(Cow::Borrowed(input));
        assert!(
            matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
            "{}: allocated for unchanged input {input:?}",
            stage.name()
        );
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for input in all_inputs::<S>() {
        let once = stage.apply(Cow::Borrowed(input)).into_owned();
        let twice = stage.apply(Cow::Borrowed(once.as_str())).into_owned();
        assert_eq!(once, twice, "{}: not idempotent on {input:?}", stage.name());
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for input in all_inputs::<S>() {
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(
            stage.needs_apply(input),
            out != input,
            "{}: needs_apply wrong for {input:?}",
            stage.name()
        );
    }
}

pub fn produces_expected_output<S: StageTestConfig>(stage: &S) {
    for &(input, expected) in S::should_transform() {
        assert_eq!(
            stage.apply(Cow::Borrowed(input)),
            expected,
            "{}: unexpected output for {input:?}",
            stage.name()
        );
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let inputs = [
        "Привет мир hello Welt ¡hola!",
        "北京 Tokyo Москва",
        "a\u{0301}\u{0308}\u{0303}",
        "\u{0301}leading mark",
        "ΣΊΣΥΦΟΣ İstanbul ǅemal",
        "\u{200B}\u{FEFF}\t\r\n",
    ];
    for input in inputs {
        let _ = stage.apply(Cow::Borrowed(input));
    }
}
