use crate::stage::Stage;
use std::borrow::Cow;

/// Full Unicode lowercasing (`str::to_lowercase`, final-sigma aware).
pub struct LowerCase;

#[inline(always)]
fn needs_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    c.to_lowercase().next() != Some(c)
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(needs_lowercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for LowerCase {
        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("HELLO", "hello"),
                ("Привет", "привет"),
                ("GEWÄNDERN", "gewändern"),
                ("ΟΔΟΣ", "οδος"),
            ]
        }
    }

    #[test]
    fn contract() {
        assert_stage_contract!(LowerCase);
    }

    #[test]
    fn zero_copy_when_already_lower() {
        let input = "already lower, ñandú";
        let out = LowerCase.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn final_sigma() {
        assert_eq!(LowerCase.apply(Cow::Borrowed("ΟΔΟΣ")), "οδος");
    }
}
