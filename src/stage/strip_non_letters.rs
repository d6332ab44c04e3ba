use crate::stage::Stage;
use std::borrow::Cow;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Keeps letters (general category `L*`) only; whitespace, digits,
/// punctuation, letter-like numerals (`Ⅻ`) and symbols (`Ⓐ`) go, leaving one
/// contiguous run of letters.
pub struct StripNonLetters;

#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl Stage for StripNonLetters {
    fn name(&self) -> &'static str {
        "strip_non_letters"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        !text.chars().all(is_letter)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| is_letter(c)).collect())
    }
}
