pub mod data;
pub(crate) mod derived;

pub use data::{ALL_LANGS, DEU, ENG, LANG_TABLE, RUS, SPA, from_code};
pub use derived::{is_foreign_accent, peculiar_letters};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Letter frequency table, most frequent letter first.
    #[inline]
    pub fn letters(&self) -> &'static [LetterFreq] {
        LANG_TABLE
            .get(self.code)
            .map(|e| e.letters)
            .unwrap_or_default()
    }

    #[inline]
    pub fn has_letter(&self, c: char) -> bool {
        self.letters().iter().any(|l| l.letter == c)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Outcome of a single judgement: a supported language, or `Default` when
/// no single language stands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    Lang(Lang),
    Default,
}

impl Guess {
    pub const fn code(&self) -> &'static str {
        match self {
            Guess::Lang(lang) => lang.code,
            Guess::Default => "default",
        }
    }

    pub const fn lang(&self) -> Option<Lang> {
        match self {
            Guess::Lang(lang) => Some(*lang),
            Guess::Default => None,
        }
    }

    #[inline]
    pub const fn is_default(&self) -> bool {
        matches!(self, Guess::Default)
    }
}

impl From<Lang> for Guess {
    fn from(lang: Lang) -> Self {
        Guess::Lang(lang)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterFreq {
    pub letter: char,
    pub percent: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub lang: Lang,
    pub letters: &'static [LetterFreq],
}

/// `base` followed by any of `marks` is rewritten to the precomposed `to`.
#[derive(Clone, Copy, Debug)]
pub struct DiacriticRule {
    pub base: char,
    pub marks: &'static [char],
    pub to: char,
}

impl DiacriticRule {
    #[inline(always)]
    pub fn matches(&self, base: char, mark: char) -> bool {
        self.base == base && self.marks.contains(&mark)
    }
}

#[inline]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}
