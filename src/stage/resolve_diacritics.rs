//! src/stage/resolve_diacritics.rs
//!
//! Recomposes the combining sequences the supported alphabets use and drops
//! every word that still looks foreign afterwards.

use crate::{
    lang::{data::DIACRITIC_RULES, is_foreign_accent},
    stage::Stage,
};
use std::borrow::Cow;
use unicode_normalization::char::is_combining_mark;

/// Canonicalizes known accent sequences, then removes foreign words.
///
/// # Rules
///
/// - `a`, `o`, `u` followed by a combining acute (U+0301 or U+0341) or a
///   combining diaeresis (U+0308) become `á`/`ä`, `ó`/`ö`, `ú`/`ü`.
/// - `i` and `e` followed by a combining acute become `í` and `é`.
/// - A word (maximal non-whitespace run) still carrying any combining mark
///   is dropped: such words are usually names or toponyms.
/// - A word with a precomposed Latin-1 accented letter that no supported
///   table contains (`ç`, `è`, `ø`, ...) is dropped for the same reason.
///
/// Whitespace between words is kept, so word boundaries survive.
pub struct ResolveDiacritics;

#[inline(always)]
fn is_suspect(c: char) -> bool {
    is_combining_mark(c) || is_foreign_accent(c)
}

fn recompose(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(&mark) = chars.peek()
            && let Some(rule) = DIACRITIC_RULES.iter().find(|r| r.matches(c, mark))
        {
            out.push(rule.to);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

fn push_word(word: &str, out: &mut String) {
    if !word.chars().any(is_suspect) {
        out.push_str(word);
    }
}

fn keep_native_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                push_word(&text[start..i], &mut out);
            }
            out.push(c);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        push_word(&text[start..], &mut out);
    }
    out
}

impl Stage for ResolveDiacritics {
    fn name(&self) -> &'static str {
        "resolve_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return false;
        }
        text.chars().any(is_suspect)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(keep_native_words(&recompose(&text)))
    }
}
