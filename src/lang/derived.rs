//! Sets derived once from the letter tables.

use crate::lang::{Lang, all_langs, data::LATIN1_ACCENTED};
use smallvec::SmallVec;
use std::sync::LazyLock;
use unicode_normalization::char::decompose_canonical;

type Letters = SmallVec<[char; 8]>;

/// Letters that occur in exactly one language's table, in table order.
static PECULIAR: LazyLock<Vec<(Lang, Letters)>> = LazyLock::new(|| {
    all_langs()
        .iter()
        .map(|&lang| {
            let own = lang
                .letters()
                .iter()
                .map(|l| l.letter)
                .filter(|&c| {
                    all_langs()
                        .iter()
                        .filter(|&&other| other != lang)
                        .all(|other| !other.has_letter(c))
                })
                .collect();
            (lang, own)
        })
        .collect()
});

/// Precomposed accented letters no supported table uses.
static FOREIGN_ACCENTS: LazyLock<Letters> = LazyLock::new(|| {
    LATIN1_ACCENTED
        .iter()
        .copied()
        .filter(|&c| !all_langs().iter().any(|lang| lang.has_letter(c)))
        .collect()
});

pub fn peculiar_letters(lang: Lang) -> &'static [char] {
    PECULIAR
        .iter()
        .find(|(l, _)| *l == lang)
        .map(|(_, letters)| letters.as_slice())
        .unwrap_or_default()
}

/// An ASCII letter plus combining marks once decomposed (`ř`, `ź`, `ő`).
fn is_accented_latin(c: char) -> bool {
    let mut base = None;
    decompose_canonical(c, |d| {
        base.get_or_insert(d);
    });
    base.is_some_and(|b| b != c && b.is_ascii_alphabetic())
}

/// A precomposed accented letter that no supported table contains: the
/// Latin-1 set (`ç`, `ø`, `þ`, ...) plus any letter that decomposes to an
/// ASCII base and marks (`ř`, `ź`). Letters without a canonical
/// decomposition, such as `ł`, do not count.
#[inline]
pub fn is_foreign_accent(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    FOREIGN_ACCENTS.contains(&c)
        || (is_accented_latin(c) && !all_langs().iter().any(|lang| lang.has_letter(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{DEU, ENG, RUS, SPA};

    #[test]
    fn english_has_no_peculiar_letters() {
        assert!(peculiar_letters(ENG).is_empty());
    }

    #[test]
    fn german_and_spanish_peculiars() {
        assert_eq!(peculiar_letters(DEU), &['ö', 'ä', 'ß']);
        assert_eq!(peculiar_letters(SPA), &['ó', 'í', 'á', 'é', 'ñ', 'ú']);
        // `ü` is shared between German and Spanish.
        assert!(!peculiar_letters(DEU).contains(&'ü'));
    }

    #[test]
    fn whole_cyrillic_table_is_peculiar() {
        assert_eq!(peculiar_letters(RUS).len(), RUS.letters().len());
    }

    #[test]
    fn peculiar_sets_are_disjoint() {
        for &a in all_langs() {
            for &b in all_langs().iter().filter(|&&b| b != a) {
                for c in peculiar_letters(a) {
                    assert!(!peculiar_letters(b).contains(c), "{c} in {a} and {b}");
                }
            }
        }
    }

    #[test]
    fn foreign_accents_exclude_table_letters() {
        for c in ['ß', 'ä', 'ö', 'ü', 'á', 'é', 'í', 'ó', 'ú', 'ñ'] {
            assert!(!is_foreign_accent(c), "{c}");
        }
        for c in ['à', 'ç', 'ê', 'ø', 'å', 'ÿ'] {
            assert!(is_foreign_accent(c), "{c}");
        }
        assert!(!is_foreign_accent('e'));
    }

    #[test]
    fn accented_latin_beyond_latin1_is_foreign() {
        for c in ['ř', 'ź', 'ő', 'ș', 'ā', 'ẽ'] {
            assert!(is_foreign_accent(c), "{c}");
        }
        // No decomposition, no accent.
        assert!(!is_foreign_accent('ł'));
        // Cyrillic bases are never Latin accents.
        assert!(!is_foreign_accent('й'));
        assert!(!is_foreign_accent('ё'));
    }
}
