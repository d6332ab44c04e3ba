use crate::lang::{DiacriticRule, Lang, LangEntry, LetterFreq};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        letters: [ $($l:literal => $p:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    // Ordered by descending corpus frequency.
                    pub const LETTERS: &[LetterFreq] = &[
                        $(LetterFreq { letter: $l, percent: $p }),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        lang: $code,
                        letters: [<$code:lower _data>]::LETTERS,
                    }
                ),*
            };
        }

        /// Every supported language, in declaration order. Ranking ties are
        /// resolved in this order.
        pub static ALL_LANGS: &[Lang] = &[$($code),*];

        // Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let lower = code.to_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Latin alphabets: en.wikipedia.org/wiki/Letter_frequency
//    Russian: sttmedia.com/characterfrequency-russian
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "en", "English",
        letters: [
            'e' => 12.70, 't' => 9.05, 'a' => 8.16, 'o' => 7.50,
            'i' => 6.96, 'n' => 6.74, 's' => 6.32, 'h' => 6.09,
            'r' => 5.98, 'd' => 4.25, 'l' => 4.02, 'c' => 2.78,
            'u' => 2.75, 'm' => 2.40, 'w' => 2.36, 'f' => 2.22,
            'g' => 2.01, 'y' => 1.97, 'p' => 1.92, 'b' => 1.49,
            'v' => 0.97, 'k' => 0.77, 'j' => 0.15, 'x' => 0.15,
            'q' => 0.09, 'z' => 0.07,
        ],

    DEU, "de", "German",
        letters: [
            'e' => 17.39, 'n' => 9.77, 'i' => 7.55, 's' => 7.27,
            'r' => 7.00, 'a' => 6.51, 't' => 6.15, 'd' => 5.07,
            'h' => 4.75, 'u' => 4.34, 'l' => 3.43, 'g' => 3.00,
            'c' => 2.73, 'o' => 2.59, 'm' => 2.53, 'w' => 1.92,
            'b' => 1.88, 'f' => 1.65, 'k' => 1.41, 'z' => 1.13,
            'ü' => 0.99, 'v' => 0.84, 'p' => 0.67, 'ö' => 0.57,
            'ä' => 0.44, 'ß' => 0.30, 'j' => 0.26, 'y' => 0.03,
            'x' => 0.03, 'q' => 0.01,
        ],

    SPA, "es", "Spanish",
        letters: [
            'e' => 13.68, 'a' => 12.52, 'o' => 8.68, 's' => 7.97,
            'r' => 6.87, 'n' => 6.71, 'i' => 6.24, 'd' => 5.86,
            'l' => 4.96, 't' => 4.63, 'c' => 4.13, 'u' => 3.92,
            'm' => 3.15, 'p' => 2.51, 'b' => 2.21, 'g' => 1.76,
            'v' => 1.13, 'y' => 1.00, 'q' => 0.87, 'ó' => 0.82,
            'í' => 0.72, 'h' => 0.70, 'f' => 0.69, 'z' => 0.51,
            'á' => 0.50, 'j' => 0.44, 'é' => 0.43, 'ñ' => 0.31,
            'x' => 0.21, 'ú' => 0.16, 'w' => 0.01, 'ü' => 0.01,
            'k' => 0.0,
        ],

    RUS, "ru", "Russian",
        letters: [
            'о' => 11.07, 'е' => 8.50, 'а' => 7.50, 'и' => 7.09,
            'н' => 6.70, 'т' => 5.97, 'с' => 4.97, 'л' => 4.96,
            'в' => 4.33, 'р' => 4.33, 'к' => 3.30, 'м' => 3.10,
            'д' => 3.09, 'п' => 2.47, 'ы' => 2.36, 'у' => 2.22,
            'б' => 2.01, 'я' => 1.96, 'ь' => 1.84, 'г' => 1.72,
            'з' => 1.48, 'ч' => 1.40, 'й' => 1.21, 'ж' => 1.01,
            'х' => 0.95, 'ш' => 0.72, 'ю' => 0.47, 'ц' => 0.39,
            'э' => 0.36, 'щ' => 0.30, 'ф' => 0.21, 'ё' => 0.20,
            'ъ' => 0.02,
        ],
}

const ACUTE: &[char] = &['\u{0301}', '\u{0341}'];
const DIAERESIS: &[char] = &['\u{0308}'];

/// Combining sequences recomposed before analysis. Anything else carrying a
/// combining mark is treated as a foreign word and dropped.
pub static DIACRITIC_RULES: &[DiacriticRule] = &[
    DiacriticRule { base: 'a', marks: ACUTE, to: 'á' },
    DiacriticRule { base: 'a', marks: DIAERESIS, to: 'ä' },
    DiacriticRule { base: 'o', marks: ACUTE, to: 'ó' },
    DiacriticRule { base: 'o', marks: DIAERESIS, to: 'ö' },
    DiacriticRule { base: 'u', marks: ACUTE, to: 'ú' },
    DiacriticRule { base: 'u', marks: DIAERESIS, to: 'ü' },
    DiacriticRule { base: 'i', marks: ACUTE, to: 'í' },
    DiacriticRule { base: 'e', marks: ACUTE, to: 'é' },
];

/// Lowercase precomposed Latin-1 letters. Those missing from every letter
/// table mark a word as foreign.
pub const LATIN1_ACCENTED: &[char] = &[
    'ß', 'à', 'á', 'â', 'ã', 'ä', 'å', 'æ', 'ç', 'è', 'é', 'ê', 'ë', 'ì', 'í', 'î', 'ï', 'ð',
    'ñ', 'ò', 'ó', 'ô', 'õ', 'ö', 'ø', 'ù', 'ú', 'û', 'ü', 'ý', 'þ', 'ÿ',
];

/// Padding used when a reference signature is shorter than the input's.
/// Never survives normalization, so it never matches an input letter.
pub const PLACEHOLDER: char = '0';
