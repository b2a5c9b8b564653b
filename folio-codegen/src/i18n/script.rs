//! Script detection for translatable strings.

use folio_core::Locale;

/// Writing system of a source locale.
///
/// A string is translatable when it contains at least one character of the
/// source locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// CJK unified ideographs (`zh`).
    Han,
    /// Hiragana and katakana, plus Han ideographs (`ja`).
    Kana,
    /// Hangul syllables and jamo (`ko`).
    Hangul,
    /// Cyrillic (`ru`, `uk`, `bg`, ...).
    Cyrillic,
    /// Arabic (`ar`, `fa`, `ur`).
    Arabic,
    /// Any non-ASCII character, for locales without a dedicated range.
    NonAscii,
}

impl Script {
    /// Script used by the given source locale.
    pub fn for_locale(locale: &Locale) -> Self {
        match locale.language() {
            "zh" | "yue" => Script::Han,
            "ja" => Script::Kana,
            "ko" => Script::Hangul,
            "ru" | "uk" | "bg" | "be" | "sr" | "mk" | "kk" | "ky" | "mn" => Script::Cyrillic,
            "ar" | "fa" | "ur" | "ps" => Script::Arabic,
            _ => Script::NonAscii,
        }
    }

    /// Check whether `c` belongs to this script.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Script::Han => is_han(c),
            Script::Kana => is_kana(c) || is_han(c),
            Script::Hangul => matches!(
                c,
                '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}'
            ),
            Script::Cyrillic => matches!(c, '\u{0400}'..='\u{052F}'),
            Script::Arabic => matches!(
                c,
                '\u{0600}'..='\u{06FF}'
                    | '\u{0750}'..='\u{077F}'
                    | '\u{FB50}'..='\u{FDFF}'
                    | '\u{FE70}'..='\u{FEFF}'
            ),
            Script::NonAscii => !c.is_ascii(),
        }
    }

    /// Check whether `s` is translatable in this script.
    ///
    /// Blank strings are never translatable.
    pub fn is_translatable(&self, s: &str) -> bool {
        !s.trim().is_empty() && s.chars().any(|c| self.contains(c))
    }
}

fn is_han(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2EBEF}'
            | '\u{30000}'..='\u{3134F}'
    )
}

fn is_kana(c: char) -> bool {
    matches!(
        c,
        '\u{3040}'..='\u{309F}'
            | '\u{30A0}'..='\u{30FF}'
            | '\u{31F0}'..='\u{31FF}'
            | '\u{FF66}'..='\u{FF9F}'
    )
}
