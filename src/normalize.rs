//! Arabic text normalization.

use crate::config::Config;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// The Bismillah with standard vowel marks, shadda and superscript alef.
pub const BISMILLAH: &str = "\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650} \
\u{0627}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650} \
\u{0627}\u{0644}\u{0631}\u{0651}\u{064E}\u{062D}\u{0652}\u{0645}\u{064E}\u{0670}\u{0646}\u{0650} \
\u{0627}\u{0644}\u{0631}\u{0651}\u{064E}\u{062D}\u{0650}\u{064A}\u{0645}\u{0650}";

/// Diacritic ranges as a regex character class body.
pub(crate) const DIACRITIC_CLASS: &str = "\u{064B}-\u{0652}\u{0670}\u{06D6}-\u{06ED}";

// Compiled once; every pattern here is a constant
lazy_static! {
    static ref NON_ARABIC: Regex = Regex::new("[^\u{0600}-\u{06FF}\\s]").unwrap();
    static ref DIACRITICS: Regex = Regex::new(&format!("[{DIACRITIC_CLASS}]")).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Short vowels, tanween, sukun, shadda, superscript alef and the Quranic
/// annotation marks.
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

/// Normalize `text` according to `config`.
///
/// Steps, each gated by its flag: NFKC fold, non-Arabic removal, diacritic
/// stripping. Whitespace is always collapsed to single spaces and trimmed.
/// Applying the function to its own output returns the output unchanged.
pub fn normalize(text: &str, config: &Config) -> String {
    let mut result = if config.fold_compat_forms {
        text.nfkc().collect::<String>()
    } else {
        text.to_string()
    };

    if config.remove_non_arabic {
        result = NON_ARABIC.replace_all(&result, "").into_owned();
    }

    if config.strip_diacritics {
        result = DIACRITICS.replace_all(&result, "").into_owned();
    }

    // Removal can leave a base letter next to a mark it composes with
    if config.fold_compat_forms {
        result = result.nfc().collect();
    }

    WHITESPACE.replace_all(&result, " ").trim().to_string()
}

/// Count letters, ignoring whitespace, punctuation and diacritics.
pub fn letter_count(text: &str) -> u64 {
    text.chars()
        .filter(|&c| c.is_alphabetic() && !is_diacritic(c))
        .count() as u64
}

/// Letters left in the Bismillah after normalizing it the same way as the corpus.
pub fn bismillah_letter_count(config: &Config) -> u64 {
    letter_count(&normalize(BISMILLAH, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bismillah_has_nineteen_letters() {
        let config = Config::default();
        let plain = normalize(BISMILLAH, &config);
        assert_eq!(plain, "بسم الله الرحمن الرحيم");
        assert_eq!(letter_count(&plain), 19);
        assert_eq!(bismillah_letter_count(&config), 19);
    }

    #[test]
    fn bismillah_letters_ignore_marks_when_kept() {
        let config = Config {
            strip_diacritics: false,
            ..Config::default()
        };
        assert_eq!(normalize(BISMILLAH, &config), BISMILLAH);
        assert_eq!(bismillah_letter_count(&config), 19);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("", &Config::default()), "");
    }

    #[test]
    fn non_arabic_only_input_becomes_empty() {
        assert_eq!(normalize("Chapter 1: The Opening", &Config::default()), "");
    }

    #[test]
    fn removes_latin_digits_and_collapses_whitespace() {
        let text = "  1|1| بسم   الله\n\nالرحمن\t(footnote) الرحيم  ";
        assert_eq!(normalize(text, &Config::default()), "بسم الله الرحمن الرحيم");
    }

    #[test]
    fn keeps_non_arabic_when_disabled() {
        let config = Config {
            remove_non_arabic: false,
            ..Config::default()
        };
        assert_eq!(normalize("a  بِسْمِ b", &config), "a بسم b");
    }

    #[test]
    fn folds_allah_ligature() {
        let config = Config {
            fold_compat_forms: true,
            ..Config::default()
        };
        assert_eq!(normalize("\u{FDF2}", &config), "الله");
        assert_eq!(normalize("\u{FDF2}", &Config::default()), "");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        let configs = [
            Config::default(),
            Config {
                strip_diacritics: false,
                ..Config::default()
            },
            Config {
                fold_compat_forms: true,
                ..Config::default()
            },
            Config {
                remove_non_arabic: false,
                strip_diacritics: false,
                ..Config::default()
            },
        ];
        let samples = [BISMILLAH, "  قُلْ هُوَ ٱللَّهُ أَحَدٌ ۝١ ", "\u{FDF2} abc \u{FEFB}", ""];

        for config in &configs {
            for sample in samples {
                let once = normalize(sample, config);
                assert_eq!(normalize(&once, config), once, "config {config:?}");
            }
        }
    }

    proptest::proptest! {
        #[test]
        fn normalize_is_idempotent(
            chars in proptest::collection::vec(
                proptest::sample::select(vec![
                    ' ', '\n', '\t', 'ا', 'ل', 'ه', 'م', 'س', 'ب', 'آ', 'ٱ',
                    '\u{064E}', '\u{0650}', '\u{0651}', '\u{0653}', '\u{0670}', '\u{06DD}',
                    'a', 'Z', '7', '|', '\u{FDF2}', '\u{FEFB}',
                ]),
                0..48,
            ),
            strip_diacritics in proptest::bool::ANY,
            remove_non_arabic in proptest::bool::ANY,
            fold_compat_forms in proptest::bool::ANY,
        ) {
            let text: String = chars.into_iter().collect();
            let config = Config {
                strip_diacritics,
                remove_non_arabic,
                fold_compat_forms,
                ..Config::default()
            };
            let once = normalize(&text, &config);
            proptest::prop_assert_eq!(normalize(&once, &config), once);
        }
    }

    #[test]
    fn diacritic_ranges() {
        assert!(is_diacritic('\u{064E}'));
        assert!(is_diacritic('\u{0651}'));
        assert!(is_diacritic('\u{0670}'));
        assert!(is_diacritic('\u{06DD}'));
        assert!(!is_diacritic('ا'));
        assert!(!is_diacritic('\u{0653}'));
    }
}
