//! Run configuration.
//!
//! Every knob that changes normalization or counting lives in [`Config`], which
//! is built once before a run and passed by reference to each stage.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which Allah count(s) a run computes and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AllahMode {
    /// Standalone form only
    Strict,
    /// Standalone form plus vocative and proclitic variants
    Expanded,
    /// Report both; only the strict count is checked against the claim
    #[default]
    Both,
}

/// Which family of patterns the counter uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PatternStyle {
    /// `\bWORD\b` patterns; only reliable on text without diacritics
    Literal,
    /// Root-letter patterns tolerant of interleaved diacritics
    Root,
    /// Literal when diacritics are stripped, root otherwise
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remove Arabic combining marks before counting. Default: `true`.
    pub strip_diacritics: bool,
    /// Remove everything outside the Arabic block except whitespace. Default: `true`.
    pub remove_non_arabic: bool,
    /// NFKC-fold presentation forms and ligatures first. Default: `false`.
    pub fold_compat_forms: bool,
    pub allah_mode: AllahMode,
    pub pattern_style: PatternStyle,
    /// Log per-pattern match counts. Default: `false`.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            remove_non_arabic: true,
            fold_compat_forms: false,
            allah_mode: AllahMode::default(),
            pattern_style: PatternStyle::default(),
            debug: false,
        }
    }
}

impl Config {
    /// Resolves [`PatternStyle::Auto`] against the diacritic setting.
    pub fn effective_pattern_style(&self) -> PatternStyle {
        match self.pattern_style {
            PatternStyle::Auto if self.strip_diacritics => PatternStyle::Literal,
            PatternStyle::Auto => PatternStyle::Root,
            style => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert!(config.strip_diacritics);
        assert!(config.remove_non_arabic);
        assert!(!config.fold_compat_forms);
        assert_eq!(config.allah_mode, AllahMode::Both);
        assert!(!config.debug);
    }

    #[test]
    fn auto_style_follows_diacritic_setting() {
        let mut config = Config::default();
        assert_eq!(config.effective_pattern_style(), PatternStyle::Literal);

        config.strip_diacritics = false;
        assert_eq!(config.effective_pattern_style(), PatternStyle::Root);

        config.pattern_style = PatternStyle::Literal;
        assert_eq!(config.effective_pattern_style(), PatternStyle::Literal);
    }
}
