//! Pattern lists for the counted words.
//!
//! Patterns are kept as regex source strings so a list can be inspected,
//! logged and extended without touching the counting code. Two families are
//! provided:
//!
//! - literal: `\bWORD\b`, for text with diacritics removed
//! - root: the consonantal skeleton of WORD with any run of diacritics allowed
//!   after each letter, bounded by lookaround on letters and marks
//!
//! `\b` is not used for the root family because a combining mark is a word
//! character to the regex engine, so a boundary can fall between a letter and
//! its own vowel sign.

use crate::config::PatternStyle;
use crate::error::{Error, Result};
use crate::normalize::{DIACRITIC_CLASS, is_diacritic};
use fancy_regex::Regex;
use serde::Serialize;

pub const ISM: &str = "اسم";
pub const ALLAH: &str = "الله";
pub const RAHMAN: &str = "الرحمن";
pub const RAHIM: &str = "الرحيم";

/// Vocative and proclitic forms counted by the expanded Allah target.
pub const ALLAH_VARIANTS: &[&str] = &[
    "اللهم", // vocative
    "بالله",
    "والله",
    "فلله",
    "تالله",
];

/// A counted word, or word family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    Ism,
    AllahStrict,
    AllahExpanded,
    Rahman,
    Rahim,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::Ism,
        Target::AllahStrict,
        Target::AllahExpanded,
        Target::Rahman,
        Target::Rahim,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Ism => "Ism",
            Target::AllahStrict => "Allah-strict",
            Target::AllahExpanded => "Allah-expanded",
            Target::Rahman => "Rahman",
            Target::Rahim => "Rahim",
        }
    }

    /// Surface forms matched for this target, primary form first.
    pub fn words(self) -> Vec<&'static str> {
        match self {
            Target::Ism => vec![ISM],
            Target::AllahStrict => vec![ALLAH],
            Target::AllahExpanded => std::iter::once(ALLAH)
                .chain(ALLAH_VARIANTS.iter().copied())
                .collect(),
            Target::Rahman => vec![RAHMAN],
            Target::Rahim => vec![RAHIM],
        }
    }
}

/// `\bWORD\b`
pub fn literal_pattern(word: &str) -> String {
    format!(r"\b{}\b", fancy_regex::escape(word))
}

/// Base letters of `word`, each followed by an optional run of diacritics,
/// with no letter or mark directly before or after the whole match.
pub fn root_pattern(word: &str) -> String {
    let mut pattern = String::from(r"(?<![\p{L}\p{M}])");
    for letter in word.chars().filter(|&c| !is_diacritic(c)) {
        pattern.push_str(&fancy_regex::escape(&letter.to_string()));
        pattern.push('[');
        pattern.push_str(DIACRITIC_CLASS);
        pattern.push_str("]*");
    }
    pattern.push_str(r"(?![\p{L}\p{M}])");
    pattern
}

/// A named, ordered list of pattern sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternSet {
    pub name: String,
    pub patterns: Vec<String>,
}

impl PatternSet {
    pub fn new(name: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            patterns,
        }
    }

    pub fn for_target(target: Target, style: PatternStyle) -> Self {
        let build: fn(&str) -> String = match style {
            PatternStyle::Root => root_pattern,
            PatternStyle::Literal | PatternStyle::Auto => literal_pattern,
        };
        let patterns = target.words().into_iter().map(build).collect();
        Self::new(target.name(), patterns)
    }

    pub fn compile(&self) -> Result<CompiledPatternSet> {
        let patterns = self
            .patterns
            .iter()
            .map(|source| {
                Regex::new(source)
                    .map(|regex| CompiledPattern {
                        source: source.clone(),
                        regex,
                    })
                    .map_err(|e| Error::Pattern {
                        pattern: source.clone(),
                        source: Box::new(e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledPatternSet {
            name: self.name.clone(),
            patterns,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub source: String,
    pub regex: Regex,
}

impl CompiledPattern {
    /// Byte spans of all non-overlapping matches, left to right.
    pub fn spans(&self, text: &str) -> Result<Vec<(usize, usize)>> {
        self.regex
            .find_iter(text)
            .map(|m| {
                m.map(|m| (m.start(), m.end())).map_err(|e| Error::Match {
                    pattern: self.source.clone(),
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CompiledPatternSet {
    pub name: String,
    pub patterns: Vec<CompiledPattern>,
}

/// Two patterns of one list matching intersecting text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub set: String,
    pub first: String,
    pub second: String,
    /// Byte range shared by both matches.
    pub start: usize,
    pub end: usize,
}

impl CompiledPatternSet {
    /// Every place where matches from two different patterns in this list
    /// intersect. An empty result means the list counted `text` without
    /// double counting.
    pub fn overlaps(&self, text: &str) -> Result<Vec<Overlap>> {
        let mut spans = Vec::new();
        for (idx, pattern) in self.patterns.iter().enumerate() {
            spans.extend(
                pattern
                    .spans(text)?
                    .into_iter()
                    .map(|(start, end)| (start, end, idx)),
            );
        }
        spans.sort_unstable();

        let mut overlaps = Vec::new();
        for (i, &(start, end, idx)) in spans.iter().enumerate() {
            for &(other_start, other_end, other_idx) in &spans[i + 1..] {
                if other_start >= end {
                    break;
                }
                if other_idx != idx {
                    let (first, second) = if idx < other_idx {
                        (idx, other_idx)
                    } else {
                        (other_idx, idx)
                    };
                    overlaps.push(Overlap {
                        set: self.name.clone(),
                        first: self.patterns[first].source.clone(),
                        second: self.patterns[second].source.clone(),
                        start: other_start.max(start),
                        end: other_end.min(end),
                    });
                }
            }
        }
        Ok(overlaps)
    }
}

/// The pattern sets for every [`Target`] in one style.
#[derive(Debug, Clone, Serialize)]
pub struct PatternLibrary {
    pub style: PatternStyle,
    sets: Vec<(Target, PatternSet)>,
}

impl PatternLibrary {
    pub fn new(style: PatternStyle) -> Self {
        let sets = Target::ALL
            .iter()
            .map(|&target| (target, PatternSet::for_target(target, style)))
            .collect();
        Self { style, sets }
    }

    pub fn get(&self, target: Target) -> &PatternSet {
        self.sets
            .iter()
            .find_map(|(t, set)| (*t == target).then_some(set))
            .unwrap_or_else(|| unreachable!("every target is built in PatternLibrary::new"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Target, PatternSet)> {
        self.sets.iter()
    }
}
