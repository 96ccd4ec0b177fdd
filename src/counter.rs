//! Summing pattern matches over normalized text.

use crate::config::Config;
use crate::error::Result;
use crate::patterns::{CompiledPatternSet, PatternSet};
use log::debug;
use serde::Serialize;

/// Match counts for one pattern list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub name: String,
    pub total: u64,
    /// `(pattern source, matches)` in list order
    pub per_pattern: Vec<(String, u64)>,
}

pub struct Counter {
    debug: bool,
}

impl Counter {
    pub fn new(config: &Config) -> Self {
        Self {
            debug: config.debug,
        }
    }

    /// Count non-overlapping matches of every pattern in `set` and sum them.
    pub fn tally(&self, text: &str, set: &CompiledPatternSet) -> Result<Tally> {
        let mut per_pattern = Vec::with_capacity(set.patterns.len());
        let mut total = 0;

        for pattern in &set.patterns {
            let found = pattern.spans(text)?.len() as u64;
            if self.debug {
                debug!("[{}] pattern '{}' found {} matches", set.name, pattern.source, found);
            }
            total += found;
            per_pattern.push((pattern.source.clone(), found));
        }

        Ok(Tally {
            name: set.name.clone(),
            total,
            per_pattern,
        })
    }
}

/// Total matches of `patterns` in `text`. Zero for an empty list.
pub fn count<S: AsRef<str>>(text: &str, patterns: &[S]) -> Result<u64> {
    let set = PatternSet::new(
        "adhoc",
        patterns.iter().map(|p| p.as_ref().to_string()).collect(),
    )
    .compile()?;
    Ok(Counter { debug: false }.tally(text, &set)?.total)
}
