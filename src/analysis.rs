//! One full pass: load, normalize, count, verify.

use crate::claims::{self, Report};
use crate::config::{AllahMode, Config, PatternStyle};
use crate::counter::{Counter, Tally};
use crate::error::{Error, Result};
use crate::facts::{self, Fact};
use crate::normalize::{bismillah_letter_count, normalize};
use crate::patterns::{Overlap, PatternLibrary, Target};
use log::{info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use whatlang::Script;

/// Allah count(s) for the configured [`AllahMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AllahCount {
    Strict { strict: u64 },
    Expanded { expanded: u64 },
    Both { strict: u64, expanded: u64 },
}

impl AllahCount {
    pub fn strict(&self) -> Option<u64> {
        match *self {
            AllahCount::Strict { strict } | AllahCount::Both { strict, .. } => Some(strict),
            AllahCount::Expanded { .. } => None,
        }
    }

    pub fn expanded(&self) -> Option<u64> {
        match *self {
            AllahCount::Expanded { expanded } | AllahCount::Both { expanded, .. } => Some(expanded),
            AllahCount::Strict { .. } => None,
        }
    }

    /// The count compared against the Allah claim. In `Both` mode that is the
    /// strict count.
    pub fn claim_value(&self) -> u64 {
        match *self {
            AllahCount::Strict { strict } | AllahCount::Both { strict, .. } => strict,
            AllahCount::Expanded { expanded } => expanded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCounts {
    pub ism: u64,
    pub allah: AllahCount,
    pub rahman: u64,
    pub rahim: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub config: Config,
    /// Pattern family actually used, with `auto` resolved.
    pub pattern_style: PatternStyle,
    pub bismillah_letters: u64,
    pub counts: WordCounts,
    pub tallies: Vec<Tally>,
    pub overlaps: Vec<Overlap>,
    pub facts: Vec<Fact>,
    pub report: Report,
}

/// Read the whole corpus into memory.
pub fn load_corpus(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })
}

struct Run<'a> {
    text: &'a str,
    library: PatternLibrary,
    counter: Counter,
    tallies: Vec<Tally>,
    overlaps: Vec<Overlap>,
}

impl Run<'_> {
    fn count(&mut self, target: Target) -> Result<u64> {
        let set = self.library.get(target).compile()?;

        let overlaps = set.overlaps(self.text)?;
        if !overlaps.is_empty() {
            warn!(
                "{} patterns overlap in {} places; the total double counts them",
                set.name,
                overlaps.len()
            );
        }
        self.overlaps.extend(overlaps);

        let tally = self.counter.tally(self.text, &set)?;
        let total = tally.total;
        self.tallies.push(tally);
        Ok(total)
    }
}

fn check_script(corpus: &str) {
    match whatlang::detect_script(corpus) {
        Some(Script::Arabic) => {}
        Some(script) => warn!("corpus is mostly {} script, not Arabic", script.name()),
        None if !corpus.trim().is_empty() => warn!("could not detect the corpus script"),
        None => warn!("corpus is empty"),
    }
}

/// Run the whole pipeline over an in-memory corpus.
pub fn analyze(corpus: &str, config: &Config) -> Result<Analysis> {
    check_script(corpus);

    let text = normalize(corpus, config);
    info!(
        "normalized {} chars to {} chars",
        corpus.chars().count(),
        text.chars().count()
    );

    let pattern_style = config.effective_pattern_style();
    let mut run = Run {
        text: &text,
        library: PatternLibrary::new(pattern_style),
        counter: Counter::new(config),
        tallies: Vec::new(),
        overlaps: Vec::new(),
    };

    let ism = run.count(Target::Ism)?;
    let allah = match config.allah_mode {
        AllahMode::Strict => AllahCount::Strict {
            strict: run.count(Target::AllahStrict)?,
        },
        AllahMode::Expanded => AllahCount::Expanded {
            expanded: run.count(Target::AllahExpanded)?,
        },
        AllahMode::Both => AllahCount::Both {
            strict: run.count(Target::AllahStrict)?,
            expanded: run.count(Target::AllahExpanded)?,
        },
    };
    let rahman = run.count(Target::Rahman)?;
    let rahim = run.count(Target::Rahim)?;
    let bismillah_letters = bismillah_letter_count(config);

    let actual: HashMap<String, u64> = [
        (claims::BISMILLAH_LETTERS, bismillah_letters),
        (claims::ISM, ism),
        (claims::ALLAH, allah.claim_value()),
        (claims::RAHMAN, rahman),
        (claims::RAHIM, rahim),
    ]
    .into_iter()
    .map(|(label, count)| (label.to_string(), count))
    .collect();
    let report = claims::verify(&actual, &claims::historical_claims())?;
    info!("{}", report.summary());

    Ok(Analysis {
        config: config.clone(),
        pattern_style,
        bismillah_letters,
        counts: WordCounts {
            ism,
            allah,
            rahman,
            rahim,
        },
        tallies: run.tallies,
        overlaps: run.overlaps,
        facts: facts::reference_facts(),
        report,
    })
}

/// Load `path` and analyze it. Fails only when the file cannot be read.
pub fn run(path: &Path, config: &Config) -> Result<Analysis> {
    info!("loading corpus from {}", path.display());
    let corpus = load_corpus(path)?;
    analyze(&corpus, config)
}
