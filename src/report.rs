//! Text and JSON rendering of an [`Analysis`].

use crate::analysis::{AllahCount, Analysis};
use crate::claims::Report;
use crate::facts::Fact;
use crate::patterns;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(analysis)),
        OutputFormat::Json => serde_json::to_string_pretty(analysis).map(|json| json + "\n"),
    }
}

fn times_19(fact: &Fact) -> String {
    fact.multiple_of_19
        .map(|k| format!(" (19×{k})"))
        .unwrap_or_default()
}

pub fn render_table(analysis: &Analysis) -> String {
    let mut out = String::new();
    let counts = &analysis.counts;

    // writeln! into a String cannot fail
    let _ = writeln!(
        out,
        "Bismillah letter count (should be 19): {}",
        analysis.bismillah_letters
    );

    let _ = writeln!(out, "\n--- WORD COUNTS ---");
    let _ = writeln!(out, "Ism ({}) [no pronoun forms]: {}", patterns::ISM, counts.ism);
    match counts.allah {
        AllahCount::Both { strict, expanded } => {
            let _ = writeln!(out, "Allah ({}) [Strict]: {strict}", patterns::ALLAH);
            let _ = writeln!(out, "Allah ({}) [Expanded]: {expanded}", patterns::ALLAH);
        }
        AllahCount::Strict { strict } => {
            let _ = writeln!(out, "Allah ({}) [Strict]: {strict}", patterns::ALLAH);
        }
        AllahCount::Expanded { expanded } => {
            let _ = writeln!(out, "Allah ({}) [Expanded]: {expanded}", patterns::ALLAH);
        }
    }
    let _ = writeln!(out, "Rahman ({}): {}", patterns::RAHMAN, counts.rahman);
    let _ = writeln!(out, "Rahim ({}): {}", patterns::RAHIM, counts.rahim);

    let _ = writeln!(out, "\n--- KNOWN BULLET DATA ---");
    for fact in &analysis.facts {
        let _ = writeln!(out, "{}: {}{}", fact.label, fact.value, times_19(fact));
    }

    let _ = writeln!(out);
    out.push_str(&render_claims(&analysis.report));
    out
}

/// The Pattern/Expected/Actual/Matched table followed by the summary line.
pub fn render_claims(report: &Report) -> String {
    let width = report
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .chain(std::iter::once("PATTERN".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>10}  {:>10}  MATCHED",
        "PATTERN", "EXPECTED", "ACTUAL"
    );
    let _ = writeln!(out, "{}", "-".repeat(width + 33));
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<width$}  {:>10}  {:>10}  {}",
            row.label,
            row.expected,
            row.actual,
            if row.matched { "yes" } else { "no" }
        );
    }
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "{}", report.summary());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::claims::Claim;
    use crate::config::{AllahMode, Config};

    #[test]
    fn claims_table_layout() {
        let report = Report::from_claims(&[Claim::new("A", 19, 19), Claim::new("B", 5, 3)]);
        let text = render_claims(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "PATTERN    EXPECTED      ACTUAL  MATCHED");
        assert_eq!(lines[2], "A                19          19  yes");
        assert_eq!(lines[3], "B                 5           3  no");
        assert_eq!(lines.last(), Some(&"1/2 claims verified"));
    }

    #[test]
    fn table_lists_both_allah_counts() {
        let analysis = analyze("الله والله بالله", &Config::default()).unwrap();
        let text = render_table(&analysis);

        assert!(text.starts_with("Bismillah letter count (should be 19): 19\n"));
        assert!(text.contains("Allah (الله) [Strict]: 1\n"));
        assert!(text.contains("Allah (الله) [Expanded]: 3\n"));
        assert!(text.contains("Cross-sum of 6346: 19 (19×1)\n"));
        assert!(text.ends_with("1/5 claims verified\n"));
    }

    #[test]
    fn strict_mode_omits_expanded_line() {
        let config = Config {
            allah_mode: AllahMode::Strict,
            ..Config::default()
        };
        let analysis = analyze("الله", &config).unwrap();
        let text = render_table(&analysis);
        assert!(text.contains("[Strict]: 1"));
        assert!(!text.contains("[Expanded]"));
    }

    #[test]
    fn json_carries_tagged_allah_count() {
        let analysis = analyze("الله والله", &Config::default()).unwrap();
        let json = render(&analysis, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["counts"]["allah"]["mode"], "both");
        assert_eq!(value["counts"]["allah"]["strict"], 1);
        assert_eq!(value["counts"]["allah"]["expanded"], 2);
        assert_eq!(value["report"]["total"], 5);
        assert_eq!(value["pattern_style"], "literal");
    }
}
