//! Historical claims and their verification against computed counts.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;

pub const BISMILLAH_LETTERS: &str = "Bismillah letters";
pub const ISM: &str = "Ism";
pub const ALLAH: &str = "Allah";
pub const RAHMAN: &str = "Rahman";
pub const RAHIM: &str = "Rahim";

/// A claimed total for a labelled count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expectation {
    pub label: String,
    pub expected: u64,
}

impl Expectation {
    pub fn new(label: impl Into<String>, expected: u64) -> Self {
        Self {
            label: label.into(),
            expected,
        }
    }
}

/// The totals asserted for the Bismillah words, all multiples of 19.
pub fn historical_claims() -> Vec<Expectation> {
    vec![
        Expectation::new(BISMILLAH_LETTERS, 19),
        Expectation::new(ISM, 19),
        Expectation::new(ALLAH, 2698),
        Expectation::new(RAHMAN, 57),
        Expectation::new(RAHIM, 114),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    pub label: String,
    pub expected: u64,
    pub actual: u64,
}

impl Claim {
    pub fn new(label: impl Into<String>, expected: u64, actual: u64) -> Self {
        Self {
            label: label.into(),
            expected,
            actual,
        }
    }
}

/// Pair each expectation with its computed count, keeping expectation order.
pub fn assemble(expected: &[Expectation], actual: &HashMap<String, u64>) -> Result<Vec<Claim>> {
    expected
        .iter()
        .map(|e| {
            actual
                .get(&e.label)
                .map(|&count| Claim::new(e.label.clone(), e.expected, count))
                .ok_or_else(|| Error::MissingCount(e.label.clone()))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimRow {
    pub label: String,
    pub expected: u64,
    pub actual: u64,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub rows: Vec<ClaimRow>,
    pub matched: usize,
    pub total: usize,
}

impl Report {
    pub fn from_claims(claims: &[Claim]) -> Self {
        let rows: Vec<ClaimRow> = claims
            .iter()
            .map(|c| ClaimRow {
                label: c.label.clone(),
                expected: c.expected,
                actual: c.actual,
                matched: c.expected == c.actual,
            })
            .collect();
        let matched = rows.iter().filter(|r| r.matched).count();

        Self {
            total: rows.len(),
            rows,
            matched,
        }
    }

    pub fn summary(&self) -> String {
        format!("{}/{} claims verified", self.matched, self.total)
    }

    pub fn all_matched(&self) -> bool {
        self.matched == self.total
    }
}

/// Compare computed counts with the claimed ones, exact equality only.
pub fn verify(actual: &HashMap<String, u64>, expected: &[Expectation]) -> Result<Report> {
    let claims = assemble(expected, actual)?;
    Ok(Report::from_claims(&claims))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_two_claims_verified() {
        let report = Report::from_claims(&[Claim::new("A", 19, 19), Claim::new("B", 5, 3)]);
        let matched: Vec<bool> = report.rows.iter().map(|r| r.matched).collect();
        assert_eq!(matched, vec![true, false]);
        assert_eq!(report.summary(), "1/2 claims verified");
        assert!(!report.all_matched());
    }

    #[test]
    fn verify_keeps_expectation_order() {
        let actual = HashMap::from([("B".to_string(), 3), ("A".to_string(), 19)]);
        let expected = vec![Expectation::new("A", 19), Expectation::new("B", 5)];
        let report = verify(&actual, &expected).unwrap();

        assert_eq!(report.rows[0].label, "A");
        assert_eq!(report.rows[1].label, "B");
        assert_eq!(report.rows[1].actual, 3);
        assert_eq!(report.summary(), "1/2 claims verified");
    }

    #[test]
    fn missing_actual_is_reported_before_comparison() {
        let actual = HashMap::from([("A".to_string(), 19)]);
        let expected = vec![Expectation::new("A", 19), Expectation::new("B", 5)];
        match verify(&actual, &expected) {
            Err(Error::MissingCount(label)) => assert_eq!(label, "B"),
            other => panic!("expected MissingCount, got {other:?}"),
        }
    }

    #[test]
    fn empty_report() {
        let report = Report::from_claims(&[]);
        assert_eq!(report.summary(), "0/0 claims verified");
        assert!(report.all_matched());
    }

    #[test]
    fn historical_values_are_multiples_of_nineteen() {
        let claims = historical_claims();
        assert_eq!(claims.len(), 5);
        assert!(claims.iter().all(|c| c.expected % 19 == 0));
    }
}
