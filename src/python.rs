//! Python bindings, built with the `python` feature.

use crate::config::{AllahMode, Config, PatternStyle};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::Path;

fn to_py_err(err: crate::Error) -> PyErr {
    match err {
        crate::Error::Input { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn parse_mode(mode: &str) -> PyResult<AllahMode> {
    match mode {
        "strict" => Ok(AllahMode::Strict),
        "expanded" => Ok(AllahMode::Expanded),
        "both" => Ok(AllahMode::Both),
        other => Err(PyValueError::new_err(format!(
            "allah_mode must be strict, expanded or both, got {other}"
        ))),
    }
}

fn build_config(strip_diacritics: bool, remove_non_arabic: bool, allah_mode: &str) -> PyResult<Config> {
    Ok(Config {
        strip_diacritics,
        remove_non_arabic,
        allah_mode: parse_mode(allah_mode)?,
        pattern_style: PatternStyle::Auto,
        ..Config::default()
    })
}

/// Normalize Arabic text
#[pyfunction]
#[pyo3(signature = (text, strip_diacritics=true, remove_non_arabic=true))]
fn normalize_text(text: &str, strip_diacritics: bool, remove_non_arabic: bool) -> PyResult<String> {
    let config = build_config(strip_diacritics, remove_non_arabic, "both")?;
    Ok(crate::normalize(text, &config))
}

/// Sum of non-overlapping matches of every pattern
#[pyfunction]
fn count_patterns(text: &str, patterns: Vec<String>) -> PyResult<u64> {
    crate::count(text, &patterns).map_err(to_py_err)
}

/// Letters in the normalized Bismillah
#[pyfunction]
#[pyo3(signature = (strip_diacritics=true))]
fn bismillah_letters(strip_diacritics: bool) -> PyResult<u64> {
    let config = build_config(strip_diacritics, true, "both")?;
    Ok(crate::normalize::bismillah_letter_count(&config))
}

fn claim_rows(analysis: &crate::Analysis) -> HashMap<String, (u64, u64, bool)> {
    analysis
        .report
        .rows
        .iter()
        .map(|r| (r.label.clone(), (r.expected, r.actual, r.matched)))
        .collect()
}

/// Analyze text in memory
/// Returns: HashMap<label, (expected, actual, matched)>
#[pyfunction]
#[pyo3(signature = (text, allah_mode="both", strip_diacritics=true, remove_non_arabic=true))]
fn analyze_text(
    text: &str,
    allah_mode: &str,
    strip_diacritics: bool,
    remove_non_arabic: bool,
) -> PyResult<HashMap<String, (u64, u64, bool)>> {
    let config = build_config(strip_diacritics, remove_non_arabic, allah_mode)?;
    let analysis = crate::analyze(text, &config).map_err(to_py_err)?;
    Ok(claim_rows(&analysis))
}

/// Analyze a corpus file
/// Returns: HashMap<label, (expected, actual, matched)>
#[pyfunction]
#[pyo3(signature = (file_path, allah_mode="both", strip_diacritics=true, remove_non_arabic=true))]
fn analyze_file(
    file_path: String,
    allah_mode: &str,
    strip_diacritics: bool,
    remove_non_arabic: bool,
) -> PyResult<HashMap<String, (u64, u64, bool)>> {
    let config = build_config(strip_diacritics, remove_non_arabic, allah_mode)?;
    let analysis = crate::run(Path::new(&file_path), &config).map_err(to_py_err)?;
    Ok(claim_rows(&analysis))
}

#[pymodule]
fn quran_claims(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_text, m)?)?;
    m.add_function(wrap_pyfunction!(count_patterns, m)?)?;
    m.add_function(wrap_pyfunction!(bismillah_letters, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_text, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_file, m)?)?;
    Ok(())
}
