//! Word counts for the Bismillah vocabulary in an Arabic corpus, checked
//! against the historical 19-based totals.
//!
//! The pipeline is [`normalize`](mod@normalize) → [`counter`] over
//! [`patterns`] → [`claims`] verification; [`analysis`] runs it end to end and
//! [`report`] renders the result.

pub mod analysis;
pub mod claims;
pub mod config;
pub mod counter;
pub mod error;
pub mod facts;
pub mod normalize;
pub mod patterns;
pub mod report;

#[cfg(feature = "python")]
mod python;

pub use analysis::{AllahCount, Analysis, WordCounts, analyze, load_corpus, run};
pub use claims::{Claim, ClaimRow, Expectation, Report, historical_claims, verify};
pub use config::{AllahMode, Config, PatternStyle};
pub use counter::{Counter, Tally, count};
pub use error::{Error, Result};
pub use normalize::{letter_count, normalize};
pub use patterns::{PatternLibrary, PatternSet, Target};
