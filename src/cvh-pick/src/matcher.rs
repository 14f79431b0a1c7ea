//! String similarity scorers
//!
//! Each scorer compares a candidate against the query and reports which way
//! its scores sort, so the ranker never needs to know which one is active.

use std::cmp::Ordering;

use clap::ValueEnum;

/// Which way "better" points for a scorer's output
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Similarity: 1.0 is a perfect match
    HigherIsBetter,
    /// Distance: 0 is a perfect match
    LowerIsBetter,
}

impl Direction {
    /// Order two scores so that the better one comes first
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Direction::HigherIsBetter => b.total_cmp(&a),
            Direction::LowerIsBetter => a.total_cmp(&b),
        }
    }
}

/// A scoring policy
pub trait Scorer {
    fn name(&self) -> &'static str;

    fn direction(&self) -> Direction;

    /// Score `candidate` against `query`
    fn score(&self, candidate: &str, query: &str) -> f64;

    /// Render a score for display next to its candidate
    fn display(&self, score: f64) -> String {
        format!("{:.6}", score)
    }
}

/// Plain Jaro similarity, case-insensitive, no prefix boost
#[derive(Debug, Default, Clone, Copy)]
pub struct Jaro;

impl Scorer for Jaro {
    fn name(&self) -> &'static str {
        "jaro"
    }

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn score(&self, candidate: &str, query: &str) -> f64 {
        jaro(candidate, query)
    }
}

/// Jaro similarity with the Winkler common-prefix boost
#[derive(Debug, Default, Clone, Copy)]
pub struct JaroWinkler;

impl Scorer for JaroWinkler {
    fn name(&self) -> &'static str {
        "jaro-winkler"
    }

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn score(&self, candidate: &str, query: &str) -> f64 {
        jaro_winkler(candidate, query)
    }
}

/// Case-sensitive edit distance
#[derive(Debug, Default, Clone, Copy)]
pub struct Levenshtein;

impl Scorer for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn direction(&self) -> Direction {
        Direction::LowerIsBetter
    }

    fn score(&self, candidate: &str, query: &str) -> f64 {
        levenshtein(candidate, query) as f64
    }

    fn display(&self, score: f64) -> String {
        format!("{:.0}", score)
    }
}

/// Scorer selectable from the command line
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ScorerKind {
    /// Plain Jaro similarity (case-insensitive)
    #[default]
    Jaro,
    /// Jaro similarity with a common-prefix boost
    JaroWinkler,
    /// Levenshtein edit distance (case-sensitive)
    Levenshtein,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn Scorer> {
        match self {
            ScorerKind::Jaro => Box::new(Jaro),
            ScorerKind::JaroWinkler => Box::new(JaroWinkler),
            ScorerKind::Levenshtein => Box::new(Levenshtein),
        }
    }
}

/// Jaro similarity in `[0, 1]` after lower-casing both inputs.
///
/// The match window is `max(m, n) / 2 - 1`, clamped at 0 so that one- and
/// zero-character inputs only match on the same position.
pub fn jaro(a: &str, b: &str) -> f64 {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    if a == b {
        return 1.0;
    }

    strsim::jaro(&a, &b)
}

/// Jaro similarity boosted by the length of the shared prefix
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(&a.to_lowercase(), &b.to_lowercase())
}

/// Levenshtein distance over chars; insert, delete and substitute all cost 1
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}
