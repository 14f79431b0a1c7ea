//! Ranking of candidates against the current query

use crate::matcher::Scorer;

/// One selectable input string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the original input, used to break ties
    pub index: usize,
    /// Text shown in the list and printed on selection
    pub text: String,
}

impl Candidate {
    /// Number a list of strings in input order
    pub fn from_texts<I, S>(texts: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Candidate { index, text: text.into() })
            .collect()
    }
}

/// A candidate's score for one query, pointing back at the candidate by index
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredEntry {
    pub score: f64,
    pub index: usize,
}

/// Score every candidate and sort best first.
///
/// The sort is stable, so candidates with equal scores keep their input order.
/// Nothing is filtered out: the result always has one entry per candidate.
pub fn rank(candidates: &[Candidate], query: &str, scorer: &dyn Scorer) -> Vec<ScoredEntry> {
    let mut ranked: Vec<ScoredEntry> = candidates
        .iter()
        .map(|candidate| ScoredEntry {
            score: scorer.score(&candidate.text, query),
            index: candidate.index,
        })
        .collect();

    let direction = scorer.direction();
    ranked.sort_by(|a, b| direction.compare(a.score, b.score));
    ranked
}
