//! Picker session state machine
//!
//! Owns the query, the selection cursor and the ranked list. The run loop
//! calls [`Session::rerank`], draws, feeds one [`Action`] to
//! [`Session::handle`] and repeats until [`Session::is_running`] is false.

use crate::matcher::Scorer;
use crate::rank::{rank, Candidate, ScoredEntry};

/// A logical input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Commit,
    Cancel,
    /// Drop the last query character
    Erase,
    /// Drop the whole query
    Clear,
    Insert(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    /// Holds the committed candidate's text
    Committed(String),
    Cancelled,
}

pub struct Session {
    candidates: Vec<Candidate>,
    scorer: Box<dyn Scorer>,
    query: String,
    cursor: usize,
    ranked: Vec<ScoredEntry>,
    state: State,
}

impl Session {
    pub fn new(candidates: Vec<Candidate>, scorer: Box<dyn Scorer>) -> Self {
        let mut session = Session {
            candidates,
            scorer,
            query: String::new(),
            cursor: 0,
            ranked: Vec::new(),
            state: State::Running,
        };
        session.rerank();
        session
    }

    /// Start from a non-empty query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self.cursor = 0;
        self.rerank();
        self
    }

    /// Recompute the ranked list for the current query
    pub fn rerank(&mut self) {
        self.ranked = rank(&self.candidates, &self.query, self.scorer.as_ref());
        self.cursor = self.cursor.min(self.ranked.len().saturating_sub(1));
    }

    pub fn handle(&mut self, action: Action) {
        if !self.is_running() {
            return;
        }

        match action {
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => {
                self.cursor = (self.cursor + 1).min(self.ranked.len().saturating_sub(1));
            }
            Action::Commit => self.commit(),
            Action::Cancel => self.state = State::Cancelled,
            Action::Erase => {
                if self.query.pop().is_some() {
                    self.cursor = 0;
                }
            }
            Action::Clear => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.cursor = 0;
                }
            }
            Action::Insert(c) => {
                self.query.push(c);
                self.cursor = 0;
            }
        }
    }

    fn commit(&mut self) {
        // An empty list has nothing to commit; end the session without a result
        self.state = match self.selected() {
            Some(candidate) => State::Committed(candidate.text.clone()),
            None => State::Cancelled,
        };
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Text to print once the session is over, if something was committed
    pub fn into_selection(self) -> Option<String> {
        match self.state {
            State::Committed(text) => Some(text),
            _ => None,
        }
    }

    /// Candidate under the cursor
    pub fn selected(&self) -> Option<&Candidate> {
        self.ranked
            .get(self.cursor)
            .map(|entry| &self.candidates[entry.index])
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn ranked(&self) -> &[ScoredEntry] {
        &self.ranked
    }

    pub fn candidate(&self, entry: &ScoredEntry) -> &Candidate {
        &self.candidates[entry.index]
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }
}
