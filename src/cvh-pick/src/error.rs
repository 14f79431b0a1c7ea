//! Errors from the I/O layer around the picker.
//!
//! Everything here is a setup or teardown failure: the session itself never
//! fails, it only clamps or ignores input.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    /// The controlling terminal could not be opened
    #[error("cannot open controlling terminal {path}: {source}")]
    TerminalUnavailable {
        path: &'static str,
        #[source]
        source: io::Error,
    },

    /// Candidates could not be read from standard input
    #[error("failed to read candidates from stdin: {0}")]
    ReadInput(#[source] io::Error),

    /// Raw mode, drawing or event reading failed
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PickError>;
