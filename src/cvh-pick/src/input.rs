//! Candidate ingestion
//!
//! Candidates come from the command line when any are given, otherwise from
//! standard input, one per line or one per whitespace-separated token.

use std::io::{self, BufRead};

use tracing::{debug, info};

use crate::error::{PickError, Result};
use crate::rank::Candidate;

/// How piped input is split into candidates
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Split {
    Lines,
    Whitespace,
}

/// Load candidates from `args`, falling back to standard input
pub fn load_candidates(args: Vec<String>, split: Split) -> Result<Vec<Candidate>> {
    if !args.is_empty() {
        info!("Loaded {} candidates from arguments", args.len());
        return Ok(Candidate::from_texts(args));
    }

    let stdin = io::stdin();
    let texts = read_candidates(stdin.lock(), split)?;
    info!("Loaded {} candidates from stdin ({:?})", texts.len(), split);
    Ok(Candidate::from_texts(texts))
}

/// Read candidate texts from a reader until end of stream
pub fn read_candidates<R: BufRead>(mut reader: R, split: Split) -> Result<Vec<String>> {
    match split {
        Split::Lines => reader
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(PickError::ReadInput),
        Split::Whitespace => {
            let mut content = String::new();
            reader
                .read_to_string(&mut content)
                .map_err(PickError::ReadInput)?;
            debug!("Read {} bytes of tokenized input", content.len());
            Ok(content.split_whitespace().map(str::to_string).collect())
        }
    }
}
