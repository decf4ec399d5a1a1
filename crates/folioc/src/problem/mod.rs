//! Driver-level problem type unifying the core error taxonomies.
//!
//! Every phase failure flows up as a [`Problem`]; the driver stops on
//! the first one (no retries, no partial output).

use folio_core::{LoadError, SplitError};

/// A failure in the load/split pipeline.
#[derive(Debug)]
pub enum Problem {
    /// The document could not be loaded into the buffer.
    Load(LoadError),
    /// The document could not be split under the selected mode.
    Split(SplitError),
}

impl From<LoadError> for Problem {
    fn from(err: LoadError) -> Self {
        Problem::Load(err)
    }
}

impl From<SplitError> for Problem {
    fn from(err: SplitError) -> Self {
        Problem::Split(err)
    }
}

#[cfg(test)]
mod tests;
