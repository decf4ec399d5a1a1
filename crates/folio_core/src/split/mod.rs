//! Two-pass buffer-to-token splitting under two policies.
//!
//! Both strategies share one shape: a counting pass sizes the output,
//! then a fill pass populates a pre-sized [`TokenSequence`]. The
//! document buffer is never mutated; tokens are `(start, len)` views.
//!
//! The mode is a runtime value ([`SplitMode`]) so both strategies
//! coexist in one binary and share the [`split`] entry point.

use thiserror::Error;

use crate::{Document, TokenSequence};

mod lines;
mod words;

/// Which splitting policy to apply to a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplitMode {
    /// Maximal runs of ASCII alphabetic bytes.
    Words,
    /// Newline-delimited fragments, blank/non-alphabetic lines dropped,
    /// leading spaces and tabs trimmed.
    Lines,
}

/// Why a document could not be split.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// Line-mode found no `\n` or `\r` anywhere in the buffer. A
    /// document must be multi-line to be split into lines; the empty
    /// document lands here too.
    #[error("no line delimiters found: document must be multi-line to split into lines")]
    NoContent,
}

/// Split a document into a token sequence under the given mode.
///
/// Word-mode cannot fail: an input with no words yields a legitimately
/// empty sequence. Line-mode fails with [`SplitError::NoContent`] when
/// the buffer holds no line delimiter at all, and yields an empty
/// sequence when delimiters exist but every line is blank or carries no
/// alphabetic byte.
pub fn split(doc: &Document, mode: SplitMode) -> Result<TokenSequence<'_>, SplitError> {
    match mode {
        SplitMode::Words => Ok(words::split_words(doc)),
        SplitMode::Lines => lines::split_lines(doc),
    }
}

#[cfg(test)]
mod tests;
