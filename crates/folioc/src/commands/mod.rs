//! CLI commands: the load → split → print pipeline.
//!
//! Each `*_and_print` entry point drives the whole pipeline for one
//! file and exits the process with status 1 on failure, after rendering
//! the problem to stderr. Nothing is printed to stdout on failure.

use std::fmt::Write as _;

use folio_core::{split, Document, SplitMode, TokenSequence};

use crate::problem::Problem;
use crate::reporting;

/// Split `path` under `mode` and print one line per token to stdout.
pub fn split_and_print(path: &str, mode: SplitMode) {
    match run_pipeline(path, mode) {
        Ok(output) => print!("{output}"),
        Err(problem) => {
            reporting::report(&problem);
            std::process::exit(1);
        }
    }
}

/// Split `path` under `mode` and print only the token count.
pub fn count_and_print(path: &str, mode: SplitMode) {
    match run_count(path, mode) {
        Ok(count) => println!("{count}"),
        Err(problem) => {
            reporting::report(&problem);
            std::process::exit(1);
        }
    }
}

/// Load, split, and render the full token listing.
pub(crate) fn run_pipeline(path: &str, mode: SplitMode) -> Result<String, Problem> {
    let doc = load_document(path)?;
    let seq = split_document(&doc, mode)?;
    Ok(listing(&seq))
}

/// Load, split, and report only the sequence length.
pub(crate) fn run_count(path: &str, mode: SplitMode) -> Result<usize, Problem> {
    let doc = load_document(path)?;
    let seq = split_document(&doc, mode)?;
    Ok(seq.len())
}

fn load_document(path: &str) -> Result<Document, Problem> {
    let doc = folio_core::load(path)?;
    tracing::debug!(path, bytes = doc.len(), "document loaded");
    Ok(doc)
}

fn split_document(doc: &Document, mode: SplitMode) -> Result<TokenSequence<'_>, Problem> {
    let seq = split(doc, mode)?;
    tracing::debug!(?mode, tokens = seq.len(), "document split");
    Ok(seq)
}

/// Render one line per token in ordinal order:
/// `<5-digit zero-padded ordinal>: len = <3-digit zero-padded length> |<text>|`.
pub fn listing(seq: &TokenSequence<'_>) -> String {
    let mut out = String::new();
    for token in seq.iter() {
        let _ = writeln!(
            out,
            "{:05}: len = {:03} |{}|",
            token.ordinal(),
            token.len(),
            seq.text(token)
        );
    }
    out
}
