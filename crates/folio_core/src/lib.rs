//! Folio core — buffer-to-token splitting engine.
//!
//! Loads a text file fully into a sentinel-terminated buffer
//! ([`Document`]) and partitions it into a sequence of non-owning
//! sub-slices ([`Token`]s) under one of two policies ([`SplitMode`]):
//!
//! - **Words**: maximal runs of ASCII alphabetic bytes.
//! - **Lines**: newline-delimited fragments, with blank and
//!   non-alphabetic-only lines dropped and leading spaces/tabs trimmed.
//!
//! Both policies share the same two-pass shape: a counting pass sizes
//! the output, a fill pass populates it. The produced
//! [`TokenSequence`] borrows the document, so tokens can never outlive
//! the buffer they point into.
//!
//! This crate is standalone: external tools can depend on it without
//! pulling in the CLI.

pub mod cursor;
pub mod document;
pub mod loader;
pub mod split;
pub mod token;

pub use cursor::Cursor;
pub use document::Document;
pub use loader::{load, LoadError};
pub use split::{split, SplitError, SplitMode};
pub use token::{Token, TokenSequence};
