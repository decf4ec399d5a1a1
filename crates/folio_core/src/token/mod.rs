//! Token records and the owned sequence that carries them.
//!
//! A [`Token`] is a non-owning `(start, len)` view into a document's
//! buffer plus the ordinal index it was discovered at. Tokens are plain
//! `Copy` data; the text itself is resolved through the
//! [`TokenSequence`], which holds the document borrow and therefore
//! ties every token's validity to the document's lifetime.

use crate::Document;

/// A discovered sub-unit of a document (a word or a line).
///
/// Non-owning: `start` and `len` index into the document's buffer.
/// Ordinals are 0-based, dense, and assigned in discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    start: u32,
    len: u32,
    ordinal: u32,
}

/// Size assertion: Token is three u32 fields, 12 bytes.
const _: () = assert!(std::mem::size_of::<Token>() == 12);

impl Token {
    pub(crate) fn new(start: u32, len: u32, ordinal: u32) -> Self {
        Self {
            start,
            len,
            ordinal,
        }
    }

    /// Byte offset of the token's first byte in the document.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Byte length of the token.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the token covers zero bytes.
    ///
    /// Neither splitter emits empty tokens; this exists for API
    /// completeness.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 0-based position of this token in discovery order.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

/// An owned, fixed-length sequence of tokens over one document.
///
/// Sized by the counting pass and populated by the fill pass; immutable
/// in length afterwards. Borrows the [`Document`], so the sequence (and
/// every token view resolved through it) cannot outlive the buffer.
#[derive(Clone, Debug)]
pub struct TokenSequence<'doc> {
    doc: &'doc Document,
    tokens: Vec<Token>,
}

impl<'doc> TokenSequence<'doc> {
    pub(crate) fn new(doc: &'doc Document, tokens: Vec<Token>) -> Self {
        Self { doc, tokens }
    }

    /// Number of tokens in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sequence holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    /// All tokens in ordinal order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate tokens in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }

    /// Resolve a token to its text in the underlying document.
    pub fn text(&self, token: Token) -> &'doc str {
        self.doc.slice(token.start, token.start + token.len)
    }
}
