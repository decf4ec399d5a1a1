//! Line splitter: newline-delimited fragments with filtering and
//! leading-whitespace trimming.
//!
//! `\n` and `\r` are both delimiters and each occurrence consumes one
//! byte, so `\r\n` endings produce no empty fragment between the two
//! bytes. A fragment with no ASCII alphabetic byte anywhere yields no
//! token — this drops blank lines, whitespace-only lines, and
//! punctuation-only lines alike.

use memchr::{memchr2, memchr_iter};

use crate::{Document, SplitError, Token, TokenSequence};

/// Split a document into trimmed, non-blank line tokens.
///
/// Counting pass: the number of `\n` bytes, an upper bound on the token
/// count used only to pre-size the sequence. (`\r`-only endings or a
/// final line without `\n` can exceed it; the sequence grows as
/// needed.) Fill pass: walk delimiter-separated fragments and record
/// the survivors.
///
/// # Errors
///
/// [`SplitError::NoContent`] when the buffer contains no `\n` or `\r`
/// at all — including the empty document.
pub(crate) fn split_lines(doc: &Document) -> Result<TokenSequence<'_>, SplitError> {
    let bytes = doc.as_bytes();
    if memchr2(b'\n', b'\r', bytes).is_none() {
        return Err(SplitError::NoContent);
    }

    let mut tokens = Vec::with_capacity(count_newlines(bytes));
    let mut ordinal = 0u32;
    let mut pos = 0;
    while pos < bytes.len() {
        let end = memchr2(b'\n', b'\r', &bytes[pos..]).map_or(bytes.len(), |off| pos + off);
        if let Some(token) = line_token(bytes, pos, end, ordinal) {
            tokens.push(token);
            ordinal += 1;
        }
        pos = end + 1;
    }

    Ok(TokenSequence::new(doc, tokens))
}

/// Counting pass: `\n` occurrences in the buffer.
fn count_newlines(bytes: &[u8]) -> usize {
    memchr_iter(b'\n', bytes).count()
}

/// Turn the fragment `bytes[start..end]` into a token, or `None` when
/// the fragment carries no alphabetic byte.
#[allow(
    clippy::cast_possible_truncation,
    reason = "positions are bounded by the u32 document length"
)]
fn line_token(bytes: &[u8], start: usize, end: usize, ordinal: u32) -> Option<Token> {
    let fragment = &bytes[start..end];
    if !fragment.iter().any(u8::is_ascii_alphabetic) {
        return None;
    }

    let trimmed = start + leading_whitespace(fragment);
    Some(Token::new(
        trimmed as u32,
        (end - trimmed) as u32,
        ordinal,
    ))
}

/// Count of leading space (`0x20`) and tab (`0x09`) bytes.
fn leading_whitespace(fragment: &[u8]) -> usize {
    fragment
        .iter()
        .take_while(|&&b| b == b' ' || b == b'\t')
        .count()
}
