//! Word splitter: maximal runs of ASCII alphabetic bytes.
//!
//! A run is only closed — and therefore only counted and emitted — when
//! a non-alphabetic byte *inside the content region* follows it. A
//! trailing alphabetic run that reaches end-of-content is dropped: the
//! sentinel does not close runs. This boundary behavior is deliberate
//! and covered by tests; callers who need the trailing word must ensure
//! the document ends with a delimiter byte (e.g. a final newline).

use crate::{Document, Token, TokenSequence};

/// Split a document into alphabetic-run tokens.
///
/// Two passes over the buffer: [`count_words`] sizes the sequence, the
/// fill pass records `(start, len, ordinal)` per closed run. The fill
/// pass always emits exactly the counted number of tokens.
pub(crate) fn split_words(doc: &Document) -> TokenSequence<'_> {
    let count = count_words(doc);
    let mut tokens = Vec::with_capacity(count);

    let mut cursor = doc.cursor();
    let mut ordinal = 0u32;
    loop {
        cursor.eat_non_alphabetic();
        if cursor.is_eof() {
            break;
        }
        let start = cursor.pos();
        cursor.eat_while(|b| b.is_ascii_alphabetic());
        if cursor.is_eof() {
            // Trailing run closed by the sentinel, not by content: dropped.
            break;
        }
        tokens.push(Token::new(start, cursor.pos() - start, ordinal));
        ordinal += 1;
    }

    debug_assert_eq!(tokens.len(), count, "counting and fill passes disagree");
    TokenSequence::new(doc, tokens)
}

/// Counting pass: number of alphabetic runs closed by a content byte.
fn count_words(doc: &Document) -> usize {
    let mut cursor = doc.cursor();
    let mut count = 0;
    loop {
        cursor.eat_non_alphabetic();
        if cursor.is_eof() {
            break;
        }
        cursor.eat_while(|b| b.is_ascii_alphabetic());
        if cursor.is_eof() {
            break;
        }
        count += 1;
    }
    count
}
