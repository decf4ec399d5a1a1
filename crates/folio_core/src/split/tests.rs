use super::*;
use pretty_assertions::assert_eq;

fn words(doc: &Document) -> TokenSequence<'_> {
    match split(doc, SplitMode::Words) {
        Ok(seq) => seq,
        Err(err) => panic!("word-mode split failed: {err}"),
    }
}

fn lines(doc: &Document) -> TokenSequence<'_> {
    match split(doc, SplitMode::Lines) {
        Ok(seq) => seq,
        Err(err) => panic!("line-mode split failed: {err}"),
    }
}

fn texts<'doc>(seq: &TokenSequence<'doc>) -> Vec<&'doc str> {
    seq.iter().map(|t| seq.text(t)).collect()
}

fn triples(seq: &TokenSequence<'_>) -> Vec<(u32, u32, u32)> {
    seq.iter()
        .map(|t| (t.ordinal(), t.start(), t.len()))
        .collect()
}

// === Word Mode: Basics ===

#[test]
fn words_split_on_non_alphabetic() {
    let doc = Document::new("ab, cd!");
    let seq = words(&doc);
    assert_eq!(texts(&seq), vec!["ab", "cd"]);
    assert_eq!(seq.get(0).map(|t| t.len()), Some(2));
    assert_eq!(seq.get(1).map(|t| t.len()), Some(2));
}

#[test]
fn words_ordinals_are_dense_and_zero_based() {
    let doc = Document::new("one two three four.");
    let seq = words(&doc);
    let ordinals: Vec<u32> = seq.iter().map(|t| t.ordinal()).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3]);
}

#[test]
fn words_digits_do_not_join_runs() {
    let doc = Document::new("ab1cd ");
    let seq = words(&doc);
    assert_eq!(texts(&seq), vec!["ab", "cd"]);
}

#[test]
fn words_are_entirely_alphabetic() {
    let doc = Document::new("it's a mixed-up line, no.2!\n");
    let seq = words(&doc);
    for token in seq.iter() {
        assert!(
            seq.text(token).bytes().all(|b| b.is_ascii_alphabetic()),
            "token {:?} contains a non-alphabetic byte",
            seq.text(token)
        );
    }
}

// === Word Mode: Trailing Run Boundary ===

#[test]
fn trailing_run_without_delimiter_is_dropped() {
    // The scan only closes a run on a following non-alphabetic byte
    // inside the content; "xyz" ends at the sentinel and is not counted.
    let doc = Document::new("xyz");
    let seq = words(&doc);
    assert!(seq.is_empty());
}

#[test]
fn trailing_run_after_words_is_dropped() {
    let doc = Document::new("ab, cd");
    let seq = words(&doc);
    assert_eq!(texts(&seq), vec!["ab"]);
}

#[test]
fn final_delimiter_closes_last_run() {
    let doc = Document::new("ab, cd\n");
    let seq = words(&doc);
    assert_eq!(texts(&seq), vec!["ab", "cd"]);
}

// === Word Mode: Edge Cases ===

#[test]
fn empty_document_yields_empty_word_sequence() {
    let doc = Document::new("");
    let seq = words(&doc);
    assert!(seq.is_empty());
}

#[test]
fn punctuation_only_yields_empty_word_sequence() {
    let doc = Document::new("12 34 -- !?\n");
    let seq = words(&doc);
    assert!(seq.is_empty());
}

#[test]
fn interior_null_closes_a_run() {
    let doc = Document::new("ab\0cd\n");
    let seq = words(&doc);
    assert_eq!(texts(&seq), vec!["ab", "cd"]);
}

// === Line Mode: Basics ===

#[test]
fn lines_drop_blank_lines() {
    let doc = Document::new("Hamlet said no.\n\nTo be.\n");
    let seq = lines(&doc);
    assert_eq!(texts(&seq), vec!["Hamlet said no.", "To be."]);
    let ordinals: Vec<u32> = seq.iter().map(|t| t.ordinal()).collect();
    assert_eq!(ordinals, vec![0, 1]);
}

#[test]
fn lines_trim_leading_spaces_and_tabs() {
    let doc = Document::new("  \tindented line\nplain\n");
    let seq = lines(&doc);
    assert_eq!(texts(&seq), vec!["indented line", "plain"]);
}

#[test]
fn lines_keep_trailing_whitespace() {
    // Only leading horizontal whitespace is trimmed.
    let doc = Document::new("padded   \nnext\n");
    let seq = lines(&doc);
    assert_eq!(texts(&seq), vec!["padded   ", "next"]);
}

#[test]
fn lines_drop_non_alphabetic_lines() {
    // Punctuation-only lines are dropped entirely, not just trimmed.
    let doc = Document::new("real words\n123 !? --\n   \nmore words\n");
    let seq = lines(&doc);
    assert_eq!(texts(&seq), vec!["real words", "more words"]);
}

#[test]
fn crlf_endings_strip_the_carriage_return() {
    let doc = Document::new("first line\r\nsecond line\r\n");
    let seq = lines(&doc);
    assert_eq!(texts(&seq), vec!["first line", "second line"]);
}

#[test]
fn cr_only_endings_delimit_lines() {
    let doc = Document::new("one line\rtwo line\r");
    let seq = lines(&doc);
    assert_eq!(texts(&seq), vec!["one line", "two line"]);
}

#[test]
fn final_line_without_newline_is_kept() {
    let doc = Document::new("first\nlast");
    let seq = lines(&doc);
    assert_eq!(texts(&seq), vec!["first", "last"]);
}

// === Line Mode: NoContent ===

#[test]
fn empty_document_is_no_content() {
    let doc = Document::new("");
    assert_eq!(split(&doc, SplitMode::Lines).err(), Some(SplitError::NoContent));
}

#[test]
fn single_line_without_delimiter_is_no_content() {
    let doc = Document::new("xyz");
    assert_eq!(split(&doc, SplitMode::Lines).err(), Some(SplitError::NoContent));
}

#[test]
fn all_blank_lines_is_empty_but_not_an_error() {
    // Delimiters exist, every fragment is filtered: legitimate empty result.
    let doc = Document::new("\n  \n!!\n");
    let seq = lines(&doc);
    assert!(seq.is_empty());
}

// === Line Mode: Invariants ===

#[test]
fn line_tokens_always_contain_a_letter_and_no_leading_whitespace() {
    let doc = Document::new("  a\n\t\tbee cee\n42\n   \n\t!\n dee \n");
    let seq = lines(&doc);
    for token in seq.iter() {
        let text = seq.text(token);
        assert!(
            text.bytes().any(|b| b.is_ascii_alphabetic()),
            "token {text:?} has no alphabetic byte"
        );
        assert!(
            !text.starts_with(' ') && !text.starts_with('\t'),
            "token {text:?} has leading whitespace"
        );
    }
}

#[test]
fn line_tokens_round_trip_trimmed_fragments() {
    let source = "To be, or not to be,\n   that is the question:\n\nWhether 'tis nobler\n";
    let doc = Document::new(source);
    let seq = lines(&doc);

    let expected: Vec<&str> = source
        .split(['\n', '\r'])
        .filter(|frag| frag.bytes().any(|b| b.is_ascii_alphabetic()))
        .map(|frag| frag.trim_start_matches([' ', '\t']))
        .collect();
    assert_eq!(texts(&seq), expected);
}

// === Idempotence ===

#[test]
fn splitting_twice_yields_identical_sequences() {
    let doc = Document::new("Hamlet said no.\n\nTo be.\nab, cd!");
    for mode in [SplitMode::Words, SplitMode::Lines] {
        let first = match split(&doc, mode) {
            Ok(seq) => triples(&seq),
            Err(err) => panic!("{mode:?} split failed: {err}"),
        };
        let second = match split(&doc, mode) {
            Ok(seq) => triples(&seq),
            Err(err) => panic!("{mode:?} split failed: {err}"),
        };
        assert_eq!(first, second, "{mode:?} split is not idempotent");
    }
}

#[test]
fn splitting_does_not_mutate_the_buffer() {
    let source = "Hamlet said no.\n\nTo be.\n";
    let doc = Document::new(source);
    let _ = words(&doc);
    let _ = lines(&doc);
    assert_eq!(doc.as_bytes(), source.as_bytes());
}

// === Count/Fill Agreement ===

/// Reference count: maximal alphabetic runs followed by at least one
/// more content byte.
fn reference_word_count(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for &b in bytes {
        if b.is_ascii_alphabetic() {
            in_word = true;
        } else if in_word {
            count += 1;
            in_word = false;
        }
    }
    count
}

#[test]
fn word_count_matches_reference() {
    for source in [
        "",
        "xyz",
        "ab, cd!",
        "ab, cd\n",
        "one two three four.",
        "12 34 -- !?\n",
        " a b c ",
        "trailing",
    ] {
        let doc = Document::new(source);
        let seq = words(&doc);
        assert_eq!(
            seq.len(),
            reference_word_count(source.as_bytes()),
            "count mismatch for {source:?}"
        );
    }
}

// === Properties ===

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn word_fill_matches_reference_count(source in "[ -~\n\t]{0,200}") {
            let doc = Document::new(&source);
            let seq = words(&doc);
            prop_assert_eq!(seq.len(), reference_word_count(source.as_bytes()));
        }

        #[test]
        fn word_tokens_are_alphabetic_views(source in "[ -~\n\t]{0,200}") {
            let doc = Document::new(&source);
            let seq = words(&doc);
            for token in seq.iter() {
                prop_assert!(seq.text(token).bytes().all(|b| b.is_ascii_alphabetic()));
            }
        }

        #[test]
        fn line_tokens_honor_invariants(source in "[ -~\n\r\t]{0,200}") {
            let doc = Document::new(&source);
            let Ok(seq) = split(&doc, SplitMode::Lines) else {
                // NoContent only when the buffer has no \n or \r at all.
                prop_assert!(!source.contains(['\n', '\r']));
                return Ok(());
            };
            for token in seq.iter() {
                let text = seq.text(token);
                prop_assert!(text.bytes().any(|b| b.is_ascii_alphabetic()));
                prop_assert!(!text.starts_with(' ') && !text.starts_with('\t'));
            }
        }

        #[test]
        fn ordinals_are_dense_in_both_modes(source in "[ -~\n\r\t]{0,200}") {
            let doc = Document::new(&source);
            for mode in [SplitMode::Words, SplitMode::Lines] {
                if let Ok(seq) = split(&doc, mode) {
                    for (i, token) in seq.iter().enumerate() {
                        prop_assert_eq!(token.ordinal() as usize, i);
                    }
                }
            }
        }
    }
}
