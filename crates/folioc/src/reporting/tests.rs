use super::*;
use pretty_assertions::assert_eq;

// === Rendering ===

#[test]
fn load_problems_carry_a_phase_prefix() {
    let problem = Problem::Load(LoadError::ShortRead {
        path: "hamlet.txt".into(),
        expected: 100,
        got: 60,
    });
    let rendered = render_problem(&problem);
    assert!(
        rendered.starts_with("error: failed to load document:"),
        "unexpected rendering: {rendered}"
    );
    assert!(rendered.contains("hamlet.txt"));
}

#[test]
fn split_problems_render_the_core_message() {
    let rendered = render_problem(&Problem::Split(SplitError::NoContent));
    assert_eq!(
        rendered,
        "error: no line delimiters found: document must be multi-line to split into lines"
    );
}
