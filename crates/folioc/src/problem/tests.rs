use super::*;

// === Conversions ===

#[test]
fn load_error_converts_into_problem() {
    let err = LoadError::Allocation {
        path: "big.txt".into(),
        bytes: 64,
    };
    let problem = Problem::from(err);
    assert!(matches!(problem, Problem::Load(LoadError::Allocation { .. })));
}

#[test]
fn split_error_converts_into_problem() {
    let problem = Problem::from(SplitError::NoContent);
    assert!(matches!(problem, Problem::Split(SplitError::NoContent)));
}
