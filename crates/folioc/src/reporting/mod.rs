//! Rendering of pipeline problems to user-facing diagnostics.
//!
//! Errors render to a single `error:` line on stderr; load failures get
//! a phase prefix so a user can tell a bad path from bad content.

use folio_core::{LoadError, SplitError};

use crate::problem::Problem;

/// Render a problem as a one-line diagnostic message.
#[cold]
pub fn render_problem(problem: &Problem) -> String {
    match problem {
        Problem::Load(err) => render_load_error(err),
        Problem::Split(err) => render_split_error(err),
    }
}

#[cold]
fn render_load_error(err: &LoadError) -> String {
    format!("error: failed to load document: {err}")
}

#[cold]
fn render_split_error(err: &SplitError) -> String {
    match err {
        SplitError::NoContent => format!("error: {err}"),
    }
}

/// Report a problem to stderr.
pub fn report(problem: &Problem) {
    tracing::error!(?problem, "pipeline failed");
    eprintln!("{}", render_problem(problem));
}

#[cfg(test)]
mod tests;
