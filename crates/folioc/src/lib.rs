//! Folio CLI library.
//!
//! Thin driver around [`folio_core`]: load a file, split it under the
//! selected mode, print the token listing. The pipeline stops on the
//! first error; nothing is printed to stdout on failure.

use std::sync::Once;

pub mod commands;
pub mod problem;
pub mod reporting;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=folioc=debug` or `RUST_LOG=folio_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
