//! Front end for complang: the REPL session, completion ranking, host value
//! binding and the pieces of the `complang` binary.

pub mod bind;
mod config;
mod demo;
mod error;
mod interpreter;
mod rank;
pub mod repl;
pub mod script;

pub use config::{ReplConfig, HISTORY_VAR, MAX_COMPLETIONS_VAR};
pub use demo::bind_demo_values;
pub use error::ReplError;
pub use interpreter::{Candidate, Interpreter};
pub use rank::{edit_distance, is_subsequence, FuzzyRanker};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber on stderr when `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
