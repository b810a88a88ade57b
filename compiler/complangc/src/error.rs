//! Driver errors.

use std::fmt;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("line editor: {0}")]
    Editor(#[from] ReadlineError),

    #[error("reading history from {}: {source}", path.display())]
    HistoryRead {
        path: PathBuf,
        #[source]
        source: ReadlineError,
    },

    #[error("writing history to {}: {source}", path.display())]
    HistoryWrite {
        path: PathBuf,
        #[source]
        source: ReadlineError,
    },

    #[error("reading {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("invalid {setting} `{value}`: expected a non-negative integer")]
    InvalidNumber { setting: &'static str, value: String },

    /// Several failures while shutting down.
    #[error("{}", Joined(.0))]
    Shutdown(Vec<ReplError>),
}

impl ReplError {
    /// Fold close-time failures into one error, if there were any.
    pub fn combine(mut errors: Vec<ReplError>) -> Result<(), ReplError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ReplError::Shutdown(errors)),
        }
    }
}

struct Joined<'a>(&'a [ReplError]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
