//! Non-interactive evaluation of a source file.

use std::io::Write;
use std::path::Path;

use crate::{Interpreter, ReplError};

/// Evaluate `source` one line at a time, writing each result to `out`.
///
/// Blank lines and assignments print nothing. A line that fails to parse
/// prints its error and evaluation moves on.
pub fn run_source(interp: &Interpreter, source: &str, out: &mut impl Write) -> std::io::Result<()> {
    for line in source.lines() {
        if let Some(output) = interp.read_eval_print(line) {
            writeln!(out, "{output}")?;
        }
    }
    Ok(())
}

/// Read `path` and run it in a fresh session, printing to stdout.
pub fn run_file(path: &Path) -> Result<(), ReplError> {
    let source = std::fs::read_to_string(path).map_err(|source| ReplError::Script {
        path: path.to_owned(),
        source,
    })?;
    let interp = Interpreter::new();
    let mut stdout = std::io::stdout().lock();
    run_source(&interp, &source, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
