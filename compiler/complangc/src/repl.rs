//! Interactive loop on top of `rustyline`.

use std::io::Write;
use std::path::Path;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

use crate::{bind_demo_values, FuzzyRanker, Interpreter, ReplConfig, ReplError};

const PROMPT: &str = "> ";

/// Tab completion through [`Interpreter::read_eval_complete`].
struct ReplHelper {
    interp: Interpreter,
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self.interp.read_eval_complete(&line[..pos]);
        // Every candidate replaces the same word, starting at the query offset.
        let start = candidates
            .first()
            .map_or(pos, |c| c.new_line.len() - c.display.len());
        let pairs = candidates
            .into_iter()
            .map(|c| Pair {
                replacement: c.display.clone(),
                display: c.display,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}

/// Run the REPL until end of input or interrupt.
///
/// History is loaded before the first prompt and saved on the way out. A
/// history file that cannot be read only produces a warning; failures while
/// closing are reported together.
pub fn run(config: &ReplConfig) -> Result<(), ReplError> {
    let interp = Interpreter::new()
        .with_max_completions(config.max_completions)
        .with_ranker(FuzzyRanker);
    if config.demo_environment {
        bind_demo_values(&interp);
    }

    let editor_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut editor: Editor<ReplHelper, DefaultHistory> = Editor::with_config(editor_config)?;
    editor.set_helper(Some(ReplHelper {
        interp: interp.clone(),
    }));

    if let Some(path) = &config.history_file {
        if let Err(err) = load_history(&mut editor, path) {
            eprintln!("warning: {err}");
        }
    }

    let mut errors = Vec::new();
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = editor.add_history_entry(line.as_str()) {
                        debug!(%err, "history entry dropped");
                    }
                }
                if let Some(output) = interp.read_eval_print(&line) {
                    println!("{output}");
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                errors.push(ReplError::Editor(err));
                break;
            }
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(source) = editor.save_history(path) {
            errors.push(ReplError::HistoryWrite {
                path: path.clone(),
                source,
            });
        }
    }
    if let Err(err) = std::io::stdout().flush() {
        errors.push(ReplError::Io(err));
    }
    ReplError::combine(errors)
}

/// A missing history file is a fresh start, not an error.
fn load_history(
    editor: &mut Editor<ReplHelper, DefaultHistory>,
    path: &Path,
) -> Result<(), ReplError> {
    match editor.load_history(path) {
        Ok(()) => Ok(()),
        Err(ReadlineError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no history yet");
            Ok(())
        }
        Err(source) => Err(ReplError::HistoryRead {
            path: path.to_owned(),
            source,
        }),
    }
}
