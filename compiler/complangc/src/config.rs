//! REPL configuration from CLI flags with environment fallbacks.

use std::path::PathBuf;

use complang_eval::DEFAULT_MAX_COMPLETIONS;

use crate::ReplError;

/// Overrides the history file location.
pub const HISTORY_VAR: &str = "COMPLANG_HISTORY";
/// Overrides the completion cap.
pub const MAX_COMPLETIONS_VAR: &str = "COMPLANG_MAX_COMPLETIONS";

const DEFAULT_HISTORY_FILE: &str = ".complang_history";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// `None` disables history.
    pub history_file: Option<PathBuf>,
    pub max_completions: usize,
    /// Bind the demo values (`$digits`, `$something`) before the first line.
    pub demo_environment: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            history_file: None,
            max_completions: DEFAULT_MAX_COMPLETIONS,
            demo_environment: true,
        }
    }
}

impl ReplConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ReplError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `var` returns.
    ///
    /// Without an explicit history file, history goes to `~/.complang_history`
    /// when `HOME` is known.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ReplError> {
        let mut config = ReplConfig {
            history_file: var("HOME").map(|home| PathBuf::from(home).join(DEFAULT_HISTORY_FILE)),
            ..ReplConfig::default()
        };
        if let Some(path) = var(HISTORY_VAR).filter(|path| !path.is_empty()) {
            config.history_file = Some(PathBuf::from(path));
        }
        if let Some(max) = var(MAX_COMPLETIONS_VAR) {
            config.max_completions = parse_count(MAX_COMPLETIONS_VAR, &max)?;
        }
        Ok(config)
    }

    /// Apply `repl` flags on top of `self`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self, ReplError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--history" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ReplError::Usage("--history needs a path".into()))?;
                    self.history_file = Some(PathBuf::from(path));
                }
                "--no-history" => self.history_file = None,
                "--max-completions" => {
                    let max = args.next().ok_or_else(|| {
                        ReplError::Usage("--max-completions needs a number".into())
                    })?;
                    self.max_completions = parse_count("--max-completions", max)?;
                }
                "--empty" => self.demo_environment = false,
                other => return Err(ReplError::Usage(format!("unknown option `{other}`"))),
            }
        }
        Ok(self)
    }
}

fn parse_count(setting: &'static str, value: &str) -> Result<usize, ReplError> {
    value
        .trim()
        .parse()
        .map_err(|_| ReplError::InvalidNumber {
            setting,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests;
