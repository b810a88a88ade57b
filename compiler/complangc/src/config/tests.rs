#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use std::collections::HashMap;

use super::*;
use pretty_assertions::assert_eq;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn history_defaults_to_home() {
    let config = ReplConfig::from_vars(vars(&[("HOME", "/home/me")])).unwrap();
    assert_eq!(
        config.history_file,
        Some(PathBuf::from("/home/me/.complang_history"))
    );
    assert_eq!(config.max_completions, DEFAULT_MAX_COMPLETIONS);
    assert!(config.demo_environment);

    let homeless = ReplConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(homeless.history_file, None);
}

#[test]
fn environment_overrides_defaults() {
    let config = ReplConfig::from_vars(vars(&[
        ("HOME", "/home/me"),
        (HISTORY_VAR, "/tmp/h"),
        (MAX_COMPLETIONS_VAR, "4"),
    ]))
    .unwrap();
    assert_eq!(config.history_file, Some(PathBuf::from("/tmp/h")));
    assert_eq!(config.max_completions, 4);
}

#[test]
fn bad_environment_number_is_rejected() {
    let err = ReplConfig::from_vars(vars(&[(MAX_COMPLETIONS_VAR, "lots")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid COMPLANG_MAX_COMPLETIONS `lots`: expected a non-negative integer"
    );
}

#[test]
fn flags_override_environment() {
    let base = ReplConfig::from_vars(vars(&[(HISTORY_VAR, "/tmp/h")])).unwrap();

    let config = base
        .clone()
        .apply_args(&args(&["--history", "/tmp/other", "--max-completions", "3"]))
        .unwrap();
    assert_eq!(config.history_file, Some(PathBuf::from("/tmp/other")));
    assert_eq!(config.max_completions, 3);

    let config = base.apply_args(&args(&["--no-history", "--empty"])).unwrap();
    assert_eq!(config.history_file, None);
    assert!(!config.demo_environment);
}

#[test]
fn malformed_flags_are_usage_errors() {
    let base = ReplConfig::default();
    assert!(matches!(
        base.clone().apply_args(&args(&["--history"])),
        Err(ReplError::Usage(_))
    ));
    assert!(matches!(
        base.clone().apply_args(&args(&["--max-completions", "-1"])),
        Err(ReplError::InvalidNumber { .. })
    ));
    assert_eq!(
        base.apply_args(&args(&["--verbose"])).unwrap_err().to_string(),
        "unknown option `--verbose`"
    );
}
