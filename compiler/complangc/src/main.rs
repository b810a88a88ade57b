//! The `complang` binary.

use std::path::Path;
use std::process::ExitCode;

use complangc::{init_tracing, repl, script, ReplConfig, ReplError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        None => start_repl(&[]),
        Some("repl") => start_repl(&args[2..]),
        Some("run") => match args.get(2) {
            Some(path) if args.len() == 3 => script::run_file(Path::new(path)),
            _ => {
                eprintln!("Usage: complang run <file>");
                return ExitCode::FAILURE;
            }
        },
        Some("help" | "--help" | "-h") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some("version" | "--version" | "-V") => {
            println!("complang {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some(flag) if flag.starts_with("--") => start_repl(&args[1..]),
        Some(command) => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(ReplError::Usage(message)) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_repl(args: &[String]) -> Result<(), ReplError> {
    let config = ReplConfig::from_env()?.apply_args(args)?;
    repl::run(&config)
}

fn print_usage() {
    println!("complang - message-passing expression language");
    println!();
    println!("Usage:");
    println!("  complang [repl] [options]   Start the interactive REPL");
    println!("  complang run <file>         Evaluate each line of a file");
    println!("  complang help               Show this message");
    println!("  complang version            Show version");
    println!();
    println!("REPL options:");
    println!("  --history <path>            History file (default ~/.complang_history)");
    println!("  --no-history                Do not read or write history");
    println!("  --max-completions <n>       Cap on tab-completion candidates (default 16)");
    println!("  --empty                     Start without the demo bindings");
    println!();
    println!("Environment:");
    println!("  COMPLANG_HISTORY            History file");
    println!("  COMPLANG_MAX_COMPLETIONS    Completion cap");
    println!("  RUST_LOG                    Enable tracing output on stderr");
}
