//! vfsh CLI entry point.
//!
//! Usage:
//!   vfsh                 # Interactive shell
//!   vfsh -c <command>    # Execute one command line and exit

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Respects RUST_LOG.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            vfsh_repl::run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("vfsh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.get(2).context("-c requires a command argument")?;
            run_command(cmd)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'vfsh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"vfsh v{}

Usage:
  vfsh                 Interactive shell
  vfsh -c <command>    Execute one command line and exit

Options:
  -c <command>         Execute command string and exit
  -h, --help           Show this help
  -V, --version        Show version

Examples:
  vfsh                 # Start the interactive shell
  vfsh -c 'ls /home'   # Run a single command
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Execute a single command line against a fresh session and exit.
fn run_command(cmd: &str) -> Result<ExitCode> {
    use vfsh_repl::{Outcome, Repl};

    let mut repl = Repl::new()?;
    match repl.process_line(cmd) {
        Outcome::Output(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Error(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
        Outcome::Quiet | Outcome::Clear | Outcome::Exit => Ok(ExitCode::SUCCESS),
    }
}
