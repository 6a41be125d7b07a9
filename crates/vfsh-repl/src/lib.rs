//! vfsh REPL — interactive front-end for the virtual shell.
//!
//! Owns the terminal loop and nothing else: line editing via rustyline,
//! prompt rendering, and the mapping from interpreter results to printed
//! text. All command semantics live in `vfsh-kernel`.

use std::sync::Arc;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::Runtime;

use vfsh_kernel::{Filesystem, Interpreter, MemoryFs};
use vfsh_types::CLEAR_SCREEN;

/// What the terminal loop should do after processing one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text.
    Output(String),
    /// Print this error message.
    Error(String),
    /// Nothing to print.
    Quiet,
    /// Erase the visible scrollback.
    Clear,
    /// Leave the loop.
    Exit,
}

/// REPL state: the interpreter session plus the runtime that drives it.
pub struct Repl {
    fs: Arc<MemoryFs>,
    interpreter: Interpreter,
    runtime: Runtime,
}

impl Repl {
    /// Create a REPL over a freshly seeded in-memory filesystem.
    pub fn new() -> Result<Self> {
        let fs = Arc::new(MemoryFs::with_default_layout());
        let interpreter = Interpreter::new(fs.clone());
        let runtime = Runtime::new().context("failed to create tokio runtime")?;

        Ok(Self {
            fs,
            interpreter,
            runtime,
        })
    }

    /// Working path shown in the prompt.
    pub fn current_path(&self) -> String {
        self.runtime.block_on(self.fs.current_path())
    }

    /// Process one line of input.
    ///
    /// `quit` and `exit` belong to the terminal loop, not the interpreter,
    /// so they never reach the command registry or the history.
    pub fn process_line(&mut self, line: &str) -> Outcome {
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            return Outcome::Exit;
        }

        let result = self.runtime.block_on(self.interpreter.execute(trimmed));

        if let Some(error) = result.error {
            return Outcome::Error(error);
        }
        if result.output == CLEAR_SCREEN {
            return Outcome::Clear;
        }
        if result.output.is_empty() {
            return Outcome::Quiet;
        }
        Outcome::Output(result.output)
    }
}

/// Run the interactive loop until EOF or an exit command.
pub fn run() -> Result<()> {
    println!("vfsh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("failed to create line editor")?;
    let mut repl = Repl::new()?;

    loop {
        let prompt = format!("user@vfsh:{}$ ", repl.current_path());

        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("failed to add history entry: {}", e);
                    }
                }

                match repl.process_line(&line) {
                    Outcome::Output(text) => println!("{}", text),
                    Outcome::Error(message) => eprintln!("{}", message),
                    Outcome::Quiet => {}
                    Outcome::Clear => print!("\x1b[2J\x1b[H"),
                    Outcome::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    Ok(())
}
