//! The command interpreter: parses lines, records history, dispatches to
//! registered commands.

mod history;

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use vfsh_types::CommandResult;

use crate::commands::{build_registry, EditorHook, Registry};
use crate::fs::Filesystem;

pub use history::{History, RecallDirection};

/// A shell session: one filesystem, one command registry, one history.
///
/// Parsing is whitespace splitting only. The first token, lowercased, names
/// the command; the remaining tokens are passed through verbatim.
pub struct Interpreter {
    fs: Arc<dyn Filesystem>,
    registry: Registry,
    history: Arc<RwLock<History>>,
}

impl Interpreter {
    /// Build an interpreter without editor support.
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self::build(fs, None)
    }

    /// Build an interpreter whose `vim` command hands off to `hook`.
    pub fn with_editor(fs: Arc<dyn Filesystem>, hook: EditorHook) -> Self {
        Self::build(fs, Some(hook))
    }

    fn build(fs: Arc<dyn Filesystem>, editor: Option<EditorHook>) -> Self {
        let history = Arc::new(RwLock::new(History::new()));
        let registry = build_registry(history.clone(), editor);
        Self {
            fs,
            registry,
            history,
        }
    }

    /// Execute one command line.
    ///
    /// Blank lines produce an empty result and are not recorded; every other
    /// line is recorded in history before it runs, whether or not the command
    /// exists.
    pub async fn execute(&mut self, line: &str) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::empty();
        }

        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(trimmed);

        let mut tokens = trimmed.split_whitespace();
        // Non-empty after trim, so a first token exists.
        let name = tokens
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let Some(command) = self.registry.lookup(&name) else {
            return CommandResult::failure(format!(
                "command not found: {}. Type 'help' to see available commands.",
                name
            ));
        };

        debug!(command = %name, argc = args.len(), "dispatching");
        command.execute(self.fs.as_ref(), &args).await
    }

    /// Step the history cursor and return the line it lands on.
    pub fn history_recall(&mut self, direction: RecallDirection) -> Option<String> {
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .recall(direction)
    }

    /// Snapshot of the history, oldest first.
    pub fn history_entries(&self) -> Vec<String> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries()
            .to_vec()
    }
}
