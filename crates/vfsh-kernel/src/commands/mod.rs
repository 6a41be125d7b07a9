//! Command system for vfsh.
//!
//! Every command the interpreter can run implements the same `Command`
//! trait — the builtins here and any embedder-supplied commands alike.
//! Context-dependent commands (`history`, `help`, `vim`) capture the
//! collaborator they need at registration time instead of reaching for
//! shared globals.

mod builtin;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::fs::Filesystem;
use crate::interpreter::History;

pub use builtin::register_builtins;

/// Callback invoked when a command requests an external editor session.
///
/// Registered by the presentation layer; the interpreter only routes the
/// request. The target file is guaranteed to exist before the call.
pub type EditorHook = Arc<dyn Fn(&str) + Send + Sync>;

/// A named operation over the filesystem.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name used for lookup.
    fn name(&self) -> &str;

    /// Alternate names that resolve to this command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string shown in missing-argument errors.
    fn usage(&self) -> &str;

    /// Run the command against the filesystem.
    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult;
}

/// Summary of one registered command, used to build the `help` listing.
#[derive(Debug, Clone)]
pub struct CommandSummary {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
}

impl CommandSummary {
    fn of(command: &dyn Command) -> Self {
        Self {
            name: command.name().to_string(),
            aliases: command.aliases().iter().map(|a| a.to_string()).collect(),
            description: command.description().to_string(),
        }
    }
}

/// The interpreter's mapping from command name/alias to operation.
///
/// Registration order is preserved for `help`.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Arc<dyn Command>>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and all of its aliases.
    ///
    /// A later registration under the same name shadows the earlier one.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        let slot = self.commands.len();
        self.index.insert(command.name().to_string(), slot);
        for alias in command.aliases() {
            self.index.insert((*alias).to_string(), slot);
        }
        self.commands.push(command);
    }

    /// Look up a command by name or alias.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.index.get(name).map(|&slot| &self.commands[slot])
    }

    /// Summaries of all distinct commands, in registration order.
    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.commands
            .iter()
            .map(|command| CommandSummary::of(command.as_ref()))
            .collect()
    }
}

/// Build the full built-in registry.
///
/// `history` is the interpreter-owned log shared with the `history`
/// command; `editor` is the optional hand-off hook — without one, the
/// editor command is simply not registered.
pub fn build_registry(history: Arc<RwLock<History>>, editor: Option<EditorHook>) -> Registry {
    let mut registry = Registry::new();
    register_builtins(&mut registry, history, editor);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_resolves_aliases() {
        let history = Arc::new(RwLock::new(History::new()));
        let registry = build_registry(history, None);

        assert!(registry.lookup("ls").is_some());
        assert!(registry.lookup("clear").is_some());
        // cls is an alias of clear.
        let clear = registry.lookup("clear").map(|c| c.name().to_string());
        let cls = registry.lookup("cls").map(|c| c.name().to_string());
        assert_eq!(clear, cls);
    }

    #[tokio::test]
    async fn unknown_name_is_absent() {
        let history = Arc::new(RwLock::new(History::new()));
        let registry = build_registry(history, None);
        assert!(registry.lookup("frobnicate").is_none());
    }

    #[tokio::test]
    async fn editor_command_registered_only_with_hook() {
        let history = Arc::new(RwLock::new(History::new()));
        let without = build_registry(history.clone(), None);
        assert!(without.lookup("vim").is_none());

        let hook: EditorHook = Arc::new(|_| {});
        let with = build_registry(history, Some(hook));
        assert!(with.lookup("vim").is_some());
    }

    #[tokio::test]
    async fn summaries_preserve_registration_order() {
        let history = Arc::new(RwLock::new(History::new()));
        let registry = build_registry(history, None);
        let summaries = registry.summaries();

        assert_eq!(summaries.first().map(|s| s.name.as_str()), Some("ls"));
        // help registers last so it can enumerate everything before it.
        assert_eq!(summaries.last().map(|s| s.name.as_str()), Some("help"));
    }
}
