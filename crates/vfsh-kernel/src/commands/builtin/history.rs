//! history — List previously executed commands.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;
use crate::interpreter::History;

/// HistoryList command: print the session history, oldest first,
/// with 1-based line numbers.
pub struct HistoryList {
    history: Arc<RwLock<History>>,
}

impl HistoryList {
    pub fn new(history: Arc<RwLock<History>>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl Command for HistoryList {
    fn name(&self) -> &str {
        "history"
    }

    fn description(&self) -> &str {
        "List previously executed commands"
    }

    fn usage(&self) -> &str {
        "history"
    }

    async fn execute(&self, _fs: &dyn Filesystem, _args: &[String]) -> CommandResult {
        let guard = self
            .history
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let lines: Vec<String> = guard
            .entries()
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}  {}", i + 1, cmd))
            .collect();
        CommandResult::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    fn make_history(entries: &[&str]) -> Arc<RwLock<History>> {
        let mut history = History::new();
        for entry in entries {
            history.push(entry);
        }
        Arc::new(RwLock::new(history))
    }

    #[tokio::test]
    async fn history_lists_numbered_entries() {
        let fs = MemoryFs::new();
        let cmd = HistoryList::new(make_history(&["ls", "pwd"]));

        let result = cmd.execute(&fs, &[]).await;
        assert!(result.ok());
        assert_eq!(result.output, "1  ls\n2  pwd");
    }

    #[tokio::test]
    async fn history_empty_prints_nothing() {
        let fs = MemoryFs::new();
        let cmd = HistoryList::new(make_history(&[]));

        let result = cmd.execute(&fs, &[]).await;
        assert!(result.ok());
        assert_eq!(result.output, "");
    }
}
