//! clear — Clear the terminal screen.

use async_trait::async_trait;

use vfsh_types::{CommandResult, CLEAR_SCREEN};

use crate::commands::Command;
use crate::fs::Filesystem;

/// Clear command: emit the clear-screen sentinel for the front-end.
pub struct Clear;

#[async_trait]
impl Command for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn aliases(&self) -> &[&str] {
        &["cls"]
    }

    fn description(&self) -> &str {
        "Clear the terminal screen"
    }

    fn usage(&self) -> &str {
        "clear"
    }

    async fn execute(&self, _fs: &dyn Filesystem, _args: &[String]) -> CommandResult {
        CommandResult::success(CLEAR_SCREEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[tokio::test]
    async fn clear_emits_sentinel() {
        let fs = MemoryFs::new();
        let result = Clear.execute(&fs, &[]).await;
        assert!(result.ok());
        assert_eq!(result.output, CLEAR_SCREEN);
    }
}
