//! mkdir — Create a directory.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Mkdir command: create a new empty directory.
pub struct Mkdir;

#[async_trait]
impl Command for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn description(&self) -> &str {
        "Create a directory"
    }

    fn usage(&self) -> &str {
        "mkdir <path>"
    }

    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        let Some(path) = args.first() else {
            return CommandResult::failure(format!("usage: {}", self.usage()));
        };

        match fs.make_directory(path).await {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::failure(format!("mkdir: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[tokio::test]
    async fn mkdir_creates_directory() {
        let fs = MemoryFs::new();
        let result = Mkdir.execute(&fs, &["/newdir".to_string()]).await;
        assert!(result.ok());
        assert!(fs.exists("/newdir").await);
    }

    #[tokio::test]
    async fn mkdir_duplicate_fails() {
        let fs = MemoryFs::new();
        fs.make_directory("/d").await.unwrap();

        let result = Mkdir.execute(&fs, &["/d".to_string()]).await;
        assert!(!result.ok());
        assert!(result.error.unwrap().contains("already exists"));
    }

    #[tokio::test]
    async fn mkdir_without_argument_shows_usage() {
        let fs = MemoryFs::new();
        let result = Mkdir.execute(&fs, &[]).await;
        assert_eq!(result.error.as_deref(), Some("usage: mkdir <path>"));
    }

    #[tokio::test]
    async fn mkdir_missing_parent_fails() {
        let fs = MemoryFs::new();
        let result = Mkdir.execute(&fs, &["/a/b".to_string()]).await;
        assert!(!result.ok());
        assert!(result.error.unwrap().contains("not found"));
    }
}
