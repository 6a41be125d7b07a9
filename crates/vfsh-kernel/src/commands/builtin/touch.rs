//! touch — Create an empty file.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Touch command: create the file, or truncate it to empty if it exists.
pub struct Touch;

#[async_trait]
impl Command for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn description(&self) -> &str {
        "Create an empty file"
    }

    fn usage(&self) -> &str {
        "touch <path>"
    }

    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        let Some(path) = args.first() else {
            return CommandResult::failure(format!("usage: {}", self.usage()));
        };

        match fs.write_file(path, "").await {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::failure(format!("touch: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[tokio::test]
    async fn touch_creates_empty_file() {
        let fs = MemoryFs::new();
        let result = Touch.execute(&fs, &["/new.txt".to_string()]).await;
        assert!(result.ok());
        assert_eq!(fs.read_file("/new.txt").await.unwrap(), "");
    }

    #[tokio::test]
    async fn touch_truncates_existing_file() {
        let fs = MemoryFs::new();
        fs.write_file("/kept.txt", "data").await.unwrap();

        let result = Touch.execute(&fs, &["/kept.txt".to_string()]).await;
        assert!(result.ok());
        assert_eq!(fs.read_file("/kept.txt").await.unwrap(), "");
    }

    #[tokio::test]
    async fn touch_directory_target_fails() {
        let fs = MemoryFs::new();
        fs.make_directory("/d").await.unwrap();

        let result = Touch.execute(&fs, &["/d".to_string()]).await;
        assert!(!result.ok());
        assert!(result.error.unwrap().contains("is a directory"));
    }

    #[tokio::test]
    async fn touch_missing_parent_fails() {
        let fs = MemoryFs::new();
        let result = Touch.execute(&fs, &["/a/b.txt".to_string()]).await;
        assert!(!result.ok());
        assert!(result.error.unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn touch_without_argument_shows_usage() {
        let fs = MemoryFs::new();
        let result = Touch.execute(&fs, &[]).await;
        assert_eq!(result.error.as_deref(), Some("usage: touch <path>"));
    }
}
