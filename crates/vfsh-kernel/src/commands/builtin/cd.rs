//! cd — Change working directory.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;
use crate::HOME_PATH;

/// Cd command: change the current working directory.
pub struct Cd;

#[async_trait]
impl Command for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn description(&self) -> &str {
        "Change working directory"
    }

    fn usage(&self) -> &str {
        "cd [path]"
    }

    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        let path = args.first().map(String::as_str).unwrap_or(HOME_PATH);

        match fs.change_directory(path).await {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::failure(format!("cd: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[tokio::test]
    async fn cd_changes_directory() {
        let fs = MemoryFs::new();
        fs.make_directory("/subdir").await.unwrap();

        let result = Cd.execute(&fs, &["/subdir".to_string()]).await;
        assert!(result.ok());
        assert_eq!(fs.current_path().await, "/subdir");
    }

    #[tokio::test]
    async fn cd_without_argument_goes_home() {
        let fs = MemoryFs::with_default_layout();
        let result = Cd.execute(&fs, &[]).await;
        assert!(result.ok());
        assert_eq!(fs.current_path().await, "/home/user");
    }

    #[tokio::test]
    async fn cd_to_file_fails() {
        let fs = MemoryFs::new();
        fs.write_file("/file.txt", "").await.unwrap();

        let result = Cd.execute(&fs, &["/file.txt".to_string()]).await;
        assert!(!result.ok());
        assert!(result.error.unwrap().contains("not a directory"));
    }

    #[tokio::test]
    async fn cd_missing_fails() {
        let fs = MemoryFs::new();
        let result = Cd.execute(&fs, &["/nope".to_string()]).await;
        assert!(!result.ok());
        // Working path unchanged after a failed cd.
        assert_eq!(fs.current_path().await, "/");
    }
}
