//! cat — Print file contents.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Cat command: print the contents of a file.
pub struct Cat;

#[async_trait]
impl Command for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn description(&self) -> &str {
        "Print file contents"
    }

    fn usage(&self) -> &str {
        "cat <path>"
    }

    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        let Some(path) = args.first() else {
            return CommandResult::failure(format!("usage: {}", self.usage()));
        };

        match fs.read_file(path).await {
            Ok(content) => CommandResult::success(content),
            Err(e) => CommandResult::failure(format!("cat: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[tokio::test]
    async fn cat_prints_contents() {
        let fs = MemoryFs::new();
        fs.write_file("/note.txt", "hello\nworld").await.unwrap();

        let result = Cat.execute(&fs, &["/note.txt".to_string()]).await;
        assert!(result.ok());
        assert_eq!(result.output, "hello\nworld");
    }

    #[tokio::test]
    async fn cat_directory_fails() {
        let fs = MemoryFs::new();
        fs.make_directory("/d").await.unwrap();

        let result = Cat.execute(&fs, &["/d".to_string()]).await;
        assert!(!result.ok());
        assert!(result.error.unwrap().contains("is a directory"));
    }

    #[tokio::test]
    async fn cat_missing_fails() {
        let fs = MemoryFs::new();
        let result = Cat.execute(&fs, &["/nope".to_string()]).await;
        assert!(!result.ok());
        assert!(result.error.unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn cat_without_argument_shows_usage() {
        let fs = MemoryFs::new();
        let result = Cat.execute(&fs, &[]).await;
        assert_eq!(result.error.as_deref(), Some("usage: cat <path>"));
    }
}
