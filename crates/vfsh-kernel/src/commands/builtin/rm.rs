//! rm — Remove a file or directory.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Rm command: remove a file, or a directory with `-r`.
pub struct Rm;

#[async_trait]
impl Command for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn description(&self) -> &str {
        "Remove a file or directory"
    }

    fn usage(&self) -> &str {
        "rm [-r] <path>"
    }

    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        let (recursive, path) = match args {
            [flag, path] if flag == "-r" || flag == "-R" => (true, path),
            [path] => (false, path),
            _ => return CommandResult::failure(format!("usage: {}", self.usage())),
        };

        match fs.remove(path, recursive).await {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::failure(format!("rm: {}", e)),
        }
    }
}
