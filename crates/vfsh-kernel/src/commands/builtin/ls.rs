//! ls — List directory contents.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Ls command: list directory contents, one entry per line.
pub struct Ls;

#[async_trait]
impl Command for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn description(&self) -> &str {
        "List directory contents"
    }

    fn usage(&self) -> &str {
        "ls [path]"
    }

    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        let path = args.first().map(String::as_str);

        match fs.list(path).await {
            Ok(entries) => {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|entry| {
                        if entry.is_dir() {
                            format!("📁 {}/", entry.name)
                        } else {
                            format!("📄 {}", entry.name)
                        }
                    })
                    .collect();
                CommandResult::success(lines.join("\n"))
            }
            Err(e) => CommandResult::failure(format!("ls: {}", e)),
        }
    }
}
