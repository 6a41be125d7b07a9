//! pwd — Print working directory.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Pwd command: print the absolute current working path.
pub struct Pwd;

#[async_trait]
impl Command for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn description(&self) -> &str {
        "Print working directory"
    }

    fn usage(&self) -> &str {
        "pwd"
    }

    async fn execute(&self, fs: &dyn Filesystem, _args: &[String]) -> CommandResult {
        CommandResult::success(fs.current_path().await)
    }
}
