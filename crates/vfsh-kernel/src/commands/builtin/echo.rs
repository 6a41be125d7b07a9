//! echo — Print arguments.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Echo command: print its arguments joined by single spaces.
pub struct Echo;

#[async_trait]
impl Command for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Print arguments"
    }

    fn usage(&self) -> &str {
        "echo [text...]"
    }

    async fn execute(&self, _fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        CommandResult::success(args.join(" "))
    }
}
