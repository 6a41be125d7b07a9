//! date — Print the current date and time.

use async_trait::async_trait;
use chrono::Local;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Date command: print the local wall-clock time.
pub struct Date;

#[async_trait]
impl Command for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn description(&self) -> &str {
        "Print the current date and time"
    }

    fn usage(&self) -> &str {
        "date"
    }

    async fn execute(&self, _fs: &dyn Filesystem, _args: &[String]) -> CommandResult {
        let now = Local::now();
        CommandResult::success(now.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}
