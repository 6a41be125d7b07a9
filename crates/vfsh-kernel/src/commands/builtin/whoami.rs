//! whoami — Print the current user name.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::Command;
use crate::fs::Filesystem;

/// Whoami command: print the simulated session user.
pub struct Whoami;

#[async_trait]
impl Command for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn description(&self) -> &str {
        "Print the current user name"
    }

    fn usage(&self) -> &str {
        "whoami"
    }

    async fn execute(&self, _fs: &dyn Filesystem, _args: &[String]) -> CommandResult {
        CommandResult::success("user")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[tokio::test]
    async fn whoami_prints_user() {
        let fs = MemoryFs::new();
        let result = Whoami.execute(&fs, &[]).await;
        assert_eq!(result.output, "user");
    }
}
