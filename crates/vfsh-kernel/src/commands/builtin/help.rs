//! help — Show available commands.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::{Command, CommandSummary};
use crate::fs::Filesystem;

/// Help command: list every registered command with its description.
///
/// Holds a snapshot of the registry taken at build time, so it can be
/// registered into the same registry it describes.
pub struct Help {
    entries: Vec<CommandSummary>,
}

impl Help {
    pub fn new(mut entries: Vec<CommandSummary>) -> Self {
        entries.push(CommandSummary {
            name: "help".to_string(),
            aliases: Vec::new(),
            description: "Show available commands".to_string(),
        });
        Self { entries }
    }
}

#[async_trait]
impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Show available commands"
    }

    fn usage(&self) -> &str {
        "help"
    }

    async fn execute(&self, _fs: &dyn Filesystem, _args: &[String]) -> CommandResult {
        let mut lines = vec!["Available commands:".to_string()];
        for entry in &self.entries {
            let mut label = entry.name.clone();
            for alias in &entry.aliases {
                label.push_str(" / ");
                label.push_str(alias);
            }
            lines.push(format!("  {:<20}- {}", label, entry.description));
        }
        CommandResult::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    fn summary(name: &str, aliases: &[&str], description: &str) -> CommandSummary {
        CommandSummary {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn help_lists_commands_and_itself() {
        let fs = MemoryFs::new();
        let help = Help::new(vec![
            summary("ls", &[], "List directory contents"),
            summary("clear", &["cls"], "Clear the terminal screen"),
        ]);

        let result = help.execute(&fs, &[]).await;
        assert!(result.ok());
        let lines: Vec<&str> = result.output.lines().collect();
        assert_eq!(lines[0], "Available commands:");
        assert!(lines[1].starts_with("  ls"));
        assert!(lines[1].ends_with("- List directory contents"));
        assert!(lines[2].contains("clear / cls"));
        assert!(lines.last().unwrap().contains("help"));
    }
}
