//! vim — Hand a file off to the external editor.

use async_trait::async_trait;

use vfsh_types::CommandResult;

use crate::commands::{Command, EditorHook};
use crate::fs::Filesystem;

/// Vim command: ensure the target file exists, then invoke the editor hook.
///
/// Only registered when the embedder supplies a hook; the interpreter itself
/// never edits interactively.
pub struct Vim {
    editor: EditorHook,
}

impl Vim {
    pub fn new(editor: EditorHook) -> Self {
        Self { editor }
    }
}

#[async_trait]
impl Command for Vim {
    fn name(&self) -> &str {
        "vim"
    }

    fn description(&self) -> &str {
        "Edit a file"
    }

    fn usage(&self) -> &str {
        "vim <path>"
    }

    async fn execute(&self, fs: &dyn Filesystem, args: &[String]) -> CommandResult {
        let Some(path) = args.first() else {
            return CommandResult::failure(format!("usage: {}", self.usage()));
        };

        // The hook must see an existing file, so create it on first edit.
        if !fs.exists(path).await {
            if let Err(e) = fs.write_file(path, "").await {
                return CommandResult::failure(format!("vim: {}", e));
            }
        }

        (self.editor)(path);
        CommandResult::empty()
    }
}
