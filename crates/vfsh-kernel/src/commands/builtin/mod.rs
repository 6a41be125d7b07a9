//! Built-in commands for vfsh.
//!
//! These are always available and cover the whole surface of the simulated
//! shell session.

mod cat;
mod cd;
mod clear;
mod date;
mod echo;
mod help;
mod history;
mod ls;
mod mkdir;
mod pwd;
mod rm;
mod touch;
mod vim;
mod whoami;

use std::sync::{Arc, RwLock};

use super::{EditorHook, Registry};
use crate::interpreter::History;

/// Register all built-in commands with the registry.
pub fn register_builtins(
    registry: &mut Registry,
    history: Arc<RwLock<History>>,
    editor: Option<EditorHook>,
) {
    registry.register(Arc::new(ls::Ls));
    registry.register(Arc::new(cd::Cd));
    registry.register(Arc::new(pwd::Pwd));
    registry.register(Arc::new(mkdir::Mkdir));
    registry.register(Arc::new(cat::Cat));
    registry.register(Arc::new(echo::Echo));
    registry.register(Arc::new(touch::Touch));
    registry.register(Arc::new(rm::Rm));
    registry.register(Arc::new(clear::Clear));
    registry.register(Arc::new(whoami::Whoami));
    registry.register(Arc::new(date::Date));
    registry.register(Arc::new(history::HistoryList::new(history)));
    if let Some(hook) = editor {
        registry.register(Arc::new(vim::Vim::new(hook)));
    }
    // help registers last so its listing covers every other command.
    let help = help::Help::new(registry.summaries());
    registry.register(Arc::new(help));
}
