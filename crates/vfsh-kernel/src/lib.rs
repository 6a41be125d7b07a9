//! vfsh kernel — the virtual filesystem and command interpreter.
//!
//! Two components, evaluated leaf-first:
//!
//! - **[`fs`]** — the `Filesystem` contract and the in-memory `MemoryFs`
//!   implementation: a tree of named nodes, path resolution, and the
//!   mutating primitives. No knowledge of commands or presentation.
//! - **[`interpreter`]** — a registry of named commands, each a function
//!   from (filesystem, argument list) to a textual result, plus a linear
//!   command history with a recall cursor.
//!
//! ```text
//! UI → Interpreter::execute(line) → registry lookup
//!    → Command::execute(fs, args) → Filesystem mutation/query
//!    → CommandResult → UI
//! ```
//!
//! The trait is async so that a remote-backed filesystem fits the same
//! contract; `MemoryFs` itself never suspends.

pub mod commands;
pub mod fs;
pub mod interpreter;

pub use commands::{Command, EditorHook, Registry};
pub use fs::{Filesystem, MemoryFs};
pub use interpreter::{History, Interpreter, RecallDirection};

/// Home directory of the simulated session; `cd` with no argument lands here.
pub const HOME_PATH: &str = "/home/user";
