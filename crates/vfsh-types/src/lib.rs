//! Shared data types for vfsh.
//!
//! This crate holds the types that cross the boundary between the
//! filesystem, the interpreter, and any front-end: the error taxonomy,
//! directory entries, and command results. No I/O, no async.

mod entry;
mod error;
mod result;

pub use entry::{DirEntry, NodeKind};
pub use error::{FsError, FsResult};
pub use result::{CommandResult, CLEAR_SCREEN};
