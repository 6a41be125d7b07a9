//! Virtual filesystem for vfsh.
//!
//! The `Filesystem` trait is the abstract contract consumed by the
//! interpreter and any presentation layer. `MemoryFs` is the in-memory
//! implementation; a remote-backed variant would implement the same trait
//! with operations that actually suspend.

mod memory;

use async_trait::async_trait;

use vfsh_types::{DirEntry, FsError, FsResult};

pub use memory::MemoryFs;

/// Abstract filesystem interface.
///
/// All operations take a path string. A path beginning with `/` is resolved
/// from the root; anything else is resolved from the current working
/// directory. Empty segments are discarded, `.` is a no-op, and `..` moves
/// to the parent (clamping at the root).
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// The absolute current working path. The root is `/`.
    async fn current_path(&self) -> String;

    /// Change the current working directory.
    ///
    /// Fails with `NotADirectory` if the path resolves to a file, or
    /// `NotFound` if any segment cannot be resolved.
    async fn change_directory(&self, path: &str) -> FsResult<()>;

    /// List the children of a directory, in insertion order.
    ///
    /// With no path, lists the current working directory.
    async fn list(&self, path: Option<&str>) -> FsResult<Vec<DirEntry>>;

    /// Create a new empty directory.
    ///
    /// Fails with `AlreadyExists` if a sibling of that name exists
    /// (regardless of kind). Intermediate segments must already exist;
    /// this is not `mkdir -p`.
    async fn make_directory(&self, path: &str) -> FsResult<()>;

    /// Create a file with the given content, or overwrite an existing one.
    ///
    /// Fails with `IsADirectory` if a directory of that name exists.
    /// Intermediate segments must already exist.
    async fn write_file(&self, path: &str, content: &str) -> FsResult<()>;

    /// Read the content of a file.
    async fn read_file(&self, path: &str) -> FsResult<String>;

    /// Detach and discard the node at `path`.
    ///
    /// Directories require `recursive` regardless of emptiness. The root
    /// cannot be removed.
    async fn remove(&self, path: &str, recursive: bool) -> FsResult<()>;

    /// Check whether a path resolves to a node.
    async fn exists(&self, path: &str) -> bool {
        match self.read_file(path).await {
            Ok(_) | Err(FsError::IsADirectory(_)) => true,
            Err(_) => false,
        }
    }
}
