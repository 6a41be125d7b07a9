//! In-memory filesystem implementation.
//!
//! Nodes live in an arena (`Vec<Node>`) addressed by stable `NodeId`
//! indices; parent/child relationships are index fields, so there is no
//! ownership cycle between a directory and its children. Removal detaches a
//! subtree from its parent; the detached slots stay in the arena
//! unreferenced for the life of the session.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use vfsh_types::{DirEntry, FsError, FsResult};

use super::Filesystem;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

/// The root directory always occupies slot 0.
const ROOT: NodeId = NodeId(0);

#[derive(Debug)]
enum NodeData {
    File { content: String },
    Directory { children: Vec<NodeId> },
}

#[derive(Debug)]
struct Node {
    name: String,
    /// `None` only for the root.
    parent: Option<NodeId>,
    data: NodeData,
}

/// The node tree plus the session's working path.
#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
    /// Working path as segments from the root; empty means the root itself.
    cwd: Vec<String>,
}

impl Tree {
    fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: "/".to_string(),
                parent: None,
                data: NodeData::Directory {
                    children: Vec::new(),
                },
            }],
            cwd: Vec::new(),
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn is_dir(&self, id: NodeId) -> bool {
        matches!(self.node(id).data, NodeData::Directory { .. })
    }

    /// Look up a same-named child of a directory. Files have no children.
    fn child_named(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        match &self.node(dir).data {
            NodeData::Directory { children } => children
                .iter()
                .copied()
                .find(|&child| self.node(child).name == name),
            NodeData::File { .. } => None,
        }
    }

    /// Allocate a node and attach it to its parent's children.
    fn attach(&mut self, name: String, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            parent: Some(parent),
            data,
        });
        if let NodeData::Directory { children } = &mut self.node_mut(parent).data {
            children.push(id);
        }
        id
    }

    /// Resolve the working path to its directory node.
    ///
    /// Fails with `NotFound` if an ancestor of the working directory has
    /// been removed since the last `cd`.
    fn current_dir(&self) -> FsResult<NodeId> {
        let mut current = ROOT;
        for segment in &self.cwd {
            current = self
                .child_named(current, segment)
                .filter(|&id| self.is_dir(id))
                .ok_or_else(|| FsError::NotFound(segment.clone()))?;
        }
        Ok(current)
    }

    /// Split a path into its non-empty segments, so `//a///b/` behaves as
    /// `/a/b`.
    fn segments(path: &str) -> impl Iterator<Item = &str> {
        path.split('/').filter(|s| !s.is_empty())
    }

    /// Walk segments from a starting node. `.` is a no-op, `..` clamps at
    /// the root, any other segment must name an existing child.
    fn walk<'a>(
        &self,
        start: NodeId,
        segments: impl Iterator<Item = &'a str>,
        path: &str,
    ) -> FsResult<NodeId> {
        let mut current = start;
        for segment in segments {
            match segment {
                "." => {}
                ".." => {
                    current = self.node(current).parent.unwrap_or(current);
                }
                name => {
                    current = self
                        .child_named(current, name)
                        .ok_or_else(|| FsError::NotFound(path.to_string()))?;
                }
            }
        }
        Ok(current)
    }

    /// Resolve a path string to a node.
    fn resolve(&self, path: &str) -> FsResult<NodeId> {
        let start = if path.starts_with('/') {
            ROOT
        } else {
            self.current_dir()?
        };
        self.walk(start, Self::segments(path), path)
    }

    /// Resolve a path to its parent directory and final segment name.
    ///
    /// Used by the creating/removing operations so they can validate or
    /// mutate the parent's children directly.
    fn resolve_parent(&self, path: &str) -> FsResult<(NodeId, String)> {
        let mut segments: Vec<&str> = Self::segments(path).collect();
        let name = segments
            .pop()
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;
        let start = if path.starts_with('/') {
            ROOT
        } else {
            self.current_dir()?
        };
        let parent = self.walk(start, segments.into_iter(), path)?;
        if !self.is_dir(parent) {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        Ok((parent, name.to_string()))
    }

    /// Canonical absolute segments for a node, by walking the parent chain.
    fn absolute_segments(&self, mut id: NodeId) -> Vec<String> {
        let mut segments = Vec::new();
        while let Some(parent) = self.node(id).parent {
            segments.push(self.node(id).name.clone());
            id = parent;
        }
        segments.reverse();
        segments
    }

    fn current_path(&self) -> String {
        if self.cwd.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.cwd.join("/"))
        }
    }

    fn change_directory(&mut self, path: &str) -> FsResult<()> {
        let id = self.resolve(path)?;
        if !self.is_dir(id) {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        self.cwd = self.absolute_segments(id);
        Ok(())
    }

    fn list(&self, path: Option<&str>) -> FsResult<Vec<DirEntry>> {
        let id = match path {
            Some(p) => self.resolve(p)?,
            None => self.current_dir()?,
        };
        match &self.node(id).data {
            NodeData::Directory { children } => Ok(children
                .iter()
                .map(|&child| {
                    let node = self.node(child);
                    match node.data {
                        NodeData::File { .. } => DirEntry::file(&node.name),
                        NodeData::Directory { .. } => DirEntry::directory(&node.name),
                    }
                })
                .collect()),
            NodeData::File { .. } => {
                Err(FsError::NotADirectory(path.unwrap_or(".").to_string()))
            }
        }
    }

    fn make_directory(&mut self, path: &str) -> FsResult<()> {
        let (parent, name) = self.resolve_parent(path)?;
        // A final segment of "." or ".." names a directory that necessarily
        // already exists.
        if name == "." || name == ".." || self.child_named(parent, &name).is_some() {
            return Err(FsError::AlreadyExists(path.to_string()));
        }
        self.attach(
            name,
            parent,
            NodeData::Directory {
                children: Vec::new(),
            },
        );
        Ok(())
    }

    fn write_file(&mut self, path: &str, content: &str) -> FsResult<()> {
        let (parent, name) = self.resolve_parent(path)?;
        if name == "." || name == ".." {
            return Err(FsError::IsADirectory(path.to_string()));
        }
        match self.child_named(parent, &name) {
            Some(id) => match &mut self.node_mut(id).data {
                NodeData::File { content: existing } => {
                    *existing = content.to_string();
                    Ok(())
                }
                NodeData::Directory { .. } => Err(FsError::IsADirectory(path.to_string())),
            },
            None => {
                self.attach(
                    name,
                    parent,
                    NodeData::File {
                        content: content.to_string(),
                    },
                );
                Ok(())
            }
        }
    }

    fn read_file(&self, path: &str) -> FsResult<String> {
        let id = self.resolve(path)?;
        match &self.node(id).data {
            NodeData::File { content } => Ok(content.clone()),
            NodeData::Directory { .. } => Err(FsError::IsADirectory(path.to_string())),
        }
    }

    fn remove(&mut self, path: &str, recursive: bool) -> FsResult<()> {
        let id = self.resolve(path)?;
        if self.is_dir(id) && !recursive {
            return Err(FsError::IsADirectory(path.to_string()));
        }
        let Some(parent) = self.node(id).parent else {
            return Err(FsError::CannotRemoveRoot);
        };
        // Detach from the parent; the subtree becomes unreachable from the
        // root. Slots are not reclaimed.
        if let NodeData::Directory { children } = &mut self.node_mut(parent).data {
            children.retain(|&child| child != id);
        }
        Ok(())
    }
}

/// In-memory filesystem.
///
/// Thread-safe via an internal `RwLock`; all data is lost when dropped.
/// Single-threaded callers never contend, and every operation completes
/// before returning.
#[derive(Debug)]
pub struct MemoryFs {
    tree: RwLock<Tree>,
}

impl MemoryFs {
    /// Create a filesystem containing only the root directory.
    pub fn new() -> Self {
        Self {
            tree: RwLock::new(Tree::new()),
        }
    }

    /// Create a filesystem seeded with the default session layout:
    /// `/home/user` (with `documents`, `downloads`, `readme.txt`,
    /// `.bashrc`), `/tmp`, and `/var/log`.
    pub fn with_default_layout() -> Self {
        let fs = Self::new();
        {
            let mut tree = fs.tree_mut();
            for dir in [
                "/home",
                "/home/user",
                "/home/user/documents",
                "/home/user/downloads",
                "/tmp",
                "/var",
                "/var/log",
            ] {
                tree.make_directory(dir).expect("default layout is valid");
            }
            tree.write_file(
                "/home/user/readme.txt",
                "Welcome to vfsh!\nThis is an in-memory filesystem.",
            )
            .expect("default layout is valid");
            tree.write_file("/home/user/.bashrc", "echo \"vfsh shell loaded.\"")
                .expect("default layout is valid");
        }
        fs
    }

    // A poisoned lock only means another caller panicked mid-read; the tree
    // mutations themselves are single-step, so recover the guard.
    fn tree(&self) -> RwLockReadGuard<'_, Tree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn tree_mut(&self) -> RwLockWriteGuard<'_, Tree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for MemoryFs {
    async fn current_path(&self) -> String {
        self.tree().current_path()
    }

    async fn change_directory(&self, path: &str) -> FsResult<()> {
        self.tree_mut().change_directory(path)
    }

    async fn list(&self, path: Option<&str>) -> FsResult<Vec<DirEntry>> {
        self.tree().list(path)
    }

    async fn make_directory(&self, path: &str) -> FsResult<()> {
        self.tree_mut().make_directory(path)
    }

    async fn write_file(&self, path: &str, content: &str) -> FsResult<()> {
        self.tree_mut().write_file(path, content)
    }

    async fn read_file(&self, path: &str) -> FsResult<String> {
        self.tree().read_file(path)
    }

    async fn remove(&self, path: &str, recursive: bool) -> FsResult<()> {
        self.tree_mut().remove(path, recursive)
    }

    async fn exists(&self, path: &str) -> bool {
        self.tree().resolve(path).is_ok()
    }
}
