//! Filesystem error taxonomy.

use thiserror::Error;

/// Result type for filesystem operations.
pub type FsResult<T> = Result<T, FsError>;

/// Filesystem operation errors.
///
/// Every failure is local to one operation and leaves the tree consistent;
/// there are no fatal errors at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("cannot remove root directory")]
    CannotRemoveRoot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = FsError::NotFound("/a/b".into());
        assert_eq!(err.to_string(), "not found: /a/b");

        let err = FsError::IsADirectory("/a".into());
        assert_eq!(err.to_string(), "is a directory: /a");
    }

    #[test]
    fn root_removal_has_fixed_message() {
        assert_eq!(
            FsError::CannotRemoveRoot.to_string(),
            "cannot remove root directory"
        );
    }
}
