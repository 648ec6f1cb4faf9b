use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FsError {
    NotFound(String),
    AlreadyExists(String),
    NotADirectory(String),
    IsADirectory(String),
    InvalidPath(String),
    Io(String),
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "Could not find a part of the path '{}'.", path),
            FsError::AlreadyExists(path) => write!(f, "The path '{}' already exists.", path),
            FsError::NotADirectory(path) => write!(f, "The path '{}' is not a directory.", path),
            FsError::IsADirectory(path) => write!(f, "The path '{}' is a directory.", path),
            FsError::InvalidPath(path) => write!(f, "The path '{}' is not valid here.", path),
            FsError::Io(message) => f.write_str(message),
        }
    }
}

/// The volume layer the shell talks to. Paths are plain strings in the form
/// understood by [`crate::path`].
///
/// Listing methods return full paths of the immediate children, ordered by
/// name.
pub trait FileSystem {
    fn directory_exists(&self, path: &str) -> bool;

    fn file_exists(&self, path: &str) -> bool;

    /// Creates the directory and every missing parent. Succeeds if the
    /// directory is already there.
    fn create_directory(&self, path: &str) -> Result<(), FsError>;

    /// Removes the directory together with everything below it.
    fn delete_directory(&self, path: &str) -> Result<(), FsError>;

    fn list_directories(&self, path: &str) -> Result<Vec<String>, FsError>;

    fn list_files(&self, path: &str) -> Result<Vec<String>, FsError>;

    fn read_to_string(&self, path: &str) -> Result<String, FsError>;

    /// Creates the file or replaces its contents. The parent directory must
    /// exist.
    fn write_string(&self, path: &str, contents: &str) -> Result<(), FsError>;

    fn delete_file(&self, path: &str) -> Result<(), FsError>;
}
