//! Filesystem runtime abstraction for lng-build
//!
//! Every build step reaches the disk through the `Runtime` trait so the
//! helpers stay independent of `std::fs`. [`NativeRuntime`] is the
//! implementation used by the CLI.

mod native;

pub use native::NativeRuntime;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Other runtime error
    #[error("Runtime error: {0}")]
    Other(String),
}

impl RuntimeError {
    /// Whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RuntimeError::FileNotFound(_))
    }
}

/// File metadata
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// File size in bytes
    pub size: u64,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Whether this is a regular file
    pub is_file: bool,
    /// Whether this is a symbolic link (only reported by `symlink_metadata`)
    pub is_symlink: bool,
}

/// Platform runtime trait
///
/// Abstracts the filesystem operations used by the build steps.
///
/// # Example
///
/// ```rust,ignore
/// use lng_build::runtime::{Runtime, RuntimeResult};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct MyRuntime;
///
/// #[async_trait]
/// impl Runtime for MyRuntime {
///     async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
///         // Platform-specific implementation
///     }
///
///     // ... implement other methods
/// }
/// ```
#[async_trait]
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read a file from the filesystem
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    /// Write a file, replacing any existing content
    async fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()>;

    /// Append to a file, creating it when missing
    async fn append_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()>;

    /// Get file metadata, following symlinks
    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    /// Get file metadata without following symlinks
    async fn symlink_metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory
    async fn create_dir(&self, path: &Path, recursive: bool) -> RuntimeResult<()>;

    /// Remove a directory and everything below it. A missing path is not an error.
    async fn remove_dir_all(&self, path: &Path) -> RuntimeResult<()>;

    /// List the entry names of a directory, sorted
    async fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>>;

    /// Copy a single file, overwriting the destination
    async fn copy_file(&self, from: &Path, to: &Path) -> RuntimeResult<()>;

    /// Recursively copy `from` into `to`, merging with existing content
    async fn copy_dir(&self, from: &Path, to: &Path) -> RuntimeResult<()>;
}
