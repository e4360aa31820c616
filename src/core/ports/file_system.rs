use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("Not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),
}

impl FileSystemError {
    /// `true` for the "path does not exist" case, `false` for any other
    /// failure (permission denied, I/O error, malformed path).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Metadata returned by [`FileSystem::stat`].
#[derive(Debug, Clone, Copy)]
pub struct FileStat {
    pub is_dir: bool,
    pub len: u64,
}

impl FileStat {
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }
}

/// Read-only filesystem capability consumed by the locator.
///
/// Implementations must map "path does not exist" to
/// [`FileSystemError::NotFound`] so callers can tell absence apart from
/// real failures. The default implementation delegates straight to the
/// operating system; tests inject an in-memory one.
pub trait FileSystem: Send + Sync {
    /// Open a file for reading
    ///
    /// # Arguments
    /// * `path` - The file to open
    ///
    /// # Returns
    /// * `Ok(reader)` - A readable stream over the file contents
    /// * `Err` - If the file does not exist or cannot be opened
    fn open(&self, path: &Path) -> Result<Box<dyn Read>, FileSystemError>;

    /// Stat a path
    ///
    /// # Arguments
    /// * `path` - The path to stat
    ///
    /// # Returns
    /// * `Ok(FileStat)` - Metadata for an existing path
    /// * `Err(FileSystemError::NotFound)` - The path does not exist
    /// * `Err` - Any other failure (permissions, I/O)
    fn stat(&self, path: &Path) -> Result<FileStat, FileSystemError>;

    /// Read the full contents of a file
    ///
    /// # Arguments
    /// * `path` - The file to read
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The file contents
    /// * `Err` - If the file does not exist or cannot be read
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError>;

    /// Read a directory and return all entries
    ///
    /// # Arguments
    /// * `path` - The directory path to read
    ///
    /// # Returns
    /// * `Ok(Vec<PathBuf>)` - List of all entries in the directory
    /// * `Err` - If the directory cannot be read
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError>;

    /// Expand a glob pattern into matching paths
    ///
    /// # Arguments
    /// * `pattern` - A glob pattern such as `/etc/app/*.yaml`
    ///
    /// # Returns
    /// * `Ok(Vec<PathBuf>)` - Paths matching the pattern (possibly empty)
    /// * `Err` - If the pattern is malformed
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FileSystemError>;
}
