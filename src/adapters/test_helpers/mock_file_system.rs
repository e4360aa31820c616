//! Mock filesystem for testing
//!
//! Provides an in-memory filesystem simulation so locator tests never
//! touch real disk state.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::ports::{FileStat, FileSystem, FileSystemError};

/// Mock entry in the filesystem
#[derive(Debug, Clone)]
struct MockFsEntry {
    is_dir: bool,
    contents: Vec<u8>,
}

/// Mock filesystem for testing
///
/// Entries are registered up front with `add_file`/`add_dir`;
/// `inject_error` makes the next operation fail, for exercising the
/// inconclusive-probe paths.
pub struct MockFileSystem {
    entries: Mutex<HashMap<PathBuf, MockFsEntry>>,
    force_error: Mutex<Option<FileSystemError>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        // Add root directory by default
        entries.insert(
            PathBuf::from("/"),
            MockFsEntry {
                is_dir: true,
                contents: Vec::new(),
            },
        );

        Self {
            entries: Mutex::new(entries),
            force_error: Mutex::new(None),
        }
    }

    /// Add an empty file to the mock filesystem
    pub fn add_file(&self, path: impl AsRef<Path>) {
        self.add_file_with_contents(path, []);
    }

    /// Add a file with the given contents
    pub fn add_file_with_contents(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let entry = MockFsEntry {
            is_dir: false,
            contents: contents.into(),
        };
        self.entries
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), entry);
    }

    /// Add a directory to the mock filesystem
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let entry = MockFsEntry {
            is_dir: true,
            contents: Vec::new(),
        };
        self.entries
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), entry);
    }

    /// Inject an error to be returned on the next operation
    pub fn inject_error(&self, error: FileSystemError) {
        *self.force_error.lock().unwrap() = Some(error);
    }

    fn check_error(&self) -> Result<(), FileSystemError> {
        if let Some(err) = self.force_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }

    fn lookup(&self, path: &Path) -> Result<MockFsEntry, FileSystemError> {
        self.entries
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>, FileSystemError> {
        self.check_error()?;
        let entry = self.lookup(path)?;
        Ok(Box::new(Cursor::new(entry.contents)))
    }

    fn stat(&self, path: &Path) -> Result<FileStat, FileSystemError> {
        self.check_error()?;
        let entry = self.lookup(path)?;
        Ok(FileStat {
            is_dir: entry.is_dir,
            len: entry.contents.len() as u64,
        })
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        self.check_error()?;
        let entry = self.lookup(path)?;
        if entry.is_dir {
            return Err(FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::IsADirectory,
                "Is a directory",
            )));
        }
        Ok(entry.contents)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        self.check_error()?;

        let entry = self.lookup(path)?;
        if !entry.is_dir {
            return Err(FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                "Not a directory",
            )));
        }

        let children: Vec<PathBuf> = self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();

        Ok(children)
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FileSystemError> {
        self.check_error()?;

        let pattern = glob::Pattern::new(pattern)
            .map_err(|e| FileSystemError::PathError(e.to_string()))?;

        let matches = self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|p| pattern.matches_path(p))
            .cloned()
            .collect();

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The port requires Send + Sync, so the mock must stay shareable
    // across threads (interior mutability via Mutex, not RefCell).
    #[test]
    fn test_satisfies_file_system_bounds() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockFileSystem>();
    }
}
