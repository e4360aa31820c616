use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::ports::{FileSystem, FileSystemError};
use crate::errors::LocateError;
use crate::utils::path::expand_tilde;

/// File extensions recognized when the caller does not supply a list,
/// in priority order.
pub const SUPPORTED_EXTS: [&str; 12] = [
    "json",
    "toml",
    "yaml",
    "yml",
    "properties",
    "props",
    "prop",
    "hcl",
    "tfvars",
    "dotenv",
    "env",
    "ini",
];

/// Outcome of probing a single candidate path.
///
/// `Inconclusive` carries failures other than "not found" (permission
/// denied, I/O error) so the caller can decide whether to keep searching
/// or abort.
#[derive(Debug)]
pub enum Presence {
    /// The path exists and is a regular file
    Present,
    /// The path does not exist, or exists but is a directory
    Absent,
    /// The stat failed for a reason other than absence
    Inconclusive(FileSystemError),
}

/// What to do when a probe comes back [`Presence::Inconclusive`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Treat the candidate as absent and keep searching (default)
    #[default]
    ContinueSearch,
    /// Stop the search and surface the underlying error
    Abort,
}

/// Probe a single path for a usable config file.
///
/// A directory with a matching name does not count: only regular files
/// are `Present`.
pub fn probe(fs: &dyn FileSystem, path: &Path) -> Presence {
    match fs.stat(path) {
        Ok(stat) if stat.is_file() => Presence::Present,
        Ok(_) => Presence::Absent,
        Err(err) if err.is_not_found() => Presence::Absent,
        Err(err) => Presence::Inconclusive(err),
    }
}

/// Searches an ordered list of directories for a configuration file.
///
/// The locator is a plain value: all inputs are explicit, nothing is
/// read from globals, and a search holds no state between calls. The
/// filesystem is injected so the same search runs against the real disk
/// or an in-memory one.
///
/// # Example
///
/// ```no_run
/// use cfgfind::{ConfigLocator, OsFs};
///
/// let locator = ConfigLocator::new("config")
///     .add_path("/etc/app")
///     .add_path("~/.app")
///     .with_extensions(["yaml", "json"]);
///
/// let found = locator.find(&OsFs::new())?;
/// # Ok::<(), cfgfind::LocateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    paths: Vec<PathBuf>,
    name: String,
    extensions: Vec<String>,
    config_type: Option<String>,
    error_policy: ErrorPolicy,
}

impl ConfigLocator {
    /// Create a locator for the given base name (no extension), with no
    /// search paths yet and the default extension list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            paths: Vec::new(),
            name: name.into(),
            extensions: SUPPORTED_EXTS.iter().map(ToString::to_string).collect(),
            config_type: None,
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Append a directory to the search list. Order matters: earlier
    /// paths win. A leading `~` is expanded to the home directory.
    #[must_use]
    pub fn add_path(mut self, path: impl AsRef<Path>) -> Self {
        self.paths.push(expand_tilde(path.as_ref()));
        self
    }

    /// Replace the extension list. Order matters: within a directory,
    /// earlier extensions win.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the expected file format. With an explicit type set, an
    /// extensionless file named exactly `name` also counts as a match.
    #[must_use]
    pub fn with_config_type(mut self, config_type: impl Into<String>) -> Self {
        self.config_type = Some(config_type.into());
        self
    }

    /// Choose how inconclusive probes (permission denied, I/O errors)
    /// are handled. The default keeps searching.
    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// The configured search directories, in priority order, after tilde
    /// expansion.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Search all configured paths for a config file.
    ///
    /// Returns the first candidate that exists and is a regular file.
    /// Directory order decides across directories, extension order
    /// decides within one.
    ///
    /// # Errors
    ///
    /// * [`LocateError::NotFound`] - No candidate matched anywhere;
    ///   carries the base name and every searched directory
    /// * [`LocateError::FileSystem`] - A probe failed and the policy is
    ///   [`ErrorPolicy::Abort`]
    pub fn find(&self, fs: &dyn FileSystem) -> Result<PathBuf, LocateError> {
        debug!(paths = ?self.paths, "searching for config in paths");

        for dir in &self.paths {
            if let Some(file) = self.search_in_path(fs, dir)? {
                return Ok(file);
            }
        }

        Err(LocateError::NotFound {
            name: self.name.clone(),
            searched: self.searched_display(),
        })
    }

    /// Check one directory for a candidate. `Ok(None)` means "nothing
    /// here", which only becomes an error once every directory came up
    /// empty.
    fn search_in_path(
        &self,
        fs: &dyn FileSystem,
        dir: &Path,
    ) -> Result<Option<PathBuf>, LocateError> {
        debug!(path = %dir.display(), "searching for config in path");

        for ext in &self.extensions {
            let candidate = dir.join(format!("{}.{ext}", self.name));
            debug!(file = %candidate.display(), "checking if file exists");
            if self.probe_candidate(fs, &candidate)? {
                debug!(file = %candidate.display(), "found file");
                return Ok(Some(candidate));
            }
        }

        // An explicit type means the file may carry no extension at all.
        if self.config_type.is_some() {
            let candidate = dir.join(&self.name);
            debug!(file = %candidate.display(), "checking if file exists");
            if self.probe_candidate(fs, &candidate)? {
                debug!(file = %candidate.display(), "found file");
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    fn probe_candidate(&self, fs: &dyn FileSystem, path: &Path) -> Result<bool, LocateError> {
        match probe(fs, path) {
            Presence::Present => Ok(true),
            Presence::Absent => Ok(false),
            Presence::Inconclusive(err) => match self.error_policy {
                ErrorPolicy::ContinueSearch => {
                    debug!(file = %path.display(), error = %err, "probe failed, continuing");
                    Ok(false)
                }
                ErrorPolicy::Abort => Err(err.into()),
            },
        }
    }

    fn searched_display(&self) -> String {
        let joined = self
            .paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{joined}]")
    }
}
