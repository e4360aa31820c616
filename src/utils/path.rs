use std::path::{Path, PathBuf, absolute};

/// Get the home directory path
///
/// Uses the `dirs` crate for cross-platform home directory detection.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().and_then(|path| absolute(&path).ok())
}

/// Expand a leading `~` to the home directory
///
/// `~` and `~/path` are resolved against the home directory; every other
/// path is returned unchanged (relative paths stay relative). If the home
/// directory cannot be determined, the path is returned unchanged as well.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();

    match components.next() {
        Some(std::path::Component::Normal(first)) if first == "~" => match home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}
