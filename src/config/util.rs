//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the config file by searching upward from the current directory.
///
/// Starts from cwd and walks up parent directories until `config_name`
/// exists. Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/project/assets/   ← cwd
/// /home/user/project/icogen.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        let candidate = dir.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Resolve a configured path against the project root.
///
/// Expands a leading tilde first; relative paths resolve against `root`.
pub fn resolve_against(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(path.to_str().unwrap_or_default()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

// ============================================================================
// tests
// ============================================================================
