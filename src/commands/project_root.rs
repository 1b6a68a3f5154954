use std::path::{Path, PathBuf};

use requirekit::config::CONFIG_FILE_NAME;

/// Discover the project root directory from an invocation directory.
///
/// Walks upward from `start` to the nearest directory holding
/// `requirekit.toml`. Falls back to `start` when there is none.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
        .unwrap_or(start)
        .to_path_buf()
}
