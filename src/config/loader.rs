//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::types::{Config, CONFIG_FILE_NAME};
use crate::domain::value_objects::EnvironmentSetting;
use crate::error::{RequireError, RequireResult};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths in the file are resolved against its directory.
pub fn load_with_warnings(path: &Path) -> RequireResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RequireError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok((config.resolve_paths(base), warnings))
}

/// Load `requirekit.toml` from the project root, or fall back to defaults.
///
/// A file that fails to parse is logged and ignored.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(CONFIG_FILE_NAME);
        if project_config.exists() {
            match Config::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => warn!(error = %e, "ignoring unreadable configuration"),
            }
        }
        return with_env_overrides(Config::default().resolve_paths(root));
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (REQUIREKIT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // REQUIREKIT_DEBUG
    if let Ok(val) = std::env::var("REQUIREKIT_DEBUG") {
        config.require.debug = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
    }

    // REQUIREKIT_ENVIRONMENT
    if let Ok(name) = std::env::var("REQUIREKIT_ENVIRONMENT") {
        match EnvironmentSetting::from_name(&name) {
            Some(setting) => config.require.environment = setting,
            None => warn!(value = %name, "ignoring unknown REQUIREKIT_ENVIRONMENT"),
        }
    }

    // REQUIREKIT_BASE_URL
    if let Ok(base_url) = std::env::var("REQUIREKIT_BASE_URL") {
        if !base_url.trim().is_empty() {
            config.require.base_url = base_url;
        }
    }

    // REQUIREKIT_RESOURCES_DIR
    if let Ok(dir) = std::env::var("REQUIREKIT_RESOURCES_DIR") {
        if !dir.trim().is_empty() {
            config.require.resources_dir = Some(PathBuf::from(dir));
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "require",
        "base_url",
        "require_js",
        "build_profile",
        "debug",
        "exclude",
        "environment",
        "command",
        "resources_dir",
        "standalone_modules",
        "out",
        "relative_baseurl",
        "entry_file_name",
        "devel_tag",
        "staticfiles",
        "dirs",
        "root",
        "url",
        "ignore",
        "manifest",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
