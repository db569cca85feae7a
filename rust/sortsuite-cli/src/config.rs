//! Configuration file parsing for `sortsuite.toml`.
//!
//! Searches current directory then ancestors, falling back to
//! `~/.config/sortsuite/sortsuite.toml` if no project-level file is found.

use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use sortsuite_core::Algorithm;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct SortsuiteConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// Defaults applied when the matching command-line flag is absent.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct DefaultsSection {
    /// Algorithm used when `--algorithm` is not given.
    #[serde(default)]
    pub algorithm: Option<Algorithm>,
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Preview length used when `--preview` is not given (0 = everything).
    #[serde(default)]
    pub preview: Option<usize>,
}

impl SortsuiteConfig {
    /// Load config from `sortsuite.toml`, searching current dir then parents.
    /// Returns `Default` when no file is found.
    pub fn load() -> Self {
        Self::find_and_load()
            .map(|(_path, cfg)| cfg)
            .unwrap_or_default()
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        toml::from_str(&content).map_err(|e| format!("invalid toml in '{}': {}", path.display(), e))
    }

    fn find_and_load() -> Option<(PathBuf, Self)> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("sortsuite.toml");
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path).ok()?;
                let cfg: Self = toml::from_str(&content).ok()?;
                return Some((config_path, cfg));
            }
            if !dir.pop() {
                break;
            }
        }
        // Try global config
        if let Some(home) = home_dir() {
            let global = home.join(".config").join("sortsuite").join("sortsuite.toml");
            if global.exists() {
                let content = std::fs::read_to_string(&global).ok()?;
                let cfg: Self = toml::from_str(&content).ok()?;
                return Some((global, cfg));
            }
        }
        None
    }

    /// Generate a default `sortsuite.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Sortsuite Configuration
# Defaults applied when the matching command-line flag is not given.

[defaults]
# algorithm = "merge"     # bubble | insertion | merge
# format = "text"         # text | json | csv
# preview = 50            # sorted-output preview length (0 = everything)
"#
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
