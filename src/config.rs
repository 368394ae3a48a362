// src/config.rs
//! Optional `ctrf.toml` defaults.
//!
//! Explicit CLI flags always win; the config file only fills in values
//! the user did not pass. A missing file is the normal case.

use crate::merge::ToolPolicy;
use colored::Colorize;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "ctrf.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub merge: MergeDefaults,
}

/// Defaults for the `merge` subcommand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MergeDefaults {
    pub output: Option<String>,
    pub keep_reports: Option<bool>,
    pub tool_policy: Option<ToolPolicy>,
}

impl Config {
    /// Loads `ctrf.toml` from the working directory, if present.
    /// An unreadable or unparseable file warns and falls back to
    /// defaults rather than failing the command.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Self {
        let Ok(text) = fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "{} ignoring {}: {e}",
                    "warning:".yellow().bold(),
                    path.display()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/ctrf.toml"));
        assert!(config.merge.output.is_none());
        assert!(config.merge.keep_reports.is_none());
    }

    #[test]
    fn parses_merge_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctrf.toml");
        fs::write(
            &path,
            "[merge]\noutput = \"merged/\"\nkeep_reports = true\ntool_policy = \"last\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.merge.output.as_deref(), Some("merged/"));
        assert_eq!(config.merge.keep_reports, Some(true));
        assert_eq!(config.merge.tool_policy, Some(ToolPolicy::Last));
    }

    #[test]
    fn bad_toml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctrf.toml");
        fs::write(&path, "not valid toml [[[").unwrap();

        let config = Config::load_from(&path);
        assert!(config.merge.output.is_none());
    }
}
