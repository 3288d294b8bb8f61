//! Configuration constants and the optional TOML config file
//!
//! Every setting has a built-in default, so a missing config file renders the
//! reference prompt. Resolution order for the file:
//! 1. `--config FILE` flag / `PROMPT_CONFIG` env var
//! 2. `<config dir>/goobits-prompt/config.toml`
//! 3. Built-in defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// Path abbreviation
pub const DEFAULT_TMUX_WIDTH: usize = 40;
pub const HOME_MARKER: &str = "~";
pub const TRUNCATION_MARKER: &str = "+";

// Config file location
pub const CONFIG_ENV_VAR: &str = "PROMPT_CONFIG";
const CONFIG_DIR_NAME: &str = "goobits-prompt";
const CONFIG_FILE_NAME: &str = "config.toml";

// Session detection
pub const SSH_CONNECTION_VAR: &str = "SSH_CONNECTION";

// Logging
pub const LOG_ENV_VAR: &str = "PROMPT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Characters the left prompt emits for each repository condition.
/// The emission order is fixed: repo, branch, dirty, behind, ahead, stash.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FlagSet {
    pub repo: String,
    pub branch: String,
    pub dirty: String,
    pub behind: String,
    pub ahead: String,
    pub stash: String,
    /// Always appended, inside or outside a repository
    pub suffix: String,
    /// Branches that do not get the `branch` flag
    pub default_branches: Vec<String>,
}

impl Default for FlagSet {
    fn default() -> Self {
        Self {
            repo: "g".to_string(),
            branch: "c".to_string(),
            dirty: "d".to_string(),
            behind: "b".to_string(),
            ahead: "a".to_string(),
            stash: "s".to_string(),
            suffix: "> ".to_string(),
            default_branches: vec!["main".to_string(), "master".to_string()],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TmuxConfig {
    /// Display-width budget for `tmux-right`
    pub width: usize,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TMUX_WIDTH,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub flags: FlagSet,
    pub tmux: TmuxConfig,
}

impl PromptConfig {
    /// Parses a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads a config file; the file must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the prompt config.
///
/// An explicit path must exist. The default location is optional and falls
/// back to built-in defaults when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<PromptConfig> {
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        return PromptConfig::from_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            log::debug!("loading config from {}", path.display());
            PromptConfig::from_file(&path)
        }
        _ => Ok(PromptConfig::default()),
    }
}
