//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality:
//! - Prompt configuration and the flag mapping
//! - Session environment lookups
//! - Segment rendering

// Configuration
pub use super::config::{
    default_config_path, load_config, FlagSet, PromptConfig, TmuxConfig, CONFIG_ENV_VAR,
    DEFAULT_LOG_FILTER, DEFAULT_TMUX_WIDTH, HOME_MARKER, LOG_ENV_VAR, SSH_CONNECTION_VAR,
    TRUNCATION_MARKER,
};

// Environment
pub use super::context::{Environment, SystemEnvironment};

// Rendering
pub use super::segments::{render_left, render_right};
