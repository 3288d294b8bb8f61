//! Path segments: the tmux status line and the plain home-collapsed path

use anyhow::{Context, Result};
use std::io::{Read, Write};

use crate::core::Environment;
use crate::utils::{abbreviate_path, collapse_home};

/// Handles `tmux-right`: abbreviates the path read from `input`
pub fn handle_tmux_right_command(
    env: &dyn Environment,
    width: usize,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    // Paths are bytes; undecodable ones still get abbreviated
    let mut raw = Vec::new();
    input
        .read_to_end(&mut raw)
        .context("reading path from stdin")?;
    let path = String::from_utf8_lossy(&raw);
    let path = path.trim_end_matches(['\n', '\r']);

    let home = env.home_dir()?;
    let abbreviated = abbreviate_path(path, &home.to_string_lossy(), width);
    out.write_all(abbreviated.as_bytes())?;
    Ok(())
}

/// Handles `path`: prints the working directory with home collapsed to `~`
pub fn handle_path_command(env: &dyn Environment, out: &mut dyn Write) -> Result<()> {
    let cwd = env.current_dir()?;
    let home = env.home_dir()?;

    let collapsed = collapse_home(&cwd.to_string_lossy(), &home.to_string_lossy());
    out.write_all(collapsed.as_bytes())?;
    Ok(())
}
