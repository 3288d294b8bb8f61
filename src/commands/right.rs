//! Right prompt: `user@host` when connected over SSH

use anyhow::Result;
use std::io::Write;

use crate::core::{render_right, Environment};

/// Handles the right prompt command
pub fn handle_right_command(env: &dyn Environment, out: &mut dyn Write) -> Result<()> {
    if !env.is_remote() {
        return Ok(());
    }

    let user = env.username()?;
    let host = env.hostname()?;
    out.write_all(render_right(Some((user.as_str(), host.as_str()))).as_bytes())?;
    Ok(())
}
