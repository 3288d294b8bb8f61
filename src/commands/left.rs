//! Left prompt: repository flags followed by the prompt suffix

use anyhow::{Context, Result};
use std::io::Write;

use crate::core::{render_left, Environment, FlagSet};
use crate::git::{fetch_repo_status, StatusProvider};

/// Handles the left prompt command
pub async fn handle_left_command(
    provider: &dyn StatusProvider,
    env: &dyn Environment,
    flags: &FlagSet,
    out: &mut dyn Write,
) -> Result<()> {
    let cwd = env.current_dir()?;

    let status = fetch_repo_status(provider, &cwd)
        .await
        .context("reading repository status")?;
    log::debug!("repository status: {status:?}");

    out.write_all(render_left(status.as_ref(), flags).as_bytes())?;
    Ok(())
}
