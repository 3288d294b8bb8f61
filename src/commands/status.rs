//! Repository status as JSON, for debugging prompt setups

use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;

use crate::core::Environment;
use crate::git::{fetch_repo_status, StatusProvider};

/// Handles the status command
pub async fn handle_status_command(
    provider: &dyn StatusProvider,
    env: &dyn Environment,
    out: &mut dyn Write,
) -> Result<()> {
    let cwd = env.current_dir()?;

    let value = match fetch_repo_status(provider, &cwd)
        .await
        .context("reading repository status")?
    {
        Some(status) => {
            let mut value = serde_json::to_value(&status)?;
            value["repo"] = json!(true);
            value["detached"] = json!(status.is_detached());
            value
        }
        None => json!({ "repo": false }),
    };

    writeln!(out, "{}", serde_json::to_string(&value)?)?;
    Ok(())
}
