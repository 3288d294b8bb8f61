//! Session facts read from the operating system

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::process::Command;

use super::config::SSH_CONNECTION_VAR;

/// Identity and session lookups the prompt depends on.
///
/// Kept behind a trait so rendering can be tested without real OS state.
pub trait Environment {
    /// Returns a non-empty environment variable
    fn var(&self, key: &str) -> Option<String>;

    fn username(&self) -> Result<String>;

    fn hostname(&self) -> Result<String>;

    fn home_dir(&self) -> Result<PathBuf>;

    fn current_dir(&self) -> Result<PathBuf>;

    /// Returns true inside an SSH session
    fn is_remote(&self) -> bool {
        self.var(SSH_CONNECTION_VAR).is_some()
    }
}

/// `Environment` backed by the running process
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }

    fn username(&self) -> Result<String> {
        if let Some(user) = self.var("USER").or_else(|| self.var("LOGNAME")) {
            return Ok(user);
        }
        command_output("id", &["-un"]).context("unable to resolve current user")
    }

    fn hostname(&self) -> Result<String> {
        command_output("hostname", &[])
            .or_else(|e| self.var("HOSTNAME").ok_or(e))
            .context("unable to resolve hostname")
    }

    fn home_dir(&self) -> Result<PathBuf> {
        dirs::home_dir().ok_or_else(|| anyhow!("unable to resolve home directory"))
    }

    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context("unable to resolve working directory")
    }
}

/// Runs a lookup command and returns its trimmed, non-empty stdout
fn command_output(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to run {program}"))?;

    if !output.status.success() {
        anyhow::bail!(
            "{program} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() {
        anyhow::bail!("{program} printed nothing");
    }
    Ok(value)
}
