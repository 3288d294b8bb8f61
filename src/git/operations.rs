//! git command execution behind the `StatusProvider` seam

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;

use super::status::{parse_status, RepoStatus};

// Git command arguments
const GIT_NO_LOCKS_ARG: &str = "--no-optional-locks";
const GIT_INSIDE_WORK_TREE_ARGS: &[&str] = &["rev-parse", "--is-inside-work-tree"];
const GIT_STATUS_ARGS: &[&str] = &["status", "--show-stash", "--branch", "--porcelain=v2"];

/// Failure of a git invocation
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be started
    #[error("failed to run git: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },
    /// git ran but exited unsuccessfully
    #[error("git {args} exited with {code}: {stderr}")]
    Failed {
        args: String,
        code: String,
        stderr: String,
    },
}

/// Output of a finished git command
#[derive(Clone, Debug)]
pub struct GitOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs git with `--no-optional-locks` in the specified directory.
///
/// There is no timeout: the prompt waits for git like the shell would.
pub async fn run_git(path: &Path, args: &[&str]) -> Result<GitOutput, GitError> {
    log::debug!("running git {} in {}", args.join(" "), path.display());

    let output = Command::new("git")
        .arg(GIT_NO_LOCKS_ARG)
        .args(args)
        .current_dir(path)
        .output()
        .await
        .map_err(|source| GitError::Spawn { source })?;

    Ok(GitOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Source of repository state for the prompt
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Returns true when `path` is inside a git work tree.
    /// Any failure counts as "not a repository".
    async fn is_inside_work_tree(&self, path: &Path) -> bool;

    /// Returns the raw porcelain v2 status report for `path`
    async fn status_report(&self, path: &Path) -> Result<String, GitError>;
}

/// `StatusProvider` backed by the `git` executable
#[derive(Clone, Copy, Debug, Default)]
pub struct GitCli;

#[async_trait]
impl StatusProvider for GitCli {
    async fn is_inside_work_tree(&self, path: &Path) -> bool {
        match run_git(path, GIT_INSIDE_WORK_TREE_ARGS).await {
            Ok(output) => output.success,
            Err(e) => {
                log::debug!("treating {} as outside a repository: {e}", path.display());
                false
            }
        }
    }

    async fn status_report(&self, path: &Path) -> Result<String, GitError> {
        let output = run_git(path, GIT_STATUS_ARGS).await?;
        if !output.success {
            return Err(GitError::Failed {
                args: GIT_STATUS_ARGS.join(" "),
                code: output
                    .code
                    .map_or_else(|| "signal".to_string(), |c| c.to_string()),
                stderr: output.stderr,
            });
        }
        Ok(output.stdout)
    }
}

/// Reads and parses the status of the repository containing `path`.
///
/// Returns `None` outside a repository. A failing status fetch inside a
/// repository is an error.
pub async fn fetch_repo_status(
    provider: &dyn StatusProvider,
    path: &Path,
) -> Result<Option<RepoStatus>, GitError> {
    if !provider.is_inside_work_tree(path).await {
        return Ok(None);
    }
    let report = provider.status_report(path).await?;
    Ok(Some(parse_status(&report)))
}
