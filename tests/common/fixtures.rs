//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{create_test_commit, run_git, setup_git_repo};

/// A test repository named `name` inside a temp dir, removed on drop
pub struct TestRepo {
    pub temp_dir: TempDir,
    path: PathBuf,
}

impl TestRepo {
    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a new file in the repository
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Run a git command inside the repository
    pub fn git(&self, args: &[&str]) -> Result<String> {
        run_git(self.path(), args)
    }

    /// Create a commit touching a new file
    pub fn commit(&self, file_name: &str, message: &str) -> Result<()> {
        create_test_commit(self.path(), file_name, message, message)
    }

    /// Track a local branch as the upstream of the current branch
    pub fn track(&self, upstream: &str) -> Result<()> {
        self.git(&["branch", upstream])?;
        self.git(&["branch", &format!("--set-upstream-to={upstream}")])?;
        Ok(())
    }
}

/// Builder for creating test repositories
pub struct TestRepoBuilder {
    name: String,
    with_branch: Option<String>,
    with_commits: usize,
}

impl TestRepoBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            with_branch: None,
            with_commits: 1,
        }
    }

    /// Check out a new branch after the commits are created
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.with_branch = Some(branch.into());
        self
    }

    /// Number of commits to create; zero leaves an unborn branch
    pub fn with_commits(mut self, count: usize) -> Self {
        self.with_commits = count;
        self
    }

    pub fn build(self) -> Result<TestRepo> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(&self.name);
        std::fs::create_dir(&path)?;
        setup_git_repo(&path)?;

        let repo = TestRepo { temp_dir, path };

        for i in 1..=self.with_commits {
            create_test_commit(
                repo.path(),
                &format!("file{}.txt", i),
                &format!("Content {}", i),
                &format!("Commit {}", i),
            )?;
        }

        if let Some(branch) = self.with_branch {
            repo.git(&["checkout", "-q", "-b", &branch])?;
        }

        Ok(repo)
    }
}
