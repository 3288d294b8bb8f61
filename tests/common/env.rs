//! In-memory collaborators for handler tests

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use goobits_prompt::core::Environment;
use goobits_prompt::git::{GitError, StatusProvider};

/// Environment with fixed identity values; `None` fields fail their lookup
#[derive(Default)]
pub struct FakeEnvironment {
    pub vars: HashMap<String, String>,
    pub username: Option<String>,
    pub hostname: Option<String>,
    pub home: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self {
            username: Some("alice".to_string()),
            hostname: Some("devbox".to_string()),
            home: Some(PathBuf::from("/home/alice")),
            cwd: Some(PathBuf::from("/home/alice/projects/widget")),
            ..Self::default()
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn username(&self) -> Result<String> {
        self.username
            .clone()
            .ok_or_else(|| anyhow!("unable to resolve current user"))
    }

    fn hostname(&self) -> Result<String> {
        self.hostname
            .clone()
            .ok_or_else(|| anyhow!("unable to resolve hostname"))
    }

    fn home_dir(&self) -> Result<PathBuf> {
        self.home
            .clone()
            .ok_or_else(|| anyhow!("unable to resolve home directory"))
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.cwd
            .clone()
            .ok_or_else(|| anyhow!("unable to resolve working directory"))
    }
}

/// Status provider returning a canned report
pub enum FakeProvider {
    /// Not inside a repository
    NoRepo,
    /// Inside a repository with this porcelain v2 report
    Report(&'static str),
    /// Inside a repository but `git status` fails
    Failing,
}

#[async_trait]
impl StatusProvider for FakeProvider {
    async fn is_inside_work_tree(&self, _path: &Path) -> bool {
        !matches!(self, FakeProvider::NoRepo)
    }

    async fn status_report(&self, _path: &Path) -> Result<String, GitError> {
        match self {
            FakeProvider::NoRepo => panic!("status requested outside a repository"),
            FakeProvider::Report(report) => Ok(report.to_string()),
            FakeProvider::Failing => Err(GitError::Failed {
                args: "status".to_string(),
                code: "128".to_string(),
                stderr: "fatal: index file corrupt".to_string(),
            }),
        }
    }
}
