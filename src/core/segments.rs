//! Prompt segment rendering

use crate::git::RepoStatus;

use super::config::FlagSet;

/// Renders the left prompt.
///
/// `status` is `None` outside a repository. Flags are emitted in a fixed
/// order: repo, branch, dirty, behind, ahead, stash, then the suffix.
pub fn render_left(status: Option<&RepoStatus>, flags: &FlagSet) -> String {
    let mut out = String::new();

    if let Some(status) = status {
        out.push_str(&flags.repo);

        let conditions = [
            (!status.on_default_branch(&flags.default_branches), &flags.branch),
            (status.dirty, &flags.dirty),
            (status.behind > 0, &flags.behind),
            (status.ahead > 0, &flags.ahead),
            (status.stash, &flags.stash),
        ];
        for (set, flag) in conditions {
            if set {
                out.push_str(flag);
            }
        }
    }

    out.push_str(&flags.suffix);
    out
}

/// Renders the right prompt: `user@host` for remote sessions, else nothing
pub fn render_right(remote: Option<(&str, &str)>) -> String {
    match remote {
        Some((user, host)) => format!("{user}@{host}"),
        None => String::new(),
    }
}
