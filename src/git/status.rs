//! Repository status parsed from `git status --porcelain=v2`

use serde::Serialize;

/// Head name git reports when HEAD does not point at a branch
const DETACHED_HEAD: &str = "(detached)";

/// First tokens of porcelain v2 per-file records:
/// ignored, untracked, ordinary changed, renamed/copied, unmerged
const FILE_RECORD_KINDS: &[&str] = &["!", "?", "1", "2", "u"];

/// Summary of the repository state the prompt cares about
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    /// Current branch name, empty when the report carried none
    pub head: String,
    /// Local commits not yet on the upstream
    pub ahead: u64,
    /// Upstream commits not yet merged locally
    pub behind: u64,
    /// Any tracked or untracked change exists
    pub dirty: bool,
    /// At least one stash entry exists
    pub stash: bool,
}

impl RepoStatus {
    /// Returns true when git reported a detached HEAD
    pub fn is_detached(&self) -> bool {
        self.head == DETACHED_HEAD
    }

    /// Returns true when the head is one of the given default branch names
    pub fn on_default_branch<S: AsRef<str>>(&self, defaults: &[S]) -> bool {
        defaults.iter().any(|name| name.as_ref() == self.head)
    }
}

/// Parses a porcelain v2 status report (with `--branch` and `--show-stash`).
///
/// Never fails: unknown, short or malformed lines are skipped and leave the
/// corresponding fields at their previous value.
pub fn parse_status(report: &str) -> RepoStatus {
    let mut status = RepoStatus::default();

    for line in report.lines() {
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() < 2 {
            continue;
        }

        match tokens[0] {
            "#" => parse_header(&mut status, &tokens[1..]),
            kind if FILE_RECORD_KINDS.contains(&kind) => status.dirty = true,
            _ => log::trace!("skipping status line: {line}"),
        }
    }

    status
}

/// Applies one `# <key> <values...>` header line
fn parse_header(status: &mut RepoStatus, tokens: &[&str]) {
    match tokens {
        ["branch.head", name, ..] => status.head = (*name).to_string(),
        ["branch.ab", counts @ ..] => {
            if let Some(ahead) = counts.first().and_then(|t| parse_count(t, '+')) {
                status.ahead = ahead;
            }
            if let Some(behind) = counts.get(1).and_then(|t| parse_count(t, '-')) {
                status.behind = behind;
            }
        }
        ["stash", count, ..] => match count.parse::<i64>() {
            Ok(n) => status.stash = n > 0,
            Err(_) => log::trace!("skipping stash header with count {count:?}"),
        },
        _ => {}
    }
}

/// Parses `+N` / `-N` into N
fn parse_count(token: &str, sign: char) -> Option<u64> {
    token.strip_prefix(sign)?.parse().ok()
}
