//! Path shortening for prompt display

use unicode_width::UnicodeWidthStr;

use crate::core::{HOME_MARKER, TRUNCATION_MARKER};

const SEPARATOR: char = '/';

/// Replaces a leading home directory with `~`.
///
/// Only whole components match: `/home/al` does not collapse `/home/alice`.
pub fn collapse_home(path: &str, home: &str) -> String {
    let home = home.trim_end_matches(SEPARATOR);
    if home.is_empty() {
        return path.to_string();
    }

    match path.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with(SEPARATOR) => {
            format!("{HOME_MARKER}{rest}")
        }
        _ => path.to_string(),
    }
}

/// Shortens a path to fit `limit` display columns for the tmux status line.
///
/// After collapsing the home directory, leading components are reduced to
/// their first character one at a time. If even that is too wide, only the
/// trailing components that fit are kept, prefixed with `+`.
pub fn abbreviate_path(path: &str, home: &str, limit: usize) -> String {
    let path = collapse_home(path, home);
    if path.width() <= limit {
        return path;
    }

    // Absolute paths split with an empty first component, which keeps the
    // leading `/` through initialing and is skipped when trimming.
    let mut parts: Vec<String> = path.split(SEPARATOR).map(str::to_string).collect();

    // The last component is the directory itself and is never initialed
    let last = parts.len() - 1;
    for i in 0..last {
        if let Some(initial) = initial_of(&parts[i]) {
            parts[i] = initial;
        }

        let joined = parts.join("/");
        if joined.width() <= limit {
            return joined;
        }
    }

    let mut kept = parts[last].clone();
    for part in parts[..last].iter().rev().filter(|p| !p.is_empty()) {
        let candidate = format!("{part}{SEPARATOR}{kept}");
        if candidate.width() < limit {
            kept = candidate;
        } else {
            break;
        }
    }

    format!("{TRUNCATION_MARKER}{kept}")
}

/// First character of a component that can still be shortened
fn initial_of(part: &str) -> Option<String> {
    if part == HOME_MARKER {
        return None;
    }
    let mut chars = part.chars();
    let first = chars.next()?;
    chars.next().map(|_| first.to_string())
}
