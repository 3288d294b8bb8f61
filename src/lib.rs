//! # goobits-prompt
//!
//! `goobits-prompt` renders shell prompt segments from the current directory,
//! the SSH session and the state of the enclosing git repository. It powers
//! the `prompt` CLI, which a shell or tmux calls once per render.
//!
//! ## Core Features
//!
//! - **Status Parsing**: Branch, ahead/behind, dirty and stash state from
//!   `git status --porcelain=v2`.
//! - **Path Abbreviation**: Home collapsing and width-limited shortening for
//!   the tmux status line.
//! - **Configurable Flags**: One flag-character mapping shared by every mode.
//!
//! ## Example
//!
//! ```rust
//! use goobits_prompt::core::{render_left, FlagSet};
//! use goobits_prompt::git::parse_status;
//!
//! let status = parse_status("# branch.head feature-x\n# branch.ab +2 -0\n? notes.txt\n");
//! assert_eq!(render_left(Some(&status), &FlagSet::default()), "gcda> ");
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
