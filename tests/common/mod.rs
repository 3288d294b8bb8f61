//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod env;
pub mod fixtures;

pub use self::env::{FakeEnvironment, FakeProvider};
pub use self::fixtures::TestRepoBuilder;
pub use self::git::{git_supports_stash_header, is_git_available, setup_git_repo};
