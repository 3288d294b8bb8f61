pub(crate) mod fs;

// Public API - path helpers used by commands
pub use fs::{abbreviate_path, collapse_home};
