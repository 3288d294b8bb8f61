//! Command handlers, one per prompt mode
//!
//! Handlers take their collaborators and output stream as arguments so they
//! can run against fakes in tests.

pub mod left;
pub mod path;
pub mod right;
pub mod status;
