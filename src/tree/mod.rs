//! Cabinet tree traversal.

pub mod walker;

pub use walker::{flatten, walk, Flatten, Walk};
