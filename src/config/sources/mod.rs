//! Config sources, each adding one layer to a builder.

pub mod environment;
pub mod global_file;
