//! Cabinet: recursive folder lookup
//!
//! A cabinet holds named, sized folders, some of which are cabinets themselves.
//! Lookups by name and filters by size run over the whole tree, flattened
//! depth-first in pre-order.
//!
//! ```
//! use cabinet::{Cabinet, FileCabinet, Folder, FolderNode};
//!
//! let drawer = FileCabinet::new(
//!     vec![FolderNode::entry("Test1", "small"), FolderNode::entry("Test2", "medium")],
//!     "Drawer",
//!     "small",
//! );
//! let root = FileCabinet::new(
//!     vec![FolderNode::from(drawer), FolderNode::entry("Test7", "medium")],
//!     "Root",
//!     "large",
//! );
//!
//! assert_eq!(root.count(), 4);
//! assert_eq!(root.find_folder_by_name(Some(" test1 ")).map(|f| f.name()), Some("Test1"));
//! assert_eq!(root.find_folders_by_size(Some("medium")).unwrap().len(), 2);
//! ```

pub mod cabinet;
pub mod config;
pub mod error;
pub mod folder;
pub mod layout;
pub mod logging;
pub mod tooling;
pub mod tree;
pub mod types;

pub use cabinet::{Cabinet, FileCabinet};
pub use error::{ApiError, QueryError};
pub use folder::validation::{assert_allowed_size, normalize, ValidationResult};
pub use folder::{Folder, FolderEntry, FolderNode, MultiFolder};
pub use types::FolderSize;
