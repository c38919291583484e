//! Hierarchical content tree model for context-aware configuration
//!
//! Provides normalized tree paths, property values, the read-only
//! [`TreeStore`] accessor and an in-memory tree loaded from documents.

pub mod constants;
pub mod document;
pub mod error;
pub mod io;
pub mod memory;
pub mod node;
pub mod path;
pub mod value;

pub use constants::ReservedName;
pub use document::{DocumentLoader, TreeDocument, TreeEntry};
pub use error::{Error, Result};
pub use memory::MemoryTree;
pub use node::{Node, TreeStore};
pub use path::ConfPath;
pub use value::{PropertyMap, PropertyValue};
