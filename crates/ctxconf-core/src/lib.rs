//! Context-aware configuration resolution for ctxconf
//!
//! Given a content item in a hierarchical tree, this crate finds the
//! configuration that applies to it. Configuration lives under a
//! configuration root (`/conf` by default) and content items point at it
//! through references, either on themselves or on an ancestor:
//!
//! - **Reference resolution**: absolute and relative references along the
//!   context chain become an ordered list of candidate roots
//! - **Single lookup**: the most specific matching node wins, with optional
//!   property inheritance from less specific ones
//! - **Collection lookup**: children of matching collection nodes, with
//!   optional collection and property inheritance filtered by deciders
//! - **Path building**: where a configuration node belongs, whether or not
//!   it exists yet
//!
//! # Architecture
//!
//! ```text
//!               ctxconf-cli
//!                    |
//!              ctxconf-core
//!   settings, context, decider, resolve, lookup
//!                    |
//!              ctxconf-tree
//!    paths, properties, nodes, tree documents
//! ```
//!
//! # Example
//!
//! ```
//! use ctxconf_core::{ConfigurationResolver, ContextItem};
//! use ctxconf_tree::{ConfPath, MemoryTree};
//! use std::sync::Arc;
//!
//! let tree = MemoryTree::new()
//!     .with_node("/conf/global/settings/title", [("text", "Global")]);
//! let chain = vec![ContextItem::new("/content/page")];
//! let resolver = ConfigurationResolver::new(Arc::new(tree), Arc::new(chain));
//!
//! let path = ConfPath::new("/content/page");
//! assert_eq!(
//!     resolver.candidate_roots(&path, "settings"),
//!     vec![ConfPath::new("/conf/global"), ConfPath::new("/apps/conf"), ConfPath::new("/libs/conf")]
//! );
//! ```

pub mod context;
pub mod decider;
pub mod error;
pub mod lookup;
pub mod resolve;
pub mod resolver;
pub mod settings;

pub use context::{ContextChainProvider, ContextItem, PropertyContextChain};
pub use decider::{DeciderChain, InclusionDecider, InheritanceDecision, StaticDecider};
pub use error::{Error, Result};
pub use lookup::{ResolvedCollection, ResolvedNode};
pub use resolver::ConfigurationResolver;
pub use settings::{DEFAULT_CONFIG_ROOT, DEFAULT_FALLBACK_ROOTS, ResolverConfig, Snapshot};
