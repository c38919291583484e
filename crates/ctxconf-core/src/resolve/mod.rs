//! Candidate root resolution
//!
//! Turns a content item's context chain into the ordered list of
//! configuration roots a lookup searches:
//!
//! 1. [`ReferenceChain`] resolves absolute and relative references found
//!    along the context chain, nearest first.
//! 2. [`ParentExpand`] follows each reference with its ancestors down to the
//!    configuration root.
//! 3. The fallback roots are appended and [`Dedup`] keeps first occurrences.

mod candidates;
mod references;
mod validate;

pub use candidates::{Dedup, ParentExpand, candidate_roots};
pub use references::ReferenceChain;
pub use validate::{ReferenceValidator, is_valid_name};
