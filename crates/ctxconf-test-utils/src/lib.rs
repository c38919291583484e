//! Shared test utilities for the ctxconf workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! rebuild the same trees by hand. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`scenario`] - in-memory trees and context chains for common lookups
//! - [`decider`] - a decider that records what it was asked
//! - [`workspace`] - [`TestWorkspace`] for tree and settings files on disk

pub mod decider;
pub mod scenario;
pub mod workspace;

pub use decider::RecordingDecider;
pub use workspace::TestWorkspace;
