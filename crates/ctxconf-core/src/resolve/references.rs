//! Resolution of absolute and relative configuration references
//!
//! Walking the context chain nearest first, an absolute reference is used
//! as is, while a relative reference waits for the next absolute reference
//! further up the chain and is resolved against it. Relative references
//! queue up in encounter order; once an absolute base turns up the whole
//! queue is drained against it before any further context item is read.
//!
//! ```text
//! /content/site/page      ref "page"      -> queued
//! /content/site           ref "site"      -> queued
//! /content                ref "/conf/org" -> base
//!
//! yields /conf/org/page, /conf/org/site
//! ```

use super::validate::ReferenceValidator;
use crate::context::ContextItem;
use ctxconf_tree::ConfPath;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Lazy sequence of validated reference paths, most specific first.
pub struct ReferenceChain<'a, I> {
    items: I,
    validator: ReferenceValidator<'a>,
    pending: VecDeque<ContextItem>,
    base: Option<ConfPath>,
    done: bool,
}

impl<'a, I> ReferenceChain<'a, I>
where
    I: Iterator<Item = ContextItem>,
{
    pub fn new(items: I, validator: ReferenceValidator<'a>) -> Self {
        Self {
            items,
            validator,
            pending: VecDeque::new(),
            base: None,
            done: false,
        }
    }

    /// Resolve the next queued relative reference against the current base.
    fn drain_next(&mut self, base: &ConfPath) -> Option<ConfPath> {
        let Some(item) = self.pending.pop_front() else {
            self.base = None;
            return None;
        };
        if self.pending.is_empty() {
            self.base = None;
        }
        let candidate = format!("{}/{}", base, item.config_ref().unwrap_or_default());
        self.validator.check(&item, &candidate)
    }

    fn finish(&mut self) {
        self.done = true;
        if !self.pending.is_empty() {
            let unresolved: Vec<String> = self
                .pending
                .drain(..)
                .map(|item| format!("{} -> {}", item.path(), item.config_ref().unwrap_or_default()))
                .collect();
            tracing::error!(
                ?unresolved,
                "Relative references not used as no absolute reference was found"
            );
        }
    }
}

impl<I> Iterator for ReferenceChain<'_, I>
where
    I: Iterator<Item = ContextItem>,
{
    type Item = ConfPath;

    fn next(&mut self) -> Option<ConfPath> {
        if self.done {
            return None;
        }

        loop {
            if let Some(base) = self.base.clone() {
                if let Some(path) = self.drain_next(&base) {
                    return Some(path);
                }
                continue;
            }

            let Some(item) = self.items.next() else {
                self.finish();
                return None;
            };
            let Some(reference) = item.config_ref() else {
                continue;
            };

            tracing::trace!(reference, item = %item.path(), "Reference found");
            if reference.starts_with('/') {
                let Some(path) = self.validator.check(&item, reference) else {
                    continue;
                };
                if self.pending.is_empty() {
                    return Some(path);
                }
                self.base = Some(path);
            } else {
                self.pending.push_back(item);
            }
        }
    }
}

impl<I> FusedIterator for ReferenceChain<'_, I> where I: Iterator<Item = ContextItem> {}
