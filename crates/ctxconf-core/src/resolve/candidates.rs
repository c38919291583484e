//! Candidate root expansion and de-duplication

use crate::settings::ResolverConfig;
use ctxconf_tree::ConfPath;
use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

/// Expands every reference into itself followed by its ancestors, most
/// specific first, down to and including the configuration root.
pub struct ParentExpand<I> {
    root: ConfPath,
    references: I,
    expanded: VecDeque<ConfPath>,
}

impl<I> ParentExpand<I>
where
    I: Iterator<Item = ConfPath>,
{
    pub fn new(root: ConfPath, references: I) -> Self {
        Self {
            root,
            references,
            expanded: VecDeque::new(),
        }
    }

    fn expand(&mut self, reference: ConfPath) {
        if reference.is_descendant_of(&self.root) {
            let mut parent = reference.parent();
            while let Some(path) = parent {
                let reached_root = path == self.root;
                parent = path.parent();
                self.expanded.push_back(path);
                if reached_root {
                    break;
                }
            }
        }
        self.expanded.push_front(reference);
    }
}

impl<I> Iterator for ParentExpand<I>
where
    I: Iterator<Item = ConfPath>,
{
    type Item = ConfPath;

    fn next(&mut self) -> Option<ConfPath> {
        if self.expanded.is_empty() {
            let reference = self.references.next()?;
            self.expand(reference);
        }
        self.expanded.pop_front()
    }
}

/// Yields each distinct path once, at its first occurrence.
pub struct Dedup<I> {
    inner: I,
    seen: HashSet<ConfPath>,
}

impl<I> Dedup<I>
where
    I: Iterator<Item = ConfPath>,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }
}

impl<I> Iterator for Dedup<I>
where
    I: Iterator<Item = ConfPath>,
{
    type Item = ConfPath;

    fn next(&mut self) -> Option<ConfPath> {
        let seen = &mut self.seen;
        self.inner.find(|path| seen.insert(path.clone()))
    }
}

impl<I> FusedIterator for Dedup<I> where I: FusedIterator<Item = ConfPath> {}

/// Final candidate roots: expanded references, then the fallback roots,
/// without duplicates.
pub fn candidate_roots<'a, I>(
    config: &'a ResolverConfig,
    references: I,
) -> impl Iterator<Item = ConfPath> + 'a
where
    I: Iterator<Item = ConfPath> + 'a,
{
    let expanded = ParentExpand::new(config.config_root_path.clone(), references);
    Dedup::new(expanded.chain(config.fallback_roots.iter().cloned()))
}
