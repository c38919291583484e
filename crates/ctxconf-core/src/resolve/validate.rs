//! Name and reference validation

use crate::context::ContextItem;
use crate::settings::ResolverConfig;
use ctxconf_tree::ConfPath;

/// Whether a bucket or configuration name may be used in a lookup.
///
/// Names must be non-empty, relative and free of `..` segments. Nested
/// names such as `site/header` are allowed.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('/') && !name.split('/').any(|segment| segment == "..")
}

/// Checks candidate reference paths for one bucket.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceValidator<'a> {
    config: &'a ResolverConfig,
    not_allowed_suffix: &'a str,
}

impl<'a> ReferenceValidator<'a> {
    /// `bucket_suffix` is `"/" + bucket_name`.
    pub fn new(config: &'a ResolverConfig, bucket_suffix: &'a str) -> Self {
        Self {
            config,
            not_allowed_suffix: bucket_suffix,
        }
    }

    /// Normalize `candidate` and return it when it is a usable reference.
    ///
    /// Rejected: paths climbing above the root, paths ending in the bucket
    /// name (they would reference their own bucket), paths outside the
    /// configuration root and paths overlapping a fallback root.
    pub fn check(&self, item: &ContextItem, candidate: &str) -> Option<ConfPath> {
        let reference = item.config_ref().unwrap_or_default();

        let Some(path) = ConfPath::normalize(candidate) else {
            tracing::warn!(
                reference,
                item = %item.path(),
                "Ignoring reference - cannot be normalized"
            );
            return None;
        };

        if path.as_str().ends_with(self.not_allowed_suffix) {
            tracing::warn!(
                reference,
                item = %item.path(),
                suffix = self.not_allowed_suffix,
                "Ignoring reference - probably misconfigured as it ends with the bucket name"
            );
            return None;
        }

        tracing::trace!(path = %path, root = %self.config.config_root_path, "Checking allowed root");
        if !self.config.is_allowed(&path) {
            tracing::warn!(reference, item = %item.path(), "Ignoring reference - not in allowed paths");
            return None;
        }

        if self.config.is_fallback(&path) {
            tracing::warn!(reference, item = %item.path(), "Ignoring reference - already a fallback path");
            return None;
        }

        Some(path)
    }
}
