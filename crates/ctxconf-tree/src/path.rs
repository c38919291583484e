//! Slash-separated paths into the content tree

use serde::{Deserialize, Serialize};

/// A path into the content tree.
///
/// Tree paths always use forward slashes. Absolute paths start at the tree
/// root `/`. A `ConfPath` never carries a trailing slash, except for the root
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ConfPath {
    inner: String,
}

impl ConfPath {
    /// Create a new ConfPath from trusted input.
    ///
    /// Collapses repeated slashes and strips a trailing slash but leaves
    /// `.` and `..` segments untouched. Use [`ConfPath::normalize`] for
    /// input that may contain relative segments.
    pub fn new(path: impl AsRef<str>) -> Self {
        let raw = path.as_ref();
        let mut inner = String::with_capacity(raw.len());
        let mut previous_slash = false;
        for ch in raw.chars() {
            if ch == '/' && previous_slash {
                continue;
            }
            previous_slash = ch == '/';
            inner.push(ch);
        }
        if inner.len() > 1 && inner.ends_with('/') {
            inner.pop();
        }
        Self { inner }
    }

    /// The tree root `/`.
    pub fn root() -> Self {
        Self {
            inner: "/".to_string(),
        }
    }

    /// Normalize a path, resolving `.` and `..` segments.
    ///
    /// Returns `None` when a `..` segment climbs above the first segment
    /// (or above `/` for absolute paths), or when a relative path
    /// normalizes to nothing.
    pub fn normalize(path: &str) -> Option<Self> {
        let absolute = path.starts_with('/');
        let mut segments: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop()?;
                }
                other => segments.push(other),
            }
        }

        let joined = segments.join("/");
        if absolute {
            Some(Self {
                inner: format!("/{joined}"),
            })
        } else if joined.is_empty() {
            None
        } else {
            Some(Self { inner: joined })
        }
    }

    /// Get the internal string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether the path starts at the tree root.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Whether this is the tree root `/`.
    pub fn is_root(&self) -> bool {
        self.inner == "/"
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self::new(joined)
    }

    /// Get the parent path.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self::root()),
            _ => None,
        }
    }

    /// Get the last segment of the path.
    pub fn name(&self) -> &str {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or_default()
    }

    /// Whether this path is strictly nested under `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &ConfPath) -> bool {
        if ancestor.is_root() {
            return self.is_absolute() && !self.is_root();
        }
        self.inner
            .strip_prefix(ancestor.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Whether this path equals `other` or is nested under it.
    pub fn is_within(&self, other: &ConfPath) -> bool {
        self == other || self.is_descendant_of(other)
    }

    /// Iterate over the strict ancestors of this path, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = ConfPath> {
        std::iter::successors(self.parent(), |p| p.parent())
    }
}

impl AsRef<str> for ConfPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Display for ConfPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for ConfPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ConfPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<ConfPath> for String {
    fn from(p: ConfPath) -> Self {
        p.inner
    }
}

impl PartialEq<str> for ConfPath {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for ConfPath {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}
