//! [`TestWorkspace`] for tree documents and settings files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding tree and settings documents.
///
/// # Example
///
/// ```rust
/// use ctxconf_test_utils::TestWorkspace;
///
/// let workspace = TestWorkspace::new();
/// let path = workspace.write("settings.toml", "enabled = false\n");
/// assert!(path.is_file());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` (relative to the root) and return its path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestWorkspace::write: failed to write {}: {e}", path.display()));
        path
    }

    /// Write `tree` as a pretty-printed JSON tree document.
    pub fn write_json(&self, name: &str, tree: &serde_json::Value) -> PathBuf {
        let content = serde_json::to_string_pretty(tree).unwrap();
        self.write(name, &content)
    }

    /// Write the tree used by the site scenario and return its path.
    ///
    /// `/content/site` references `/conf/site`, `/content/site/en` adds the
    /// relative reference `en`, and `title` exists at `/conf/site/en`,
    /// `/conf/site` and `/conf/global`.
    pub fn write_site_tree(&self) -> PathBuf {
        self.write_json(
            "tree.json",
            &serde_json::json!({
                "content": {
                    "site": {
                        "sling:configRef": "/conf/site",
                        "en": {
                            "sling:configRef": "en",
                            "home": { "title": "Home" }
                        }
                    }
                },
                "conf": {
                    "site": {
                        "en": {
                            "settings": {
                                "title": {
                                    "text": "Welcome",
                                    "sling:configPropertyInherit": true
                                },
                                "links": {
                                    "sling:configCollectionInherit": true,
                                    "docs": { "url": "/en/docs" }
                                }
                            }
                        },
                        "settings": {
                            "title": { "text": "Site", "font": "serif" },
                            "links": {
                                "blog": { "url": "/blog" },
                                "docs": { "url": "/docs" }
                            }
                        }
                    },
                    "global": {
                        "settings": {
                            "title": { "text": "Global", "color": "red" }
                        }
                    }
                }
            }),
        )
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
