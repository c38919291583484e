//! Format-agnostic document loading

use crate::{Error, PropertyValue, Result, io};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;

/// One entry of a tree document: a property value or a nested child node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeEntry {
    Property(PropertyValue),
    Node(IndexMap<String, TreeEntry>),
}

/// A whole content tree as written in a document.
///
/// Scalar and array entries become properties of the enclosing node;
/// nested tables become child nodes. Document order is store order.
///
/// ```json
/// {
///   "content": { "site": { "sling:configRef": "/conf/site" } },
///   "conf": { "site": { "settings": { "title": { "text": "Site" } } } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeDocument {
    pub entries: IndexMap<String, TreeEntry>,
}

/// Format-agnostic document loader.
///
/// Detects the format from the file extension and deserializes into any
/// `serde` type.
#[derive(Debug, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a document from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        tracing::debug!(path = %path.display(), extension, "Loading document");
        self.parse(&content, extension)
            .map_err(|(format, message)| match format {
                Some(format) => Error::DocumentParse {
                    path: path.to_path_buf(),
                    format: format.into(),
                    message,
                },
                None => Error::UnsupportedFormat {
                    extension: extension.to_string(),
                },
            })
    }

    fn parse<T: DeserializeOwned>(
        &self,
        content: &str,
        extension: &str,
    ) -> std::result::Result<T, (Option<&'static str>, String)> {
        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(content).map_err(|e| (Some("TOML"), e.to_string())),
            "json" => serde_json::from_str(content).map_err(|e| (Some("JSON"), e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(content).map_err(|e| (Some("YAML"), e.to_string()))
            }
            _ => Err((None, String::new())),
        }
    }
}
