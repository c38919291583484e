//! Single configuration lookup

use colored::Colorize;
use ctxconf_core::ResolvedNode;
use ctxconf_tree::{ConfPath, PropertyMap};
use serde::Serialize;

use super::{Source, content_path};
use crate::cli::LookupArgs;
use crate::error::{CliError, Result};

/// JSON shape of one resolved node.
#[derive(Debug, Serialize)]
pub struct NodeReport<'a> {
    pub path: &'a ConfPath,
    pub merged: bool,
    pub properties: &'a PropertyMap,
}

impl<'a> From<&'a ResolvedNode> for NodeReport<'a> {
    fn from(node: &'a ResolvedNode) -> Self {
        Self {
            path: node.path(),
            merged: node.is_merged(),
            properties: node.properties(),
        }
    }
}

/// Run the resolve command
pub fn run_resolve(source: Source<'_>, lookup: &LookupArgs, json: bool) -> Result<()> {
    let resolver = source.resolver()?;
    let content = content_path(&lookup.content)?;

    let node = resolver
        .resolve_single(&content, &lookup.bucket, &lookup.name)
        .ok_or_else(|| {
            CliError::user(format!(
                "No configuration '{}/{}' found for {}",
                lookup.bucket, lookup.name, content
            ))
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&NodeReport::from(&node))?);
    } else {
        print!("{}", render_node(&node));
    }
    Ok(())
}

/// Human-readable rendering of a resolved node.
pub fn render_node(node: &ResolvedNode) -> String {
    let mut out = String::new();
    let origin = if node.is_merged() {
        " (merged)".yellow().to_string()
    } else {
        String::new()
    };
    out.push_str(&format!("{}{}\n", node.path().as_str().green().bold(), origin));
    out.push_str(&render_properties(node.properties(), "  "));
    out
}

/// One `key = value` line per property.
pub fn render_properties(properties: &PropertyMap, indent: &str) -> String {
    properties
        .iter()
        .map(|(key, value)| format!("{indent}{} = {}\n", key.cyan(), value))
        .collect()
}
