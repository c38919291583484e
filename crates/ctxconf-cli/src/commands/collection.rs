//! Collection configuration lookup

use colored::Colorize;
use ctxconf_core::{DeciderChain, ResolvedCollection, StaticDecider};
use serde::Serialize;

use super::resolve::{NodeReport, render_properties};
use super::{Source, content_path};
use crate::cli::{LookupArgs, ScopedName};
use crate::error::Result;

/// JSON shape of one collection entry.
#[derive(Debug, Serialize)]
struct EntryReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    node: NodeReport<'a>,
}

/// Run the collection command
pub fn run_collection(
    source: Source<'_>,
    lookup: &LookupArgs,
    exclude: &[ScopedName],
    block: &[String],
    json: bool,
) -> Result<()> {
    let resolver = source.resolver()?;
    let content = content_path(&lookup.content)?;

    let deciders = deciders_from_args(exclude, block);
    if !deciders.is_empty() {
        resolver.set_deciders(deciders);
    }

    let collection = resolver.resolve_collection(&content, &lookup.bucket, &lookup.name);

    if json {
        let entries: Vec<EntryReport<'_>> = collection
            .iter()
            .map(|(name, node)| EntryReport {
                name,
                node: NodeReport::from(node),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_collection(&collection));
    }
    Ok(())
}

/// A single static decider for `--exclude` and `--block`, if any were given.
fn deciders_from_args(exclude: &[ScopedName], block: &[String]) -> DeciderChain {
    if exclude.is_empty() && block.is_empty() {
        return DeciderChain::new();
    }
    let decider = exclude.iter().fold(StaticDecider::new(), |decider, scoped| {
        decider.exclude_at(scoped.root.as_str(), scoped.name.as_str())
    });
    let decider = block
        .iter()
        .fold(decider, |decider, name| decider.block(name.as_str()));
    DeciderChain::new().with(decider)
}

/// Human-readable rendering of a resolved collection.
pub fn render_collection(collection: &ResolvedCollection) -> String {
    if collection.is_empty() {
        return format!("{}\n", "No collection items found".dimmed());
    }

    let mut out = String::new();
    for (name, node) in collection {
        let origin = if node.is_merged() {
            " (merged)".yellow().to_string()
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{} {}{}\n",
            name.green().bold(),
            node.path().as_str().dimmed(),
            origin
        ));
        out.push_str(&render_properties(node.properties(), "    "));
    }
    out.push_str(&format!("{} {} items\n", "Total:".dimmed(), collection.len()));
    out
}
