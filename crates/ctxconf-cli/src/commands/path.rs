//! Path-only queries

use super::{Source, content_path};
use crate::cli::LookupArgs;
use crate::error::{CliError, Result};

/// Run the path command
pub fn run_path(source: Source<'_>, lookup: &LookupArgs) -> Result<()> {
    let resolver = source.resolver()?;
    let content = content_path(&lookup.content)?;

    let path = resolver
        .resolve_config_path(&content, &lookup.bucket, &lookup.name)
        .ok_or_else(|| no_reference(&content))?;
    println!("{path}");
    Ok(())
}

/// Run the collection-path command
pub fn run_collection_path(source: Source<'_>, lookup: &LookupArgs) -> Result<()> {
    let resolver = source.resolver()?;
    let content = content_path(&lookup.content)?;

    let path = resolver
        .resolve_collection_parent_path(&content, &lookup.bucket, &lookup.name)
        .ok_or_else(|| no_reference(&content))?;
    println!("{path}");
    Ok(())
}

fn no_reference(content: &ctxconf_tree::ConfPath) -> CliError {
    CliError::user(format!("No configuration reference applies to {content}"))
}
