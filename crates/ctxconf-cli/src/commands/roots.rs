//! Candidate root listing

use colored::Colorize;

use super::{Source, content_path};
use crate::error::Result;

/// Run the roots command
pub fn run_roots(source: Source<'_>, content: &str, bucket: &str, json: bool) -> Result<()> {
    let resolver = source.resolver()?;
    let content = content_path(content)?;
    let config = resolver.config();

    let roots = resolver.candidate_roots(&content, bucket);

    if json {
        println!("{}", serde_json::to_string_pretty(&roots)?);
        return Ok(());
    }

    for (idx, root) in roots.iter().enumerate() {
        let label = if config.is_fallback(root) {
            "fallback".dimmed().to_string()
        } else {
            "reference".cyan().to_string()
        };
        println!("{:>3}. {:<32} {}", idx + 1, root.as_str(), label);
    }
    Ok(())
}
