//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// ctxconf - Resolve context-aware configuration from a content tree
#[derive(Parser, Debug)]
#[command(name = "ctxconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Tree document to resolve against (TOML, JSON or YAML)
    #[arg(long, global = true, env = "CTXCONF_TREE")]
    pub tree: Option<PathBuf>,

    /// Resolver settings document (TOML, JSON or YAML)
    #[arg(long, global = true, env = "CTXCONF_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Property holding configuration references on content nodes
    #[arg(long, global = true, default_value = "sling:configRef")]
    pub ref_property: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments shared by all lookups
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LookupArgs {
    /// Absolute path of the content item
    pub content: String,

    /// Bucket name, e.g. "settings"
    pub bucket: String,

    /// Configuration name inside the bucket
    pub name: String,
}

/// A child name scoped to one candidate root, written `NAME@ROOT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedName {
    pub name: String,
    pub root: String,
}

impl FromStr for ScopedName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, root) = value
            .rsplit_once('@')
            .ok_or_else(|| format!("expected NAME@ROOT, e.g. docs@/conf/site, got '{value}'"))?;
        if name.is_empty() {
            return Err(format!("missing child name in '{value}'"));
        }
        if !root.starts_with('/') {
            return Err(format!("root must be an absolute path, got '{root}'"));
        }
        Ok(Self {
            name: name.to_string(),
            root: root.to_string(),
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a single configuration node
    ///
    /// Examples:
    ///   ctxconf --tree tree.json resolve /content/site/page settings title
    ///   ctxconf --tree tree.json resolve /content/site/page settings title --json
    Resolve {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve a configuration collection
    ///
    /// Examples:
    ///   ctxconf --tree tree.json collection /content/site/page settings links
    ///   ctxconf --tree tree.json collection /content/site/page settings links --block docs
    ///   ctxconf --tree tree.json collection /content/site/page settings links --exclude docs@/conf/site
    Collection {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Leave out children with this name below this root only
        #[arg(long, value_name = "NAME@ROOT")]
        exclude: Vec<ScopedName>,

        /// Leave out children with this name at every level
        #[arg(long, value_name = "NAME")]
        block: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print where a configuration node belongs
    Path {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Print where a configuration collection parent belongs
    CollectionPath {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// List the candidate roots searched for a content item
    Roots {
        /// Absolute path of the content item
        content: String,

        /// Bucket name, e.g. "settings"
        bucket: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve_command() {
        let cli = Cli::parse_from([
            "ctxconf",
            "--tree",
            "tree.json",
            "resolve",
            "/content/site",
            "settings",
            "title",
            "--json",
        ]);
        assert_eq!(cli.tree, Some(PathBuf::from("tree.json")));
        assert_eq!(
            cli.command,
            Some(Commands::Resolve {
                lookup: LookupArgs {
                    content: "/content/site".to_string(),
                    bucket: "settings".to_string(),
                    name: "title".to_string(),
                },
                json: true,
            })
        );
    }

    #[test]
    fn parse_collection_deciders() {
        let cli = Cli::parse_from([
            "ctxconf",
            "collection",
            "/content/site",
            "settings",
            "links",
            "--exclude",
            "a@/conf/site",
            "--block",
            "b",
            "--block",
            "c",
        ]);
        match cli.command {
            Some(Commands::Collection { exclude, block, json, .. }) => {
                assert_eq!(
                    exclude,
                    vec![ScopedName {
                        name: "a".to_string(),
                        root: "/conf/site".to_string(),
                    }]
                );
                assert_eq!(block, vec!["b", "c"]);
                assert!(!json);
            }
            other => panic!("Expected collection command, got {other:?}"),
        }
    }

    #[test]
    fn scoped_name_requires_absolute_root() {
        assert!("docs".parse::<ScopedName>().is_err());
        assert!("docs@conf/site".parse::<ScopedName>().is_err());
        assert!("@/conf/site".parse::<ScopedName>().is_err());
        assert_eq!(
            "me@home@/conf/site".parse::<ScopedName>().unwrap().name,
            "me@home"
        );
    }

    #[test]
    fn exclude_without_root_is_rejected() {
        let result = Cli::try_parse_from(["ctxconf", "collection", "/content/site", "settings", "links", "--exclude", "a"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ctxconf", "roots", "/content", "settings", "--tree", "t.yaml", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.tree, Some(PathBuf::from("t.yaml")));
        assert_eq!(cli.ref_property, "sling:configRef");
    }
}
