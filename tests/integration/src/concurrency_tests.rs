//! Concurrent lookups while settings and deciders are replaced
//!
//! Every lookup captures the settings once, so each result must match one
//! settings value exactly and never a mix of the old and the new.

use ctxconf_core::{DeciderChain, ResolverConfig, StaticDecider};
use ctxconf_test_utils::scenario::{BUCKET, content, list_tree, scenario_config, scenario_resolver, title_tree};
use ctxconf_tree::PropertyValue;
use std::thread;

#[test]
fn test_settings_swap_never_mixes_values() {
    let resolver = scenario_resolver(title_tree(true));
    let enabled = scenario_config();
    let disabled = ResolverConfig {
        enabled: false,
        ..scenario_config()
    };

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    if let Some(title) = resolver.resolve_single(&content(), BUCKET, "title") {
                        assert_eq!(title.property("color").and_then(PropertyValue::as_str), Some("red"));
                    }
                    let roots = resolver.candidate_roots(&content(), BUCKET);
                    assert!(roots.is_empty() || roots.len() == 3, "unexpected roots {roots:?}");
                }
            });
        }

        scope.spawn(|| {
            for idx in 0..200 {
                let next = if idx % 2 == 0 { disabled.clone() } else { enabled.clone() };
                resolver.set_config(next);
            }
        });
    });

    resolver.set_config(enabled);
    assert!(resolver.resolve_single(&content(), BUCKET, "title").is_some());
}

#[test]
fn test_decider_swap_is_atomic_per_lookup() {
    let resolver = scenario_resolver(list_tree(true, false));

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let names: Vec<String> = resolver
                        .resolve_collection(&content(), BUCKET, "list")
                        .into_keys()
                        .collect();
                    assert!(
                        names == ["x", "y", "z"] || names == ["x", "z"],
                        "unexpected collection {names:?}"
                    );
                }
            });
        }

        scope.spawn(|| {
            for idx in 0..200 {
                let deciders = if idx % 2 == 0 {
                    DeciderChain::new().with(StaticDecider::new().block("y"))
                } else {
                    DeciderChain::new()
                };
                resolver.set_deciders(deciders);
            }
        });
    });
}
