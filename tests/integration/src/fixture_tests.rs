//! End-to-end resolution over the tree documents in test-fixtures/
//!
//! These tests load real tree and settings files and exercise the complete
//! flow: document loading -> context chain -> candidate roots -> lookup.

use ctxconf_core::{ConfigurationResolver, InheritanceDecision, ResolverConfig};
use ctxconf_test_utils::{RecordingDecider, TestWorkspace};
use ctxconf_tree::{ConfPath, MemoryTree, PropertyValue};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;
use std::sync::Arc;

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn tenants_resolver(with_aliases: bool) -> ConfigurationResolver {
    let tree = MemoryTree::load(&fixtures_dir().join("trees/tenants.yaml")).unwrap();
    let resolver = ConfigurationResolver::with_property_chain(Arc::new(tree));
    if with_aliases {
        let settings = ResolverConfig::load(&fixtures_dir().join("settings/aliases.toml")).unwrap();
        resolver.set_config(settings);
    }
    resolver
}

fn paths(values: &[&str]) -> Vec<ConfPath> {
    values.iter().map(ConfPath::new).collect()
}

// ==========================================================================
// Candidate roots
// ==========================================================================

#[rstest]
#[case::relative_below_absolute(
    "/content/tenant-a/shop/products/shoes",
    &["/conf/tenant-a/shop", "/conf/tenant-a", "/conf", "/conf/global", "/apps/conf", "/libs/conf"]
)]
#[case::inherited_absolute(
    "/content/tenant-a/blog/posts/first",
    &["/conf/tenant-a", "/conf", "/conf/global", "/apps/conf", "/libs/conf"]
)]
#[case::reference_to_missing_node(
    "/content/tenant-b",
    &["/conf/tenant-b", "/conf", "/conf/global", "/apps/conf", "/libs/conf"]
)]
#[case::relative_without_base(
    "/content/orphan/page",
    &["/conf/global", "/apps/conf", "/libs/conf"]
)]
#[case::reference_outside_config_root(
    "/content/rogue",
    &["/conf/global", "/apps/conf", "/libs/conf"]
)]
fn test_candidate_roots(#[case] content: &str, #[case] expected: &[&str]) {
    let resolver = tenants_resolver(false);

    assert_eq!(resolver.candidate_roots(&ConfPath::new(content), "settings"), paths(expected));
}

// ==========================================================================
// Single lookups
// ==========================================================================

#[test]
fn test_theme_without_aliases_stops_at_shop() {
    let resolver = tenants_resolver(false);
    let shoes = ConfPath::new("/content/tenant-a/shop/products/shoes");

    let theme = resolver.resolve_single(&shoes, "settings", "theme").unwrap();

    assert_eq!(theme.path().as_str(), "/conf/tenant-a/shop/settings/theme");
    assert!(!theme.is_merged());
    assert_eq!(theme.property("font"), None);
}

#[test]
fn test_theme_with_aliases_merges_three_levels() {
    let resolver = tenants_resolver(true);
    let shoes = ConfPath::new("/content/tenant-a/shop/products/shoes");

    let theme = resolver.resolve_single(&shoes, "settings", "theme").unwrap();

    assert_eq!(theme.path().as_str(), "/conf/tenant-a/shop/settings/theme");
    assert_eq!(theme.property("color").and_then(PropertyValue::as_str), Some("green"));
    assert_eq!(theme.property("font").and_then(PropertyValue::as_str), Some("sans"));
    assert_eq!(theme.property("spacing"), Some(&PropertyValue::Integer(4)));
    // the global theme does not inherit further
    assert_eq!(theme.property("radius"), None);
}

#[test]
fn test_theme_for_blog_uses_tenant_and_global() {
    let resolver = tenants_resolver(false);
    let post = ConfPath::new("/content/tenant-a/blog/posts/first");

    let theme = resolver.resolve_single(&post, "settings", "theme").unwrap();

    assert_eq!(theme.path().as_str(), "/conf/tenant-a/settings/theme");
    assert_eq!(theme.property("color").and_then(PropertyValue::as_str), Some("blue"));
    assert_eq!(theme.property("font").and_then(PropertyValue::as_str), Some("sans"));
    assert_eq!(theme.property("spacing"), Some(&PropertyValue::Integer(4)));
}

#[test]
fn test_orphan_falls_back_to_global() {
    let resolver = tenants_resolver(false);
    let page = ConfPath::new("/content/orphan/page");

    let theme = resolver.resolve_single(&page, "settings", "theme").unwrap();

    assert_eq!(theme.path().as_str(), "/conf/global/settings/theme");
}

// ==========================================================================
// Collection lookups
// ==========================================================================

#[test]
fn test_menu_with_collection_alias() {
    let resolver = tenants_resolver(true);
    let shoes = ConfPath::new("/content/tenant-a/shop/products/shoes");

    let menu = resolver.resolve_collection(&shoes, "settings", "menu");

    let names: Vec<&str> = menu.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["cart", "home", "about"]);
    assert_eq!(menu["home"].property("label").and_then(PropertyValue::as_str), Some("Shop home"));
    assert_eq!(menu["home"].property("icon"), None);
}

#[test]
fn test_menu_without_alias_is_shop_only() {
    let resolver = tenants_resolver(false);
    let shoes = ConfPath::new("/content/tenant-a/shop/products/shoes");

    let menu = resolver.resolve_collection(&shoes, "settings", "menu");

    let names: Vec<&str> = menu.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["cart", "home"]);
}

#[test]
fn test_menu_block_hides_tenant_entry() {
    let resolver = tenants_resolver(true);
    let decider = Arc::new(RecordingDecider::new().with_decision("about", InheritanceDecision::Block));
    resolver.register_decider(decider.clone());
    let shoes = ConfPath::new("/content/tenant-a/shop/products/shoes");

    let menu = resolver.resolve_collection(&shoes, "settings", "menu");

    assert!(!menu.contains_key("about"));
    assert_eq!(decider.calls().len(), 4);
}

// ==========================================================================
// Path queries
// ==========================================================================

#[test]
fn test_config_path_for_missing_tenant_node() {
    let resolver = tenants_resolver(false);

    assert_eq!(
        resolver.resolve_config_path(&ConfPath::new("/content/tenant-b"), "settings", "theme"),
        Some(ConfPath::new("/conf/tenant-b/settings/theme"))
    );
}

#[test]
fn test_config_path_uses_relative_reference() {
    let resolver = tenants_resolver(false);

    assert_eq!(
        resolver.resolve_collection_parent_path(
            &ConfPath::new("/content/tenant-a/shop/products/shoes"),
            "settings",
            "menu"
        ),
        Some(ConfPath::new("/conf/tenant-a/shop/settings/menu"))
    );
}

#[test]
fn test_config_path_for_rejected_reference() {
    let resolver = tenants_resolver(false);

    assert_eq!(resolver.resolve_config_path(&ConfPath::new("/content/rogue"), "settings", "theme"), None);
}

// ==========================================================================
// Other document formats
// ==========================================================================

#[test]
fn test_toml_tree_fixture() {
    let tree = MemoryTree::load(&fixtures_dir().join("trees/minimal.toml")).unwrap();
    let resolver = ConfigurationResolver::with_property_chain(Arc::new(tree));

    let title = resolver
        .resolve_single(&ConfPath::new("/content/site/page"), "settings", "title")
        .unwrap();

    assert_eq!(title.path().as_str(), "/conf/site/settings/title");
    assert_eq!(title.property("text").and_then(PropertyValue::as_str), Some("Site"));
    assert_eq!(title.property("color").and_then(PropertyValue::as_str), Some("red"));
}

#[test]
fn test_json_tree_in_temp_workspace() {
    let workspace = TestWorkspace::new();
    let path = workspace.write_site_tree();
    workspace.assert_file_exists("tree.json");
    let resolver = ConfigurationResolver::with_property_chain(Arc::new(MemoryTree::load(&path).unwrap()));

    let links = resolver.resolve_collection(&ConfPath::new("/content/site/en/home"), "settings", "links");

    let names: Vec<&str> = links.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["docs", "blog"]);
}
