use assert_fs::prelude::*;
use ctxconf_tree::{ConfPath, DocumentLoader, MemoryTree, PropertyValue, TreeStore};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    name: String,
    count: i32,
}

fn child_names(tree: &MemoryTree, path: &str) -> Vec<String> {
    tree.children(&ConfPath::new(path))
        .iter()
        .map(|n| n.name().to_string())
        .collect()
}

#[test]
fn test_load_json_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("tree.json");
    file.write_str(
        r#"{
            "content": { "site": { "sling:configRef": "/conf/site" } },
            "conf": {
                "site": {
                    "settings": {
                        "list": {
                            "sling:configCollectionInherit": true,
                            "y": { "v": 1 },
                            "x": { "v": 2 }
                        }
                    }
                }
            }
        }"#,
    )
    .unwrap();

    let tree = MemoryTree::load(file.path()).unwrap();

    let site = tree.node(&ConfPath::new("/content/site")).unwrap();
    assert_eq!(
        site.property("sling:configRef"),
        Some(&PropertyValue::from("/conf/site"))
    );
    assert_eq!(child_names(&tree, "/conf/site/settings/list"), vec!["y", "x"]);
    let list = tree.node(&ConfPath::new("/conf/site/settings/list")).unwrap();
    assert_eq!(
        list.property("sling:configCollectionInherit"),
        Some(&PropertyValue::Bool(true))
    );
}

#[test]
fn test_load_toml_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("tree.toml");
    file.write_str(
        r#"
[conf.global.settings.title]
text = "Global"
tags = ["a", "b"]
"#,
    )
    .unwrap();

    let tree = MemoryTree::load(file.path()).unwrap();
    let title = tree
        .node(&ConfPath::new("/conf/global/settings/title"))
        .unwrap();
    assert_eq!(title.property("text"), Some(&PropertyValue::from("Global")));
    assert_eq!(
        title.property("tags"),
        Some(&PropertyValue::List(vec!["a".into(), "b".into()]))
    );
}

#[test]
fn test_load_yaml_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("tree.yaml");
    file.write_str("conf:\n  a:\n    settings:\n      title:\n        text: A\n")
        .unwrap();

    let tree = MemoryTree::load(file.path()).unwrap();
    assert!(tree.node(&ConfPath::new("/conf/a/settings/title")).is_some());
}

#[test]
fn test_load_plain_document() {
    let temp = tempfile::TempDir::new().unwrap();
    let file_path = temp.path().join("sample.toml");
    std::fs::write(&file_path, "name = \"test\"\ncount = 42").unwrap();

    let sample: Sample = DocumentLoader::new().load(&file_path).unwrap();
    assert_eq!(
        sample,
        Sample {
            name: "test".into(),
            count: 42
        }
    );
}

#[test]
fn test_unsupported_format() {
    let temp = tempfile::TempDir::new().unwrap();
    let file_path = temp.path().join("tree.xyz");
    std::fs::write(&file_path, "data").unwrap();

    let result = MemoryTree::load(&file_path);
    assert!(matches!(
        result,
        Err(ctxconf_tree::Error::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_parse_error_names_format() {
    let temp = tempfile::TempDir::new().unwrap();
    let file_path = temp.path().join("tree.json");
    std::fs::write(&file_path, "{ not json").unwrap();

    let err = MemoryTree::load(&file_path).unwrap_err();
    assert!(err.to_string().contains("JSON"), "got: {err}");
}

#[test]
fn test_missing_file_is_io_error() {
    let result = MemoryTree::load(std::path::Path::new("/nonexistent/tree.json"));
    assert!(matches!(result, Err(ctxconf_tree::Error::Io { .. })));
}
