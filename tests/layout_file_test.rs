//! Tests for LayoutService file handling

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use common::{build, layer_names, INTERLEAVED, SAMPLE};
use layertree::application::services::LayoutService;
use layertree::application::ApplicationError;
use layertree::domain::{DomainError, TreeOptions};
use layertree::infrastructure::traits::RealFileSystem;
use tempfile::TempDir;

fn service() -> LayoutService {
    LayoutService::new(Arc::new(RealFileSystem), TreeOptions::default())
}

fn write_layout(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write layout file");
    path
}

#[test]
fn given_saved_tree_when_opening_then_layers_are_restored() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.toml");
    let tree = build(INTERLEAVED);

    // Act
    service().save(&path, &tree).unwrap();
    let restored = service().open(&path).unwrap();

    // Assert
    assert_eq!(layer_names(&restored), layer_names(&tree));
    assert_eq!(restored.to_string(), tree.to_string());
}

#[test]
fn given_saved_tree_when_reading_file_then_root_has_no_parent_key() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.toml");

    service().save(&path, &build(SAMPLE)).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("name = \"A\""));
    assert!(content.contains("parent = \"A\""));
    assert_eq!(content.matches("parent =").count(), 5);
}

#[test]
fn given_handwritten_layout_when_opening_then_imports() {
    let temp = TempDir::new().unwrap();
    let path = write_layout(
        &temp,
        "net.toml",
        r#"
[[layers]]
index = 0
nodes = [{ name = "A" }]

[[layers]]
index = 2
nodes = [{ name = "C", parent = "B" }, { name = "E", parent = "D" }, { name = "F", parent = "D" }]

[[layers]]
index = 1
nodes = [{ name = "B", parent = "A" }, { name = "D", parent = "A" }]
"#,
    );

    let tree = service().open(&path).unwrap();

    assert_eq!(tree.to_string(), "[A, B, D, C, E, F]\n[0, 1, 2, 3, 4, 5]");
}

#[test]
fn given_layout_with_unknown_parent_when_opening_then_domain_error() {
    let temp = TempDir::new().unwrap();
    let path = write_layout(
        &temp,
        "bad.toml",
        r#"
[[layers]]
index = 0
nodes = [{ name = "A" }]

[[layers]]
index = 1
nodes = [{ name = "B", parent = "Z" }]
"#,
    );

    let result = service().open(&path);

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::NotFound(ref name))) if name == "Z"
    ));
}

#[test]
fn given_missing_file_when_opening_then_operation_failed() {
    let temp = TempDir::new().unwrap();

    let result = service().open(&temp.path().join("absent.toml"));

    assert!(matches!(
        result,
        Err(ApplicationError::OperationFailed { .. })
    ));
}

#[test]
fn given_invalid_toml_when_opening_then_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_layout(&temp, "broken.toml", "[[layers]\nindex = ");

    let result = service().open(&path);

    assert!(matches!(result, Err(ApplicationError::Parse { .. })));
}
