//! Integration tests for manifest serialization and the full pipeline

use std::fs::{self, File};
use std::path::PathBuf;

use assert_matches::assert_matches;
use modelscan::{generate_manifest, write_manifest, ManifestError, ScanConfig};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_empty_list_writes_empty_array() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("manifest.json");

    write_manifest(&[], &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn test_round_trip_preserves_items_and_order() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("manifest.json");

    let items = vec![
        "models/TERRAIN(TB)/tile1.gltf".to_string(),
        "models/TERRAIN(TB)/with \"quotes\".gltf".to_string(),
        "models/TERRAIN(TB)/with \\backslash.gltf".to_string(),
    ];

    write_manifest(&items, &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, items);
}

#[test]
fn test_output_is_four_space_indented() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("manifest.json");

    let items = vec![
        "models/TERRAIN(TB)/tile1.gltf".to_string(),
        "models/TERRAIN(TB)/tile2.gltf".to_string(),
    ];
    write_manifest(&items, &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "[\n    \"models/TERRAIN(TB)/tile1.gltf\",\n    \"models/TERRAIN(TB)/tile2.gltf\"\n]"
    );
}

#[test]
fn test_existing_file_is_overwritten() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("manifest.json");
    fs::write(&output, "stale contents").unwrap();

    write_manifest(&["a.gltf".to_string()], &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "[\n    \"a.gltf\"\n]");
}

#[test]
fn test_missing_parent_directory_is_fatal() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("no-such-dir/manifest.json");

    let result = write_manifest(&[], &output);
    assert_matches!(result, Err(ManifestError::Io { .. }));
}

#[test]
fn test_generate_manifest_end_to_end() {
    let tmp = tempdir().unwrap();
    let terrain = tmp.path().join("models/TERRAIN(TB)");
    fs::create_dir_all(&terrain).unwrap();
    File::create(terrain.join("tile2.gltf")).unwrap();
    File::create(terrain.join("tile1.gltf")).unwrap();
    File::create(terrain.join("readme.txt")).unwrap();

    let output = tmp.path().join("modelStrings.json");
    let config = ScanConfig {
        root: tmp.path().join("models"),
        path_substring: "TERRAIN(TB)".to_string(),
        file_extension: ".gltf".to_string(),
        output_path: output.clone(),
    };

    let files = generate_manifest(&config).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("tile1.gltf"));
    assert!(files[1].ends_with("tile2.gltf"));

    let contents = fs::read_to_string(&output).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, files);
}

#[test]
fn test_generate_manifest_rejects_invalid_config() {
    let tmp = tempdir().unwrap();
    let config = ScanConfig {
        root: tmp.path().to_path_buf(),
        path_substring: "TERRAIN(TB)".to_string(),
        file_extension: String::new(),
        output_path: PathBuf::from("manifest.json"),
    };

    let result = generate_manifest(&config);
    assert_matches!(result, Err(ManifestError::Configuration { .. }));
}
