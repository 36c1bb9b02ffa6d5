//! Integration tests for exporting generated descriptors to disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use uoa_codegen::{DescriptorGenerator, GeneratedCode};
use uoa_core::PluginTable;
use uoa_files::{ExportOptions, FilesBuilder};

fn builtin_code() -> GeneratedCode {
    DescriptorGenerator::new()
        .unwrap()
        .generate(&PluginTable::builtin())
        .unwrap()
}

fn names_in(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Full run for the built-in table: 14 providers, 14 services, 3 manifests.
#[test]
fn test_builtin_table_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let code = builtin_code();

    let tree = FilesBuilder::from_generated_code(code.clone(), "/")
        .build_and_export(temp_dir.path())
        .unwrap();
    assert_eq!(tree.file_count(), 31);

    assert_eq!(
        names_in(temp_dir.path()),
        BTreeSet::from([
            "Makefile.am".to_string(),
            "providers".to_string(),
            "services".to_string(),
        ])
    );

    let providers = names_in(&temp_dir.path().join("providers"));
    assert_eq!(providers.len(), 15);
    assert!(providers.contains("Makefile.am"));
    assert!(providers.contains("local-xmpp.provider"));

    let services = names_in(&temp_dir.path().join("services"));
    assert_eq!(services.len(), 15);
    assert!(services.contains("local-xmpp-im.service"));

    for file in code.files() {
        let on_disk = fs::read_to_string(temp_dir.path().join(file.path())).unwrap();
        assert_eq!(on_disk, file.content(), "content of {}", file.path());
    }
}

/// Running twice leaves byte-identical output.
#[test]
fn test_export_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let makefile = temp_dir.path().join("Makefile.am");

    FilesBuilder::from_generated_code(builtin_code(), "/")
        .build_and_export(temp_dir.path())
        .unwrap();
    let first = fs::read(&makefile).unwrap();

    FilesBuilder::from_generated_code(builtin_code(), "/")
        .build_and_export(temp_dir.path())
        .unwrap();
    let second = fs::read(&makefile).unwrap();

    assert_eq!(first, second);
}

/// Previous content is fully replaced, never appended to.
#[test]
fn test_export_overwrites_stale_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("providers")).unwrap();
    let stale = temp_dir.path().join("providers/aim.provider");
    fs::write(&stale, "x".repeat(4096)).unwrap();

    FilesBuilder::from_generated_code(builtin_code(), "/")
        .build_and_export(temp_dir.path())
        .unwrap();

    let content = fs::read_to_string(&stale).unwrap();
    assert!(content.starts_with("<?xml"));
    assert!(!content.contains("xxxx"));
}

/// Files not produced by the run are left alone.
#[test]
fn test_export_does_not_delete_foreign_files() {
    let temp_dir = TempDir::new().unwrap();
    let foreign = temp_dir.path().join("README");
    fs::write(&foreign, "keep me").unwrap();

    FilesBuilder::from_generated_code(builtin_code(), "/")
        .build_and_export(temp_dir.path())
        .unwrap();

    assert_eq!(fs::read_to_string(foreign).unwrap(), "keep me");
}

#[test]
fn test_export_leaves_no_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    FilesBuilder::from_generated_code(builtin_code(), "/")
        .build_and_export(temp_dir.path())
        .unwrap();

    for dir in ["", "providers", "services"] {
        for name in names_in(&temp_dir.path().join(dir)) {
            assert!(!name.ends_with(".tmp"), "stray temp file {dir}/{name}");
        }
    }
}

#[test]
fn test_missing_output_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent");

    let err = FilesBuilder::from_generated_code(builtin_code(), "/")
        .build_and_export(&missing)
        .unwrap_err();

    assert!(err.is_write_failure());
    assert!(!missing.exists());
}

#[test]
fn test_non_atomic_export_matches_atomic() {
    let atomic_dir = TempDir::new().unwrap();
    let plain_dir = TempDir::new().unwrap();
    let tree = FilesBuilder::from_generated_code(builtin_code(), "/")
        .build()
        .unwrap();

    tree.export_to_filesystem(atomic_dir.path()).unwrap();
    tree.export_to_filesystem_with_options(
        plain_dir.path(),
        &ExportOptions::default().with_atomic_writes(false),
    )
    .unwrap();

    for path in tree.all_paths() {
        let a = fs::read(atomic_dir.path().join(path.relative())).unwrap();
        let b = fs::read(plain_dir.path().join(path.relative())).unwrap();
        assert_eq!(a, b, "{path}");
    }
}
