//! Writing the content-addressed index file.

use std::fs;

use avp_search::build::{encode_index, index_filename, load_index, run_build, INDEX_VERSION};

use crate::common::{BUNDLED_NAV_ENTRIES, BUNDLED_VALIDATORS, SITE, SITE_INDEX};

#[test]
fn test_bundled_site_emits_full_index() {
    let dir = tempfile::tempdir().unwrap();
    let built = run_build(&SITE, dir.path()).unwrap();

    assert_eq!(built.entry_count, BUNDLED_NAV_ENTRIES + BUNDLED_VALIDATORS);
    assert_eq!(built.bytes as u64, fs::metadata(&built.path).unwrap().len());

    let file = load_index(&built.path).unwrap();
    assert_eq!(file.version, INDEX_VERSION);
    assert_eq!(file.entries, *SITE_INDEX);
    assert_eq!(file.root_margin, "-80px 0px -80% 0px");
}

#[test]
fn test_filename_matches_content_hash() {
    let dir = tempfile::tempdir().unwrap();
    let built = run_build(&SITE, dir.path()).unwrap();
    let bytes = fs::read(&built.path).unwrap();

    let name = built.path.file_name().unwrap().to_str().unwrap();
    assert_eq!(name, index_filename(&bytes));
}

#[test]
fn test_rebuild_is_stable() {
    assert_eq!(encode_index(&SITE).unwrap(), encode_index(&SITE).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let first = run_build(&SITE, dir.path()).unwrap();
    let second = run_build(&SITE, dir.path()).unwrap();
    assert_eq!(first.path, second.path);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_changed_site_gets_new_filename() {
    let mut site = SITE.clone();
    site.validators.truncate(1);

    let dir = tempfile::tempdir().unwrap();
    let full = run_build(&SITE, dir.path()).unwrap();
    let trimmed = run_build(&site, dir.path()).unwrap();
    assert_ne!(full.path, trimmed.path);
}

#[test]
fn test_creates_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("static").join("search");
    let built = run_build(&SITE, &nested).unwrap();
    assert!(built.path.starts_with(&nested));
}

#[test]
fn test_excerpt_omitted_for_navigation_entries() {
    let bytes = encode_index(&SITE).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let first = &json["entries"][0];
    assert_eq!(first["title"], "Introduction");
    assert!(first.get("excerpt").is_none());
    assert_eq!(json["previewLimit"], 5);
}
