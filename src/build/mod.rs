// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Emitting the search index the static site ships.
//!
//! The prerendered site loads one JSON file with every [`SearchEntry`] in index
//! order. The filename carries a CRC32 of the content, so a changed index gets
//! a new URL and stale caches never serve an old one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::index::build_index_with;
use crate::types::SearchEntry;

/// Format version of the emitted file.
pub const INDEX_VERSION: u32 = 1;

/// On-disk shape of the emitted index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexFile {
    pub version: u32,
    pub preview_limit: usize,
    pub root_margin: String,
    pub entries: Vec<SearchEntry>,
}

/// A written index.
#[derive(Debug, Clone)]
pub struct BuiltIndex {
    pub path: PathBuf,
    pub entry_count: usize,
    pub bytes: usize,
}

/// Serialize the index for `site`.
pub fn encode_index(site: &SiteConfig) -> Result<Vec<u8>> {
    let file = IndexFile {
        version: INDEX_VERSION,
        preview_limit: site.search.preview_limit,
        root_margin: site.search.scroll_spy.root_margin(),
        entries: build_index_with(&site.navigation, &site.validators, &site.search),
    };
    serde_json::to_vec(&file).map_err(|e| Error::json("<index>", e))
}

/// `search-index-<crc32>.json` for these bytes.
pub fn index_filename(bytes: &[u8]) -> String {
    format!("search-index-{:08x}.json", crc32fast::hash(bytes))
}

/// Build and write the index for `site` into `output_dir`.
pub fn run_build(site: &SiteConfig, output_dir: &Path) -> Result<BuiltIndex> {
    let bytes = encode_index(site)?;
    let entry_count = site.navigation.iter().map(|n| n.leaf_count()).sum::<usize>()
        + site.validators.len();

    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
    let path = output_dir.join(index_filename(&bytes));
    fs::write(&path, &bytes).map_err(|e| Error::io(&path, e))?;

    tracing::info!(
        path = %path.display(),
        entries = entry_count,
        bytes = bytes.len(),
        "wrote search index"
    );

    Ok(BuiltIndex {
        path,
        entry_count,
        bytes: bytes.len(),
    })
}

/// Read an emitted index back.
pub fn load_index(path: &Path) -> Result<IndexFile> {
    let raw = fs::read(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_slice(&raw).map_err(|e| Error::json(path, e))
}
