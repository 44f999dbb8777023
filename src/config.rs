// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site definition and search tuning.
//!
//! A site is described by one JSON document: the sidebar tree, the validator
//! catalogue, the top navigation tabs, and an optional `search` block. Every
//! tuning knob has a default, so `{"navigation": [], "validators": []}` is a
//! complete site.
//!
//! ```json
//! {
//!   "navigation": [{ "title": "Reference", "children": [...] }],
//!   "validators": [{ "name": "no-secrets", ... }],
//!   "topNavTabs": [{ "title": "About", "href": "/docs/getting-started" }],
//!   "search": { "previewLimit": 5, "scrollSpy": { "topOffsetPx": 80 } }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scroll_spy::ObserverOptions;
use crate::types::{NavNode, NavTab, Validator};

/// Entries shown for an empty query.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;
/// Category for navigation leaves that sit at the root of the tree.
pub const ROOT_CATEGORY: &str = "Docs";
/// Category for every validator-derived entry.
pub const VALIDATOR_CATEGORY: &str = "Validators";
/// First path segment of validator routes.
pub const VALIDATOR_ROOT: &str = "validators";
/// Path segment used when a validator has no tags.
pub const FALLBACK_TAG: &str = "other";

/// Knobs for index building, filtering and scroll tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub preview_limit: usize,
    pub root_category: String,
    pub validator_category: String,
    pub validator_root: String,
    pub fallback_tag: String,
    pub scroll_spy: ObserverOptions,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            root_category: ROOT_CATEGORY.to_string(),
            validator_category: VALIDATOR_CATEGORY.to_string(),
            validator_root: VALIDATOR_ROOT.to_string(),
            fallback_tag: FALLBACK_TAG.to_string(),
            scroll_spy: ObserverOptions::default(),
        }
    }
}

impl SearchConfig {
    /// Reject values the search surface cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.preview_limit == 0 {
            return Err(Error::InvalidConfig(
                "search.previewLimit must be at least 1".to_string(),
            ));
        }
        if self.scroll_spy.bottom_band_percent > 100 {
            return Err(Error::InvalidConfig(format!(
                "search.scrollSpy.bottomBandPercent must be within 0..=100, got {}",
                self.scroll_spy.bottom_band_percent
            )));
        }
        if self.validator_root.contains('/') {
            return Err(Error::InvalidConfig(format!(
                "search.validatorRoot must be a single path segment, got '{}'",
                self.validator_root
            )));
        }
        Ok(())
    }
}

/// Everything the docs site feeds into search and navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub navigation: Vec<NavNode>,
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub top_nav_tabs: Vec<NavTab>,
    #[serde(default)]
    pub search: SearchConfig,
}

impl SiteConfig {
    /// Read and validate a site definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let site: SiteConfig = serde_json::from_str(&raw).map_err(|e| Error::json(path, e))?;
        site.search.validate()?;
        tracing::debug!(
            path = %path.display(),
            nav_roots = site.navigation.len(),
            validators = site.validators.len(),
            "loaded site definition"
        );
        Ok(site)
    }

    /// Parse and validate a site definition held in memory.
    pub fn from_json(raw: &str) -> Result<Self> {
        let site: SiteConfig =
            serde_json::from_str(raw).map_err(|e| Error::json("<memory>", e))?;
        site.search.validate()?;
        Ok(site)
    }
}
