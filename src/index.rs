// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search index construction.
//!
//! Flattens the sidebar tree and the validator catalogue into one ordered list
//! of [`SearchEntry`] rows.
//!
//! # Ordering (load-bearing)
//!
//! 1. Navigation entries, depth-first, children in authored order.
//! 2. Validator entries, in catalogue order.
//!
//! The empty-query preview is a prefix of this list and the filter never
//! reorders it, so changing the traversal changes what users see first.
//!
//! # Precondition
//!
//! The tree is finite. [`NavNode`] owns its children, so a cycle cannot be built
//! from safe Rust, but a hand-assembled pathological depth will recurse without
//! bound.

use indexmap::IndexMap;

use crate::config::SearchConfig;
use crate::types::{NavNode, SearchEntry, Validator};

/// Build the search index with default categories.
///
/// Output length is the number of navigable nodes plus the number of validators.
pub fn build_index(navigation: &[NavNode], validators: &[Validator]) -> Vec<SearchEntry> {
    build_index_with(navigation, validators, &SearchConfig::default())
}

/// Build the search index using the categories and route roots in `config`.
pub fn build_index_with(
    navigation: &[NavNode],
    validators: &[Validator],
    config: &SearchConfig,
) -> Vec<SearchEntry> {
    let mut entries = Vec::with_capacity(
        navigation.iter().map(NavNode::leaf_count).sum::<usize>() + validators.len(),
    );

    flatten_nav(navigation, None, &config.root_category, &mut entries);
    let nav_count = entries.len();

    entries.extend(
        validators
            .iter()
            .map(|validator| validator_entry(validator, config)),
    );

    tracing::debug!(
        nav_entries = nav_count,
        validator_entries = entries.len() - nav_count,
        "built search index"
    );

    entries
}

/// Depth-first walk emitting one entry per navigable node.
///
/// `category` is the title of the nearest enclosing group; `None` at the root.
fn flatten_nav(
    nodes: &[NavNode],
    category: Option<&str>,
    root_category: &str,
    out: &mut Vec<SearchEntry>,
) {
    for node in nodes {
        if let Some(href) = &node.href {
            let category = category.filter(|c| !c.is_empty()).unwrap_or(root_category);
            out.push(SearchEntry {
                title: node.title.clone(),
                href: href.clone(),
                category: category.to_string(),
                excerpt: None,
            });
        }
        if let Some(children) = &node.children {
            flatten_nav(children, Some(&node.title), root_category, out);
        }
    }
}

/// Route for a validator page: `/<root>/<primary tag>/<name>`.
///
/// A missing or empty first tag routes under the fallback segment.
pub fn validator_href(validator: &Validator, config: &SearchConfig) -> String {
    let tag = validator
        .primary_tag()
        .filter(|t| !t.is_empty())
        .unwrap_or(&config.fallback_tag);
    format!("/{}/{}/{}", config.validator_root, tag, validator.name)
}

fn validator_entry(validator: &Validator, config: &SearchConfig) -> SearchEntry {
    SearchEntry {
        title: validator.name.clone(),
        href: validator_href(validator, config),
        category: config.validator_category.clone(),
        excerpt: Some(validator.description.clone()),
    }
}

/// Group validators by category, keeping first-appearance order of categories
/// and catalogue order within each group.
///
/// Validators without a category land under `fallback`.
pub fn validators_by_category<'a>(
    validators: &'a [Validator],
    fallback: &str,
) -> IndexMap<String, Vec<&'a Validator>> {
    let mut groups: IndexMap<String, Vec<&Validator>> = IndexMap::new();
    for validator in validators {
        let key = validator.category.as_deref().unwrap_or(fallback);
        groups.entry(key.to_string()).or_default().push(validator);
    }
    groups
}

/// Look a validator up by its `name`.
pub fn find_validator<'a>(validators: &'a [Validator], name: &str) -> Option<&'a Validator> {
    validators.iter().find(|v| v.name == name)
}
