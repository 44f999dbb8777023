// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query filtering over a built index.
//!
//! Literal, case-insensitive substring matching against three fields of each
//! entry: title, category and excerpt. No scoring, no ranking, no fuzziness.
//! Matches come back in index order, which is what makes the result list stable
//! while the user types.
//!
//! # Contract
//!
//! - Blank query (empty after trimming): the first `preview_limit` entries, as-is.
//! - Otherwise: every entry where at least one field contains the lowercased
//!   query, and nothing else. The query itself is not trimmed for matching, so
//!   `"no "` only matches text that has a space after "no".
//!
//! Both branches are pure functions of their inputs.

use crate::config::DEFAULT_PREVIEW_LIMIT;
use crate::types::SearchEntry;
use crate::utils::{contains_normalized, normalize};

/// Filter `entries` for `query` with the default preview size.
pub fn filter(entries: &[SearchEntry], query: &str) -> Vec<SearchEntry> {
    filter_with(entries, query, DEFAULT_PREVIEW_LIMIT)
}

/// Filter `entries` for `query`, previewing `preview_limit` entries for a blank query.
pub fn filter_with(entries: &[SearchEntry], query: &str, preview_limit: usize) -> Vec<SearchEntry> {
    filter_refs(entries, query, preview_limit)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter_with`].
pub fn filter_refs<'a>(
    entries: &'a [SearchEntry],
    query: &str,
    preview_limit: usize,
) -> Vec<&'a SearchEntry> {
    if is_blank(query) {
        return entries.iter().take(preview_limit).collect();
    }

    let needle = normalize(query);
    let results: Vec<&SearchEntry> = entries
        .iter()
        .filter(|entry| entry_matches(entry, &needle))
        .collect();

    tracing::trace!(query, matched = results.len(), total = entries.len(), "filtered index");
    results
}

/// Whether a query counts as empty (only whitespace).
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Whether `entry` matches a query already passed through [`normalize`].
pub fn entry_matches(entry: &SearchEntry, needle: &str) -> bool {
    contains_normalized(&entry.title, needle)
        || contains_normalized(&entry.category, needle)
        || entry
            .excerpt
            .as_deref()
            .is_some_and(|excerpt| contains_normalized(excerpt, needle))
}
