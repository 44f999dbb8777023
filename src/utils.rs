// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Fold a string for case-insensitive comparison.
///
/// Plain Unicode lowercasing, nothing more: no diacritic stripping and no
/// whitespace collapsing, so a query only matches text that literally
/// contains it once case is ignored.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive substring test where `needle` is already normalized.
#[inline]
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}

/// Anchor id for a rendered heading.
///
/// Lowercases, turns each whitespace run into a single `-`, then drops
/// everything outside `[A-Za-z0-9_-]`:
/// - "Getting Started" → "getting-started"
/// - "VALIDATOR.md Schema" → "validatormd-schema"
/// - "What's  next?" → "whats-next"
pub fn heading_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            id.push(c);
        }
    }

    id
}
