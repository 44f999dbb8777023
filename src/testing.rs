// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{NavNode, SearchEntry, Severity, Trigger, Validator};

/// Create a search entry directly, bypassing the index builder.
pub fn make_entry(title: &str, href: &str, category: &str, excerpt: Option<&str>) -> SearchEntry {
    SearchEntry {
        title: title.to_string(),
        href: href.to_string(),
        category: category.to_string(),
        excerpt: excerpt.map(str::to_string),
    }
}

/// Create a validator with no tags and no category.
pub fn make_validator(name: &str) -> Validator {
    Validator {
        name: name.to_string(),
        display_name: name.to_string(),
        description: format!("Description for {}", name),
        severity: Severity::Warn,
        trigger: Trigger::PostToolUse,
        category: None,
        tags: vec![],
        file_patterns: vec!["*".to_string()],
        rules: vec![],
        auto_fix: false,
        estimated_tokens: None,
    }
}

/// Create a validator carrying the given tags.
pub fn make_validator_with_tags(name: &str, tags: &[&str]) -> Validator {
    Validator {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_validator(name)
    }
}

/// The two-leaf tree used throughout the docs: "no-secrets" under "Security",
/// "Triggers Reference" under "Reference".
pub fn security_and_reference_nav() -> Vec<NavNode> {
    vec![
        NavNode::group(
            "Security",
            vec![NavNode::leaf("no-secrets", "/validators/security/no-secrets")],
        ),
        NavNode::group(
            "Reference",
            vec![NavNode::leaf("Triggers Reference", "/reference/triggers")],
        ),
    ]
}

/// `count` root-level leaves named `Page 0..count`.
pub fn flat_nav(count: usize) -> Vec<NavNode> {
    (0..count)
        .map(|i| NavNode::leaf(format!("Page {}", i), format!("/docs/page-{}", i)))
        .collect()
}
