// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the docs search surface.
//!
//! Two authored sources feed the index: the sidebar navigation tree and the
//! validator catalogue. Both come out of `data/site.json` (or whatever the host
//! hands us) and are never mutated afterwards. Everything the search modal shows
//! is a [`SearchEntry`] derived from them.
//!
//! # Invariants
//!
//! - **NavNode**: a leaf has an `href` and no children; a group has children and no
//!   `href`. Children are owned by their parent, so cycles cannot be represented.
//!
//! - **SearchEntry**: `href` is unique across one index. Keyboard navigation relies
//!   on it to address rows deterministically.
//!
//! - **TocItem**: `id` is the anchor the rendered heading carries, so the scroll spy
//!   can observe it by id.

use serde::{Deserialize, Serialize};

/// One node of the sidebar navigation tree.
///
/// Leaves navigate; groups only organize. The tree is finite by construction:
/// every child is owned by exactly one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavNode {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavNode>>,
}

impl NavNode {
    /// A navigable node without children.
    pub fn leaf(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            children: None,
        }
    }

    /// An organizing node that owns `children` in authored order.
    pub fn group(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            title: title.into(),
            href: None,
            children: Some(children),
        }
    }

    /// Children in authored order (empty for leaves).
    pub fn children(&self) -> &[NavNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Whether this node points at `path` itself.
    pub fn is_active(&self, path: &str) -> bool {
        self.href.as_deref() == Some(path)
    }

    /// Whether any descendant (at any depth) points at `path`.
    ///
    /// The sidebar opens a group on first render when this holds for the
    /// current location.
    pub fn contains_path(&self, path: &str) -> bool {
        self.children()
            .iter()
            .any(|child| child.is_active(path) || child.contains_path(path))
    }

    /// Number of navigable nodes in this subtree, self included.
    pub fn leaf_count(&self) -> usize {
        let own = usize::from(self.href.is_some());
        own + self.children().iter().map(NavNode::leaf_count).sum::<usize>()
    }
}

/// How loudly a validator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Agent lifecycle hook a validator runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    PreToolUse,
    PostToolUse,
    PostToolUseFailure,
    UserPromptSubmit,
    Stop,
    SubagentStop,
    SessionStart,
    SessionEnd,
    PreCompact,
    Setup,
    Notification,
    PermissionRequest,
}

/// A catalogued validator, as listed on the examples pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validator {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub severity: Severity,
    pub trigger: Trigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tags/labels; the first one is the validator's primary tag.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub file_patterns: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub auto_fix: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_tokens: Option<String>,
}

impl Validator {
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// One searchable, navigable row of the search modal.
///
/// Entries are derived by [`crate::build_index`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub title: String,
    /// Route identifier, e.g. `/validators/security/no-secrets`.
    pub href: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// A top navigation bar tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTab {
    pub title: String,
    pub href: String,
}

/// One "On this page" entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Anchor id carried by the rendered heading.
    pub id: String,
    pub title: String,
    /// Heading level (2 = `##`).
    pub level: u8,
}

impl TocItem {
    /// Indentation step in the table of contents: h2 flush, h3 one step, h4 two.
    pub fn indent(&self) -> usize {
        usize::from(self.level.saturating_sub(2))
    }
}
