// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sidebar and top-bar navigation state.
//!
//! Groups start expanded when they lead to the current page and are toggled by
//! the reader afterwards. Groups are keyed by their title path
//! (`"Examples/Security"`) since they have no href of their own.

use std::collections::HashSet;

use crate::types::{NavNode, NavTab};

/// First path segment of a route, with its leading slash: `/docs/x` → `/docs`.
pub fn route_section(href: &str) -> &str {
    match href.get(1..).and_then(|rest| rest.find('/')) {
        Some(pos) => &href[..=pos],
        None => href,
    }
}

/// A top tab is active while the current path is inside the tab's section.
pub fn is_active_tab(tab_href: &str, current_path: &str) -> bool {
    current_path.starts_with(route_section(tab_href))
}

/// Tabs flagged with whether each is active for `current_path`.
pub fn tab_states<'a>(tabs: &'a [NavTab], current_path: &str) -> Vec<(&'a NavTab, bool)> {
    tabs.iter()
        .map(|tab| (tab, is_active_tab(&tab.href, current_path)))
        .collect()
}

/// One visible sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow<'a> {
    pub node: &'a NavNode,
    pub key: String,
    pub depth: usize,
    pub expanded: bool,
    pub active: bool,
}

impl SidebarRow<'_> {
    pub fn is_group(&self) -> bool {
        !self.node.is_leaf()
    }
}

/// Expansion state of the sidebar tree.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    expanded: HashSet<String>,
    current_path: String,
}

impl SidebarState {
    /// Initial state for a page: every group that contains `current_path` is open.
    pub fn new(navigation: &[NavNode], current_path: &str) -> Self {
        let mut expanded = HashSet::new();
        collect_expanded(navigation, "", current_path, &mut expanded);
        Self {
            expanded,
            current_path: current_path.to_string(),
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flip one group. Returns the new expansion state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    /// Rows a reader currently sees, top to bottom.
    pub fn visible_rows<'a>(&self, navigation: &'a [NavNode]) -> Vec<SidebarRow<'a>> {
        let mut rows = Vec::new();
        self.push_rows(navigation, "", 0, &mut rows);
        rows
    }

    fn push_rows<'a>(
        &self,
        nodes: &'a [NavNode],
        parent: &str,
        depth: usize,
        rows: &mut Vec<SidebarRow<'a>>,
    ) {
        for node in nodes {
            let key = group_key(parent, &node.title);
            let expanded = !node.is_leaf() && self.is_expanded(&key);
            rows.push(SidebarRow {
                node,
                key: key.clone(),
                depth,
                expanded,
                active: node.is_active(&self.current_path),
            });
            if expanded {
                self.push_rows(node.children(), &key, depth + 1, rows);
            }
        }
    }
}

fn group_key(parent: &str, title: &str) -> String {
    if parent.is_empty() {
        title.to_string()
    } else {
        format!("{}/{}", parent, title)
    }
}

fn collect_expanded(nodes: &[NavNode], parent: &str, path: &str, out: &mut HashSet<String>) {
    for node in nodes.iter().filter(|n| !n.is_leaf()) {
        let key = group_key(parent, &node.title);
        if node.contains_path(path) {
            out.insert(key.clone());
        }
        collect_expanded(node.children(), &key, path, out);
    }
}
