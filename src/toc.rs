// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Table of contents extraction from markdown pages.
//!
//! Only `##` and `###` headings get anchor ids on the rendered page, so only
//! they are listed. An explicit `{#custom-id}` heading attribute takes
//! precedence over the generated id.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::types::TocItem;
use crate::utils::heading_id;

const MIN_LEVEL: u8 = 2;
const MAX_LEVEL: u8 = 3;

/// Collect the page's anchored headings in document order.
pub fn extract_toc(markdown: &str) -> Vec<TocItem> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_HEADING_ATTRIBUTES);
    let mut items = Vec::new();
    let mut current: Option<(u8, Option<String>, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let level = level as u8;
                if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
                    current = Some((level, id.map(|id| id.to_string()), String::new()));
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, title)) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, id, title)) = current.take() {
                    let title = title.trim().to_string();
                    let id = id.unwrap_or_else(|| heading_id(&title));
                    items.push(TocItem { id, title, level });
                }
            }
            _ => {}
        }
    }

    items
}

/// Anchor ids in page order, as handed to the scroll spy.
pub fn anchor_ids(items: &[TocItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}
