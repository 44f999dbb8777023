// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search and navigation for the Agent Validator Protocol documentation site.
//!
//! The site's pages are static; what moves is the search modal and the
//! "On this page" highlight. This crate holds that logic so it can run natively
//! (CLI, tests) and in the browser (feature `wasm`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  config.rs  │────▶│   index.rs   │────▶│  search.rs  │────▶│  modal.rs   │
//! │ (SiteConfig,│     │ (build_index)│     │  (filter)   │     │(SearchModal,│
//! │SearchConfig)│     │              │     │             │     │ transition) │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                                     │
//!        ┌──────────────┐     ┌───────────────┐              ┌────────▼────┐
//!        │    toc.rs    │────▶│ scroll_spy.rs │              │ listener.rs │
//!        │ (extract_toc)│     │  (ScrollSpy)  │              │  keys.rs    │
//!        └──────────────┘     └───────────────┘              └─────────────┘
//! ```
//!
//! The scroll spy and the search modal never talk to each other.
//!
//! # Usage
//!
//! ```
//! use avp_search::{build_index, filter, NavNode};
//!
//! let nav = vec![NavNode::group(
//!     "Security",
//!     vec![NavNode::leaf("no-secrets", "/validators/security/no-secrets")],
//! )];
//! let index = build_index(&nav, &[]);
//!
//! let results = filter(&index, "sec");
//! assert_eq!(results[0].href, "/validators/security/no-secrets");
//! ```

pub mod build;
pub mod config;
pub mod error;
mod index;
pub mod keys;
pub mod listener;
pub mod modal;
pub mod nav;
pub mod scroll_spy;
mod search;
pub mod testing;
pub mod toc;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{SearchConfig, SiteConfig};
pub use error::{Error, Result};
pub use index::{
    build_index, build_index_with, find_validator, validator_href, validators_by_category,
};
pub use keys::{is_open_shortcut, Key, KeyDisposition, KeyEvent};
pub use listener::{KeyboardHub, ListenerGuard, ListenerId, ListenerRegistry};
pub use modal::{transition, Command, KeyResponse, ModalEvent, ModalState, SearchModal, Transition};
pub use scroll_spy::{
    IntersectionEntry, IntersectionObserver, LayoutObserver, ObserverOptions, ScrollSpy,
};
pub use search::{entry_matches, filter, filter_refs, filter_with, is_blank};
pub use toc::{anchor_ids, extract_toc};
pub use types::{NavNode, NavTab, SearchEntry, Severity, TocItem, Trigger, Validator};
pub use utils::{heading_id, normalize};
