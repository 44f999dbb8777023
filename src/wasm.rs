// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the docs search surface.
//!
//! This is the browser-facing API. The page owns the DOM; Rust owns the rules.
//! The host passes small callbacks for the two DOM resources we scope
//! (document key listeners and the `IntersectionObserver`) and we call them on
//! open, close and teardown.
//!
//! # Callback API
//!
//! ```js
//! const search = new DocsSearch(site);
//! const modal = search.modal(
//!     (event) => attachKeydown(event),   // returns a numeric id
//!     (id) => detachKeydown(id),
//! );
//! document.addEventListener('keydown', (e) => {
//!     const r = modal.handleKey(e.key, e.ctrlKey, e.metaKey);
//!     if (r.preventDefault) e.preventDefault();
//!     if (r.navigate) window.location.href = r.navigate;
//! });
//!
//! const spy = new ScrollSpyHandle(
//!     (id) => { const el = document.getElementById(id); if (el) io.observe(el); return !!el },
//!     () => io.disconnect(),
//! );
//! ```

use crate::config::{SearchConfig, SiteConfig};
use crate::index::build_index_with;
use crate::keys::{Key, KeyDisposition, KeyEvent};
use crate::listener::{ListenerId, ListenerRegistry};
use crate::modal::{Command, SearchModal};
use crate::scroll_spy::{IntersectionEntry, IntersectionObserver, ObserverOptions, ScrollSpy};
use crate::search::filter_refs;
use crate::types::SearchEntry;
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Key handling result for JavaScript consumption.
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsKeyResponse {
    prevent_default: bool,
    focus_input: bool,
    closed: bool,
    navigate: Option<String>,
}

impl JsKeyResponse {
    fn from_command(command: Command, disposition: KeyDisposition) -> Self {
        let mut response = JsKeyResponse {
            prevent_default: disposition == KeyDisposition::PreventDefault,
            ..Self::default()
        };
        match command {
            Command::None => {}
            Command::FocusInput => response.focus_input = true,
            Command::Closed => response.closed = true,
            Command::Navigate(href) => {
                response.closed = true;
                response.navigate = Some(href);
            }
        }
        response
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Listener registry backed by host callbacks.
#[derive(Clone)]
struct HostListeners {
    add: Function,
    remove: Function,
}

/// Listener id from the host's `add` reply: a non-negative integer.
fn decode_listener_id(reply: Option<f64>) -> Option<ListenerId> {
    reply
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
        .map(|v| ListenerId(v as u64))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl ListenerRegistry for HostListeners {
    fn add(&self, event: &'static str) -> ListenerId {
        match self.add.call1(&JsValue::NULL, &JsValue::from_str(event)) {
            Ok(reply) => decode_listener_id(reply.as_f64()).unwrap_or_else(|| {
                tracing::warn!(event, reply = ?reply, "host returned no usable listener id");
                ListenerId(0)
            }),
            Err(err) => {
                tracing::warn!(event, error = %describe(&err), "host failed to add listener");
                ListenerId(0)
            }
        }
    }

    fn remove(&self, id: ListenerId) {
        if let Err(err) = self
            .remove
            .call1(&JsValue::NULL, &JsValue::from_f64(id.0 as f64))
        {
            tracing::warn!(id = id.0, error = %describe(&err), "host failed to remove listener");
        }
    }
}

/// Intersection observer backed by host callbacks.
struct HostObserver {
    observe: Function,
    disconnect: Function,
}

impl IntersectionObserver for HostObserver {
    fn observe(&mut self, id: &str) -> bool {
        match self.observe.call1(&JsValue::NULL, &JsValue::from_str(id)) {
            Ok(reply) => reply.as_bool().unwrap_or(false),
            Err(err) => {
                tracing::warn!(id, error = %describe(&err), "host failed to observe anchor");
                false
            }
        }
    }

    fn disconnect(&mut self) {
        if let Err(err) = self.disconnect.call0(&JsValue::NULL) {
            tracing::warn!(error = %describe(&err), "host failed to disconnect observer");
        }
    }
}

/// WASM-accessible search index built from a site definition.
#[wasm_bindgen]
pub struct DocsSearch {
    entries: Vec<SearchEntry>,
    config: SearchConfig,
}

#[wasm_bindgen]
impl DocsSearch {
    /// Build the index from a site object (`{ navigation, validators, search? }`).
    #[wasm_bindgen(constructor)]
    pub fn new(site: JsValue) -> Result<DocsSearch, JsValue> {
        let site: SiteConfig = from_value(site).map_err(js_error)?;
        site.search.validate().map_err(js_error)?;
        let entries = build_index_with(&site.navigation, &site.validators, &site.search);
        Ok(DocsSearch {
            entries,
            config: site.search,
        })
    }

    /// Filter the index. Returns an array of `{ title, href, category, excerpt? }`.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results = filter_refs(&self.entries, query, self.config.preview_limit);
        to_value(&results).map_err(js_error)
    }

    /// Number of indexed entries.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mount a search modal over this index.
    #[wasm_bindgen]
    pub fn modal(&self, add_listener: Function, remove_listener: Function) -> SearchModalHandle {
        let registry = HostListeners {
            add: add_listener,
            remove: remove_listener,
        };
        SearchModalHandle {
            inner: SearchModal::new(self.entries.clone(), &self.config, registry),
        }
    }

    /// CSS root margin for the page's `IntersectionObserver`.
    #[wasm_bindgen(js_name = rootMargin)]
    pub fn root_margin(&self) -> String {
        self.config.scroll_spy.root_margin()
    }
}

/// The search modal controller. Free it on unmount to detach its listeners.
#[wasm_bindgen]
pub struct SearchModalHandle {
    inner: SearchModal<HostListeners>,
}

#[wasm_bindgen]
impl SearchModalHandle {
    #[wasm_bindgen]
    pub fn open(&mut self) -> Result<JsValue, JsValue> {
        let command = self.inner.open();
        to_value(&JsKeyResponse::from_command(command, KeyDisposition::Default)).map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        let command = self.inner.close();
        to_value(&JsKeyResponse::from_command(command, KeyDisposition::Default)).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: &str) {
        self.inner.set_query(query);
    }

    /// Handle a document keydown (`KeyboardEvent.key` plus modifiers).
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str, ctrl: bool, meta: bool) -> Result<JsValue, JsValue> {
        let event = KeyEvent {
            ctrl,
            meta,
            ..KeyEvent::new(Key::parse(key))
        };
        let response = self.inner.handle_key(&event);
        to_value(&JsKeyResponse::from_command(
            response.command,
            response.disposition,
        ))
        .map_err(js_error)
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.results()).map_err(js_error)
    }

    /// Highlighted row, or -1 while closed.
    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> i32 {
        self.inner
            .selected_index()
            .map_or(-1, |i| i32::try_from(i).unwrap_or(i32::MAX))
    }

    #[wasm_bindgen(js_name = emptyMessage)]
    pub fn empty_message(&self) -> Option<String> {
        self.inner.empty_message()
    }
}

/// Active-anchor tracker for the table of contents.
#[wasm_bindgen]
pub struct ScrollSpyHandle {
    inner: ScrollSpy<HostObserver>,
}

#[wasm_bindgen]
impl ScrollSpyHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(observe: Function, disconnect: Function) -> ScrollSpyHandle {
        ScrollSpyHandle {
            inner: ScrollSpy::new(HostObserver {
                observe,
                disconnect,
            }),
        }
    }

    /// Observe a page's anchors (re-observes only if the list changed).
    #[wasm_bindgen]
    pub fn observe(&mut self, ids: Vec<String>) {
        self.inner.observe(&ids);
    }

    /// Feed one `IntersectionObserver` callback batch: `[{ id, isIntersecting }]`.
    #[wasm_bindgen]
    pub fn report(&mut self, entries: JsValue) -> Result<String, JsValue> {
        let batch: Vec<IntersectionEntry> = from_value(entries).map_err(js_error)?;
        self.inner.on_intersections(&batch);
        Ok(self.inner.active_id().to_string())
    }

    #[wasm_bindgen(js_name = activeId)]
    pub fn active_id(&self) -> String {
        self.inner.active_id().to_string()
    }

    /// Disconnect the observer (page navigated away).
    #[wasm_bindgen]
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    /// Default CSS root margin.
    #[wasm_bindgen(js_name = defaultRootMargin)]
    pub fn default_root_margin() -> String {
        ObserverOptions::default().root_margin()
    }
}
