// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Active-section tracking for the "On this page" sidebar.
//!
//! The spy observes the page's heading anchors and remembers the last one an
//! observer reported as intersecting its trigger band. Ties are not ranked:
//! within a batch, the later entry wins, and a later batch overwrites an earlier
//! one. With several short sections inside the band at once this can highlight
//! one that is not the topmost; that matches the live site and is kept as-is.
//!
//! # Trigger band
//!
//! The band is the viewport minus a strip at the top (sticky navbar height,
//! default 80px) and minus `bottom_band_percent` of the viewport height at the
//! bottom (default 80%). Expressed as an `IntersectionObserver` root margin:
//! `-80px 0px -80% 0px`.
//!
//! # Lifecycle
//!
//! Calling [`ScrollSpy::observe`] with a different anchor list disconnects the
//! previous observation first and clears the active id. Dropping the spy
//! disconnects too, so a page that unmounts never leaves callbacks behind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Geometry of the trigger band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObserverOptions {
    /// Pixels at the top of the viewport that never count (sticky navbar).
    pub top_offset_px: u32,
    /// Percent of the viewport height, from the bottom, that never counts.
    pub bottom_band_percent: u8,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            top_offset_px: 80,
            bottom_band_percent: 80,
        }
    }
}

impl ObserverOptions {
    /// CSS `rootMargin` for a browser `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_offset_px, self.bottom_band_percent
        )
    }

    /// Band `(top, bottom)` in viewport pixels for a given viewport height.
    pub fn band(&self, viewport_height: f64) -> (f64, f64) {
        let top = f64::from(self.top_offset_px);
        let bottom = viewport_height * (1.0 - f64::from(self.bottom_band_percent) / 100.0);
        (top, bottom)
    }

    /// Whether an element spanning `[top, bottom)` (viewport pixels) overlaps the band.
    pub fn is_in_band(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let (band_top, band_bottom) = self.band(viewport_height);
        band_top < band_bottom && bottom > band_top && top < band_bottom
    }
}

/// One observer report for one anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: true,
        }
    }

    pub fn leaving(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: false,
        }
    }
}

/// Host-side visibility observer.
pub trait IntersectionObserver {
    /// Start watching the element with this id. Returns `false` if no such
    /// element exists on the page; it is then skipped.
    fn observe(&mut self, id: &str) -> bool;
    /// Stop watching everything.
    fn disconnect(&mut self);
}

/// Tracks the active table-of-contents anchor.
pub struct ScrollSpy<O: IntersectionObserver> {
    observer: O,
    anchors: Vec<String>,
    observed: Vec<String>,
    active_id: String,
    connected: bool,
}

impl<O: IntersectionObserver> ScrollSpy<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            anchors: Vec::new(),
            observed: Vec::new(),
            active_id: String::new(),
            connected: false,
        }
    }

    /// Observe this page's anchors.
    ///
    /// Same list as before: nothing happens. Different list: the old
    /// observation is torn down, `active_id` resets, and each anchor present
    /// on the page is observed in order.
    pub fn observe<S: AsRef<str>>(&mut self, anchors: &[S]) {
        let unchanged = self.connected
            && self.anchors.len() == anchors.len()
            && self
                .anchors
                .iter()
                .zip(anchors)
                .all(|(a, b)| a == b.as_ref());
        if unchanged {
            return;
        }

        self.teardown();
        self.anchors = anchors.iter().map(|a| a.as_ref().to_string()).collect();
        self.observed = self
            .anchors
            .iter()
            .filter(|id| self.observer.observe(id))
            .cloned()
            .collect();
        self.connected = true;

        tracing::debug!(
            anchors = self.anchors.len(),
            observed = self.observed.len(),
            "scroll spy observing"
        );
    }

    /// Apply one observer callback batch. Last intersecting entry wins.
    ///
    /// Reports for anchors that are not currently observed (stale callbacks
    /// from a previous page) are ignored.
    pub fn on_intersections(&mut self, batch: &[IntersectionEntry]) {
        if !self.connected {
            return;
        }
        for entry in batch {
            if entry.is_intersecting && self.observed.contains(&entry.id) {
                if self.active_id != entry.id {
                    tracing::trace!(id = %entry.id, "active anchor changed");
                }
                self.active_id.clone_from(&entry.id);
            }
        }
    }

    /// Currently highlighted anchor; empty when none has been reported yet.
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn is_active(&self, id: &str) -> bool {
        !self.active_id.is_empty() && self.active_id == id
    }

    /// Anchors actually being watched (those found on the page).
    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Disconnect and forget the current page.
    pub fn teardown(&mut self) {
        if self.connected {
            self.observer.disconnect();
            tracing::debug!(observed = self.observed.len(), "scroll spy disconnected");
        }
        self.connected = false;
        self.anchors.clear();
        self.observed.clear();
        self.active_id.clear();
    }
}

impl<O: IntersectionObserver> Drop for ScrollSpy<O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Layout-driven observer for hosts without a native `IntersectionObserver`.
///
/// The host places anchors in document coordinates and reports scroll
/// positions; the observer emits a batch with the anchors whose band
/// membership changed, in observation order. The first report after
/// `observe` includes every observed anchor.
#[derive(Debug, Clone, Default)]
pub struct LayoutObserver {
    options: ObserverOptions,
    layout: HashMap<String, (f64, f64)>,
    watched: Vec<String>,
    last: HashMap<String, bool>,
}

impl LayoutObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Record where an anchor's section sits, in document pixels.
    pub fn place(&mut self, id: impl Into<String>, top: f64, bottom: f64) {
        self.layout.insert(id.into(), (top, bottom));
    }

    /// Compute the batch for a scroll position.
    pub fn scroll_to(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<IntersectionEntry> {
        let mut batch = Vec::new();
        for id in &self.watched {
            let Some(&(top, bottom)) = self.layout.get(id) else {
                continue;
            };
            let visible =
                self.options
                    .is_in_band(top - scroll_y, bottom - scroll_y, viewport_height);
            if self.last.get(id) != Some(&visible) {
                self.last.insert(id.clone(), visible);
                batch.push(IntersectionEntry {
                    id: id.clone(),
                    is_intersecting: visible,
                });
            }
        }
        batch
    }

    pub fn watched(&self) -> &[String] {
        &self.watched
    }
}

impl IntersectionObserver for LayoutObserver {
    fn observe(&mut self, id: &str) -> bool {
        if !self.layout.contains_key(id) {
            return false;
        }
        self.watched.push(id.to_string());
        true
    }

    fn disconnect(&mut self) {
        self.watched.clear();
        self.last.clear();
    }
}

impl ScrollSpy<LayoutObserver> {
    /// Feed a scroll position through the layout observer.
    pub fn scroll_to(&mut self, scroll_y: f64, viewport_height: f64) -> &str {
        let batch = self.observer.scroll_to(scroll_y, viewport_height);
        self.on_intersections(&batch);
        self.active_id()
    }

    /// Place an anchor's section before observing it.
    pub fn place(&mut self, id: impl Into<String>, top: f64, bottom: f64) {
        self.observer.place(id, top, bottom);
    }
}
