// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoped keyboard-listener registration.
//!
//! A [`ListenerGuard`] is the only way to hold a registration, and dropping it
//! removes the listener. Closing the modal, unmounting the page, or unwinding
//! through a panic all release it the same way.
//!
//! [`KeyboardHub`] is the in-process registry used by native hosts and tests.
//! The browser host implements [`ListenerRegistry`] on top of
//! `document.addEventListener` instead.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Opaque handle for one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Anything keyboard listeners can be attached to.
pub trait ListenerRegistry {
    /// Attach a listener for `event` (e.g. `"keydown"`).
    fn add(&self, event: &'static str) -> ListenerId;
    /// Detach a listener. Removing an unknown id is a no-op.
    fn remove(&self, id: ListenerId);
}

/// Owns one registration and releases it on drop.
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ListenerGuard<R: ListenerRegistry> {
    registry: R,
    id: ListenerId,
}

impl<R: ListenerRegistry> ListenerGuard<R> {
    pub fn attach(registry: R, event: &'static str) -> Self {
        let id = registry.add(event);
        tracing::trace!(id = id.0, event, "listener attached");
        Self { registry, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<R: ListenerRegistry> Drop for ListenerGuard<R> {
    fn drop(&mut self) {
        self.registry.remove(self.id);
        tracing::trace!(id = self.id.0, "listener detached");
    }
}

#[derive(Debug, Default)]
struct HubState {
    next_id: u64,
    active: BTreeMap<ListenerId, &'static str>,
}

/// Single-threaded listener registry. Clones share the same registrations.
#[derive(Debug, Clone, Default)]
pub struct KeyboardHub {
    state: Rc<RefCell<HubState>>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently attached.
    pub fn active_count(&self) -> usize {
        self.state.borrow().active.len()
    }

    /// Number of listeners currently attached for `event`.
    pub fn count_for(&self, event: &str) -> usize {
        self.state
            .borrow()
            .active
            .values()
            .filter(|e| **e == event)
            .count()
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.state.borrow().active.contains_key(&id)
    }
}

impl ListenerRegistry for KeyboardHub {
    fn add(&self, event: &'static str) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state.active.insert(id, event);
        id
    }

    fn remove(&self, id: ListenerId) {
        self.state.borrow_mut().active.remove(&id);
    }
}
