// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The keyboard-driven search modal.
//!
//! Two layers:
//!
//! 1. [`transition`]: a pure function from `(state, event, current results)` to
//!    the next state. This is where every rule lives, and it needs no UI to test.
//!
//! 2. [`SearchModal`]: the controller a host mounts. It owns the index, recomputes
//!    results on each input change, and holds the scoped keyboard listeners.
//!
//! # States
//!
//! ```text
//!            open / Cmd+K
//!   Closed ───────────────▶ Open ──┐ Input, ArrowUp, ArrowDown,
//!     ▲                      │  ◀──┘ Enter with no results
//!     └──────────────────────┘
//!      Escape, Close, Enter with a selected result
//! ```
//!
//! # Invariant
//!
//! `selected_index < max(1, results.len())` after every transition.

use crate::config::SearchConfig;
use crate::keys::{is_open_shortcut, Key, KeyDisposition, KeyEvent};
use crate::listener::{ListenerGuard, ListenerRegistry};
use crate::search::filter_with;
use crate::types::SearchEntry;

/// DOM event the modal and the page shortcut listen on.
pub const KEYDOWN: &str = "keydown";

/// What the modal tracks while open. Discarded on close.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub query: String,
    pub selected_index: usize,
}

/// Everything that can happen to an open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// The text input changed to this value.
    Input(String),
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Backdrop click or close button.
    Close,
}

/// Result of one [`transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Still open with this state.
    Open(ModalState),
    /// Closed; `navigate` holds the route to load, if the close was a commit.
    Closed { navigate: Option<String> },
}

/// Apply `event` to an open modal.
///
/// `results` must be the results for `state.query`. For [`ModalEvent::Input`]
/// the caller recomputes results for the new query afterwards; the selection is
/// reset to the first row regardless of what matched.
pub fn transition(state: ModalState, event: ModalEvent, results: &[SearchEntry]) -> Transition {
    match event {
        ModalEvent::Input(query) => Transition::Open(ModalState {
            query,
            selected_index: 0,
        }),
        ModalEvent::ArrowDown => {
            let selected_index = match results.len() {
                0 => state.selected_index,
                len => (state.selected_index + 1).min(len - 1),
            };
            Transition::Open(ModalState {
                selected_index,
                ..state
            })
        }
        ModalEvent::ArrowUp => Transition::Open(ModalState {
            selected_index: state.selected_index.saturating_sub(1),
            ..state
        }),
        ModalEvent::Enter => match results.get(state.selected_index) {
            Some(entry) => Transition::Closed {
                navigate: Some(entry.href.clone()),
            },
            None => Transition::Open(state),
        },
        ModalEvent::Escape | ModalEvent::Close => Transition::Closed { navigate: None },
    }
}

/// Side effect the host must perform after a controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do beyond re-rendering.
    None,
    /// Move keyboard focus to the query input.
    FocusInput,
    /// Modal closed without navigating.
    Closed,
    /// Modal closed; replace the whole document location with this route.
    ///
    /// This is a full page load, not a client-side route swap.
    Navigate(String),
}

/// Host-facing answer to a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub command: Command,
    pub disposition: KeyDisposition,
}

impl KeyResponse {
    fn pass() -> Self {
        Self {
            command: Command::None,
            disposition: KeyDisposition::Default,
        }
    }
}

/// Live state of an open modal. Dropping it detaches the modal's key listener.
struct Session<R: ListenerRegistry> {
    state: ModalState,
    results: Vec<SearchEntry>,
    _keys: ListenerGuard<R>,
}

/// Search modal controller.
///
/// Holds the page-wide Cmd+K listener for as long as it lives, and the modal's
/// own key listener only while open. Dropping the controller (unmounting the
/// page) releases both, open or not.
pub struct SearchModal<R: ListenerRegistry + Clone> {
    index: Vec<SearchEntry>,
    preview_limit: usize,
    registry: R,
    session: Option<Session<R>>,
    _shortcut: ListenerGuard<R>,
}

impl<R: ListenerRegistry + Clone> SearchModal<R> {
    /// Mount the controller over a built index.
    pub fn new(index: Vec<SearchEntry>, config: &SearchConfig, registry: R) -> Self {
        let shortcut = ListenerGuard::attach(registry.clone(), KEYDOWN);
        Self {
            index,
            preview_limit: config.preview_limit,
            registry,
            session: None,
            _shortcut: shortcut,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open with an empty query and the first row selected. No-op if already open.
    pub fn open(&mut self) -> Command {
        if self.session.is_some() {
            return Command::None;
        }
        let state = ModalState::default();
        let results = self.results_for(&state.query);
        self.session = Some(Session {
            state,
            results,
            _keys: ListenerGuard::attach(self.registry.clone(), KEYDOWN),
        });
        tracing::debug!(entries = self.index.len(), "search modal opened");
        Command::FocusInput
    }

    /// Explicit close request (backdrop, close button).
    pub fn close(&mut self) -> Command {
        self.apply(ModalEvent::Close)
    }

    /// The query input changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> Command {
        self.apply(ModalEvent::Input(query.into()))
    }

    /// Route a keydown from the document.
    ///
    /// While closed only the open shortcut does anything. While open, the
    /// shortcut is swallowed, arrows move the selection, Enter commits and
    /// Escape dismisses.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyResponse {
        if is_open_shortcut(event) {
            return KeyResponse {
                command: self.open(),
                disposition: KeyDisposition::PreventDefault,
            };
        }
        if self.session.is_none() {
            return KeyResponse::pass();
        }

        let (modal_event, disposition) = match event.key {
            Key::ArrowDown => (ModalEvent::ArrowDown, KeyDisposition::PreventDefault),
            Key::ArrowUp => (ModalEvent::ArrowUp, KeyDisposition::PreventDefault),
            Key::Enter => (ModalEvent::Enter, KeyDisposition::Default),
            Key::Escape => (ModalEvent::Escape, KeyDisposition::Default),
            _ => return KeyResponse::pass(),
        };

        KeyResponse {
            command: self.apply(modal_event),
            disposition,
        }
    }

    fn apply(&mut self, event: ModalEvent) -> Command {
        let Some(session) = self.session.as_mut() else {
            return Command::None;
        };

        let state = std::mem::take(&mut session.state);
        let recompute = matches!(event, ModalEvent::Input(_));

        match transition(state, event, &session.results) {
            Transition::Open(state) => {
                if recompute {
                    session.results =
                        filter_with(&self.index, &state.query, self.preview_limit);
                }
                session.state = state;
                Command::None
            }
            Transition::Closed { navigate } => {
                self.session = None;
                match navigate {
                    Some(href) => {
                        tracing::debug!(href = %href, "search modal committed");
                        Command::Navigate(href)
                    }
                    None => {
                        tracing::debug!("search modal dismissed");
                        Command::Closed
                    }
                }
            }
        }
    }

    fn results_for(&self, query: &str) -> Vec<SearchEntry> {
        filter_with(&self.index, query, self.preview_limit)
    }

    /// Current query, or `None` while closed.
    pub fn query(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.state.query.as_str())
    }

    /// Current results (empty while closed).
    pub fn results(&self) -> &[SearchEntry] {
        self.session.as_ref().map_or(&[], |s| s.results.as_slice())
    }

    /// Highlighted row, or `None` while closed.
    pub fn selected_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.state.selected_index)
    }

    /// Entry under the highlight, if any.
    pub fn selected(&self) -> Option<&SearchEntry> {
        let session = self.session.as_ref()?;
        session.results.get(session.state.selected_index)
    }

    /// Message for the empty state, when open with nothing to show.
    pub fn empty_message(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        session
            .results
            .is_empty()
            .then(|| format!("No results found for \"{}\"", session.state.query))
    }

    pub fn index(&self) -> &[SearchEntry] {
        &self.index
    }
}
