// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Replaying modal key presses for `search --keys`.
//!
//! A committing Enter or a dismissing Escape closes the modal and drops its
//! results, so the rows shown are the ones on screen when the last key landed.

use anyhow::{bail, Result};

use avp_search::{Command, Key, KeyEvent, KeyboardHub, SearchConfig, SearchEntry, SearchModal};

/// How a replay ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutcome {
    Navigate(String),
    Dismissed,
    StillOpen,
}

/// What the modal showed when the replay stopped.
#[derive(Debug, Clone)]
pub struct Replay {
    pub results: Vec<SearchEntry>,
    pub selected: Option<usize>,
    pub empty_message: Option<String>,
    pub outcome: ReplayOutcome,
}

/// Parse one `--keys` item.
pub fn parse_replay_key(name: &str) -> Result<Key> {
    match name.trim().to_lowercase().as_str() {
        "up" => Ok(Key::ArrowUp),
        "down" => Ok(Key::ArrowDown),
        "enter" => Ok(Key::Enter),
        "esc" | "escape" => Ok(Key::Escape),
        other => bail!("unknown key '{}' (expected up, down, enter, esc)", other),
    }
}

/// Open a modal over `index`, type `query`, then press `keys` in order.
///
/// Stops at the first key that closes the modal.
pub fn replay_keys(
    index: Vec<SearchEntry>,
    config: &SearchConfig,
    query: &str,
    keys: &[Key],
) -> Replay {
    let mut modal = SearchModal::new(index, config, KeyboardHub::new());
    modal.open();
    modal.set_query(query);

    for key in keys {
        let results = modal.results().to_vec();
        let selected = modal.selected_index();
        let empty_message = modal.empty_message();

        let outcome = match modal.handle_key(&KeyEvent::new(key.clone())).command {
            Command::Navigate(href) => ReplayOutcome::Navigate(href),
            Command::Closed => ReplayOutcome::Dismissed,
            Command::None | Command::FocusInput => continue,
        };
        return Replay {
            results,
            selected,
            empty_message,
            outcome,
        };
    }

    Replay {
        results: modal.results().to_vec(),
        selected: modal.selected_index(),
        empty_message: modal.empty_message(),
        outcome: ReplayOutcome::StillOpen,
    }
}
