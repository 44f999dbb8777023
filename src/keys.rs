// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard events as the search surface sees them.
//!
//! Hosts translate their native events (DOM `KeyboardEvent`, terminal input)
//! into [`KeyEvent`]. Key names follow `KeyboardEvent.key`.

/// The keys the search modal cares about, plus everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Char(char),
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn parse(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
            alt: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        KeyEvent::new(key)
    }
}

/// What the host should do with the native event after we handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyDisposition {
    /// Let the browser (or terminal) apply its own handling.
    #[default]
    Default,
    /// Suppress the host's default action (`preventDefault()`).
    PreventDefault,
}

/// Cmd+K / Ctrl+K, recognized anywhere on the page.
pub fn is_open_shortcut(event: &KeyEvent) -> bool {
    (event.meta || event.ctrl) && matches!(event.key, Key::Char('k' | 'K'))
}
