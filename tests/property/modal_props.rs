//! Selection clamping under random key sequences.

use avp_search::{
    transition, Command, Key, KeyEvent, KeyboardHub, ModalEvent, ModalState, SearchConfig,
    SearchModal, Transition,
};
use proptest::prelude::*;

use crate::common::make_entry;

fn arrows() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..40)
}

proptest! {
    /// The pure transition never leaves [0, n - 1] (or 0 when empty).
    #[test]
    fn prop_transition_clamps(n in 0usize..8, downs in arrows()) {
        let results: Vec<_> = (0..n)
            .map(|i| make_entry(&format!("e{}", i), &format!("/e/{}", i), "Docs", None))
            .collect();
        let mut state = ModalState::default();
        for down in downs {
            let event = if down { ModalEvent::ArrowDown } else { ModalEvent::ArrowUp };
            state = match transition(state, event, &results) {
                Transition::Open(next) => next,
                Transition::Closed { .. } => unreachable!("arrows never close"),
            };
            prop_assert!(state.selected_index <= n.saturating_sub(1));
        }
    }

    /// Same law through the controller, with Enter landing on a real entry.
    #[test]
    fn prop_controller_clamps(n in 1usize..8, downs in arrows()) {
        let index: Vec<_> = (0..n)
            .map(|i| make_entry(&format!("e{}", i), &format!("/e/{}", i), "Docs", None))
            .collect();
        let config = SearchConfig { preview_limit: 8, ..SearchConfig::default() };
        let mut modal = SearchModal::new(index, &config, KeyboardHub::new());
        modal.open();

        let mut expected = 0usize;
        for down in downs {
            let key = if down { Key::ArrowDown } else { Key::ArrowUp };
            modal.handle_key(&KeyEvent::new(key));
            expected = if down { (expected + 1).min(n - 1) } else { expected.saturating_sub(1) };
            prop_assert_eq!(modal.selected_index(), Some(expected));
        }

        let command = modal.handle_key(&KeyEvent::new(Key::Enter)).command;
        prop_assert_eq!(command, Command::Navigate(format!("/e/{}", expected)));
    }
}
