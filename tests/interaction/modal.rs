//! Search modal driven through its keyboard surface.

use avp_search::{
    Command, Key, KeyDisposition, KeyEvent, KeyboardHub, SearchConfig, SearchModal,
};

use crate::common::{three_entries, SITE, SITE_INDEX};

fn mounted() -> (SearchModal<KeyboardHub>, KeyboardHub) {
    let hub = KeyboardHub::new();
    let modal = SearchModal::new(three_entries(), &SearchConfig::default(), hub.clone());
    (modal, hub)
}

fn press(modal: &mut SearchModal<KeyboardHub>, key: Key) -> Command {
    modal.handle_key(&KeyEvent::new(key)).command
}

#[test]
fn test_arrow_down_ten_times_over_three_results() {
    let (mut modal, _hub) = mounted();
    modal.open();
    modal.set_query("alpha");
    assert_eq!(modal.results().len(), 3);

    for _ in 0..10 {
        press(&mut modal, Key::ArrowDown);
    }
    assert_eq!(modal.selected_index(), Some(2));
}

#[test]
fn test_arrow_up_never_goes_negative() {
    let (mut modal, _hub) = mounted();
    modal.open();
    for _ in 0..4 {
        press(&mut modal, Key::ArrowUp);
    }
    assert_eq!(modal.selected_index(), Some(0));
}

#[test]
fn test_enter_with_no_results_stays_open() {
    let (mut modal, _hub) = mounted();
    modal.open();
    modal.set_query("nothing matches this");

    assert_eq!(press(&mut modal, Key::Enter), Command::None);
    assert!(modal.is_open());
    assert_eq!(
        modal.empty_message().as_deref(),
        Some("No results found for \"nothing matches this\"")
    );
}

#[test]
fn test_enter_navigates_to_selection_and_closes() {
    let (mut modal, _hub) = mounted();
    modal.open();
    modal.set_query("alpha");
    press(&mut modal, Key::ArrowDown);

    assert_eq!(
        press(&mut modal, Key::Enter),
        Command::Navigate("/reference/alpha".to_string())
    );
    assert!(!modal.is_open());
}

#[test]
fn test_typing_resets_selection() {
    let (mut modal, _hub) = mounted();
    modal.open();
    press(&mut modal, Key::ArrowDown);
    press(&mut modal, Key::ArrowDown);
    assert_eq!(modal.selected_index(), Some(2));

    modal.set_query("alpha");
    assert_eq!(modal.selected_index(), Some(0));
}

#[test]
fn test_escape_closes_without_navigation() {
    let (mut modal, _hub) = mounted();
    modal.open();
    assert_eq!(press(&mut modal, Key::Escape), Command::Closed);
    assert!(!modal.is_open());
    assert_eq!(modal.query(), None);
}

#[test]
fn test_shortcut_opens_and_prevents_default() {
    let (mut modal, _hub) = mounted();
    for event in [
        KeyEvent::new(Key::Char('k')).with_meta(),
        KeyEvent::new(Key::Char('K')).with_ctrl().with_shift(),
    ] {
        let response = modal.handle_key(&event);
        assert_eq!(response.disposition, KeyDisposition::PreventDefault);
        assert!(modal.is_open());
        modal.close();
    }
}

#[test]
fn test_plain_k_does_not_open() {
    let (mut modal, _hub) = mounted();
    let response = modal.handle_key(&KeyEvent::new(Key::Char('k')));
    assert_eq!(response.command, Command::None);
    assert_eq!(response.disposition, KeyDisposition::Default);
    assert!(!modal.is_open());
}

#[test]
fn test_keys_while_closed_are_ignored() {
    let (mut modal, _hub) = mounted();
    assert_eq!(press(&mut modal, Key::Enter), Command::None);
    assert_eq!(press(&mut modal, Key::ArrowDown), Command::None);
    assert!(!modal.is_open());
}

#[test]
fn test_arrows_prevent_default_but_enter_does_not() {
    let (mut modal, _hub) = mounted();
    modal.open();
    let down = modal.handle_key(&KeyEvent::new(Key::ArrowDown));
    assert_eq!(down.disposition, KeyDisposition::PreventDefault);
    let enter = modal.handle_key(&KeyEvent::new(Key::Enter));
    assert_eq!(enter.disposition, KeyDisposition::Default);
}

#[test]
fn test_unmount_while_open_releases_listeners() {
    let (mut modal, hub) = mounted();
    modal.open();
    assert_eq!(hub.count_for("keydown"), 2);

    drop(modal);
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn test_unmount_while_closed_releases_listeners() {
    let (modal, hub) = mounted();
    assert_eq!(hub.active_count(), 1);
    drop(modal);
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn test_open_twice_keeps_one_key_listener() {
    let (mut modal, hub) = mounted();
    assert_eq!(modal.open(), Command::FocusInput);
    assert_eq!(modal.open(), Command::None);
    assert_eq!(hub.active_count(), 2);
}

#[test]
fn test_bundled_site_round_trip() {
    let hub = KeyboardHub::new();
    let mut modal = SearchModal::new(SITE_INDEX.clone(), &SITE.search, hub);
    modal.open();
    assert_eq!(modal.results().len(), SITE.search.preview_limit);

    modal.set_query("readme");
    press(&mut modal, Key::ArrowDown);
    assert_eq!(
        press(&mut modal, Key::Enter),
        Command::Navigate("/validators/docs/readme-updated".to_string())
    );
}
