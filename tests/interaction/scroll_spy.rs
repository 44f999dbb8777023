//! Scroll spy over real page anchors.

use std::cell::RefCell;
use std::rc::Rc;

use avp_search::{
    anchor_ids, extract_toc, IntersectionEntry, IntersectionObserver, LayoutObserver,
    ObserverOptions, ScrollSpy,
};

/// Observer whose log outlives the spy, so drop-time teardown is visible.
#[derive(Clone, Default)]
struct SharedObserver {
    log: Rc<RefCell<Vec<String>>>,
    present: Vec<&'static str>,
}

impl SharedObserver {
    fn with_page(present: &[&'static str]) -> Self {
        Self {
            present: present.to_vec(),
            ..Self::default()
        }
    }

    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl IntersectionObserver for SharedObserver {
    fn observe(&mut self, id: &str) -> bool {
        if !self.present.contains(&id) {
            return false;
        }
        self.log.borrow_mut().push(format!("observe {}", id));
        true
    }

    fn disconnect(&mut self) {
        self.log.borrow_mut().push("disconnect".to_string());
    }
}

#[test]
fn test_later_entry_in_batch_wins() {
    let mut spy = ScrollSpy::new(SharedObserver::with_page(&["intro", "details"]));
    spy.observe(&["intro", "details"]);
    spy.on_intersections(&[
        IntersectionEntry::entering("intro"),
        IntersectionEntry::entering("details"),
    ]);
    assert_eq!(spy.active_id(), "details");
    assert!(spy.is_active("details"));
    assert!(!spy.is_active("intro"));
}

#[test]
fn test_later_batch_overwrites_earlier() {
    let mut spy = ScrollSpy::new(SharedObserver::with_page(&["intro", "details"]));
    spy.observe(&["intro", "details"]);
    spy.on_intersections(&[IntersectionEntry::entering("details")]);
    spy.on_intersections(&[IntersectionEntry::entering("intro")]);
    assert_eq!(spy.active_id(), "intro");
}

#[test]
fn test_nothing_active_before_first_report() {
    let mut spy = ScrollSpy::new(SharedObserver::with_page(&["intro"]));
    spy.observe(&["intro"]);
    assert_eq!(spy.active_id(), "");
    assert!(!spy.is_active(""));
}

#[test]
fn test_missing_anchors_are_skipped() {
    let observer = SharedObserver::with_page(&["intro"]);
    let mut spy = ScrollSpy::new(observer.clone());
    spy.observe(&["intro", "gone"]);

    assert_eq!(spy.observed(), ["intro"]);
    assert_eq!(observer.log(), vec!["observe intro"]);

    spy.on_intersections(&[IntersectionEntry::entering("gone")]);
    assert_eq!(spy.active_id(), "");
}

#[test]
fn test_page_change_disconnects_before_observing() {
    let observer = SharedObserver::with_page(&["intro", "setup"]);
    let mut spy = ScrollSpy::new(observer.clone());
    spy.observe(&["intro"]);
    spy.observe(&["setup"]);

    assert_eq!(
        observer.log(),
        vec!["observe intro", "disconnect", "observe setup"]
    );
}

#[test]
fn test_drop_disconnects() {
    let observer = SharedObserver::with_page(&["intro"]);
    {
        let mut spy = ScrollSpy::new(observer.clone());
        spy.observe(&["intro"]);
    }
    assert_eq!(observer.log(), vec!["observe intro", "disconnect"]);
}

#[test]
fn test_teardown_is_idempotent() {
    let observer = SharedObserver::with_page(&["intro"]);
    let mut spy = ScrollSpy::new(observer.clone());
    spy.observe(&["intro"]);
    spy.teardown();
    spy.teardown();
    assert!(!spy.is_connected());
    drop(spy);
    assert_eq!(observer.log(), vec!["observe intro", "disconnect"]);
}

#[test]
fn test_reports_after_teardown_are_ignored() {
    let mut spy = ScrollSpy::new(SharedObserver::with_page(&["intro"]));
    spy.observe(&["intro"]);
    spy.teardown();
    spy.on_intersections(&[IntersectionEntry::entering("intro")]);
    assert_eq!(spy.active_id(), "");
}

const PAGE: &str = "\
# Severity Levels

## Intro

## Details

### Exit codes {#exit-codes}

## FAQ
";

#[test]
fn test_toc_anchors_drive_layout_spy() {
    let toc = extract_toc(PAGE);
    let ids = anchor_ids(&toc);
    assert_eq!(ids, vec!["intro", "details", "exit-codes", "faq"]);

    let mut spy = ScrollSpy::new(LayoutObserver::new(ObserverOptions::default()));
    spy.place("intro", 0.0, 600.0);
    spy.place("details", 600.0, 1000.0);
    spy.place("exit-codes", 1000.0, 1200.0);
    spy.place("faq", 1200.0, 1800.0);
    spy.observe(&ids);

    // Band is [80, 200) for a 1000px viewport.
    assert_eq!(spy.scroll_to(0.0, 1000.0), "intro");
    assert_eq!(spy.scroll_to(500.0, 1000.0), "details");
    assert_eq!(spy.scroll_to(700.0, 1000.0), "details", "intro leaving changes nothing");
    assert_eq!(spy.scroll_to(1150.0, 1000.0), "faq");
    assert_eq!(spy.scroll_to(0.0, 1000.0), "intro");
}

#[test]
fn test_custom_navbar_offset() {
    let options = ObserverOptions {
        top_offset_px: 120,
        bottom_band_percent: 50,
    };
    assert_eq!(options.root_margin(), "-120px 0px -50% 0px");
    assert!(!options.is_in_band(0.0, 100.0, 1000.0));
    assert!(options.is_in_band(0.0, 130.0, 1000.0));
    assert!(!options.is_in_band(500.0, 900.0, 1000.0));
}
