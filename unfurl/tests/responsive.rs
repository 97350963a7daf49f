use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pagedom::{Element, Event, EventKind, ListenerId, MediaQuery, Page};
use unfurl::{Mode, ModeBehavior, ResponsiveSwitcher};

/// Records which mode handled each click and counts attach/reset calls.
#[derive(Default)]
struct Probe {
    clicks: Arc<Mutex<Vec<Mode>>>,
    attaches: AtomicUsize,
    resets: Arc<Mutex<Vec<Mode>>>,
}

impl ModeBehavior for Probe {
    fn attach(&self, page: &mut Page, mode: Mode) -> Vec<ListenerId> {
        self.attaches.fetch_add(1, Ordering::SeqCst);
        let sink = Arc::clone(&self.clicks);
        vec![page.add_listener("host", EventKind::Click, move |_, _| {
            sink.lock().unwrap().push(mode);
        })]
    }

    fn reset(&self, _page: &mut Page, mode: Mode) {
        self.resets.lock().unwrap().push(mode);
    }
}

fn mount(width: u16) -> (Page, ResponsiveSwitcher, Arc<Probe>) {
    let mut page = Page::new(
        Element::new("body")
            .id("body")
            .child(Element::div().id("host")),
        width,
    );
    let probe = Arc::new(Probe::default());
    let switcher = ResponsiveSwitcher::mount(
        &mut page,
        "host",
        MediaQuery::min_width(768),
        Arc::clone(&probe) as Arc<dyn ModeBehavior>,
    );
    (page, switcher, probe)
}

// ============================================================================
// Mode Selection
// ============================================================================

#[test]
fn test_mode_for_width_is_inclusive() {
    let query = MediaQuery::min_width(768);
    assert_eq!(Mode::for_width(&query, 767), Mode::Compact);
    assert_eq!(Mode::for_width(&query, 768), Mode::Wide);
    assert_eq!(Mode::for_width(&query, 2000), Mode::Wide);
}

#[test]
fn test_initial_evaluation_is_synchronous() {
    let (page, switcher, probe) = mount(500);
    assert_eq!(switcher.active_mode(), Some(Mode::Compact));
    assert!(page.has_attribute("host", "data-is-mobile"));
    assert!(!page.has_attribute("host", "data-is-desktop"));
    assert_eq!(probe.attaches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_viewport_change_swaps_listener_sets() {
    let (mut page, switcher, probe) = mount(500);

    page.set_viewport_width(900);
    assert_eq!(switcher.active_mode(), Some(Mode::Wide));
    assert!(page.has_attribute("host", "data-is-desktop"));
    assert!(!page.has_attribute("host", "data-is-mobile"));
    assert_eq!(*probe.resets.lock().unwrap(), vec![Mode::Compact]);

    page.dispatch(Event::click("host"));
    assert_eq!(*probe.clicks.lock().unwrap(), vec![Mode::Wide]);
}

#[test]
fn test_exactly_one_mode_attached_for_every_width() {
    let (mut page, switcher, _probe) = mount(1024);
    for width in [320, 767, 768, 769, 500, 1200, 768, 0] {
        page.set_viewport_width(width);
        assert_eq!(page.listener_count("host", EventKind::Click), 1, "width {width}");
        assert_eq!(switcher.listener_count(), 1);
        let markers = ["data-is-mobile", "data-is-desktop"]
            .iter()
            .filter(|name| page.has_attribute("host", name))
            .count();
        assert_eq!(markers, 1, "width {width}");
    }
}

#[test]
fn test_same_mode_change_does_not_rebind() {
    let (mut page, _switcher, probe) = mount(900);
    page.set_viewport_width(1000);
    page.set_viewport_width(768);
    page.set_viewport_width(1400);

    assert_eq!(probe.attaches.load(Ordering::SeqCst), 1);
    assert!(probe.resets.lock().unwrap().is_empty());
}

#[test]
fn test_explicit_enable_and_disable() {
    let (mut page, switcher, probe) = mount(500);

    switcher.enable(&mut page, Mode::Wide);
    assert_eq!(switcher.active_mode(), Some(Mode::Wide));

    switcher.disable(&mut page, Mode::Compact);
    assert_eq!(switcher.active_mode(), Some(Mode::Wide));

    switcher.disable(&mut page, Mode::Wide);
    assert_eq!(switcher.active_mode(), None);
    assert_eq!(page.total_listeners(), 0);
    assert_eq!(*probe.resets.lock().unwrap(), vec![Mode::Compact, Mode::Wide]);
}

#[test]
fn test_unmount_detaches_everything() {
    let (mut page, switcher, _probe) = mount(500);
    assert_eq!(page.viewport_observer_count(), 1);

    switcher.unmount(&mut page);
    assert_eq!(page.total_listeners(), 0);
    assert_eq!(page.viewport_observer_count(), 0);
    assert!(!page.has_attribute("host", "data-is-mobile"));

    page.set_viewport_width(1000);
    assert_eq!(switcher.active_mode(), None);
}
