use std::sync::{Arc, Mutex};
use std::time::Duration;

use pagedom::{Easing, Element, Event, Page, Size};
use unfurl::{Disclosure, Lifecycle, Outcome, WidgetError};

const FRAME: Duration = Duration::from_millis(16);

fn faq_page(hidden: bool) -> Page {
    let mut panel = Element::div()
        .id("panel")
        .child(Element::text("one\ntwo\nthree\nfour"));
    if hidden {
        panel = panel.attr("aria-hidden", "true");
    }
    let root = Element::new("body").id("body").child(
        Element::div()
            .id("faq")
            .child(Element::new("button").id("toggle").child(Element::text("Question")))
            .child(panel),
    );
    Page::new(root, 1024)
}

fn closed() -> (Page, Disclosure) {
    let mut page = faq_page(true);
    let disclosure = Disclosure::builder("toggle", "panel")
        .easing(Easing::Linear)
        .bind(&mut page)
        .unwrap();
    (page, disclosure)
}

fn record(disclosure: &Disclosure) -> Arc<Mutex<Vec<Lifecycle>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    disclosure.subscribe(move |_, event| sink.lock().unwrap().push(event));
    log
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_missing_elements() {
    let mut page = faq_page(true);
    assert_eq!(
        Disclosure::bind(&mut page, "nope", "panel").unwrap_err(),
        WidgetError::MissingElement {
            role: "trigger",
            container: "nope".into(),
        }
    );
    assert!(matches!(
        Disclosure::bind(&mut page, "toggle", "nope"),
        Err(WidgetError::MissingElement { role: "content", .. })
    ));
}

#[test]
fn test_initial_state_from_aria_hidden() {
    let (page, disclosure) = closed();
    assert!(!disclosure.is_open());
    assert_eq!(page.get_attribute("toggle", "aria-expanded"), Some("false"));
    assert_eq!(page.get_attribute("panel", "aria-hidden"), Some("true"));
    assert!(!page.has_attribute("toggle", "open"));
    assert_eq!(page.rendered_height("panel"), Some(0));

    let mut page = faq_page(false);
    let disclosure = Disclosure::bind(&mut page, "toggle", "panel").unwrap();
    assert!(disclosure.is_open());
    assert_eq!(page.get_attribute("toggle", "aria-expanded"), Some("true"));
    assert_eq!(page.get_attribute("panel", "aria-hidden"), Some("false"));
    assert!(page.has_attribute("toggle", "open"));
    assert_eq!(page.rendered_height("panel"), Some(4));
}

#[test]
fn test_initial_override_and_marker() {
    let mut page = faq_page(false);
    let disclosure = Disclosure::builder("toggle", "panel")
        .marker("faq")
        .initial(false)
        .bind(&mut page)
        .unwrap();

    assert!(!disclosure.is_open());
    assert_eq!(page.get_attribute("panel", "aria-hidden"), Some("true"));
    assert!(!page.has_attribute("faq", "open"));

    disclosure.open(&mut page, Some(Duration::ZERO));
    assert!(page.has_attribute("faq", "open"));
    assert!(!page.has_attribute("toggle", "open"));
}

// ============================================================================
// Open / Close
// ============================================================================

#[test]
fn test_open_settles_after_animation() {
    let (mut page, disclosure) = closed();
    let mut settle = disclosure.open(&mut page, None);

    assert_eq!(settle.try_outcome(), None);
    assert!(!disclosure.is_open());
    assert!(disclosure.target_state());
    assert!(page.is_animating("panel"));

    page.tick(Duration::from_millis(150));
    assert_eq!(page.element("panel").unwrap().height, Size::Fixed(2));

    page.settle(FRAME);
    assert_eq!(settle.try_outcome(), Some(Outcome::Settled));
    assert!(disclosure.is_open());
    assert_eq!(page.get_attribute("toggle", "aria-expanded"), Some("true"));
    assert_eq!(page.get_attribute("panel", "aria-hidden"), Some("false"));
    assert!(page.has_attribute("toggle", "open"));
    assert_eq!(page.rendered_height("panel"), Some(4));
}

#[test]
fn test_close_mirrors_inverse() {
    let (mut page, disclosure) = closed();
    disclosure.open(&mut page, None);
    page.settle(FRAME);

    let settle = disclosure.close(&mut page, None);
    page.settle(FRAME);

    assert_eq!(futures::executor::block_on(settle), Outcome::Settled);
    assert!(!disclosure.is_open());
    assert_eq!(page.get_attribute("toggle", "aria-expanded"), Some("false"));
    assert_eq!(page.get_attribute("panel", "aria-hidden"), Some("true"));
    assert!(!page.has_attribute("toggle", "open"));
    assert_eq!(page.rendered_height("panel"), Some(0));
}

#[test]
fn test_lifecycle_order() {
    let (mut page, disclosure) = closed();
    let log = record(&disclosure);

    disclosure.open(&mut page, None);
    assert_eq!(*log.lock().unwrap(), vec![Lifecycle::BeforeOpen]);

    page.settle(FRAME);
    disclosure.close(&mut page, None);
    page.settle(FRAME);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            Lifecycle::BeforeOpen,
            Lifecycle::AfterOpen,
            Lifecycle::BeforeClose,
            Lifecycle::AfterClose,
        ]
    );
}

#[test]
fn test_open_when_open_is_idempotent() {
    let (mut page, disclosure) = closed();
    disclosure.open(&mut page, None);
    page.settle(FRAME);

    let log = record(&disclosure);
    let mut settle = disclosure.open(&mut page, None);

    assert_eq!(settle.try_outcome(), Some(Outcome::Settled));
    assert!(!page.has_active_animations());
    assert!(log.lock().unwrap().is_empty());
    assert!(disclosure.is_open());
}

#[test]
fn test_same_direction_joins_in_flight() {
    let (mut page, disclosure) = closed();
    let log = record(&disclosure);

    let mut first = disclosure.open(&mut page, None);
    page.tick(Duration::from_millis(100));
    let mut second = disclosure.open(&mut page, None);
    assert_eq!(second.try_outcome(), None);

    page.settle(FRAME);
    assert_eq!(first.try_outcome(), Some(Outcome::Settled));
    assert_eq!(second.try_outcome(), Some(Outcome::Settled));
    assert_eq!(
        *log.lock().unwrap(),
        vec![Lifecycle::BeforeOpen, Lifecycle::AfterOpen]
    );
}

#[test]
fn test_opposite_request_supersedes() {
    let (mut page, disclosure) = closed();
    let log = record(&disclosure);

    let mut opening = disclosure.open(&mut page, None);
    page.tick(Duration::from_millis(150));
    let mut closing = disclosure.close(&mut page, None);

    assert_eq!(opening.try_outcome(), Some(Outcome::Superseded));
    // The collapse starts from the interpolated height
    assert_eq!(page.element("panel").unwrap().height, Size::Fixed(2));

    page.settle(FRAME);
    assert_eq!(closing.try_outcome(), Some(Outcome::Settled));
    assert!(!disclosure.is_open());
    assert_eq!(page.rendered_height("panel"), Some(0));
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            Lifecycle::BeforeOpen,
            Lifecycle::BeforeClose,
            Lifecycle::AfterClose,
        ]
    );
}

#[test]
fn test_toggle_uses_target_state() {
    let (mut page, disclosure) = closed();

    disclosure.toggle(&mut page);
    assert!(disclosure.target_state());

    // Still animating open; the second toggle reverses it
    disclosure.toggle(&mut page);
    assert!(!disclosure.target_state());

    page.settle(FRAME);
    assert!(!disclosure.is_open());
}

#[test]
fn test_zero_duration_settles_synchronously() {
    let (mut page, disclosure) = closed();
    let mut settle = disclosure.open(&mut page, Some(Duration::ZERO));

    assert_eq!(settle.try_outcome(), Some(Outcome::Settled));
    assert!(disclosure.is_open());
    assert!(!page.has_active_animations());
}

#[test]
fn test_reduced_motion_settles_synchronously() {
    let (mut page, disclosure) = closed();
    page.set_reduced_motion(true);

    let mut settle = disclosure.open(&mut page, None);
    assert_eq!(settle.try_outcome(), Some(Outcome::Settled));
    assert_eq!(page.rendered_height("panel"), Some(4));
}

#[test]
fn test_reset_skips_observers() {
    let (mut page, disclosure) = closed();
    let log = record(&disclosure);
    let mut pending = disclosure.open(&mut page, None);

    disclosure.reset(&mut page, false);

    assert_eq!(pending.try_outcome(), Some(Outcome::Superseded));
    assert!(!page.has_active_animations());
    assert_eq!(*log.lock().unwrap(), vec![Lifecycle::BeforeOpen]);
    assert_eq!(page.rendered_height("panel"), Some(0));
}

// ============================================================================
// Observers
// ============================================================================

#[test]
fn test_on_filters_kind_and_unsubscribe() {
    let (mut page, disclosure) = closed();
    let hits = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&hits);
    let subscription = disclosure.on(Lifecycle::AfterOpen, move |_, _| {
        *sink.lock().unwrap() += 1;
    });

    disclosure.open(&mut page, Some(Duration::ZERO));
    disclosure.close(&mut page, Some(Duration::ZERO));
    assert_eq!(*hits.lock().unwrap(), 1);

    assert!(subscription.unsubscribe());
    assert_eq!(disclosure.observer_count(), 0);
    disclosure.open(&mut page, Some(Duration::ZERO));
    assert_eq!(*hits.lock().unwrap(), 1);
}

#[test]
fn test_observer_can_reverse_request() {
    let (mut page, disclosure) = closed();
    let handle = disclosure.clone();
    disclosure.on(Lifecycle::BeforeOpen, move |page, _| {
        handle.close(page, Some(Duration::ZERO));
    });

    let mut settle = disclosure.open(&mut page, None);
    assert_eq!(settle.try_outcome(), Some(Outcome::Superseded));
    assert!(!page.has_active_animations());
    assert!(!disclosure.is_open());
}

// ============================================================================
// Trigger Wiring
// ============================================================================

#[test]
fn test_trigger_click_toggles() {
    let (mut page, disclosure) = closed();
    disclosure.wire_trigger(&mut page);
    disclosure.wire_trigger(&mut page);
    assert_eq!(disclosure.listener_count(), 1);

    page.dispatch(Event::click("toggle"));
    page.settle(FRAME);
    assert!(disclosure.is_open());

    page.dispatch(Event::click("toggle"));
    page.settle(FRAME);
    assert!(!disclosure.is_open());
}

#[test]
fn test_unbind_removes_listeners() {
    let (mut page, disclosure) = closed();
    disclosure.wire_trigger(&mut page);

    assert_eq!(disclosure.unbind(&mut page), 1);
    assert_eq!(page.total_listeners(), 0);

    page.dispatch(Event::click("toggle"));
    assert!(!disclosure.target_state());
}
