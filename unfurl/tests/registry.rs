use std::time::Duration;

use pagedom::{Element, Event, Page};
use unfurl::{mount_document, Marquee, MarqueeOptions, Widget, WidgetError, WidgetRegistry};

const FRAME: Duration = Duration::from_millis(16);

fn slides() -> Vec<Element> {
    (1..=3)
        .map(|n| {
            Element::div()
                .id(format!("slide-{n}"))
                .child(Element::text(format!("Logo {n}")).id(format!("logo-{n}")))
        })
        .collect()
}

fn marquee_page(pause_on_hover: bool) -> Page {
    let mut host = Element::new("ui-marquee").id("logos").children(slides());
    if pause_on_hover {
        host = host.flag("data-pause-on-hover");
    }
    Page::new(Element::new("body").id("body").child(host), 1024)
}

fn document() -> Page {
    let menu = Element::new("mega-menu").id("nav").child(
        Element::new("ul").id("nav-list").attr("data-mega-menu", "menu").child(
            Element::new("li")
                .id("nav-home")
                .attr("data-mega-menu", "menu-item")
                .child(Element::text("Home")),
        ),
    );
    let accordion = Element::new("ui-accordion").id("faq").child(
        Element::div()
            .id("faq-1")
            .child(Element::new("button").id("faq-1-q").flag("data-accordion-toggler"))
            .child(
                Element::div()
                    .id("faq-1-a")
                    .flag("data-accordion-content")
                    .attr("aria-hidden", "true")
                    .child(Element::text("Yes")),
            ),
    );
    let dropdown = Element::new("ui-dropdown")
        .id("lang")
        .child(Element::new("button").id("lang-t").flag("data-dropdown-trigger"))
        .child(
            Element::new("ul")
                .id("lang-c")
                .flag("data-dropdown-content")
                .child(Element::text("EN\nFR")),
        );

    Page::new(
        Element::new("body")
            .id("body")
            .child(
                Element::new("header")
                    .id("header")
                    .child(Element::new("mega-menu-toggler").id("burger").attr("target", "nav"))
                    .child(menu),
            )
            .child(accordion)
            .child(dropdown)
            .child(Element::new("ui-marquee").id("logos").children(slides())),
        500,
    )
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_mount_document_registers_hosts_in_order() {
    let mut page = document();
    let registry = mount_document(&mut page).unwrap();
    let registry = registry.read().unwrap();

    assert_eq!(registry.ids(), ["burger", "nav", "faq", "lang", "logos"]);
    assert_eq!(registry.get("faq").map(Widget::kind), Some("accordion"));
    assert!(registry.accordion("faq").is_ok());
    assert!(registry.dropdown("lang").unwrap().is_open());
    assert_eq!(registry.toggler("burger").unwrap().target(), "nav");
    assert_eq!(registry.marquee("logos").unwrap().slide_count(), 3);
}

#[test]
fn test_typed_lookup_of_wrong_kind() {
    let mut page = document();
    let registry = mount_document(&mut page).unwrap();
    let registry = registry.read().unwrap();

    assert_eq!(
        registry.mega_menu("faq").unwrap_err(),
        WidgetError::MissingTarget("faq".into())
    );
    assert!(registry.accordion("ghost").is_err());
}

#[test]
fn test_toggler_mounted_before_its_menu() {
    let mut page = document();
    let registry = mount_document(&mut page).unwrap();
    let menu = registry.read().unwrap().mega_menu("nav").unwrap().clone();

    page.dispatch(Event::click("burger"));
    assert!(menu.is_mobile_menu_open());
    page.dispatch(Event::click("burger"));
    assert!(!menu.is_mobile_menu_open());
}

#[test]
fn test_toggler_with_unknown_target_is_a_no_op() {
    let mut page = Page::new(
        Element::new("body")
            .id("body")
            .child(Element::new("mega-menu-toggler").id("burger").attr("target", "ghost")),
        500,
    );
    let registry = mount_document(&mut page).unwrap();

    let outcome = page.dispatch(Event::click("burger"));
    assert_eq!(outcome.delivered, 1);
    assert!(registry.read().unwrap().toggler("burger").is_ok());
}

#[test]
fn test_toggler_without_target_attribute() {
    let mut page = Page::new(Element::new("mega-menu-toggler").id("burger"), 500);
    let registry = WidgetRegistry::new().shared();
    assert!(matches!(
        unfurl::MenuToggler::mount(&mut page, "burger", &registry),
        Err(WidgetError::InvalidOption { option: "target", .. })
    ));
}

#[test]
fn test_register_duplicate_id() {
    let mut page = marquee_page(false);
    let marquee = Marquee::mount(&mut page, "logos").unwrap();

    let mut registry = WidgetRegistry::new();
    registry.register("logos", Widget::Marquee(marquee.clone())).unwrap();
    assert_eq!(
        registry.register("logos", Widget::Marquee(marquee)),
        Err(WidgetError::DuplicateId("logos".into()))
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_unmount_all_detaches_everything() {
    let mut page = document();
    let registry = mount_document(&mut page).unwrap();
    assert!(page.total_listeners() > 0);
    assert_eq!(page.viewport_observer_count(), 1);

    registry.write().unwrap().unmount_all(&mut page);

    assert_eq!(page.total_listeners(), 0);
    assert_eq!(page.viewport_observer_count(), 0);
    assert!(registry.read().unwrap().is_empty());
}

#[test]
fn test_unmount_single_widget() {
    let mut page = document();
    let registry = mount_document(&mut page).unwrap();

    registry.write().unwrap().unmount(&mut page, "lang").unwrap();
    assert!(!registry.read().unwrap().contains("lang"));
    assert_eq!(
        registry.write().unwrap().unmount(&mut page, "lang"),
        Err(WidgetError::MissingTarget("lang".into()))
    );

    page.dispatch(Event::click("lang-t"));
    page.settle(FRAME);
    let dropdown_open = page.get_attribute("lang-c", "aria-hidden") == Some("false");
    assert!(dropdown_open);
}

#[test]
fn test_mount_document_failure_rolls_back() {
    let mut page = Page::new(
        Element::new("body")
            .id("body")
            .child(Element::new("ui-dropdown").id("ok").children([
                Element::new("button").id("ok-t").flag("data-dropdown-trigger"),
                Element::div().id("ok-c").flag("data-dropdown-content"),
            ]))
            .child(
                Element::new("ui-accordion")
                    .id("broken")
                    .child(Element::div().id("broken-1")),
            ),
        1024,
    );

    assert!(matches!(
        mount_document(&mut page),
        Err(WidgetError::MissingElement { role: "toggler", .. })
    ));
    assert_eq!(page.total_listeners(), 0);
}

// ============================================================================
// Marquee
// ============================================================================

#[test]
fn test_marquee_duplicates_slides_into_track() {
    let mut page = marquee_page(false);
    let marquee = Marquee::mount(&mut page, "logos").unwrap();

    let host = page.element("logos").unwrap();
    assert_eq!(host.child_elements().len(), 1);
    assert_eq!(host.get_property("--items-count"), Some("3"));

    let track = page.element(marquee.track()).unwrap();
    assert_eq!(track.tag, "marquee-track");
    let ids: Vec<&str> = track.child_elements().iter().map(|el| el.id.as_str()).collect();
    assert_eq!(
        ids,
        ["slide-1", "slide-2", "slide-3", "slide-1-clone", "slide-2-clone", "slide-3-clone"]
    );
    assert_eq!(page.get_attribute("slide-2-clone", "data-marquee"), Some("clone-slide"));
    assert!(page.exists("logo-2-clone"));
    assert!(!page.has_attribute("slide-2", "data-marquee"));
}

#[test]
fn test_marquee_pause_and_resume() {
    let mut page = marquee_page(false);
    let marquee = Marquee::mount(&mut page, "logos").unwrap();
    assert_eq!(page.total_listeners(), 0);

    marquee.pause(&mut page);
    assert!(marquee.is_paused(&page));
    marquee.resume(&mut page);
    assert!(!marquee.is_paused(&page));
    assert_eq!(page.get_property("logos", "--animation-play-state"), Some("running"));
}

#[test]
fn test_marquee_pause_on_hover() {
    let mut page = marquee_page(true);
    let marquee = Marquee::mount(&mut page, "logos").unwrap();
    assert_eq!(marquee.options(), MarqueeOptions::default().pause_on_hover(true));

    page.dispatch(Event::mouse_enter("logos"));
    assert!(marquee.is_paused(&page));
    page.dispatch(Event::mouse_leave("logos"));
    assert!(!marquee.is_paused(&page));

    marquee.unmount(&mut page);
    assert_eq!(page.total_listeners(), 0);
    page.dispatch(Event::mouse_enter("logos"));
    assert!(!marquee.is_paused(&page));
}

#[test]
fn test_marquee_mounted_twice_is_refused() {
    let mut page = marquee_page(false);
    Marquee::mount(&mut page, "logos").unwrap();

    assert_eq!(
        Marquee::mount(&mut page, "logos").unwrap_err(),
        WidgetError::DuplicateId("logos-track".into())
    );
    let host = page.element("logos").unwrap();
    assert_eq!(host.child_elements().len(), 1);
    assert_eq!(page.element("logos-track").unwrap().child_elements().len(), 6);
}
