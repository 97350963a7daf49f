//! The sample page the demo mounts.

use pagedom::{Element, Page};

const ROLE: &str = "data-mega-menu";

fn link(id: &str, label: &str) -> Element {
    Element::new("li")
        .id(id)
        .attr(ROLE, "menu-item")
        .child(Element::new("a").id(format!("{id}-link")).child(Element::text(label)))
}

fn branch(id: &str, label: &str, children: Vec<Element>) -> Element {
    Element::new("li")
        .id(id)
        .attr(ROLE, "menu-item")
        .child(Element::new("span").id(format!("{id}-label")).child(Element::text(label)))
        .child(
            Element::new("ul")
                .id(format!("{id}-sub"))
                .attr(ROLE, "submenu")
                .children(children),
        )
}

fn header() -> Element {
    let menu = Element::new("mega-menu")
        .id("main-menu")
        .attr("data-desktop-min-width", "1024px")
        .flag("data-desktop-open-on-click")
        .flag("data-desktop-open-on-hover")
        .flag("data-mobile-close-on-click-outside")
        .child(
            Element::new("ul")
                .id("main-menu-list")
                .attr(ROLE, "menu")
                .child(branch(
                    "shop",
                    "Shop",
                    vec![
                        link("shop-new", "New arrivals"),
                        branch(
                            "shop-women",
                            "Women",
                            vec![link("shop-women-shoes", "Shoes"), link("shop-women-bags", "Bags")],
                        ),
                    ],
                ))
                .child(branch(
                    "about",
                    "About",
                    vec![link("about-team", "Team"), link("about-jobs", "Jobs")],
                ))
                .child(link("contact", "Contact")),
        );

    Element::new("header")
        .id("header")
        .child(
            Element::new("mega-menu-toggler")
                .id("burger")
                .attr("target", "main-menu")
                .child(Element::text("Menu").id("burger-label")),
        )
        .child(menu)
}

fn faq_item(n: usize, question: &str, answer: &str) -> Element {
    Element::div()
        .id(format!("faq-{n}"))
        .child(
            Element::new("button")
                .id(format!("faq-{n}-q"))
                .flag("data-accordion-toggler")
                .child(Element::text(question)),
        )
        .child(
            Element::div()
                .id(format!("faq-{n}-a"))
                .flag("data-accordion-content")
                .attr("aria-hidden", "true")
                .child(Element::text(answer)),
        )
}

pub fn build(width: u16) -> Page {
    let faq = Element::new("ui-accordion")
        .id("faq")
        .flag("data-is-exclusive")
        .child(faq_item(1, "Do you ship abroad?", "Yes.\nTo most countries."))
        .child(faq_item(2, "Can I return an item?", "Within 30 days.\nFree of charge.\nKeep the receipt."))
        .child(faq_item(3, "Do you have a store?", "Two, in Lyon\nand in Ghent."));

    let language = Element::new("ui-dropdown")
        .id("language")
        .child(
            Element::new("button")
                .id("language-trigger")
                .flag("data-dropdown-trigger")
                .child(Element::text("Language")),
        )
        .child(
            Element::new("ul")
                .id("language-list")
                .flag("data-dropdown-content")
                .attr("aria-hidden", "true")
                .child(Element::text("English\nFrançais\nNederlands")),
        );

    let logos = Element::new("ui-marquee")
        .id("logos")
        .flag("data-pause-on-hover")
        .children((1..=4).map(|n| Element::div().id(format!("logo-{n}")).child(Element::text(format!("Partner {n}")))));

    let root = Element::new("body")
        .id("body")
        .child(header())
        .child(
            Element::new("main")
                .id("main")
                .child(Element::text("Welcome").id("welcome"))
                .child(faq)
                .child(language)
                .child(logos),
        );

    Page::new(root, width)
}
