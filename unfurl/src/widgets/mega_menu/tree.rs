//! Menu item discovery and per-item state.

use log::debug;
use pagedom::{traverse, Element, Page, Strategy};

use crate::error::WidgetError;
use crate::widgets::disclosure::Disclosure;

use super::options::MegaMenuOptions;

/// Role attribute for menu structure.
pub const ROLE: &str = "data-mega-menu";

pub(super) fn is_item(el: &Element) -> bool {
    el.is_marked(ROLE, "menu-item")
}

fn is_submenu(el: &Element) -> bool {
    el.is_marked(ROLE, "submenu")
}

/// One `data-mega-menu="menu-item"` element.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: String,
    /// Children of the menu root are depth 1.
    pub depth: usize,
    /// Enclosing menu item, if any.
    pub parent: Option<String>,
    pub submenu: Option<String>,
    /// Present for items with a submenu.
    pub disclosure: Option<Disclosure>,
}

impl MenuItem {
    pub fn has_children(&self) -> bool {
        self.submenu.is_some()
    }

    /// Open or opening.
    pub fn is_open(&self) -> bool {
        self.disclosure.as_ref().is_some_and(Disclosure::target_state)
    }
}

/// All items of a mega menu in depth-first order.
#[derive(Debug, Clone)]
pub struct MenuTree {
    menu: String,
    items: Vec<MenuItem>,
}

impl MenuTree {
    /// Discover items under `host`, write `data-level`, `data-has-children`
    /// and the stagger indices, and bind a closed disclosure per submenu.
    pub fn build(
        page: &mut Page,
        host: &str,
        options: &MegaMenuOptions,
    ) -> Result<Self, WidgetError> {
        let root = page
            .element(host)
            .ok_or_else(|| WidgetError::missing("mega menu", host))?;
        let menu = page
            .query(host, |el| el.is_marked(ROLE, "menu"))
            .ok_or_else(|| WidgetError::missing("menu", host))?;
        let visits = traverse(root, Strategy::DepthFirst, is_item);

        let mut found = Vec::with_capacity(visits.len());
        for visit in visits {
            let parent = page
                .parent_id(&visit.id)
                .and_then(|parent| page.closest(&parent, is_item));
            let submenu = page.query(&visit.id, is_submenu);
            found.push((visit.id, visit.level + 1, parent, submenu));
        }

        let mut items = Vec::with_capacity(found.len());
        for (id, depth, parent, submenu) in found {
            page.set_attribute(&id, "data-level", depth.to_string());
            page.toggle_attribute(&id, "data-has-children", submenu.is_some());

            let disclosure = match &submenu {
                Some(submenu) => Some(
                    Disclosure::builder(id.clone(), submenu.clone())
                        .initial(false)
                        .duration(options.submenu_transition().duration)
                        .easing(options.submenu_transition().easing)
                        .bind(page)?,
                ),
                None => None,
            };

            items.push(MenuItem {
                id,
                depth,
                parent,
                submenu,
                disclosure,
            });
        }

        let tree = Self { menu, items };
        tree.write_stagger(page);
        debug!("mega menu {}: {} items", host, tree.items.len());
        Ok(tree)
    }

    /// `--item-index--mobile`: breadth-first order across the whole menu.
    /// `--item-index--desktop`: depth-first order inside each top-level item,
    /// counting the item itself as 0.
    fn write_stagger(&self, page: &mut Page) {
        let mobile: Vec<String> = page
            .element(&self.menu)
            .map(|menu| traverse(menu, Strategy::BreadthFirst, is_item))
            .unwrap_or_default()
            .into_iter()
            .map(|visit| visit.id)
            .collect();
        for (index, id) in mobile.iter().enumerate() {
            page.set_property(id, "--item-index--mobile", index.to_string());
        }

        for top in self.top_level() {
            let inside: Vec<String> = page
                .element(&top.id)
                .map(|item| traverse(item, Strategy::DepthFirst, |_| true))
                .unwrap_or_default()
                .into_iter()
                .map(|visit| visit.id)
                .collect();
            page.set_property(&top.id, "--item-index--desktop", "0");
            for (index, id) in inside.iter().enumerate() {
                page.set_property(id, "--item-index--desktop", (index + 1).to_string());
            }
        }
    }

    /// The `data-mega-menu="menu"` element.
    pub fn menu(&self) -> &str {
        &self.menu
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn top_level(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.depth == 1)
    }

    /// Items sharing `id`'s parent and depth, excluding `id`.
    pub fn siblings<'a>(&'a self, id: &str) -> Vec<&'a MenuItem> {
        let Some(item) = self.item(id) else {
            return Vec::new();
        };
        self.items
            .iter()
            .filter(|other| {
                other.id != item.id && other.depth == item.depth && other.parent == item.parent
            })
            .collect()
    }

    /// Disclosures of every item with a submenu.
    pub fn disclosures(&self) -> impl Iterator<Item = &Disclosure> {
        self.items.iter().filter_map(|item| item.disclosure.as_ref())
    }
}
