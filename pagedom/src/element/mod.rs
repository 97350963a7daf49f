mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// IDs from `root` down to (and including) the element `id`.
pub fn ancestry(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if collect_path(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// True when `descendant` is `ancestor` or lies inside it.
pub fn contains(root: &Element, ancestor: &str, descendant: &str) -> bool {
    find_element(root, ancestor)
        .and_then(|subtree| find_element(subtree, descendant))
        .is_some()
}

/// The parent of the element `id`, if it has one.
pub fn parent_id(root: &Element, id: &str) -> Option<String> {
    let mut path = ancestry(root, id)?;
    path.pop();
    path.pop()
}

/// Nearest element, starting at `id` and walking up, that matches `predicate`.
pub fn closest(root: &Element, id: &str, predicate: impl Fn(&Element) -> bool) -> Option<String> {
    let path = ancestry(root, id)?;
    path.into_iter()
        .rev()
        .find(|node| find_element(root, node).is_some_and(&predicate))
}

/// IDs of all descendants of `root` (excluding `root`) matching `predicate`,
/// in document order.
pub fn query_all(root: &Element, predicate: impl Fn(&Element) -> bool) -> Vec<String> {
    let mut out = Vec::new();
    query_recursive(root, &predicate, &mut out);
    out
}

/// First descendant of `root` matching `predicate`.
pub fn query(root: &Element, predicate: impl Fn(&Element) -> bool) -> Option<String> {
    query_all(root, predicate).into_iter().next()
}

fn query_recursive(element: &Element, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<String>) {
    for child in element.child_elements() {
        if predicate(child) {
            out.push(child.id.clone());
        }
        query_recursive(child, predicate, out);
    }
}

/// Render the tree as an indented outline, one element per line.
pub fn outline(root: &Element) -> String {
    let mut out = String::new();
    outline_recursive(root, 0, &mut out);
    out
}

fn outline_recursive(element: &Element, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&element.describe());
    out.push('\n');
    for child in element.child_elements() {
        outline_recursive(child, depth + 1, out);
    }
}
