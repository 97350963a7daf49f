//! Filtered tree traversal.
//!
//! `level` counts matching ancestors between the root and a visited element,
//! so the first matching generation is level 0 no matter how deeply it is
//! wrapped in non-matching containers.

use std::collections::VecDeque;

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    DepthFirst,
    BreadthFirst,
}

/// One matching element, in visit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: String,
    pub level: usize,
    /// Position in visit order among matching elements.
    pub index: usize,
}

/// Visit the descendants of `root` (not `root` itself) that match `filter`.
pub fn traverse(root: &Element, strategy: Strategy, filter: impl Fn(&Element) -> bool) -> Vec<Visit> {
    let mut out = Vec::new();
    match strategy {
        Strategy::DepthFirst => depth_first(root, 0, &filter, &mut out),
        Strategy::BreadthFirst => breadth_first(root, &filter, &mut out),
    }
    out
}

fn depth_first(element: &Element, level: usize, filter: &dyn Fn(&Element) -> bool, out: &mut Vec<Visit>) {
    for child in element.child_elements() {
        if filter(child) {
            out.push(Visit {
                id: child.id.clone(),
                level,
                index: out.len(),
            });
            depth_first(child, level + 1, filter, out);
        } else {
            depth_first(child, level, filter, out);
        }
    }
}

fn breadth_first(root: &Element, filter: &dyn Fn(&Element) -> bool, out: &mut Vec<Visit>) {
    let mut queue: VecDeque<(&Element, usize)> = root.child_elements().iter().map(|c| (c, 0)).collect();

    while let Some((element, level)) = queue.pop_front() {
        let child_level = if filter(element) {
            out.push(Visit {
                id: element.id.clone(),
                level,
                index: out.len(),
            });
            level + 1
        } else {
            level
        };
        queue.extend(element.child_elements().iter().map(|c| (c, child_level)));
    }
}
