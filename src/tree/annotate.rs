//! Best-effort annotation of the extracted tree.
//!
//! Annotators look up metadata keyed by live elements (component names from
//! a framework's internal tree, pseudo-element styling), but the extracted
//! tree holds no element references. The two worlds are re-aligned by
//! parallel-walking the source tree against the extracted tree, matching by
//! tag at the same child index. Visibility filtering makes this lossy by
//! nature: the walk stops matching a branch on the first mismatch, and a
//! skipped branch just means missing optional fields, never an error.

use super::{Node, PseudoElements};
use crate::element::Element;

/// Supplies human-readable component names for elements, typically by
/// walking a rendering framework's internal tree.
pub trait ComponentAnnotator<E: Element> {
    fn component_name(&self, element: &E) -> Option<String>;
}

/// Supplies design-relevant `::before`/`::after` styling per element.
pub trait PseudoAnnotator<E: Element> {
    fn pseudo_styles(&self, element: &E) -> Option<PseudoElements>;
}

/// Attach component names to every aligned node.
pub fn annotate_components<E: Element>(
    node: &mut Node,
    element: &E,
    annotator: &dyn ComponentAnnotator<E>,
) {
    parallel_walk(node, element, &mut |node, element| {
        if let Some(name) = annotator.component_name(element) {
            node.react_component = Some(name);
        }
    });
}

/// Attach pseudo-element styling to every aligned node.
pub fn annotate_pseudo_elements<E: Element>(
    node: &mut Node,
    element: &E,
    annotator: &dyn PseudoAnnotator<E>,
) {
    parallel_walk(node, element, &mut |node, element| {
        if let Some(pseudo) = annotator.pseudo_styles(element) {
            node.pseudo_elements = Some(pseudo);
        }
    });
}

/// Walk the source tree and the extracted tree in parallel.
///
/// Extracted children advance only when the tag at the current index matches
/// the source child; an unmatched source child is skipped (it was most
/// likely filtered out), and a branch stops aligning once indices run out.
fn parallel_walk<E: Element>(
    node: &mut Node,
    element: &E,
    visit: &mut impl FnMut(&mut Node, &E),
) {
    visit(node, element);

    if node.children.is_empty() {
        return;
    }

    let mut tree_idx = 0;
    for child in element.children() {
        if tree_idx >= node.children.len() {
            break;
        }
        if node.children[tree_idx].tag == child.tag_name() {
            parallel_walk(&mut node.children[tree_idx], &child, visit);
            tree_idx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Rect;

    /// Toy element tree with an optional per-element label.
    #[derive(Clone)]
    struct Labeled {
        tag: &'static str,
        label: Option<&'static str>,
        children: Vec<Labeled>,
    }

    impl Element for Labeled {
        fn tag_name(&self) -> &str {
            self.tag
        }

        fn style(&self, _property: &str) -> String {
            String::new()
        }

        fn bounding_rect(&self) -> Rect {
            Rect::new(10.0, 10.0)
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }

        fn direct_text(&self) -> String {
            String::new()
        }

        fn attribute(&self, _name: &str) -> Option<String> {
            None
        }
    }

    struct LabelAnnotator;

    impl ComponentAnnotator<Labeled> for LabelAnnotator {
        fn component_name(&self, element: &Labeled) -> Option<String> {
            element.label.map(String::from)
        }
    }

    fn el(tag: &'static str, label: Option<&'static str>, children: Vec<Labeled>) -> Labeled {
        Labeled {
            tag,
            label,
            children,
        }
    }

    #[test]
    fn names_attach_through_matching_branches() {
        let source = el(
            "div",
            Some("App"),
            vec![el("nav", Some("NavBar"), vec![]), el("p", None, vec![])],
        );

        let mut tree = Node::new("div");
        tree.children = vec![Node::new("nav"), Node::new("p")];

        annotate_components(&mut tree, &source, &LabelAnnotator);

        assert_eq!(tree.react_component.as_deref(), Some("App"));
        assert_eq!(tree.children[0].react_component.as_deref(), Some("NavBar"));
        assert!(tree.children[1].react_component.is_none());
    }

    #[test]
    fn filtered_source_children_are_skipped_over() {
        // Source has a script child that extraction dropped; alignment must
        // skip it and still reach the following element.
        let source = el(
            "div",
            None,
            vec![
                el("script", Some("ignored"), vec![]),
                el("main", Some("Page"), vec![]),
            ],
        );

        let mut tree = Node::new("div");
        tree.children = vec![Node::new("main")];

        annotate_components(&mut tree, &source, &LabelAnnotator);
        assert_eq!(tree.children[0].react_component.as_deref(), Some("Page"));
    }

    #[test]
    fn branch_stops_on_structural_mismatch() {
        let source = el(
            "div",
            None,
            vec![el(
                "section",
                None,
                vec![el("h1", Some("Title"), vec![])],
            )],
        );

        // Extracted tree disagrees below the section: no alignment, no
        // annotation, no error.
        let mut tree = Node::new("div");
        let mut section = Node::new("section");
        section.children = vec![Node::new("p")];
        tree.children = vec![section];

        annotate_components(&mut tree, &source, &LabelAnnotator);
        assert!(tree.children[0].children[0].react_component.is_none());
    }
}
