//! Semantic sectioning by landmark tag or ARIA role.
//!
//! Partitions the top-level children of the extracted tree into named
//! sections. Landmark children become their own section; runs of
//! non-landmark children are wrapped in synthetic `"content"` containers.

use serde::Serialize;

use super::Node;

const LANDMARK_TAGS: &[&str] = &[
    "header", "nav", "main", "section", "aside", "footer", "article",
];

/// Map an ARIA landmark role to its section name.
fn role_to_section(role: &str) -> Option<&'static str> {
    match role {
        "banner" => Some("header"),
        "navigation" => Some("nav"),
        "main" => Some("main"),
        "contentinfo" => Some("footer"),
        "complementary" => Some("aside"),
        "article" => Some("article"),
        "region" => Some("section"),
        _ => None,
    }
}

/// A node tagged with a section label. `"content"` sections are synthetic
/// `div` containers wrapping runs of non-landmark siblings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub section: String,
    #[serde(flatten)]
    pub node: Node,
}

impl Section {
    pub fn new(section: impl Into<String>, node: Node) -> Self {
        Section {
            section: section.into(),
            node,
        }
    }
}

fn landmark_name(node: &Node) -> Option<String> {
    if LANDMARK_TAGS.contains(&node.tag.as_str()) {
        return Some(node.tag.clone());
    }
    node.role
        .as_deref()
        .and_then(role_to_section)
        .map(String::from)
}

fn content_section(children: Vec<Node>) -> Section {
    let mut container = Node::new("div");
    container.children = children;
    Section::new("content", container)
}

/// Partition a tree into ordered sections.
///
/// A landmark root becomes a single section wrapping the whole tree. When no
/// landmark exists anywhere among the root's children, the whole tree comes
/// back as one `"content"` section. Otherwise the root's children are
/// scanned in order, flushing pending non-landmark runs whenever a landmark
/// is hit.
pub fn section_tree(root: Node) -> Vec<Section> {
    if let Some(name) = landmark_name(&root) {
        return vec![Section::new(name, root)];
    }

    if root.children.is_empty() || !root.children.iter().any(|c| landmark_name(c).is_some()) {
        return vec![Section::new("content", root)];
    }

    let mut sections = Vec::new();
    let mut pending: Vec<Node> = Vec::new();

    for child in root.children {
        match landmark_name(&child) {
            Some(name) => {
                if !pending.is_empty() {
                    sections.push(content_section(std::mem::take(&mut pending)));
                }
                sections.push(Section::new(name, child));
            }
            None => pending.push(child),
        }
    }

    if !pending.is_empty() {
        sections.push(content_section(pending));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(tag: &str) -> Node {
        Node::new(tag)
    }

    fn with_children(tag: &str, children: Vec<Node>) -> Node {
        let mut n = Node::new(tag);
        n.children = children;
        n
    }

    #[test]
    fn landmarks_and_content_runs_alternate() {
        let tree = with_children(
            "div",
            vec![node("header"), node("div"), node("nav"), node("div")],
        );
        let sections = section_tree(tree);

        let labels: Vec<_> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(labels, ["header", "content", "nav", "content"]);
        assert_eq!(sections[1].node.tag, "div");
        assert_eq!(sections[1].node.children.len(), 1);
    }

    #[test]
    fn consecutive_non_landmarks_group_into_one_content_section() {
        let tree = with_children(
            "div",
            vec![node("div"), node("p"), node("span"), node("footer")],
        );
        let sections = section_tree(tree);

        let labels: Vec<_> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(labels, ["content", "footer"]);
        assert_eq!(sections[0].node.children.len(), 3);
    }

    #[test]
    fn landmark_root_is_a_single_section() {
        let tree = with_children("main", vec![node("div"), node("p")]);
        let sections = section_tree(tree);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section, "main");
        // Root is wrapped unchanged, children intact.
        assert_eq!(sections[0].node.children.len(), 2);
    }

    #[test]
    fn childless_root_wraps_as_content() {
        let sections = section_tree(node("div"));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section, "content");
        assert_eq!(sections[0].node.tag, "div");
    }

    #[test]
    fn no_landmarks_returns_whole_tree_as_content() {
        let tree = with_children("div", vec![node("p"), node("span")]);
        let sections = section_tree(tree.clone());

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section, "content");
        assert_eq!(sections[0].node, tree);
    }

    #[test]
    fn aria_roles_map_to_landmark_sections() {
        let mut banner = node("div");
        banner.role = Some("banner".to_string());
        let mut region = node("div");
        region.role = Some("region".to_string());
        let mut unknown = node("div");
        unknown.role = Some("tooltip".to_string());

        let tree = with_children("div", vec![banner, unknown, region]);
        let sections = section_tree(tree);

        let labels: Vec<_> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(labels, ["header", "content", "section"]);
    }

    #[test]
    fn section_serializes_flattened() {
        let mut root = node("header");
        root.text_content = Some("hi".to_string());
        let sections = section_tree(root);
        let json = serde_json::to_value(&sections[0]).unwrap();

        assert_eq!(json["section"], "header");
        assert_eq!(json["tag"], "header");
        assert_eq!(json["textContent"], "hi");
    }
}
