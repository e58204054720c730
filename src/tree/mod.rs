//! The intermediate node tree and its transformation passes.
//!
//! [`extract`] walks a styled element tree into [`Node`]s, [`dedup`]
//! collapses consecutive structurally identical siblings, [`section`]
//! partitions the result by landmark, and [`annotate`] attaches optional
//! best-effort metadata from external collaborators.

pub mod annotate;
pub mod dedup;
pub mod extract;
pub mod section;
pub mod visibility;

pub use annotate::{ComponentAnnotator, PseudoAnnotator};
pub use dedup::deduplicate;
pub use extract::ExtractOptions;
pub use section::{Section, section_tree};

use serde::Serialize;

use crate::style::StyleMap;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single extracted element.
///
/// Owned exclusively by its parent's `children` vector. Created by the
/// extractor, rewritten by the deduplicator, wrapped by the sectioner, and
/// immutable afterwards. Optional fields are omitted from JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub tag: String,

    /// Canonicalized design-relevant style overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<StyleMap>,

    /// Suggested utility-class tokens derived from `css`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,

    /// Raw ARIA role attribute, captured for semantic sectioning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Direct (non-descendant) text, truncated at 500 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Opaque capture of an SVG subtree; such nodes never have children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_info: Option<SvgInfo>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Present when this node stands in for a collapsed run of siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeated: Option<Repeated>,

    /// True for subtrees cut off by the depth limit.
    #[serde(skip_serializing_if = "is_false")]
    pub truncated: bool,

    /// Depth at which truncation happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,

    /// Human-readable component name from an optional annotator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub react_component: Option<String>,

    /// Design-relevant `::before`/`::after` styling from an optional
    /// annotator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo_elements: Option<PseudoElements>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            css: None,
            classes: None,
            role: None,
            text_content: None,
            src: None,
            alt: None,
            href: None,
            input_type: None,
            placeholder: None,
            svg_info: None,
            children: Vec::new(),
            repeated: None,
            truncated: false,
            depth: None,
            react_component: None,
            pseudo_elements: None,
        }
    }
}

/// Opaque description of an SVG element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvgInfo {
    pub width: String,
    pub height: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Generated stand-in markup sized like the original.
    pub placeholder: String,
}

/// Marker for a collapsed run of structurally identical siblings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repeated {
    pub count: usize,
    pub note: String,
}

/// Generated-content styling for one pseudo-element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PseudoStyle {
    pub content: String,
    pub css: StyleMap,
}

/// `::before`/`::after` styling attached by the pseudo annotator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PseudoElements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<PseudoStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<PseudoStyle>,
}
