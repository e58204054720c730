//! Serializable output documents.
//!
//! Two payload shapes: a whole-page capture split into semantic sections,
//! and a single-element capture. Both carry the same page metadata so the
//! consumer can tell captures apart after the fact.

use serde::Serialize;

use crate::tree::{Node, Section};

/// Metadata describing where and when a capture was taken.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageMeta {
    pub url: String,
    pub title: String,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
}

/// A full-page capture: the visible tree split into semantic sections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPage {
    pub url: String,
    pub title: String,
    pub timestamp: u64,
    pub section_count: usize,
    pub sections: Vec<Section>,
}

impl ExtractedPage {
    pub fn new(meta: PageMeta, sections: Vec<Section>) -> Self {
        ExtractedPage {
            url: meta.url,
            title: meta.title,
            timestamp: meta.timestamp,
            section_count: sections.len(),
            sections,
        }
    }
}

/// A single-element capture, without sectioning.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedElement {
    pub url: String,
    pub title: String,
    pub timestamp: u64,
    pub mode: &'static str,
    pub tree: Node,
}

impl ExtractedElement {
    pub fn new(meta: PageMeta, tree: Node) -> Self {
        ExtractedElement {
            url: meta.url,
            title: meta.title,
            timestamp: meta.timestamp,
            mode: "element-select",
            tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_counts_sections() {
        let meta = PageMeta {
            url: "https://example.com".into(),
            title: "Example".into(),
            timestamp: 1,
        };
        let sections = vec![
            Section::new("header", Node::new("header")),
            Section::new("content", Node::new("div")),
        ];
        let page = ExtractedPage::new(meta, sections);
        assert_eq!(page.section_count, 2);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["sectionCount"], 2);
        assert_eq!(json["sections"][0]["section"], "header");
    }

    #[test]
    fn element_capture_is_tagged() {
        let doc = ExtractedElement::new(PageMeta::default(), Node::new("button"));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["mode"], "element-select");
        assert_eq!(json["tree"]["tag"], "button");
    }
}
