//! # tailprint
//!
//! Extracts a design-focused description of a styled HTML tree: which
//! elements are visible, how their styling differs from browser defaults,
//! and which Tailwind-style utility classes reproduce that styling.
//!
//! ## Pipeline
//!
//! - Resolve per-tag baseline styles through a [`DefaultsProvider`]
//! - Diff each element's computed style against its baseline
//! - Canonicalize the diff (merge directional longhands, prune defaults)
//! - Walk the tree into [`Node`]s, filtering invisible elements
//! - Collapse consecutive structurally identical siblings
//! - Partition the result into semantic sections by landmark
//! - Suggest utility classes for every style diff
//!
//! ## Quick Start
//!
//! ```
//! use tailprint::{ExtractOptions, PageMeta, Session, StaticDefaults, StaticDom};
//!
//! let dom = StaticDom::parse(
//!     "<title>Demo</title><body><main><p style=\"color: rgb(220, 38, 38)\">Hi</p></main></body>",
//! );
//! let provider = StaticDefaults;
//! let mut session = Session::new(&provider, ExtractOptions::default());
//!
//! let meta = PageMeta {
//!     url: "https://example.com".into(),
//!     title: dom.title().unwrap_or_default(),
//!     timestamp: 0,
//! };
//! let page = session.extract_page(&dom.body().unwrap(), meta).unwrap();
//! assert_eq!(page.sections[0].section, "main");
//! session.close();
//! ```
//!
//! The pipeline stages are public, so callers with their own element source
//! (a headless browser, a devtools protocol client) implement [`Element`]
//! and [`DefaultsProvider`] and reuse everything above the source layer.

pub mod element;
pub mod error;
pub mod html;
pub mod output;
pub mod style;
pub mod tailwind;
pub mod tree;

pub use element::{DefaultsProvider, Element, Rect};
pub use error::{Error, Result};
pub use html::{StaticDefaults, StaticDom, StaticElement};
pub use output::{ExtractedElement, ExtractedPage, PageMeta};
pub use style::{DefaultsCache, StyleMap, canonicalize, diff_styles};
pub use tailwind::map_to_classes;
pub use tree::{
    ComponentAnnotator, ExtractOptions, Node, PseudoAnnotator, PseudoElements, PseudoStyle,
    Section, deduplicate, extract::extract_tree, section_tree,
};

use tree::annotate::{annotate_components, annotate_pseudo_elements};

/// Optional metadata sources attached to an extraction.
///
/// Both hooks are best-effort: a hook that cannot answer for an element just
/// leaves the corresponding field off the node.
pub struct Annotators<'a, E: Element> {
    pub components: Option<&'a dyn ComponentAnnotator<E>>,
    pub pseudo: Option<&'a dyn PseudoAnnotator<E>>,
}

impl<E: Element> Default for Annotators<'_, E> {
    fn default() -> Self {
        Self {
            components: None,
            pseudo: None,
        }
    }
}

/// One extraction session over a single page.
///
/// Holds the baseline cache (so repeated captures of the same page reuse
/// per-tag defaults) and the extraction options. Call [`Session::close`]
/// when done; it releases the defaults provider.
pub struct Session<'a> {
    defaults: DefaultsCache<'a>,
    options: ExtractOptions,
}

impl<'a> Session<'a> {
    pub fn new(provider: &'a dyn DefaultsProvider, options: ExtractOptions) -> Self {
        Self {
            defaults: DefaultsCache::new(provider),
            options,
        }
    }

    /// Capture a full page: extract, deduplicate, and section the tree.
    pub fn extract_page<E: Element>(
        &mut self,
        root: &E,
        meta: PageMeta,
    ) -> Result<ExtractedPage> {
        self.extract_page_annotated(root, meta, &Annotators::default())
    }

    /// [`Session::extract_page`] with annotation hooks.
    pub fn extract_page_annotated<E: Element>(
        &mut self,
        root: &E,
        meta: PageMeta,
        annotators: &Annotators<'_, E>,
    ) -> Result<ExtractedPage> {
        let tree = self.extract_annotated(root, annotators)?;
        Ok(ExtractedPage::new(meta, section_tree(tree)))
    }

    /// Capture a single element subtree, without sectioning.
    pub fn extract_element<E: Element>(
        &mut self,
        root: &E,
        meta: PageMeta,
    ) -> Result<ExtractedElement> {
        self.extract_element_annotated(root, meta, &Annotators::default())
    }

    /// [`Session::extract_element`] with annotation hooks.
    pub fn extract_element_annotated<E: Element>(
        &mut self,
        root: &E,
        meta: PageMeta,
        annotators: &Annotators<'_, E>,
    ) -> Result<ExtractedElement> {
        let tree = self.extract_annotated(root, annotators)?;
        Ok(ExtractedElement::new(meta, tree))
    }

    fn extract_annotated<E: Element>(
        &mut self,
        root: &E,
        annotators: &Annotators<'_, E>,
    ) -> Result<Node> {
        let mut tree =
            extract_tree(root, &self.options, &mut self.defaults).ok_or(Error::RootNotVisible)?;

        // Annotation aligns against the live tree, so it has to run before
        // deduplication rewrites the children.
        if let Some(components) = annotators.components {
            annotate_components(&mut tree, root, components);
        }
        if let Some(pseudo) = annotators.pseudo {
            annotate_pseudo_elements(&mut tree, root, pseudo);
        }

        Ok(deduplicate(tree))
    }

    /// Release the defaults provider and drop cached baselines.
    pub fn close(&mut self) {
        self.defaults.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoDefaults;

    impl DefaultsProvider for NoDefaults {
        fn is_ready(&self) -> bool {
            false
        }

        fn computed_default(&self, _tag: &str, _property: &str) -> String {
            String::new()
        }
    }

    #[test]
    fn hidden_root_is_an_error() {
        let dom = StaticDom::parse("<body><div style=\"display: none\" id=\"x\"></div></body>");
        let provider = NoDefaults;
        let mut session = Session::new(&provider, ExtractOptions::default());

        let root = dom.element_by_id("x").unwrap();
        let err = session.extract_page(&root, PageMeta::default()).unwrap_err();
        assert!(matches!(err, Error::RootNotVisible));
    }

    #[test]
    fn page_and_element_modes_share_the_tree() {
        let dom = StaticDom::parse("<body><main><p>hello</p></main></body>");
        let provider = StaticDefaults;
        let mut session = Session::new(&provider, ExtractOptions::default());

        let body = dom.body().unwrap();
        let page = session.extract_page(&body, PageMeta::default()).unwrap();
        assert_eq!(page.section_count, 1);
        assert_eq!(page.sections[0].section, "main");

        let element = session.extract_element(&body, PageMeta::default()).unwrap();
        assert_eq!(element.mode, "element-select");
        assert_eq!(element.tree.tag, "body");
    }
}
