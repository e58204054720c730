//! Static HTML element source.
//!
//! An offline implementation of [`Element`] and [`DefaultsProvider`] over
//! html5ever-parsed HTML, used by the CLI, the test suite, and any headless
//! caller that has markup but no rendering engine. Resolved style is
//! approximated as the built-in user-agent default for the tag overridden by
//! the element's inline `style` attribute: no cascade, no inheritance, no
//! layout. Geometry is synthesized from inline pixel width/height when
//! present, else a nominal non-zero box.

mod sink;
mod style_attr;
mod ua;

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, parse_document};

use crate::element::{DefaultsProvider, Element, Rect};
use crate::style::StyleMap;
use sink::DomSink;

/// Nominal box for elements without inline pixel dimensions. Non-zero so
/// the zero-size visibility rule only fires when markup says so.
const NOMINAL_WIDTH: f32 = 100.0;
const NOMINAL_HEIGHT: f32 = 20.0;

pub(crate) enum NodeData {
    Document,
    Element {
        name: QualName,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Comment,
    Doctype,
}

pub(crate) struct DomNode {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
}

/// A parsed HTML document.
pub struct StaticDom {
    nodes: Vec<DomNode>,
    /// Parsed inline `style` attribute per node, parallel to `nodes`.
    inline_styles: Vec<StyleMap>,
}

impl StaticDom {
    /// Parse an HTML document. Parsing is lenient; malformed markup yields
    /// whatever tree the HTML parser recovers.
    pub fn parse(html: &str) -> Self {
        let sink = parse_document(DomSink::new(), ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes());
        let nodes = sink.into_nodes();

        let inline_styles = nodes
            .iter()
            .map(|node| match &node.data {
                NodeData::Element { attrs, .. } => attrs
                    .iter()
                    .find(|(name, _)| name == "style")
                    .map(|(_, value)| style_attr::parse_style_attribute(value))
                    .unwrap_or_default(),
                _ => StyleMap::default(),
            })
            .collect();

        Self {
            nodes,
            inline_styles,
        }
    }

    /// The `<body>` element, or the first element at all for fragments.
    pub fn body(&self) -> Option<StaticElement<'_>> {
        self.find(|tag, _| tag == "body")
            .or_else(|| self.find(|_, _| true))
    }

    /// Text of the document's `<title>` element.
    pub fn title(&self) -> Option<String> {
        let title = self.find(|tag, _| tag == "title")?;
        let text = title.all_text();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// First element with the given `id` attribute.
    pub fn element_by_id(&self, id: &str) -> Option<StaticElement<'_>> {
        self.find(|_, attrs| {
            attrs
                .iter()
                .any(|(name, value)| name == "id" && value == id)
        })
    }

    /// First element with the given tag name.
    pub fn first_element(&self, tag: &str) -> Option<StaticElement<'_>> {
        self.find(|name, _| name == tag)
    }

    fn find(
        &self,
        pred: impl Fn(&str, &[(String, String)]) -> bool,
    ) -> Option<StaticElement<'_>> {
        // Document-order DFS from the document node.
        let mut stack = vec![0usize];
        while let Some(id) = stack.pop() {
            if let NodeData::Element { name, attrs } = &self.nodes[id].data
                && pred(name.local.as_ref(), attrs)
            {
                return Some(StaticElement { dom: self, id });
            }
            for &child in self.nodes[id].children.iter().rev() {
                stack.push(child);
            }
        }
        None
    }
}

/// Cheap handle to one element of a [`StaticDom`].
#[derive(Clone, Copy)]
pub struct StaticElement<'a> {
    dom: &'a StaticDom,
    id: usize,
}

impl<'a> StaticElement<'a> {
    fn node(&self) -> &'a DomNode {
        &self.dom.nodes[self.id]
    }

    fn all_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            match &self.dom.nodes[id].data {
                NodeData::Text(text) => out.push_str(text),
                _ => {
                    for &child in self.dom.nodes[id].children.iter().rev() {
                        stack.push(child);
                    }
                }
            }
        }
        out
    }

    fn pixel_style(&self, property: &str) -> Option<f32> {
        let value = self.style(property);
        value.strip_suffix("px")?.trim().parse().ok()
    }
}

impl Element for StaticElement<'_> {
    fn tag_name(&self) -> &str {
        match &self.node().data {
            NodeData::Element { name, .. } => name.local.as_ref(),
            _ => "",
        }
    }

    fn style(&self, property: &str) -> String {
        if let Some(value) = self.dom.inline_styles[self.id].get(property) {
            return value.to_string();
        }
        ua::ua_default(self.tag_name(), property).to_string()
    }

    fn bounding_rect(&self) -> Rect {
        if self.style("display") == "none" {
            return Rect::default();
        }
        let from_attr = |name: &str| {
            self.attribute(name)
                .and_then(|v| v.trim().parse::<f32>().ok())
        };
        let width = self
            .pixel_style("width")
            .or_else(|| from_attr("width"))
            .unwrap_or(NOMINAL_WIDTH);
        let height = self
            .pixel_style("height")
            .or_else(|| from_attr("height"))
            .unwrap_or(NOMINAL_HEIGHT);
        Rect::new(width, height)
    }

    fn children(&self) -> Vec<Self> {
        self.node()
            .children
            .iter()
            .filter(|&&child| matches!(self.dom.nodes[child].data, NodeData::Element { .. }))
            .map(|&child| StaticElement {
                dom: self.dom,
                id: child,
            })
            .collect()
    }

    fn direct_text(&self) -> String {
        let mut out = String::new();
        for &child in &self.node().children {
            if let NodeData::Text(text) = &self.dom.nodes[child].data {
                out.push_str(text);
            }
        }
        out
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match &self.node().data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(attr, _)| attr == name)
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }
}

/// Defaults provider answering from the built-in user-agent table. Always
/// ready; `Default`-constructible.
#[derive(Debug, Default)]
pub struct StaticDefaults;

impl DefaultsProvider for StaticDefaults {
    fn is_ready(&self) -> bool {
        true
    }

    fn computed_default(&self, tag: &str, property: &str) -> String {
        ua::ua_default(tag, property).to_string()
    }
}
