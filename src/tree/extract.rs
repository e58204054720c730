//! The tree extractor.
//!
//! Walks a styled element tree in document order, applying the visibility
//! policy, the per-element style diff + canonicalization, and tag-specific
//! attribute capture, producing the intermediate [`Node`] tree.

use super::visibility::is_visible;
use super::{Node, SvgInfo};
use crate::element::Element;
use crate::style::{DefaultsCache, canonicalize, diff_styles};
use crate::tailwind::map_to_classes;

/// Direct text longer than this is cut off with an ellipsis marker; runaway
/// text blobs are rarely UI copy.
const MAX_TEXT_LEN: usize = 500;

/// Knobs for one extraction walk.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Truncate subtrees deeper than this into `{tag, truncated, depth}`
    /// leaves. `None` walks the whole tree.
    pub max_depth: Option<u32>,
    /// Attach style diffs and utility-class suggestions.
    pub extract_css: bool,
    /// Replace image sources with synthetic `placeholder://WxH` tokens.
    pub use_placeholders: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            extract_css: true,
            use_placeholders: false,
        }
    }
}

/// Extract the node tree rooted at `root`.
///
/// Returns `None` when the root itself fails the visibility check. Children
/// that fail it are omitted along with their subtrees.
pub fn extract_tree<E: Element>(
    root: &E,
    options: &ExtractOptions,
    defaults: &mut DefaultsCache<'_>,
) -> Option<Node> {
    extract_node(root, options, defaults, 0)
}

fn extract_node<E: Element>(
    element: &E,
    options: &ExtractOptions,
    defaults: &mut DefaultsCache<'_>,
    depth: u32,
) -> Option<Node> {
    if !is_visible(element) {
        return None;
    }

    let tag = element.tag_name().to_string();

    if let Some(max_depth) = options.max_depth
        && depth > max_depth
    {
        let mut node = Node::new(tag);
        node.truncated = true;
        node.depth = Some(depth);
        return Some(node);
    }

    let mut node = Node::new(tag.clone());

    if options.extract_css {
        let css = canonicalize(diff_styles(element, defaults.defaults_for(&tag)));
        if !css.is_empty() {
            let classes = map_to_classes(&css);
            if !classes.is_empty() {
                node.classes = Some(classes);
            }
            node.css = Some(css);
        }
    }

    if let Some(role) = element.attribute("role")
        && !role.is_empty()
    {
        node.role = Some(role);
    }

    if let Some(text) = direct_text(element) {
        node.text_content = Some(text);
    }

    match tag.as_str() {
        "img" => {
            if let Some(src) = element.attribute("src")
                && !src.is_empty()
            {
                node.src = Some(if options.use_placeholders {
                    let (w, h) = image_dimensions(element);
                    format!("placeholder://{w}x{h}")
                } else {
                    src
                });
            }
            if let Some(alt) = element.attribute("alt")
                && !alt.is_empty()
            {
                node.alt = Some(alt);
            }
        }
        "a" => {
            if let Some(href) = element.attribute("href")
                && !href.is_empty()
            {
                node.href = Some(href);
            }
        }
        "input" | "textarea" | "select" => {
            if let Some(input_type) = element.attribute("type")
                && !input_type.is_empty()
            {
                node.input_type = Some(input_type);
            }
            if let Some(placeholder) = element.attribute("placeholder")
                && !placeholder.is_empty()
            {
                node.placeholder = Some(placeholder);
            }
        }
        // SVG internals are not design-semantically meaningful; capture the
        // element as one opaque node and do not recurse.
        "svg" => {
            node.svg_info = Some(svg_info(element));
            return Some(node);
        }
        _ => {}
    }

    for child in element.children() {
        if let Some(child_node) = extract_node(&child, options, defaults, depth + 1) {
            node.children.push(child_node);
        }
    }

    Some(node)
}

fn direct_text<E: Element>(element: &E) -> Option<String> {
    let text = element.direct_text();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.chars().count() > MAX_TEXT_LEN {
        let truncated: String = text.chars().take(MAX_TEXT_LEN).collect();
        return Some(format!("{truncated}..."));
    }
    Some(text.to_string())
}

fn image_dimensions<E: Element>(element: &E) -> (u32, u32) {
    let rect = element.bounding_rect();
    let from_attr = |name: &str| {
        element
            .attribute(name)
            .and_then(|v| v.trim().parse::<u32>().ok())
    };
    let width = from_attr("width").unwrap_or_else(|| rect.width.round() as u32);
    let height = from_attr("height").unwrap_or_else(|| rect.height.round() as u32);
    (width, height)
}

fn svg_info<E: Element>(element: &E) -> SvgInfo {
    let rect = element.bounding_rect();
    let width = element
        .attribute("width")
        .filter(|w| !w.is_empty())
        .unwrap_or_else(|| format_dimension(rect.width));
    let height = element
        .attribute("height")
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| format_dimension(rect.height));

    let fill = Some(element.style("fill"))
        .filter(|f| !f.is_empty() && f != "none" && f != "rgb(0, 0, 0)");
    let stroke = Some(element.style("stroke")).filter(|s| !s.is_empty() && s != "none");

    let placeholder = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\
         <rect width=\"100%\" height=\"100%\" fill=\"currentColor\" opacity=\"0.2\"/></svg>"
    );

    SvgInfo {
        width,
        height,
        fill,
        stroke,
        placeholder,
    }
}

/// Render a pixel dimension the way engines report it: integral values
/// without a fraction.
fn format_dimension(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
