//! The visibility policy.
//!
//! Invisible elements are omitted from extraction together with their entire
//! subtree, so this check gates every step of the tree walk.

use crate::element::Element;

/// Tags that never render anything worth describing.
const SKIP_TAGS: &[&str] = &[
    "script", "style", "link", "meta", "head", "noscript", "template", "slot", "br", "wbr",
];

pub fn is_skipped_tag(tag: &str) -> bool {
    SKIP_TAGS.contains(&tag)
}

/// Whether an element renders at all.
///
/// An element is invisible when it is a non-rendering tag, `display: none`,
/// `visibility: hidden`, fully transparent, `aria-hidden`, or occupies zero
/// area while having no way to show children (overflow clipped or childless).
pub fn is_visible<E: Element>(element: &E) -> bool {
    if is_skipped_tag(element.tag_name()) {
        return false;
    }

    if element.style("display") == "none" {
        return false;
    }
    if element.style("visibility") == "hidden" {
        return false;
    }
    if element.style("opacity") == "0" {
        return false;
    }

    let rect = element.bounding_rect();
    if rect.is_empty() {
        // Zero-size elements can still reveal children through visible
        // overflow.
        if element.style("overflow") != "visible" {
            return false;
        }
        if element.children().is_empty() {
            return false;
        }
    }

    if element.attribute("aria-hidden").as_deref() == Some("true") {
        return false;
    }

    true
}
