//! The style diff engine.
//!
//! Subtracts baseline, trivial, and meaningless values from an element's
//! resolved style, leaving only authored design overrides.

use super::StyleMap;
use super::properties::{
    DESIGN_PROPERTIES, auto_is_meaningless, normal_is_meaningless, trivial_values,
};
use crate::element::Element;

/// Compute the design-relevant style overrides of one element.
///
/// Walks the curated property list in order; output key order is the list
/// order. A property survives only if its value is non-empty, differs from
/// the tag baseline, is not in the property's trivial-value set, and is not
/// a meaningless `auto`/`normal`.
pub fn diff_styles<E: Element>(element: &E, baseline: &StyleMap) -> StyleMap {
    let mut result = StyleMap::new();

    for prop in DESIGN_PROPERTIES {
        let value = element.style(prop);
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        if let Some(default) = baseline.get(prop)
            && value == default
        {
            continue;
        }

        if trivial_values(prop).contains(&value) {
            continue;
        }

        if value == "auto" && auto_is_meaningless(prop) {
            continue;
        }

        if value == "normal" && normal_is_meaningless(prop) {
            continue;
        }

        result.insert(*prop, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Rect;

    /// Minimal element backed by a fixed style map.
    struct Styled(StyleMap);

    impl Element for Styled {
        fn tag_name(&self) -> &str {
            "div"
        }

        fn style(&self, property: &str) -> String {
            self.0.get(property).unwrap_or_default().to_string()
        }

        fn bounding_rect(&self) -> Rect {
            Rect::new(100.0, 20.0)
        }

        fn children(&self) -> Vec<Self> {
            Vec::new()
        }

        fn direct_text(&self) -> String {
            String::new()
        }

        fn attribute(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn baseline_values_are_suppressed() {
        let element = Styled([("display", "block"), ("color", "rgb(255, 0, 0)")].into_iter().collect());
        let baseline: StyleMap = [("display", "block"), ("color", "rgb(0, 0, 0)")]
            .into_iter()
            .collect();

        let diff = diff_styles(&element, &baseline);
        assert_eq!(diff.get("display"), None);
        assert_eq!(diff.get("color"), Some("rgb(255, 0, 0)"));
    }

    #[test]
    fn trivial_and_meaningless_values_are_suppressed() {
        let element = Styled(
            [
                ("background-color", "rgba(0, 0, 0, 0)"),
                ("box-shadow", "none"),
                ("z-index", "auto"),
                ("line-height", "normal"),
                ("cursor", "pointer"),
            ]
            .into_iter()
            .collect(),
        );

        let diff = diff_styles(&element, &StyleMap::new());
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.get("cursor"), Some("pointer"));
    }

    #[test]
    fn empty_baseline_keeps_everything_authored() {
        let element = Styled([("display", "flex"), ("gap", "8px")].into_iter().collect());
        let diff = diff_styles(&element, &StyleMap::new());
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn output_follows_curated_list_order() {
        let element = Styled(
            [
                ("color", "rgb(1, 2, 3)"),
                ("display", "flex"),
                ("padding-top", "4px"),
            ]
            .into_iter()
            .collect(),
        );

        let diff = diff_styles(&element, &StyleMap::new());
        let keys: Vec<_> = diff.keys().collect();
        assert_eq!(keys, ["display", "padding-top", "color"]);
    }
}
