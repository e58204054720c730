//! Translation of canonical style diffs into Tailwind utility classes.
//!
//! Advisory, best-effort mapping: every recognized property either hits a
//! scale table or degrades to an arbitrary-value token (`p-[13px]`,
//! `text-[#123456]`), so the mapper never fails for any input string.
//! Token order is deterministic, following a fixed property-category order.

pub mod scales;

use std::collections::HashSet;

use scales::{
    font_size_token, font_weight_token, height_token, line_height_token, max_width_token,
    opacity_token, palette_color, radius_token, spacing_token, width_token,
};

use crate::style::StyleMap;

/// Map a canonical style diff to an ordered list of utility-class tokens.
pub fn map_to_classes(css: &StyleMap) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();

    // Spacing. Shorthands split into directional tokens, then the optimizer
    // re-merges uniform or symmetric groups.
    if let Some(padding) = css.get("padding") {
        push_shorthand_spacing(&mut classes, "p", padding);
    } else {
        push_spacing(&mut classes, "pt", css.get("padding-top"));
        push_spacing(&mut classes, "pr", css.get("padding-right"));
        push_spacing(&mut classes, "pb", css.get("padding-bottom"));
        push_spacing(&mut classes, "pl", css.get("padding-left"));
    }
    if let Some(margin) = css.get("margin") {
        push_shorthand_spacing(&mut classes, "m", margin);
    } else {
        push_spacing(&mut classes, "mt", css.get("margin-top"));
        push_spacing(&mut classes, "mr", css.get("margin-right"));
        push_spacing(&mut classes, "mb", css.get("margin-bottom"));
        push_spacing(&mut classes, "ml", css.get("margin-left"));
    }
    optimize_spacing(&mut classes);

    // Display and position.
    if let Some(display) = css.get("display")
        && let Some(token) = display_token(display)
    {
        classes.push(token.to_string());
    }
    if let Some(position) = css.get("position") {
        classes.push(position.to_string());
    }
    push_spacing(&mut classes, "top", css.get("top"));
    push_spacing(&mut classes, "right", css.get("right"));
    push_spacing(&mut classes, "bottom", css.get("bottom"));
    push_spacing(&mut classes, "left", css.get("left"));

    // Sizing.
    if let Some(width) = css.get("width") {
        match width_token(width).or_else(|| spacing_token(width)) {
            Some(token) => classes.push(format!("w-{token}")),
            None => classes.push(format!("w-[{width}]")),
        }
    }
    if let Some(height) = css.get("height") {
        match height_token(height).or_else(|| spacing_token(height)) {
            Some(token) => classes.push(format!("h-{token}")),
            None => classes.push(format!("h-[{height}]")),
        }
    }
    if let Some(value) = css.get("min-width") {
        match spacing_token(value) {
            Some(token) => classes.push(format!("min-w-{token}")),
            None => classes.push(format!("min-w-[{value}]")),
        }
    }
    if let Some(value) = css.get("min-height") {
        match spacing_token(value) {
            Some(token) => classes.push(format!("min-h-{token}")),
            None => classes.push(format!("min-h-[{value}]")),
        }
    }
    if let Some(value) = css.get("max-width") {
        match max_width_token(value).or_else(|| spacing_token(value)) {
            Some(token) => classes.push(format!("max-w-{token}")),
            None => classes.push(format!("max-w-[{value}]")),
        }
    }
    if let Some(value) = css.get("max-height") {
        match spacing_token(value) {
            Some(token) => classes.push(format!("max-h-{token}")),
            None => classes.push(format!("max-h-[{value}]")),
        }
    }

    // Flexbox.
    match css.get("flex-direction") {
        Some("column") => classes.push("flex-col".to_string()),
        Some("column-reverse") => classes.push("flex-col-reverse".to_string()),
        Some("row-reverse") => classes.push("flex-row-reverse".to_string()),
        _ => {}
    }
    match css.get("flex-wrap") {
        Some("wrap") => classes.push("flex-wrap".to_string()),
        Some("wrap-reverse") => classes.push("flex-wrap-reverse".to_string()),
        _ => {}
    }
    if let Some(value) = css.get("justify-content")
        && let Some(token) = justify_token(value)
    {
        classes.push(token.to_string());
    }
    if let Some(value) = css.get("align-items")
        && let Some(token) = align_items_token(value)
    {
        classes.push(token.to_string());
    }
    if let Some(value) = css.get("align-self")
        && let Some(token) = align_self_token(value)
    {
        classes.push(token.to_string());
    }
    push_spacing(&mut classes, "gap", css.get("gap"));
    push_spacing(&mut classes, "gap-y", css.get("row-gap"));
    push_spacing(&mut classes, "gap-x", css.get("column-gap"));
    match css.get("flex-grow") {
        Some("1") => classes.push("grow".to_string()),
        Some("0") => classes.push("grow-0".to_string()),
        _ => {}
    }
    if css.get("flex-shrink") == Some("0") {
        classes.push("shrink-0".to_string());
    }

    // Grid templates have no fixed scale; always arbitrary.
    if let Some(value) = css.get("grid-template-columns") {
        classes.push(format!("grid-cols-[{value}]"));
    }
    if let Some(value) = css.get("grid-template-rows") {
        classes.push(format!("grid-rows-[{value}]"));
    }

    // Typography.
    if let Some(value) = css.get("font-size") {
        match font_size_token(value) {
            Some(token) => classes.push(format!("text-{token}")),
            None => classes.push(format!("text-[{value}]")),
        }
    }
    if let Some(value) = css.get("font-weight") {
        match font_weight_token(value) {
            Some(token) => classes.push(format!("font-{token}")),
            None => classes.push(format!("font-[{value}]")),
        }
    }
    if css.get("font-style") == Some("italic") {
        classes.push("italic".to_string());
    }
    if let Some(value) = css.get("font-family")
        && let Some(token) = font_family_token(value)
    {
        classes.push(token.to_string());
    }
    if let Some(value) = css.get("line-height") {
        match line_height_token(value) {
            Some(token) => classes.push(format!("leading-{token}")),
            None => classes.push(format!("leading-[{value}]")),
        }
    }
    if let Some(value) = css.get("letter-spacing") {
        classes.push(format!("tracking-[{value}]"));
    }
    if let Some(value) = css.get("text-align")
        && matches!(value, "left" | "center" | "right" | "justify")
    {
        classes.push(format!("text-{value}"));
    }
    if let Some(value) = css.get("text-decoration") {
        if value.contains("underline") {
            classes.push("underline".to_string());
        }
        if value.contains("line-through") {
            classes.push("line-through".to_string());
        }
        if value.contains("none") {
            classes.push("no-underline".to_string());
        }
    }
    match css.get("text-transform") {
        Some("uppercase") => classes.push("uppercase".to_string()),
        Some("lowercase") => classes.push("lowercase".to_string()),
        Some("capitalize") => classes.push("capitalize".to_string()),
        _ => {}
    }
    match css.get("white-space") {
        Some("nowrap") => classes.push("whitespace-nowrap".to_string()),
        Some("pre") => classes.push("whitespace-pre".to_string()),
        Some("pre-wrap") => classes.push("whitespace-pre-wrap".to_string()),
        Some("break-spaces") => classes.push("whitespace-break-spaces".to_string()),
        _ => {}
    }

    // Color.
    if let Some(value) = css.get("color") {
        classes.push(color_class("text", value));
    }
    if let Some(value) = css.get("background-color") {
        classes.push(color_class("bg", value));
    }

    // Border.
    if let Some(border) = css.get("border") {
        push_border_shorthand(&mut classes, border);
    } else {
        push_border_side(&mut classes, "t", css);
        push_border_side(&mut classes, "r", css);
        push_border_side(&mut classes, "b", css);
        push_border_side(&mut classes, "l", css);
    }

    // Border radius.
    if let Some(value) = css.get("border-radius") {
        match radius_token(value) {
            Some("DEFAULT") => classes.push("rounded".to_string()),
            Some(token) => classes.push(format!("rounded-{token}")),
            None => classes.push(format!("rounded-[{value}]")),
        }
    } else {
        push_corner_radius(&mut classes, "rounded-tl", css.get("border-top-left-radius"));
        push_corner_radius(&mut classes, "rounded-tr", css.get("border-top-right-radius"));
        push_corner_radius(&mut classes, "rounded-bl", css.get("border-bottom-left-radius"));
        push_corner_radius(&mut classes, "rounded-br", css.get("border-bottom-right-radius"));
    }

    // Effects.
    if let Some(value) = css.get("opacity")
        && value != "1"
    {
        match opacity_token(value) {
            Some(token) => classes.push(format!("opacity-{token}")),
            None => classes.push(format!("opacity-[{value}]")),
        }
    }
    if let Some(value) = css.get("box-shadow")
        && value != "none"
    {
        classes.push(format!("shadow-[{value}]"));
    }

    // Overflow.
    if let Some(value) = css.get("overflow") {
        if value != "visible" {
            classes.push(format!("overflow-{value}"));
        }
    } else {
        if let Some(value) = css.get("overflow-x")
            && value != "visible"
        {
            classes.push(format!("overflow-x-{value}"));
        }
        if let Some(value) = css.get("overflow-y")
            && value != "visible"
        {
            classes.push(format!("overflow-y-{value}"));
        }
    }

    // Z-index.
    if let Some(value) = css.get("z-index")
        && value != "auto"
    {
        if matches!(value, "0" | "10" | "20" | "30" | "40" | "50") {
            classes.push(format!("z-{value}"));
        } else {
            classes.push(format!("z-[{value}]"));
        }
    }

    // Cursor.
    if let Some(value) = css.get("cursor")
        && value != "auto"
    {
        classes.push(format!("cursor-{value}"));
    }

    // Object fit and aspect ratio.
    if let Some(value) = css.get("object-fit") {
        classes.push(format!("object-{value}"));
    }
    if let Some(value) = css.get("aspect-ratio")
        && value != "auto"
    {
        match value {
            "1 / 1" => classes.push("aspect-square".to_string()),
            "16 / 9" => classes.push("aspect-video".to_string()),
            _ => {
                let compact: String = value.split('/').map(str::trim).collect::<Vec<_>>().join("/");
                classes.push(format!("aspect-[{compact}]"));
            }
        }
    }

    dedupe(classes)
}

/// Emit a spacing token for one directional property, with negative-value
/// and arbitrary-value handling.
fn push_spacing(classes: &mut Vec<String>, prefix: &str, value: Option<&str>) {
    let Some(value) = value else { return };
    if let Some(token) = spacing_token(value) {
        classes.push(format!("{prefix}-{token}"));
    } else if let Some(abs) = value.strip_prefix('-') {
        match spacing_token(abs) {
            Some(token) => classes.push(format!("-{prefix}-{token}")),
            None => classes.push(format!("-{prefix}-[{abs}]")),
        }
    } else {
        classes.push(format!("{prefix}-[{value}]"));
    }
}

/// Split a 1/2/4-part spacing shorthand into directional tokens.
fn push_shorthand_spacing(classes: &mut Vec<String>, prefix: &str, value: &str) {
    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [all] => push_spacing(classes, prefix, Some(all)),
        [vertical, horizontal] => {
            push_spacing(classes, &format!("{prefix}y"), Some(vertical));
            push_spacing(classes, &format!("{prefix}x"), Some(horizontal));
        }
        [top, right, bottom, left] => {
            push_spacing(classes, &format!("{prefix}t"), Some(top));
            push_spacing(classes, &format!("{prefix}r"), Some(right));
            push_spacing(classes, &format!("{prefix}b"), Some(bottom));
            push_spacing(classes, &format!("{prefix}l"), Some(left));
        }
        _ => {}
    }
}

/// Re-merge four directional spacing tokens of equal value into a combined
/// token, or into y/x tokens when top=bottom and right=left.
fn optimize_spacing(classes: &mut Vec<String>) {
    for prefix in ["p", "m"] {
        let find = |classes: &[String], side: char| {
            let lead = format!("{prefix}{side}-");
            classes.iter().position(|c| c.starts_with(&lead))
        };
        let (Some(t), Some(r), Some(b), Some(l)) = (
            find(classes, 't'),
            find(classes, 'r'),
            find(classes, 'b'),
            find(classes, 'l'),
        ) else {
            continue;
        };

        // Value part after "{prefix}{side}-".
        let tv = classes[t][prefix.len() + 2..].to_string();
        let rv = classes[r][prefix.len() + 2..].to_string();
        let bv = classes[b][prefix.len() + 2..].to_string();
        let lv = classes[l][prefix.len() + 2..].to_string();

        let mut indices = [t, r, b, l];
        indices.sort_unstable_by(|a, b| b.cmp(a));

        if tv == rv && rv == bv && bv == lv {
            for idx in indices {
                let _ = classes.remove(idx);
            }
            classes.push(format!("{prefix}-{tv}"));
        } else if tv == bv && rv == lv {
            for idx in indices {
                let _ = classes.remove(idx);
            }
            classes.push(format!("{prefix}y-{tv}"));
            classes.push(format!("{prefix}x-{rv}"));
        }
    }
}

fn push_border_shorthand(classes: &mut Vec<String>, border: &str) {
    let parts: Vec<&str> = border.split(' ').collect();
    if parts.len() < 2 {
        return;
    }

    match parts[0] {
        "1px" => classes.push("border".to_string()),
        "2px" => classes.push("border-2".to_string()),
        "4px" => classes.push("border-4".to_string()),
        "8px" => classes.push("border-8".to_string()),
        width => classes.push(format!("border-[{width}]")),
    }

    // The color may itself contain spaces (`rgb(0, 0, 0)`); everything past
    // the style keyword is the color.
    if parts.len() > 2 {
        classes.push(color_class("border", &parts[2..].join(" ")));
    }
}

fn push_border_side(classes: &mut Vec<String>, side: &str, css: &StyleMap) {
    let width = css.get(&format!("border-{}-width", side_name(side)));
    let style = css.get(&format!("border-{}-style", side_name(side)));
    let Some(width) = width else { return };
    if style == Some("none") {
        return;
    }
    if width == "1px" {
        classes.push(format!("border-{side}"));
    } else {
        classes.push(format!("border-{side}-[{width}]"));
    }
}

fn side_name(side: &str) -> &'static str {
    match side {
        "t" => "top",
        "r" => "right",
        "b" => "bottom",
        _ => "left",
    }
}

fn push_corner_radius(classes: &mut Vec<String>, prefix: &str, value: Option<&str>) {
    let Some(value) = value else { return };
    if value == "0px" {
        return;
    }
    match radius_token(value) {
        Some("DEFAULT") => classes.push(prefix.to_string()),
        Some(token) => classes.push(format!("{prefix}-{token}")),
        None => classes.push(format!("{prefix}-[{value}]")),
    }
}

/// Palette exact match first, then hex conversion, then the raw value.
fn color_class(prefix: &str, value: &str) -> String {
    let normalized = normalize_color(value);
    if let Some(name) = palette_color(&normalized) {
        return format!("{prefix}-{name}");
    }
    if let Some(hex) = rgb_to_hex(&normalized) {
        return format!("{prefix}-[{hex}]");
    }
    format!("{prefix}-[{value}]")
}

fn normalize_color(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert `rgb(r, g, b)` / `rgba(r, g, b, a)` to a `#rrggbb` literal.
fn rgb_to_hex(value: &str) -> Option<String> {
    if !value.starts_with("rgb") {
        return None;
    }
    let open = value.find('(')?;
    let close = value.rfind(')')?;
    let inner = value.get(open + 1..close)?;

    let mut channels = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    let r: u8 = channels.next()?.parse().ok()?;
    let g: u8 = channels.next()?.parse().ok()?;
    let b: u8 = channels.next()?.parse().ok()?;

    Some(format!("#{r:02x}{g:02x}{b:02x}"))
}

fn display_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "block" => "block",
        "inline-block" => "inline-block",
        "inline" => "inline",
        "flex" => "flex",
        "inline-flex" => "inline-flex",
        "grid" => "grid",
        "inline-grid" => "inline-grid",
        "none" => "hidden",
        "table" => "table",
        "table-row" => "table-row",
        "table-cell" => "table-cell",
        "contents" => "contents",
        "list-item" => "list-item",
        _ => return None,
    })
}

fn justify_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "flex-start" | "start" => "justify-start",
        "flex-end" | "end" => "justify-end",
        "center" => "justify-center",
        "space-between" => "justify-between",
        "space-around" => "justify-around",
        "space-evenly" => "justify-evenly",
        _ => return None,
    })
}

fn align_items_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "flex-start" | "start" => "items-start",
        "flex-end" | "end" => "items-end",
        "center" => "items-center",
        "baseline" => "items-baseline",
        "stretch" => "items-stretch",
        _ => return None,
    })
}

fn align_self_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "auto" => "self-auto",
        "flex-start" => "self-start",
        "flex-end" => "self-end",
        "center" => "self-center",
        "stretch" => "self-stretch",
        "baseline" => "self-baseline",
        _ => return None,
    })
}

fn font_family_token(value: &str) -> Option<&'static str> {
    let lower = value.to_lowercase();
    if lower.contains("mono") || lower.contains("courier") || lower.contains("consolas") {
        return Some("font-mono");
    }
    if lower.contains("sans-serif")
        || lower.contains("arial")
        || lower.contains("helvetica")
        || lower.contains("system-ui")
    {
        return Some("font-sans");
    }
    if lower.contains("serif") {
        return Some("font-serif");
    }
    None
}

/// Drop duplicate tokens, keeping first occurrences.
fn dedupe(classes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    classes
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(pairs: &[(&str, &str)]) -> StyleMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn spacing_scale_hit_and_arbitrary_fallback() {
        let classes = map_to_classes(&map(&[("padding-top", "8px"), ("padding-left", "13px")]));
        assert_eq!(classes, ["pt-2", "pl-[13px]"]);
    }

    #[test]
    fn negative_margins() {
        let classes = map_to_classes(&map(&[("margin-top", "-8px"), ("margin-left", "-13px")]));
        assert_eq!(classes, ["-mt-2", "-ml-[13px]"]);
    }

    #[test]
    fn uniform_shorthand_padding_stays_one_token() {
        let classes = map_to_classes(&map(&[("padding", "8px")]));
        assert_eq!(classes, ["p-2"]);
    }

    #[test]
    fn two_part_shorthand_becomes_y_x() {
        let classes = map_to_classes(&map(&[("padding", "8px 16px")]));
        assert_eq!(classes, ["py-2", "px-4"]);
    }

    #[test]
    fn four_part_shorthand_remerges_when_symmetric() {
        // t r b l with t=b and r=l re-merges into py/px.
        let classes = map_to_classes(&map(&[("padding", "8px 16px 8px 16px")]));
        assert_eq!(classes, ["py-2", "px-4"]);
    }

    #[test]
    fn four_equal_parts_remerge_to_one_token() {
        let classes = map_to_classes(&map(&[("margin", "4px 4px 4px 4px")]));
        assert_eq!(classes, ["m-1"]);
    }

    #[test]
    fn asymmetric_four_part_shorthand_keeps_sides() {
        let classes = map_to_classes(&map(&[("padding", "8px 16px 4px 16px")]));
        assert_eq!(classes, ["pt-2", "pr-4", "pb-1", "pl-4"]);
    }

    #[test]
    fn display_and_position() {
        let classes = map_to_classes(&map(&[
            ("display", "flex"),
            ("position", "absolute"),
            ("top", "0px"),
        ]));
        assert_eq!(classes, ["flex", "absolute", "top-0"]);
    }

    #[test]
    fn palette_color_exact_match() {
        let classes = map_to_classes(&map(&[("color", "rgb(255, 255, 255)")]));
        assert_eq!(classes, ["text-white"]);
    }

    #[test]
    fn unknown_rgb_color_becomes_hex() {
        let classes = map_to_classes(&map(&[("background-color", "rgb(18, 52, 86)")]));
        assert_eq!(classes, ["bg-[#123456]"]);
    }

    #[test]
    fn unparseable_color_passes_through_verbatim() {
        let classes = map_to_classes(&map(&[("color", "color-mix(in srgb, red, blue)")]));
        assert_eq!(classes, ["text-[color-mix(in srgb, red, blue)]"]);
    }

    #[test]
    fn border_shorthand_with_color() {
        let classes = map_to_classes(&map(&[("border", "1px solid rgb(229, 231, 235)")]));
        assert_eq!(classes, ["border", "border-gray-200"]);
    }

    #[test]
    fn single_side_border() {
        let classes = map_to_classes(&map(&[
            ("border-bottom-width", "1px"),
            ("border-bottom-style", "solid"),
        ]));
        assert_eq!(classes, ["border-b"]);
    }

    #[test]
    fn radius_default_token_is_bare_rounded() {
        assert_eq!(map_to_classes(&map(&[("border-radius", "4px")])), ["rounded"]);
        assert_eq!(
            map_to_classes(&map(&[("border-radius", "9999px")])),
            ["rounded-full"]
        );
        assert_eq!(
            map_to_classes(&map(&[("border-radius", "5px")])),
            ["rounded-[5px]"]
        );
    }

    #[test]
    fn typography_tokens() {
        let classes = map_to_classes(&map(&[
            ("font-size", "18px"),
            ("font-weight", "700"),
            ("font-style", "italic"),
            ("line-height", "1.5"),
            ("text-align", "center"),
            ("text-transform", "uppercase"),
        ]));
        assert_eq!(
            classes,
            ["text-lg", "font-bold", "italic", "leading-normal", "text-center", "uppercase"]
        );
    }

    #[test]
    fn z_index_scale_and_arbitrary() {
        assert_eq!(map_to_classes(&map(&[("z-index", "50")])), ["z-50"]);
        assert_eq!(map_to_classes(&map(&[("z-index", "999")])), ["z-[999]"]);
    }

    #[test]
    fn aspect_ratio_tokens() {
        assert_eq!(
            map_to_classes(&map(&[("aspect-ratio", "1 / 1")])),
            ["aspect-square"]
        );
        assert_eq!(
            map_to_classes(&map(&[("aspect-ratio", "4 / 3")])),
            ["aspect-[4/3]"]
        );
    }

    #[test]
    fn category_order_is_fixed() {
        let classes = map_to_classes(&map(&[
            ("cursor", "pointer"),
            ("color", "rgb(0, 0, 0)"),
            ("padding", "8px"),
            ("display", "flex"),
        ]));
        assert_eq!(classes, ["p-2", "flex", "text-black", "cursor-pointer"]);
    }

    #[test]
    fn empty_map_maps_to_no_tokens() {
        assert!(map_to_classes(&StyleMap::new()).is_empty());
    }

    // The mapper must degrade, never panic, for any value strings.
    proptest! {
        #[test]
        fn never_panics_on_arbitrary_values(
            props in proptest::collection::vec(
                (
                    prop::sample::select(crate::style::properties::DESIGN_PROPERTIES.to_vec()),
                    ".{0,40}",
                ),
                0..20,
            ),
            shorthands in proptest::collection::vec(
                (
                    prop::sample::select(vec!["padding", "margin", "border", "border-radius"]),
                    ".{0,40}",
                ),
                0..4,
            ),
        ) {
            let mut css = StyleMap::new();
            for (k, v) in props {
                css.insert(k, v);
            }
            for (k, v) in shorthands {
                css.insert(k, v);
            }
            let first = map_to_classes(&css);
            let second = map_to_classes(&css);
            prop_assert_eq!(first, second);
        }
    }
}
