//! Shorthand canonicalization of a style diff.
//!
//! Merges uniform directional longhands into shorthands and drops properties
//! that the element's current layout mode makes irrelevant. Pure and
//! idempotent; equality checks are exact trimmed-string comparisons with no
//! unit normalization (`4px` never equals `0.25rem`).

use super::StyleMap;
use super::properties::{
    BORDER_COLORS, BORDER_STYLES, BORDER_WIDTHS, FLEX_CONTAINER_PROPS, GRID_CONTAINER_PROPS,
    MARGIN_SIDES, OFFSET_PROPS, PADDING_SIDES, RADIUS_CORNERS,
};

/// Canonicalize a style map. Rules apply in order; later rules see the
/// results of earlier ones.
pub fn canonicalize(mut css: StyleMap) -> StyleMap {
    merge_radius(&mut css);
    merge_border(&mut css);
    merge_box_sides(&mut css, &PADDING_SIDES, "padding");
    merge_box_sides(&mut css, &MARGIN_SIDES, "margin");
    prune_static_position(&mut css);
    prune_layout_props(&mut css);
    css
}

fn group_values<'a>(css: &'a StyleMap, props: &[&str; 4]) -> Vec<&'a str> {
    props.iter().filter_map(|p| css.get(p)).collect()
}

fn all_equal(values: &[&str]) -> bool {
    values.windows(2).all(|w| w[0].trim() == w[1].trim())
}

/// Four equal corners collapse into `border-radius`; partial corner sets are
/// left as individual longhands.
fn merge_radius(css: &mut StyleMap) {
    let corners = group_values(css, &RADIUS_CORNERS);
    if corners.len() == 4 && all_equal(&corners) {
        let value = corners[0].to_string();
        for corner in RADIUS_CORNERS {
            css.remove(corner);
        }
        css.insert("border-radius", value);
    }
}

/// Widths, styles, and colors must each be fully present (4/4) and
/// internally uniform before the single `border` shorthand is emitted.
/// Partial uniformity (say, equal widths but differing colors) leaves every
/// longhand untouched.
fn merge_border(css: &mut StyleMap) {
    let widths = group_values(css, &BORDER_WIDTHS);
    let styles = group_values(css, &BORDER_STYLES);
    let colors = group_values(css, &BORDER_COLORS);

    let uniform = |vs: &Vec<&str>| vs.len() == 4 && all_equal(vs);
    if !(uniform(&widths) && uniform(&styles) && uniform(&colors)) {
        return;
    }

    let shorthand = format!("{} {} {}", widths[0], styles[0], colors[0]);
    for prop in BORDER_WIDTHS.iter().chain(&BORDER_STYLES).chain(&BORDER_COLORS) {
        css.remove(prop);
    }
    css.insert("border", shorthand);
}

/// All four sides present and equal -> one value; vertical/horizontal
/// symmetric -> `"<v> <h>"`. Anything else stays as longhands.
fn merge_box_sides(css: &mut StyleMap, sides: &[&str; 4], shorthand: &str) {
    let values = group_values(css, sides);
    if values.len() != 4 {
        return;
    }

    let merged = if all_equal(&values) {
        values[0].to_string()
    } else if values[0].trim() == values[2].trim() && values[1].trim() == values[3].trim() {
        format!("{} {}", values[0], values[1])
    } else {
        return;
    };

    for side in sides {
        css.remove(side);
    }
    css.insert(shorthand, merged);
}

/// Offsets mean nothing on a statically positioned element.
fn prune_static_position(css: &mut StyleMap) {
    let is_static = match css.get("position") {
        None => true,
        Some(position) => position == "static",
    };
    if is_static {
        css.remove("position");
        for offset in OFFSET_PROPS {
            css.remove(offset);
        }
    }
}

/// Flex and grid container properties only apply under the matching display
/// mode.
fn prune_layout_props(css: &mut StyleMap) {
    let display = css.get("display").unwrap_or("").to_string();

    if display != "flex" && display != "inline-flex" {
        for prop in FLEX_CONTAINER_PROPS {
            css.remove(prop);
        }
    }

    if display != "grid" && display != "inline-grid" {
        for prop in GRID_CONTAINER_PROPS {
            css.remove(prop);
        }
    }
}
