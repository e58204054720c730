//! The curated design-property list and per-property value policies.
//!
//! Only the properties listed here are ever read from an element. The list
//! order matters: the diff engine evaluates properties in this order and its
//! output keys inherit it, which is what keeps directional longhands grouped
//! for the canonicalizer.

/// Design-relevant CSS properties, in evaluation order.
pub const DESIGN_PROPERTIES: &[&str] = &[
    // Layout
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "float",
    "clear",
    "z-index",
    "overflow",
    "overflow-x",
    "overflow-y",
    // Flexbox
    "flex-direction",
    "flex-wrap",
    "justify-content",
    "align-items",
    "align-content",
    "align-self",
    "flex-grow",
    "flex-shrink",
    "flex-basis",
    "gap",
    "row-gap",
    "column-gap",
    "order",
    // Grid
    "grid-template-columns",
    "grid-template-rows",
    "grid-column",
    "grid-row",
    "grid-auto-flow",
    "grid-auto-columns",
    "grid-auto-rows",
    // Box model
    "width",
    "height",
    "min-width",
    "min-height",
    "max-width",
    "max-height",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "box-sizing",
    // Typography
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "letter-spacing",
    "text-align",
    "text-decoration",
    "text-transform",
    "white-space",
    "word-break",
    "word-spacing",
    "color",
    // Background
    "background-color",
    "background-image",
    "background-size",
    "background-position",
    "background-repeat",
    // Border
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-top-style",
    "border-right-style",
    "border-bottom-style",
    "border-left-style",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    // Visual effects
    "opacity",
    "box-shadow",
    "text-shadow",
    "outline",
    "outline-width",
    "outline-style",
    "outline-color",
    "outline-offset",
    // Transform
    "transform",
    "transform-origin",
    // Cursor
    "cursor",
    "pointer-events",
    // Lists
    "list-style-type",
    "list-style-position",
    // Tables
    "border-collapse",
    "border-spacing",
    // Images
    "object-fit",
    "object-position",
    "aspect-ratio",
];

/// Values that carry no design information for a given property.
pub fn trivial_values(property: &str) -> &'static [&'static str] {
    match property {
        "background-color" => &["rgba(0, 0, 0, 0)", "transparent"],
        "background-image" | "box-shadow" | "text-shadow" | "transform" | "outline"
        | "outline-style" | "float" | "clear" => &["none"],
        "border-top-style" | "border-right-style" | "border-bottom-style"
        | "border-left-style" => &["none"],
        "cursor" | "pointer-events" => &["auto"],
        "list-style-type" => &["none", "disc"],
        _ => &[],
    }
}

/// Properties where a resolved `auto` says nothing about the design.
pub fn auto_is_meaningless(property: &str) -> bool {
    matches!(
        property,
        "top"
            | "right"
            | "bottom"
            | "left"
            | "margin-top"
            | "margin-right"
            | "margin-bottom"
            | "margin-left"
            | "width"
            | "height"
            | "min-width"
            | "min-height"
            | "max-width"
            | "max-height"
            | "z-index"
    )
}

/// Properties where a resolved `normal` says nothing about the design.
pub fn normal_is_meaningless(property: &str) -> bool {
    matches!(
        property,
        "font-style" | "letter-spacing" | "word-spacing" | "white-space" | "line-height"
            | "word-break"
    )
}

// Directional property groups, in top/right/bottom/left (or corner) order.
// The canonicalizer and the utility-class mapper both rely on this ordering.

pub const PADDING_SIDES: [&str; 4] = [
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
];

pub const MARGIN_SIDES: [&str; 4] = ["margin-top", "margin-right", "margin-bottom", "margin-left"];

pub const RADIUS_CORNERS: [&str; 4] = [
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
];

pub const BORDER_WIDTHS: [&str; 4] = [
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];

pub const BORDER_STYLES: [&str; 4] = [
    "border-top-style",
    "border-right-style",
    "border-bottom-style",
    "border-left-style",
];

pub const BORDER_COLORS: [&str; 4] = [
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
];

pub const OFFSET_PROPS: [&str; 4] = ["top", "right", "bottom", "left"];

pub const FLEX_CONTAINER_PROPS: [&str; 8] = [
    "flex-direction",
    "flex-wrap",
    "justify-content",
    "align-items",
    "align-content",
    "gap",
    "row-gap",
    "column-gap",
];

pub const GRID_CONTAINER_PROPS: [&str; 7] = [
    "grid-template-columns",
    "grid-template-rows",
    "grid-column",
    "grid-row",
    "grid-auto-flow",
    "grid-auto-columns",
    "grid-auto-rows",
];
