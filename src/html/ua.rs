//! Built-in user-agent default styles.
//!
//! A small table of the defaults browsers report for the curated design
//! properties, so the static source and [`super::StaticDefaults`] answer
//! from the same data. Tag-specific overrides sit on top of per-property
//! base values. Values mirror what engines serialize (`rgb(...)` colors,
//! pixel lengths).

/// Computed default of `property` on a bare element of `tag`.
pub(crate) fn ua_default(tag: &str, property: &str) -> &'static str {
    tag_default(tag, property).unwrap_or_else(|| base_default(property))
}

fn tag_default(tag: &str, property: &str) -> Option<&'static str> {
    match tag {
        "html" | "body" | "div" | "header" | "footer" | "nav" | "main" | "section" | "aside"
        | "article" | "figure" | "form" | "fieldset" | "hr" | "address" | "details"
        | "summary" => match (tag, property) {
            (_, "display") => Some("block"),
            ("body", "margin-top" | "margin-right" | "margin-bottom" | "margin-left") => {
                Some("8px")
            }
            _ => None,
        },

        "p" => match property {
            "display" => Some("block"),
            "margin-top" | "margin-bottom" => Some("16px"),
            _ => None,
        },

        "h1" => match property {
            "display" => Some("block"),
            "font-size" => Some("32px"),
            "font-weight" => Some("700"),
            "margin-top" | "margin-bottom" => Some("21.44px"),
            _ => None,
        },
        "h2" => match property {
            "display" => Some("block"),
            "font-size" => Some("24px"),
            "font-weight" => Some("700"),
            "margin-top" | "margin-bottom" => Some("19.92px"),
            _ => None,
        },
        "h3" => match property {
            "display" => Some("block"),
            "font-size" => Some("18.72px"),
            "font-weight" => Some("700"),
            "margin-top" | "margin-bottom" => Some("18.72px"),
            _ => None,
        },
        "h4" | "h5" | "h6" => match property {
            "display" => Some("block"),
            "font-weight" => Some("700"),
            _ => None,
        },

        "a" => match property {
            "color" => Some("rgb(0, 0, 238)"),
            "text-decoration" => Some("underline"),
            "cursor" => Some("pointer"),
            _ => None,
        },

        "ul" | "ol" => match property {
            "display" => Some("block"),
            "margin-top" | "margin-bottom" => Some("16px"),
            "padding-left" => Some("40px"),
            "list-style-type" => Some(if tag == "ol" { "decimal" } else { "disc" }),
            _ => None,
        },
        "li" => match property {
            "display" => Some("list-item"),
            _ => None,
        },

        "blockquote" => match property {
            "display" => Some("block"),
            "margin-top" | "margin-bottom" => Some("16px"),
            "margin-left" | "margin-right" => Some("40px"),
            _ => None,
        },

        "pre" => match property {
            "display" => Some("block"),
            "font-family" => Some("monospace"),
            "white-space" => Some("pre"),
            "margin-top" | "margin-bottom" => Some("16px"),
            _ => None,
        },
        "code" | "kbd" | "samp" => match property {
            "font-family" => Some("monospace"),
            _ => None,
        },

        "strong" | "b" => match property {
            "font-weight" => Some("700"),
            _ => None,
        },
        "em" | "i" | "cite" | "var" => match property {
            "font-style" => Some("italic"),
            _ => None,
        },
        "small" => match property {
            "font-size" => Some("13.3333px"),
            _ => None,
        },

        "table" => match property {
            "display" => Some("table"),
            _ => None,
        },
        "thead" => match property {
            "display" => Some("table-header-group"),
            _ => None,
        },
        "tbody" => match property {
            "display" => Some("table-row-group"),
            _ => None,
        },
        "tr" => match property {
            "display" => Some("table-row"),
            _ => None,
        },
        "td" | "th" => match property {
            "display" => Some("table-cell"),
            "padding-top" | "padding-right" | "padding-bottom" | "padding-left" => Some("1px"),
            _ => None,
        },

        "button" | "input" | "select" | "textarea" => match property {
            "display" => Some("inline-block"),
            "font-size" => Some("13.3333px"),
            "text-align" => {
                if tag == "button" {
                    Some("center")
                } else {
                    None
                }
            }
            _ => None,
        },

        "img" | "svg" | "video" | "canvas" => match property {
            "display" => Some("inline"),
            _ => None,
        },

        _ => None,
    }
}

fn base_default(property: &str) -> &'static str {
    match property {
        "display" => "inline",
        "position" => "static",
        "top" | "right" | "bottom" | "left" => "auto",
        "float" | "clear" => "none",
        "z-index" => "auto",
        "overflow" | "overflow-x" | "overflow-y" => "visible",

        "flex-direction" => "row",
        "flex-wrap" => "nowrap",
        "justify-content" | "align-items" | "align-content" => "normal",
        "align-self" => "auto",
        "flex-grow" => "0",
        "flex-shrink" => "1",
        "flex-basis" => "auto",
        "gap" | "row-gap" | "column-gap" => "normal",
        "order" => "0",

        "grid-template-columns" | "grid-template-rows" => "none",
        "grid-column" | "grid-row" => "auto",
        "grid-auto-flow" => "row",
        "grid-auto-columns" | "grid-auto-rows" => "auto",

        "width" | "height" | "min-width" | "min-height" => "auto",
        "max-width" | "max-height" => "none",
        "margin-top" | "margin-right" | "margin-bottom" | "margin-left" => "0px",
        "padding-top" | "padding-right" | "padding-bottom" | "padding-left" => "0px",
        "box-sizing" => "content-box",

        "font-family" => "Times New Roman",
        "font-size" => "16px",
        "font-weight" => "400",
        "font-style" => "normal",
        "line-height" => "normal",
        "letter-spacing" => "normal",
        "text-align" => "start",
        "text-decoration" => "none",
        "text-transform" => "none",
        "white-space" => "normal",
        "word-break" => "normal",
        "word-spacing" => "normal",
        "color" => "rgb(0, 0, 0)",

        "background-color" => "rgba(0, 0, 0, 0)",
        "background-image" => "none",
        "background-size" => "auto",
        "background-position" => "0% 0%",
        "background-repeat" => "repeat",

        "border-top-width" | "border-right-width" | "border-bottom-width"
        | "border-left-width" => "0px",
        "border-top-style" | "border-right-style" | "border-bottom-style"
        | "border-left-style" => "none",
        "border-top-color" | "border-right-color" | "border-bottom-color"
        | "border-left-color" => "rgb(0, 0, 0)",
        "border-top-left-radius" | "border-top-right-radius" | "border-bottom-left-radius"
        | "border-bottom-right-radius" => "0px",

        "opacity" => "1",
        "box-shadow" | "text-shadow" => "none",
        "outline" | "outline-style" => "none",
        "outline-width" => "0px",
        "outline-color" => "rgb(0, 0, 0)",
        "outline-offset" => "0px",

        "transform" => "none",
        "transform-origin" => "50% 50%",

        "cursor" | "pointer-events" => "auto",

        "list-style-type" => "disc",
        "list-style-position" => "outside",

        "border-collapse" => "separate",
        "border-spacing" => "0px 0px",

        "object-fit" => "fill",
        "object-position" => "50% 50%",
        "aspect-ratio" => "auto",

        "visibility" => "visible",

        _ => "",
    }
}
