//! The element source abstraction.
//!
//! The extraction pipeline never talks to a rendering engine directly. It
//! consumes any tree that implements [`Element`], and reads per-tag baseline
//! styles through a [`DefaultsProvider`]. The built-in [`crate::html`] module
//! implements both over statically parsed HTML; a live engine (a browser
//! content script, a headless renderer) plugs in the same way.

/// Rendered bounding geometry of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the element occupies no rendered area at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// One node of a live, styled element tree.
///
/// Implementations must report children in document order, and `style` must
/// return the resolved (computed) value for the given property, or an empty
/// string when the property is unset or unknown.
pub trait Element: Sized {
    /// Lowercase tag name (`"div"`, `"svg"`, ...).
    fn tag_name(&self) -> &str;

    /// Resolved style value for `property`, empty string when unset.
    fn style(&self, property: &str) -> String;

    /// Rendered bounding box.
    fn bounding_rect(&self) -> Rect;

    /// Child elements in document order.
    fn children(&self) -> Vec<Self>;

    /// Concatenated text of the element's direct (non-descendant) text nodes.
    fn direct_text(&self) -> String;

    /// Named attribute lookup.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Supplies baseline (engine-default) style values per tag.
///
/// A live implementation materializes one element of the tag inside an
/// isolated, style-free rendering context and reads its computed style.
/// The static HTML implementation answers from a built-in user-agent table.
///
/// Both methods may be called many times for the same tag; memoization is
/// the job of [`crate::style::DefaultsCache`], not the provider.
pub trait DefaultsProvider {
    /// Whether the isolated context is up and queryable. When this returns
    /// `false` the resolver degrades to an empty baseline map, which makes
    /// the diff engine keep every property (safe, over-inclusive).
    fn is_ready(&self) -> bool;

    /// Computed default value of `property` on a bare element of `tag`.
    fn computed_default(&self, tag: &str, property: &str) -> String;
}
