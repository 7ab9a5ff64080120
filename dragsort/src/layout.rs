use crate::{Axis, Point, Rect, Size};

/// Read access to a host layout tree (a DOM, a retained-mode GUI, a test double).
///
/// Nodes are addressed by cheap handles. Every query is expected to reflect the last committed
/// layout; see [`LayoutMut::flush_layout`].
pub trait Layout {
    type Node: Copy + Eq;

    /// The node's box in client coordinates (aka `getBoundingClientRect`).
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    /// Current scroll offset (`x` = `scrollLeft`, `y` = `scrollTop`).
    fn scroll_offset(&self, node: Self::Node) -> Point;

    /// Total scrollable content size (`scrollWidth` / `scrollHeight`).
    fn scroll_size(&self, node: Self::Node) -> Size;

    /// Visible viewport size of the node (`clientWidth` / `clientHeight`).
    fn client_size(&self, node: Self::Node) -> Size;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn has_class(&self, node: Self::Node, class_name: &str) -> bool;

    fn child_count(&self, node: Self::Node) -> usize;
}

/// Write access to a host layout tree.
pub trait LayoutMut: Layout {
    /// Sets the scroll offset along `axis`.
    ///
    /// Hosts clamp the value into their valid scroll range the way a platform would.
    fn set_scroll_offset(&mut self, node: Self::Node, axis: Axis, value: f64);

    /// Applies pending render/layout work so that subsequent reads are up to date.
    ///
    /// Hosts that always answer queries from committed layout can keep the default no-op.
    fn flush_layout(&mut self) {}
}
