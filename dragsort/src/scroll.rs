use crate::math::round_half_up;
use crate::{Axis, LayoutMut};

/// Default distance kept between the target child and the container's leading edge.
pub const DEFAULT_SCROLL_PADDING: f64 = 20.0;

/// Configuration for [`scroll_to_index`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOptions {
    pub axis: Axis,
    /// Subtracted from the computed offset so the child is not flush against the edge.
    pub padding: f64,
}

impl ScrollOptions {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            padding: DEFAULT_SCROLL_PADDING,
        }
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self::vertical()
    }
}

/// Computes the scroll offset that brings child `index` near the leading edge.
///
/// Children are assumed to share the scrollable extent evenly:
/// `round(scroll_size / child_count * index) - padding`.
///
/// `index` is not bounds-checked; an out-of-range index produces an offset outside the valid
/// scroll range, which the host clamps when applying it. Returns `None` when there are no
/// children.
pub fn scroll_to_index_offset(
    scroll_size: f64,
    child_count: usize,
    index: usize,
    padding: f64,
) -> Option<f64> {
    if child_count == 0 {
        return None;
    }
    let to = round_half_up(scroll_size / child_count as f64 * index as f64);
    Some(to - padding)
}

/// Scrolls `element` so that its child `index` sits near the leading edge of the viewport.
///
/// Pending layout is flushed first so the child count and scroll size reflect the latest
/// render. Returns the offset that was requested from the host (before host clamping), or
/// `None` when the element has no children and nothing was written.
pub fn scroll_to_index<L: LayoutMut + ?Sized>(
    layout: &mut L,
    element: L::Node,
    index: usize,
    options: ScrollOptions,
) -> Option<f64> {
    layout.flush_layout();

    let child_count = layout.child_count(element);
    let scroll_size = layout.scroll_size(element).along(options.axis);
    let Some(offset) = scroll_to_index_offset(scroll_size, child_count, index, options.padding)
    else {
        dwarn!(index, "scroll_to_index: element has no children");
        return None;
    };

    if index >= child_count {
        dwarn!(
            index,
            child_count,
            "scroll_to_index: index past the last child, host will clamp"
        );
    }
    ddebug!(
        index,
        child_count,
        scroll_size,
        offset,
        axis = ?options.axis,
        "scroll_to_index"
    );
    layout.set_scroll_offset(element, options.axis, offset);
    Some(offset)
}

/// Vertical shorthand for [`scroll_to_index`].
pub fn scroll_vertically_to_index<L: LayoutMut + ?Sized>(
    layout: &mut L,
    element: L::Node,
    index: usize,
    padding: f64,
) -> Option<f64> {
    scroll_to_index(
        layout,
        element,
        index,
        ScrollOptions::vertical().with_padding(padding),
    )
}

/// Horizontal shorthand for [`scroll_to_index`].
pub fn scroll_horizontally_to_index<L: LayoutMut + ?Sized>(
    layout: &mut L,
    element: L::Node,
    index: usize,
    padding: f64,
) -> Option<f64> {
    scroll_to_index(
        layout,
        element,
        index,
        ScrollOptions::horizontal().with_padding(padding),
    )
}
