use dragsort::{Axis, Layout, Position, element_bounds, is_between};

/// Resolves the item index under a container-relative pointer position.
///
/// `pointer` is expected in the container's scrolled content coordinates (as returned by
/// `dragsort::relative_event_position`), and `items` are the item nodes in display order.
///
/// - A pointer inside an item's span along `axis` resolves to that item.
/// - A pointer before an item (before the first one, or in the gap above/left of it) resolves to
///   that item.
/// - A pointer past the last item resolves to the last index.
///
/// Returns `None` when there are no items.
pub fn drop_target_index<L: Layout + ?Sized>(
    layout: &L,
    container: L::Node,
    items: &[L::Node],
    pointer: Position,
    axis: Axis,
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let scrolled = layout.scroll_offset(container).along(axis);
    let at = pointer.along(axis);

    for (i, &item) in items.iter().enumerate() {
        let (start, end) = element_bounds(layout, item, container).span(axis);
        let (start, end) = (start + scrolled, end + scrolled);
        if at < start || is_between(at, start, end) {
            atrace!(index = i, at, start, end, "drop_target_index");
            return Some(i);
        }
    }

    Some(items.len() - 1)
}
