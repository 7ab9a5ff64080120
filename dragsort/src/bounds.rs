use crate::{Bounds, Layout};

/// Returns `element`'s box edges measured from `parent`'s box origin.
pub fn element_bounds<L: Layout + ?Sized>(layout: &L, element: L::Node, parent: L::Node) -> Bounds {
    let rect = layout.bounding_rect(element);
    let origin = layout.bounding_rect(parent).origin();
    Bounds {
        top: rect.top - origin.y,
        bottom: rect.bottom() - origin.y,
        left: rect.left - origin.x,
        right: rect.right() - origin.x,
    }
}

/// Returns `true` if `element` or any ancestor below `parent` carries `class_name`.
///
/// The walk stops at `parent` (exclusive) or at the root, whichever comes first.
pub fn has_class_up_to_parent<L: Layout + ?Sized>(
    layout: &L,
    element: L::Node,
    parent: L::Node,
    class_name: &str,
) -> bool {
    let mut current = Some(element);
    while let Some(node) = current {
        if node == parent {
            break;
        }
        if layout.has_class(node, class_name) {
            return true;
        }
        current = layout.parent(node);
    }
    false
}
