use crate::math::clamp;
use crate::{InputEvent, Layout, Position};

/// Extracts the client position of an input event.
///
/// Touch events read the first active touch, falling back to the first changed touch (the
/// finger that was just lifted on `touchend`). Returns `None` for a touch event carrying no
/// touch points at all.
pub fn event_position(event: &InputEvent) -> Option<Position> {
    match event {
        InputEvent::Pointer(p) => Some(Position {
            x: p.x,
            y: p.y,
            is_touch: false,
        }),
        InputEvent::Touch {
            touches,
            changed_touches,
        } => {
            let list = if touches.is_empty() {
                changed_touches
            } else {
                touches
            };
            let Some(touch) = list.first() else {
                dwarn!("event_position: touch event without touch points");
                return None;
            };
            Some(Position {
                x: touch.x,
                y: touch.y,
                is_touch: true,
            })
        }
    }
}

/// Converts an event position into `element`'s scrolled content coordinates.
///
/// The result is clamped to `[0, scroll_width]` x `[0, scroll_height]`, so it always lies inside
/// the element's scrollable content area.
pub fn relative_event_position<L: Layout + ?Sized>(
    layout: &L,
    event: &InputEvent,
    element: L::Node,
) -> Option<Position> {
    let mut position = event_position(event)?;
    let rect = layout.bounding_rect(element);
    let scroll = layout.scroll_offset(element);
    let size = layout.scroll_size(element);

    position.x = clamp(position.x + scroll.x - rect.left, 0.0, size.width);
    position.y = clamp(position.y + scroll.y - rect.top, 0.0, size.height);
    Some(position)
}

/// Like [`relative_event_position`], compensated for the part of `element` that `parent` clips
/// away on its left and top edges.
///
/// When `element` overflows `parent`, the hidden leading strip is subtracted so the position
/// matches what the user sees. The result is not re-clamped.
pub fn visible_relative_event_position<L: Layout + ?Sized>(
    layout: &L,
    event: &InputEvent,
    element: L::Node,
    parent: L::Node,
) -> Option<Position> {
    let mut position = relative_event_position(layout, event, element)?;
    let rect = layout.bounding_rect(element);
    let visible = layout.bounding_rect(parent);

    let hidden_left = (visible.left - rect.left).max(0.0);
    let hidden_top = (visible.top - rect.top).max(0.0);

    position.x -= hidden_left;
    position.y -= hidden_top;
    Some(position)
}
