use alloc::string::String;
use alloc::vec::Vec;

use dragsort::{
    Axis, DEFAULT_SCROLL_PADDING, InputEvent, Layout, LayoutMut, Point, Position, ScrollOptions,
    has_class_up_to_parent, move_array_element, move_element_in_place, relative_event_position,
    scroll_to_index,
};

use crate::drop_target_index;

/// Configuration for [`DragController`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOptions {
    /// The axis items are laid out along.
    pub axis: Axis,
    /// When set, a drag only starts from inside an element carrying this class.
    pub handle_class: Option<String>,
    /// A drag never starts from inside an element carrying this class (e.g. inputs, buttons).
    pub ignore_class: Option<String>,
    /// Padding used by [`DragController::reveal`].
    pub scroll_padding: f64,
}

impl DragOptions {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            handle_class: None,
            ignore_class: None,
            scroll_padding: DEFAULT_SCROLL_PADDING,
        }
    }

    pub fn with_handle_class(mut self, class_name: impl Into<String>) -> Self {
        self.handle_class = Some(class_name.into());
        self
    }

    pub fn with_ignore_class(mut self, class_name: impl Into<String>) -> Self {
        self.ignore_class = Some(class_name.into());
        self
    }

    pub fn with_scroll_padding(mut self, padding: f64) -> Self {
        self.scroll_padding = padding;
        self
    }
}

impl Default for DragOptions {
    fn default() -> Self {
        Self::new(Axis::Vertical)
    }
}

/// An in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    /// Index of the dragged item when the drag started.
    pub from: usize,
    /// Index the item would be dropped at.
    pub hovered: usize,
    /// Container-relative position where the drag started.
    pub start: Position,
    /// Latest container-relative position.
    pub current: Position,
}

impl DragSession {
    /// Distance travelled since the drag started.
    pub fn delta(&self) -> Point {
        Point::new(self.current.x - self.start.x, self.current.y - self.start.y)
    }
}

/// A committed move, reported when a drag ends on a different index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// A framework-neutral drag-to-reorder controller.
///
/// This type owns the item order but no UI objects. Adapters drive it by forwarding pointer
/// events together with the host layout:
/// - `on_pointer_down` when a press lands on an item
/// - `on_pointer_move` while the pointer moves (returns the hovered drop index)
/// - `on_pointer_up` when the press is released (returns the committed [`Reorder`], if any)
///
/// Positions are tracked in the container's scrolled content coordinates, so scrolling the
/// container mid-drag keeps the drop index consistent.
#[derive(Clone, Debug)]
pub struct DragController<T> {
    items: Vec<T>,
    options: DragOptions,
    session: Option<DragSession>,
}

impl<T> DragController<T> {
    pub fn new(items: Vec<T>, options: DragOptions) -> Self {
        Self {
            items,
            options,
            session: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Replaces the items. Any active drag is cancelled.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.cancel();
        self.items = items;
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            adebug!("DragController::cancel");
        }
    }

    /// Starts a drag of `item_index` if the press on `target` qualifies.
    ///
    /// A press qualifies when it is inside a `handle_class` element (if configured) and not
    /// inside an `ignore_class` element, both checked from `target` up to `container`. Returns
    /// `true` when a drag started.
    pub fn on_pointer_down<L: Layout + ?Sized>(
        &mut self,
        layout: &L,
        container: L::Node,
        target: L::Node,
        item_index: usize,
        event: &InputEvent,
    ) -> bool {
        if item_index >= self.items.len() {
            awarn!(
                item_index,
                len = self.items.len(),
                "on_pointer_down: item index out of range"
            );
            return false;
        }

        let inside =
            |class_name: &str| has_class_up_to_parent(layout, target, container, class_name);
        if self.options.ignore_class.as_deref().is_some_and(inside) {
            return false;
        }
        if self
            .options
            .handle_class
            .as_deref()
            .is_some_and(|handle| !inside(handle))
        {
            return false;
        }

        let Some(start) = relative_event_position(layout, event, container) else {
            return false;
        };

        adebug!(item_index, is_touch = start.is_touch, "drag start");
        self.session = Some(DragSession {
            from: item_index,
            hovered: item_index,
            start,
            current: start,
        });
        true
    }

    /// Updates the drag with a new pointer position.
    ///
    /// `item_nodes` are the host nodes of the items in their current display order. Returns the
    /// hovered drop index, or `None` when no drag is active.
    pub fn on_pointer_move<L: Layout + ?Sized>(
        &mut self,
        layout: &L,
        container: L::Node,
        item_nodes: &[L::Node],
        event: &InputEvent,
    ) -> Option<usize> {
        let axis = self.options.axis;
        let last = self.items.len().checked_sub(1)?;
        let session = self.session.as_mut()?;

        if let Some(current) = relative_event_position(layout, event, container) {
            session.current = current;
            if let Some(index) = drop_target_index(layout, container, item_nodes, current, axis) {
                session.hovered = index.min(last);
            }
        }

        atrace!(hovered = session.hovered, "drag move");
        Some(session.hovered)
    }

    /// Ends the drag at the event's position and commits the move.
    pub fn on_pointer_up<L: Layout + ?Sized>(
        &mut self,
        layout: &L,
        container: L::Node,
        item_nodes: &[L::Node],
        event: &InputEvent,
    ) -> Option<Reorder> {
        self.on_pointer_move(layout, container, item_nodes, event);
        self.commit()
    }

    /// Ends the drag at the last hovered index.
    ///
    /// Returns the applied move, or `None` if no drag was active or the item was dropped where
    /// it started.
    pub fn commit(&mut self) -> Option<Reorder> {
        let session = self.session.take()?;
        if session.from == session.hovered {
            adebug!(index = session.from, "drag ended in place");
            return None;
        }

        if !move_element_in_place(&mut self.items, session.from, session.hovered) {
            return None;
        }
        adebug!(from = session.from, to = session.hovered, "drag committed");
        Some(Reorder {
            from: session.from,
            to: session.hovered,
        })
    }

    /// Scrolls `container` so that item `index` is near its leading edge.
    pub fn reveal<L: LayoutMut + ?Sized>(
        &self,
        layout: &mut L,
        container: L::Node,
        index: usize,
    ) -> Option<f64> {
        let options =
            ScrollOptions::new(self.options.axis).with_padding(self.options.scroll_padding);
        scroll_to_index(layout, container, index, options)
    }
}

impl<T: Clone> DragController<T> {
    /// The item order as it would be if the drag were committed now.
    pub fn preview(&self) -> Vec<T> {
        match self.session {
            Some(s) => move_array_element(&self.items, s.from, s.hovered),
            None => self.items.clone(),
        }
    }
}
