//! Headless geometry, pointer and scroll helpers for drag-to-reorder lists and carousels.
//!
//! For adapter-level workflows (drag sessions, drop targets, smooth scrolling), see the
//! `dragsort-adapter` crate.
//!
//! The helpers are stateless and UI-agnostic. A host (DOM binding, GUI toolkit, test double)
//! provides layout through the [`Layout`] / [`LayoutMut`] traits:
//! - bounding boxes in client coordinates
//! - scroll offsets and scrollable sizes
//! - the parent chain and class membership of nodes
//! - a "flush pending layout" hook run before scroll metrics are read
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod array;
mod bounds;
mod color;
mod event;
mod layout;
mod math;
mod scroll;
mod types;


pub use array::{move_array_element, move_element_in_place};
pub use bounds::{element_bounds, has_class_up_to_parent};
#[cfg(feature = "std")]
pub use color::random_color;
pub use color::random_color_with;
pub use event::{event_position, relative_event_position, visible_relative_event_position};
pub use layout::{Layout, LayoutMut};
pub use math::{clamp, is_between};
pub use scroll::{
    DEFAULT_SCROLL_PADDING, ScrollOptions, scroll_horizontally_to_index, scroll_to_index,
    scroll_to_index_offset, scroll_vertically_to_index,
};
pub use types::{Axis, Bounds, InputEvent, Point, Position, Rect, Size};
