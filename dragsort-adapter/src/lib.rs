//! Adapter workflows for the `dragsort` crate.
//!
//! The `dragsort` crate provides stateless geometry and scroll helpers. This crate composes them
//! into the small stateful pieces a drag-to-reorder list usually needs:
//!
//! - A drag session that turns pointer input into a reorder ([`DragController`])
//! - Drop-target resolution from item geometry ([`drop_target_index`])
//! - Tween-based smooth scroll-to-index ([`ScrollTween`]; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod drop;
mod smooth;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{DragController, DragOptions, DragSession, Reorder};
pub use drop::drop_target_index;
pub use smooth::ScrollTween;
pub use tween::{Easing, Tween};
