use dragsort::{LayoutMut, ScrollOptions, clamp, scroll_to_index_offset};

use crate::{Easing, Tween};

/// Tween-driven scroll-to-index for a single scroll container.
///
/// The host calls `tick(now_ms)` from its frame loop while `is_animating()` is true; each tick
/// writes the sampled offset to the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    options: ScrollOptions,
    duration_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
}

impl ScrollTween {
    pub fn new(options: ScrollOptions, duration_ms: u64, easing: Easing) -> Self {
        Self {
            options,
            duration_ms,
            easing,
            tween: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Starts a tween from the current scroll offset towards child `index`.
    ///
    /// Pending layout is flushed first. The target is clamped into the container's valid
    /// scroll range. Returns the target, or `None` when the container has no children.
    pub fn start_to_index<L: LayoutMut + ?Sized>(
        &mut self,
        layout: &mut L,
        element: L::Node,
        index: usize,
        now_ms: u64,
    ) -> Option<f64> {
        layout.flush_layout();

        let axis = self.options.axis;
        let scroll_size = layout.scroll_size(element).along(axis);
        let child_count = layout.child_count(element);
        let to = scroll_to_index_offset(scroll_size, child_count, index, self.options.padding)?;

        let max = (scroll_size - layout.client_size(element).along(axis)).max(0.0);
        let to = clamp(to, 0.0, max);
        let from = layout.scroll_offset(element).along(axis);

        match self.tween.as_mut() {
            Some(tween) => tween.retarget(now_ms, to, self.duration_ms),
            None => {
                self.tween = Some(Tween::new(from, to, now_ms, self.duration_ms, self.easing));
            }
        }
        adebug!(index, from, to, "ScrollTween::start_to_index");
        Some(to)
    }

    /// Advances the tween and applies the sampled offset.
    ///
    /// Returns the applied offset, or `None` when no tween is active.
    pub fn tick<L: LayoutMut + ?Sized>(
        &mut self,
        layout: &mut L,
        element: L::Node,
        now_ms: u64,
    ) -> Option<f64> {
        let tween = self.tween?;
        let off = tween.sample(now_ms);
        layout.set_scroll_offset(element, self.options.axis, off);

        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(off)
    }
}
