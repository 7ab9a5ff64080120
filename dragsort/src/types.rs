use alloc::vec::Vec;

/// A point in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

/// A pointer position extracted from an input event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    /// Whether the position came from a touch point rather than a mouse/pointer.
    pub is_touch: bool,
}

impl Position {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn along(&self, axis: Axis) -> f64 {
        self.point().along(axis)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// A layout box in client coordinates, as reported by the host (aka DOM `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Box edges measured from an ancestor's box origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    /// Returns the `(start, end)` edges along `axis`.
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Vertical => (self.top, self.bottom),
            Axis::Horizontal => (self.left, self.right),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// A host input event reduced to the fields the position helpers read.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Mouse or pointer event (client coordinates).
    Pointer(Point),
    /// Touch event.
    Touch {
        /// Touch points currently on the surface.
        touches: Vec<Point>,
        /// Touch points that changed in this event (e.g. lifted on `touchend`).
        changed_touches: Vec<Point>,
    },
}

impl InputEvent {
    pub fn pointer(x: f64, y: f64) -> Self {
        Self::Pointer(Point::new(x, y))
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self::Touch {
            touches: alloc::vec![Point::new(x, y)],
            changed_touches: Vec::new(),
        }
    }

    pub fn touch_end(x: f64, y: f64) -> Self {
        Self::Touch {
            touches: Vec::new(),
            changed_touches: alloc::vec![Point::new(x, y)],
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, Self::Touch { .. })
    }
}
