use dragsort::{Axis, InputEvent, Layout, LayoutMut, Point, Rect, ScrollOptions, Size, clamp};
use dragsort_adapter::{DragController, DragOptions, Easing, ScrollTween};

/// Node 0 is the list container; node `i + 1` is row `i`.
struct List {
    row_height: f64,
    rows: usize,
    viewport: f64,
    scroll_top: f64,
}

impl Layout for List {
    type Node = usize;

    fn bounding_rect(&self, node: usize) -> Rect {
        if node == 0 {
            return Rect::new(0.0, 0.0, 240.0, self.viewport);
        }
        let top = (node - 1) as f64 * self.row_height - self.scroll_top;
        Rect::new(0.0, top, 240.0, self.row_height)
    }

    fn scroll_offset(&self, node: usize) -> Point {
        if node == 0 {
            Point::new(0.0, self.scroll_top)
        } else {
            Point::default()
        }
    }

    fn scroll_size(&self, node: usize) -> Size {
        if node == 0 {
            Size::new(240.0, self.rows as f64 * self.row_height)
        } else {
            Size::new(240.0, self.row_height)
        }
    }

    fn client_size(&self, node: usize) -> Size {
        let r = self.bounding_rect(node);
        Size::new(r.width, r.height)
    }

    fn parent(&self, node: usize) -> Option<usize> {
        (node != 0).then_some(0)
    }

    fn has_class(&self, node: usize, class_name: &str) -> bool {
        node != 0 && class_name == "handle"
    }

    fn child_count(&self, node: usize) -> usize {
        if node == 0 { self.rows } else { 0 }
    }
}

impl LayoutMut for List {
    fn set_scroll_offset(&mut self, _node: usize, axis: Axis, value: f64) {
        if axis == Axis::Vertical {
            let max = self.rows as f64 * self.row_height - self.viewport;
            self.scroll_top = clamp(value, 0.0, max.max(0.0));
        }
    }
}

fn main() {
    // An adapter would:
    // - forward pointer/touch events with the live layout
    // - re-render rows from `preview()` while dragging
    // - persist `items()` after a committed reorder
    let mut list = List {
        row_height: 40.0,
        rows: 6,
        viewport: 160.0,
        scroll_top: 0.0,
    };
    let rows: Vec<usize> = (1..=list.rows).collect();
    let items = vec!["inbox", "today", "upcoming", "someday", "logbook", "trash"];
    let options = DragOptions::new(Axis::Vertical).with_handle_class("handle");
    let mut c = DragController::new(items, options);

    c.on_pointer_down(&list, 0, rows[0], 0, &InputEvent::touch(10.0, 20.0));
    for y in [40.0, 80.0, 130.0] {
        let hovered = c.on_pointer_move(&list, 0, &rows, &InputEvent::touch(10.0, y));
        println!("y={y} hovered={hovered:?} preview={:?}", c.preview());
    }
    let reorder = c.on_pointer_up(&list, 0, &rows, &InputEvent::touch_end(10.0, 130.0));
    println!("reorder={reorder:?} items={:?}", c.items());

    let mut tween = ScrollTween::new(ScrollOptions::vertical(), 240, Easing::EaseInOutCubic);
    let target = tween.start_to_index(&mut list, 0, 5, 0);
    println!("target_offset={target:?}");
    let mut now_ms = 0u64;
    while let Some(off) = tween.tick(&mut list, 0, now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off:.1}");
        }
        now_ms += 16;
    }
    println!("done: scroll_top={}", list.scroll_top);
}
