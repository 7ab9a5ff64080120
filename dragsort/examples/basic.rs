use dragsort::{
    Axis, InputEvent, Layout, LayoutMut, Point, Rect, Size, clamp, element_bounds, is_between,
    move_array_element, random_color, relative_event_position, scroll_vertically_to_index,
};

/// A fixed-height list of rows: node 0 is the container, nodes 1..=n are rows.
struct List {
    rect: Rect,
    row_height: f64,
    rows: usize,
    scroll_top: f64,
}

impl Layout for List {
    type Node = usize;

    fn bounding_rect(&self, node: usize) -> Rect {
        if node == 0 {
            return self.rect;
        }
        let top = self.rect.top + (node - 1) as f64 * self.row_height - self.scroll_top;
        Rect::new(self.rect.left, top, self.rect.width, self.row_height)
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
            Size::new(self.rect.width, self.rows as f64 * self.row_height)
        } else {
            Size::new(self.rect.width, self.row_height)
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
        node != 0 && class_name == "row"
    }

    fn child_count(&self, node: usize) -> usize {
        if node == 0 { self.rows } else { 0 }
    }
}

impl LayoutMut for List {
    fn set_scroll_offset(&mut self, node: usize, axis: Axis, value: f64) {
        if node == 0 && axis == Axis::Vertical {
            let max = self.scroll_size(0).height - self.rect.height;
            self.scroll_top = clamp(value, 0.0, max.max(0.0));
        }
    }
}

fn main() {
    let mut list = List {
        rect: Rect::new(0.0, 40.0, 320.0, 200.0),
        row_height: 32.0,
        rows: 100,
        scroll_top: 0.0,
    };

    let requested = scroll_vertically_to_index(&mut list, 0, 42, 20.0);
    println!("scroll_to_index(42): requested={requested:?} applied={}", list.scroll_top);

    let ev = InputEvent::pointer(16.0, 120.0);
    let pos = relative_event_position(&list, &ev, 0);
    println!("relative position: {pos:?}");

    let bounds = element_bounds(&list, 43, 0);
    println!("row 42 bounds: {bounds:?}");
    if let Some(p) = pos {
        let hit = is_between(p.y - list.scroll_top, bounds.top, bounds.bottom);
        println!("pointer over row 42: {hit}");
    }

    let colors: Vec<String> = (0..4).map(|_| random_color()).collect();
    println!("colors: {colors:?}");
    println!("moved: {:?}", move_array_element(&colors, 0, 3));
}
