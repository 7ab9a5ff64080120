use crate::*;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use dragsort::{
    Axis, InputEvent, Layout, LayoutMut, Point, Position, Rect, ScrollOptions, Size, clamp,
};

#[derive(Clone, Debug, Default)]
struct Node {
    rect: Rect,
    scroll: Point,
    scroll_size: Size,
    parent: Option<usize>,
    classes: Vec<String>,
    children: usize,
}

#[derive(Clone, Debug, Default)]
struct MockDom {
    nodes: Vec<Node>,
    flushes: usize,
}

impl MockDom {
    fn add(&mut self, parent: Option<usize>, rect: Rect, class_name: Option<&str>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            rect,
            scroll_size: Size::new(rect.width, rect.height),
            parent,
            classes: class_name.map(|c| c.to_string()).into_iter().collect(),
            ..Node::default()
        });
        if let Some(p) = parent {
            self.nodes[p].children += 1;
        }
        id
    }
}

impl Layout for MockDom {
    type Node = usize;

    fn bounding_rect(&self, node: usize) -> Rect {
        self.nodes[node].rect
    }

    fn scroll_offset(&self, node: usize) -> Point {
        self.nodes[node].scroll
    }

    fn scroll_size(&self, node: usize) -> Size {
        self.nodes[node].scroll_size
    }

    fn client_size(&self, node: usize) -> Size {
        let r = self.nodes[node].rect;
        Size::new(r.width, r.height)
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn has_class(&self, node: usize, class_name: &str) -> bool {
        self.nodes[node].classes.iter().any(|c| c == class_name)
    }

    fn child_count(&self, node: usize) -> usize {
        self.nodes[node].children
    }
}

impl LayoutMut for MockDom {
    fn set_scroll_offset(&mut self, node: usize, axis: Axis, value: f64) {
        let range = self.scroll_size(node).along(axis) - self.client_size(node).along(axis);
        let value = clamp(value, 0.0, range.max(0.0));
        let n = &mut self.nodes[node];
        match axis {
            Axis::Vertical => n.scroll.y = value,
            Axis::Horizontal => n.scroll.x = value,
        }
    }

    fn flush_layout(&mut self) {
        self.flushes += 1;
    }
}

/// A 200x150 list at y=100 holding five 50px rows. Each row has a `handle` child and a
/// `no-drag` button child.
struct Fixture {
    dom: MockDom,
    list: usize,
    rows: Vec<usize>,
    handles: Vec<usize>,
    buttons: Vec<usize>,
}

fn fixture() -> Fixture {
    let mut dom = MockDom::default();
    let list = dom.add(None, Rect::new(0.0, 100.0, 200.0, 150.0), Some("list"));
    let mut rows = Vec::new();
    let mut handles = Vec::new();
    let mut buttons = Vec::new();
    for i in 0..5 {
        let top = 100.0 + i as f64 * 50.0;
        let row = dom.add(Some(list), Rect::new(0.0, top, 200.0, 50.0), Some("row"));
        handles.push(dom.add(Some(row), Rect::new(0.0, top, 20.0, 50.0), Some("handle")));
        buttons.push(dom.add(Some(row), Rect::new(160.0, top, 40.0, 50.0), Some("no-drag")));
        rows.push(row);
    }
    dom.nodes[list].scroll_size = Size::new(200.0, 250.0);
    Fixture {
        dom,
        list,
        rows,
        handles,
        buttons,
    }
}

fn at(y: f64) -> Position {
    Position {
        x: 10.0,
        y,
        is_touch: false,
    }
}

#[test]
fn drop_target_index_resolves_rows() {
    let f = fixture();
    let target = |y| drop_target_index(&f.dom, f.list, &f.rows, at(y), Axis::Vertical);
    assert_eq!(target(10.0), Some(0));
    assert_eq!(target(50.0), Some(0));
    assert_eq!(target(75.0), Some(1));
    assert_eq!(target(249.0), Some(4));
    assert_eq!(target(400.0), Some(4));
    assert_eq!(
        drop_target_index(&f.dom, f.list, &[], at(10.0), Axis::Vertical),
        None
    );
}

#[test]
fn drop_target_index_accounts_for_container_scroll() {
    let mut f = fixture();
    f.dom.nodes[f.list].scroll = Point::new(0.0, 50.0);
    for &row in &f.rows {
        f.dom.nodes[row].rect.top -= 50.0;
    }
    // Content coordinates are unaffected by scrolling.
    let idx = drop_target_index(&f.dom, f.list, &f.rows, at(75.0), Axis::Vertical);
    assert_eq!(idx, Some(1));
}

#[test]
fn drop_target_index_maps_gaps_to_following_item() {
    let mut dom = MockDom::default();
    let strip = dom.add(None, Rect::new(0.0, 0.0, 300.0, 40.0), None);
    let items: Vec<usize> = (0..3)
        .map(|i| dom.add(Some(strip), Rect::new(i as f64 * 50.0, 0.0, 40.0, 40.0), None))
        .collect();

    let pos = |x| Position {
        x,
        y: 5.0,
        is_touch: false,
    };
    let target = |x| drop_target_index(&dom, strip, &items, pos(x), Axis::Horizontal);
    assert_eq!(target(20.0), Some(0));
    assert_eq!(target(45.0), Some(1));
    assert_eq!(target(95.0), Some(2));
    assert_eq!(target(200.0), Some(2));
}

#[test]
fn drag_moves_item_forward() {
    let f = fixture();
    let mut c = DragController::new(vec!['a', 'b', 'c', 'd', 'e'], DragOptions::default());

    assert!(c.on_pointer_down(&f.dom, f.list, f.rows[0], 0, &InputEvent::pointer(10.0, 110.0)));
    assert!(c.is_dragging());

    let hovered = c.on_pointer_move(&f.dom, f.list, &f.rows, &InputEvent::pointer(10.0, 240.0));
    assert_eq!(hovered, Some(2));
    assert_eq!(c.preview(), vec!['b', 'c', 'a', 'd', 'e']);
    assert_eq!(c.items(), &['a', 'b', 'c', 'd', 'e']);
    assert_eq!(c.session().map(|s| s.delta()), Some(Point::new(0.0, 130.0)));

    let reorder = c.on_pointer_up(&f.dom, f.list, &f.rows, &InputEvent::pointer(10.0, 240.0));
    assert_eq!(reorder, Some(Reorder { from: 0, to: 2 }));
    assert_eq!(c.items(), &['b', 'c', 'a', 'd', 'e']);
    assert!(!c.is_dragging());
}

#[test]
fn touch_drag_ends_on_changed_touch() {
    let f = fixture();
    let mut c = DragController::new(vec!['a', 'b', 'c', 'd', 'e'], DragOptions::default());

    assert!(c.on_pointer_down(&f.dom, f.list, f.rows[1], 1, &InputEvent::touch(10.0, 160.0)));
    assert!(c.session().is_some_and(|s| s.start.is_touch));

    c.on_pointer_move(&f.dom, f.list, &f.rows, &InputEvent::touch(10.0, 130.0));
    let reorder = c.on_pointer_up(&f.dom, f.list, &f.rows, &InputEvent::touch_end(10.0, 110.0));
    assert_eq!(reorder, Some(Reorder { from: 1, to: 0 }));
    assert_eq!(c.into_items(), vec!['b', 'a', 'c', 'd', 'e']);
}

#[test]
fn drop_in_place_is_not_a_reorder() {
    let f = fixture();
    let mut c = DragController::new(vec![1, 2, 3, 4, 5], DragOptions::default());

    assert!(c.on_pointer_down(&f.dom, f.list, f.rows[3], 3, &InputEvent::pointer(5.0, 260.0)));
    let reorder = c.on_pointer_up(&f.dom, f.list, &f.rows, &InputEvent::pointer(5.0, 270.0));
    assert_eq!(reorder, None);
    assert_eq!(c.items(), &[1, 2, 3, 4, 5]);
    assert!(!c.is_dragging());
}

#[test]
fn handle_class_gates_drag_start() {
    let f = fixture();
    let options = DragOptions::default().with_handle_class("handle");
    let mut c = DragController::new(vec![1, 2, 3, 4, 5], options);
    let ev = InputEvent::pointer(10.0, 110.0);

    assert!(!c.on_pointer_down(&f.dom, f.list, f.rows[0], 0, &ev));
    assert!(!c.is_dragging());
    assert!(c.on_pointer_down(&f.dom, f.list, f.handles[0], 0, &ev));
}

#[test]
fn ignore_class_blocks_drag_start() {
    let f = fixture();
    let options = DragOptions::default().with_ignore_class("no-drag");
    let mut c = DragController::new(vec![1, 2, 3, 4, 5], options);
    let ev = InputEvent::pointer(170.0, 110.0);

    assert!(!c.on_pointer_down(&f.dom, f.list, f.buttons[0], 0, &ev));
    assert!(c.on_pointer_down(&f.dom, f.list, f.rows[0], 0, &ev));
}

#[test]
fn controller_ignores_events_without_a_session() {
    let f = fixture();
    let mut c = DragController::new(vec![1, 2, 3], DragOptions::default());
    let ev = InputEvent::pointer(10.0, 110.0);

    assert_eq!(c.on_pointer_move(&f.dom, f.list, &f.rows, &ev), None);
    assert_eq!(c.commit(), None);
    assert!(!c.on_pointer_down(&f.dom, f.list, f.rows[4], 4, &ev));

    let empty_touch = InputEvent::Touch {
        touches: Vec::new(),
        changed_touches: Vec::new(),
    };
    assert!(!c.on_pointer_down(&f.dom, f.list, f.rows[0], 0, &empty_touch));

    assert!(c.on_pointer_down(&f.dom, f.list, f.rows[0], 0, &ev));
    c.cancel();
    assert!(!c.is_dragging());
    assert_eq!(c.preview(), vec![1, 2, 3]);
}

#[test]
fn hovered_index_never_exceeds_item_count() {
    let f = fixture();
    // Fewer items than rendered rows.
    let mut c = DragController::new(vec![1, 2, 3], DragOptions::default());
    assert!(c.on_pointer_down(&f.dom, f.list, f.rows[0], 0, &InputEvent::pointer(10.0, 110.0)));
    let hovered = c.on_pointer_move(&f.dom, f.list, &f.rows, &InputEvent::pointer(10.0, 340.0));
    assert_eq!(hovered, Some(2));
}

#[test]
fn reveal_scrolls_with_configured_padding() {
    let mut f = fixture();
    let c = DragController::new(vec![1, 2, 3, 4, 5], DragOptions::default());

    assert_eq!(c.reveal(&mut f.dom, f.list, 1), Some(30.0));
    assert_eq!(f.dom.scroll_offset(f.list).y, 30.0);
    assert_eq!(f.dom.flushes, 1);

    // 150 - 20 is past the scrollable range (250 - 150).
    assert_eq!(c.reveal(&mut f.dom, f.list, 3), Some(130.0));
    assert_eq!(f.dom.scroll_offset(f.list).y, 100.0);

    let c = DragController::new(vec![1], DragOptions::default().with_scroll_padding(0.0));
    assert_eq!(c.reveal(&mut f.dom, f.list, 1), Some(50.0));
    assert_eq!(f.dom.scroll_offset(f.list).y, 50.0);
}

#[test]
fn scroll_tween_drives_scroll_offset() {
    let mut f = fixture();
    let mut t = ScrollTween::new(ScrollOptions::vertical(), 100, Easing::SmoothStep);

    let to = t.start_to_index(&mut f.dom, f.list, 2, 0);
    assert_eq!(to, Some(80.0));
    assert!(t.is_animating());

    let mut last = 0.0;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(off) = t.tick(&mut f.dom, f.list, now_ms) {
            assert!(off >= last);
            last = off;
        }
    }
    assert!(!t.is_animating());
    assert_eq!(f.dom.scroll_offset(f.list).y, 80.0);
    assert_eq!(t.tick(&mut f.dom, f.list, 200), None);
}

#[test]
fn scroll_tween_clamps_target_and_retargets() {
    let mut f = fixture();
    let mut t = ScrollTween::new(ScrollOptions::vertical(), 100, Easing::Linear);

    assert_eq!(t.start_to_index(&mut f.dom, f.list, 4, 0), Some(100.0));
    assert_eq!(t.tick(&mut f.dom, f.list, 50), Some(50.0));

    // Retargeting mid-flight continues from the current sample.
    assert_eq!(t.start_to_index(&mut f.dom, f.list, 0, 50), Some(0.0));
    let tween = t.tween().copied().unwrap();
    assert_eq!(tween.from, 50.0);
    assert_eq!(tween.to, 0.0);
    assert_eq!(t.tick(&mut f.dom, f.list, 150), Some(0.0));
    assert!(!t.is_animating());
}

#[test]
fn scroll_tween_needs_children() {
    let mut dom = MockDom::default();
    let empty = dom.add(None, Rect::new(0.0, 0.0, 100.0, 100.0), None);
    let mut t = ScrollTween::new(ScrollOptions::vertical(), 100, Easing::Linear);
    assert_eq!(t.start_to_index(&mut dom, empty, 0, 0), None);
    assert!(!t.is_animating());
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mid = easing.sample(0.5);
        assert!((0.0..=1.0).contains(&mid));
    }

    let tw = Tween::new(10.0, 110.0, 1_000, 0, Easing::Linear);
    assert_eq!(tw.duration_ms, 1);
    assert_eq!(tw.sample(1_000), 10.0);
    assert_eq!(tw.sample(5_000), 110.0);
    assert!(tw.is_done(1_001));
}
