#![forbid(unsafe_code)]

//! Integration tests driving whole widget trees.
//!
//! These exercise the container/leaf contract end to end: requested
//! sizes bubble up, reshape partitions windows down, withdrawn widgets
//! stay silent on the surface, and input lands where it should.

use std::cell::RefCell;
use std::rc::Rc;

use weft_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use weft_core::geometry::{Rect, Size};
use weft_surface::Surface;
use weft_widgets::{
    Border, Button, CellOptions, CheckButton, Entry, Fill, Frame, GridBox, GridStyle, SplitBox,
    Widget,
};

fn press(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y))
}

fn drag(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent::new(MouseEventKind::Drag(MouseButton::Left), x, y))
}

fn release(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent::new(MouseEventKind::Up(MouseButton::Left), x, y))
}

#[test]
fn grid_requested_cols_for_one_by_two() {
    // Two 8-column children with 2 columns of spacing want 18 columns
    let mut grid = GridBox::new().with_style(GridStyle {
        row_spacing: 0,
        col_spacing: 2,
    });
    grid.add(0, 0, SizedBox::new(8, 8), CellOptions::new());
    grid.add(0, 1, SizedBox::new(8, 8), CellOptions::new());
    assert_eq!(grid.requested_size().cols, 18);
}

#[test]
fn grid_requested_lines_for_two_by_two() {
    // Row heights max(3,2)=3 and max(5,4)=5, spacing 1 -> 9 lines
    let mut grid = GridBox::new().with_style(GridStyle {
        row_spacing: 1,
        col_spacing: 1,
    });
    grid.add(0, 0, SizedBox::new(4, 3), CellOptions::new());
    grid.add(0, 1, SizedBox::new(4, 2), CellOptions::new());
    grid.add(1, 0, SizedBox::new(4, 5), CellOptions::new());
    grid.add(1, 1, SizedBox::new(4, 4), CellOptions::new());
    assert_eq!(grid.requested_size().lines, 9);
}

#[test]
fn withdrawn_tree_never_touches_the_surface() {
    let mut grid = GridBox::new();
    grid.add(
        0,
        0,
        Frame::new().with_child(Entry::new().with_text("hi")),
        CellOptions::new(),
    );
    grid.add(0, 1, Button::new("go"), CellOptions::new());
    grid.reshape(Some(Rect::new(0, 0, 20, 5)));
    grid.reshape(None);

    let mut surface = Surface::new(20, 5);
    grid.render(&mut surface);
    assert!(surface.damage().is_none());
}

#[test]
fn zero_allocation_children_are_withdrawn_not_painted() {
    // A frame in a window too small for its border leaves no room for
    // the child; nothing may be painted on the child's behalf.
    let mut frame = Frame::new().with_child(Fill::new('X'));
    frame.reshape(Some(Rect::new(0, 0, 2, 2)));
    let mut surface = Surface::new(2, 2);
    frame.render(&mut surface);
    for y in 0..2 {
        for x in 0..2 {
            assert_ne!(surface.get(x, y).unwrap().ch, 'X');
        }
    }
}

#[test]
fn split_drag_stays_in_range_and_release_anywhere_ends_it() {
    let mut split = SplitBox::hsplit(Fill::new('a'), Fill::new('b'));
    split.reshape(Some(Rect::new(0, 0, 10, 20)));
    let divider_y = split.split_position().unwrap();
    assert!(split.handle_event(&press(3, divider_y)));

    for y in [0u16, 5, 19, 200, 7, 0] {
        split.handle_event(&drag(3, y));
        let pos = split.split_position().unwrap();
        assert!(pos <= 19, "position {pos} escaped the window");
    }

    assert!(split.is_dragging());
    assert!(split.handle_event(&release(500, 500)));
    assert!(!split.is_dragging());
}

#[test]
fn nested_split_grid_renders_disjoint_children() {
    let mut grid = GridBox::new();
    grid.add(0, 0, Fill::new('l'), CellOptions::new().expand(1));
    grid.add(0, 1, Fill::new('r'), CellOptions::new().expand(1));
    let mut split = SplitBox::hsplit(grid, Fill::new('_'));
    split.reshape(Some(Rect::new(0, 0, 10, 7)));
    split.set_split_position(4);

    let mut surface = Surface::new(10, 7);
    split.render(&mut surface);

    // Top half: grid split into two 5-wide fills
    assert_eq!(surface.get(0, 0).unwrap().ch, 'l');
    assert_eq!(surface.get(9, 3).unwrap().ch, 'r');
    // Divider at line 4, bottom fill below
    assert_eq!(surface.get(0, 4).unwrap().ch, '─');
    assert_eq!(surface.get(0, 5).unwrap().ch, '_');
}

#[test]
fn entry_in_a_frame_types_and_commits() {
    let committed: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&committed);
    let entry = Entry::new().on_enter(move |line| sink.borrow_mut().push(line.to_string()));
    let mut frame = Frame::new().with_title("say").with_child(entry);
    frame.reshape(Some(Rect::new(0, 0, 12, 3)));

    for c in "hey".chars() {
        assert!(frame.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c)))));
    }
    let mut surface = Surface::new(12, 3);
    frame.render(&mut surface);
    let inner: String = (1..4).map(|x| surface.get(x, 1).unwrap().ch).collect();
    assert_eq!(inner, "hey");

    frame.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter)));
    assert_eq!(committed.borrow().as_slice(), ["hey".to_string()]);
}

#[test]
fn grid_routes_clicks_to_the_right_widget() {
    let mut grid = GridBox::new();
    grid.add(0, 0, CheckButton::new("a"), CellOptions::new());
    grid.add(0, 1, CheckButton::new("b"), CellOptions::new());
    grid.reshape(Some(Rect::new(0, 0, 10, 1)));

    // Click in the second check button's cell
    assert!(grid.handle_event(&press(6, 0)));
    let mut surface = Surface::new(10, 1);
    grid.render(&mut surface);
    // The left checkbox is unticked, the right one ticked
    assert_eq!(surface.get(1, 0).unwrap().ch, ' ');
    assert_eq!(surface.get(6, 0).unwrap().ch, '✓');
}

#[test]
fn border_insets_inside_a_split() {
    let bordered = Border::new(weft_core::geometry::Sides::all(1)).with_child(Fill::new('c'));
    let mut split = SplitBox::vsplit(bordered, Fill::new('d'));
    split.reshape(Some(Rect::new(0, 0, 11, 4)));
    split.set_split_position(5);

    let mut surface = Surface::new(11, 4);
    split.render(&mut surface);
    assert_eq!(surface.get(1, 1).unwrap().ch, 'c');
    assert_eq!(surface.get(0, 0).unwrap().ch, ' ');
    assert_eq!(surface.get(5, 0).unwrap().ch, '│');
    assert_eq!(surface.get(6, 0).unwrap().ch, 'd');
}

/// A test widget that requests an exact size.
struct SizedBox {
    size: Size,
    window: Option<Rect>,
}

impl SizedBox {
    fn new(cols: u16, lines: u16) -> Self {
        Self {
            size: Size::new(cols, lines),
            window: None,
        }
    }
}

impl Widget for SizedBox {
    fn requested_size(&self) -> Size {
        self.size
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, _surface: &mut Surface) {}
}
