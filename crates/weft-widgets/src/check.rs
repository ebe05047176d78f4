#![forbid(unsafe_code)]

//! Check and radio button widgets.

use std::cell::RefCell;
use std::rc::Rc;

use weft_core::event::{Event, KeyCode, MouseButton, MouseEventKind};
use weft_core::geometry::{Rect, Size};
use weft_core::text::text_width;
use weft_style::Style;
use weft_surface::Surface;

use crate::{Widget, mouse_in};

/// A toggleable `[✓] label` widget.
#[derive(Debug)]
pub struct CheckButton {
    window: Option<Rect>,
    label: String,
    checked: bool,
    style: Style,
    tick_style: Style,
    focused: bool,
}

impl CheckButton {
    /// Create an unchecked check button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            window: None,
            label: label.into(),
            checked: false,
            style: Style::default(),
            tick_style: Style::default(),
            focused: false,
        }
    }

    /// Set the initial checked state (builder).
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the base style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style of the tick mark (builder).
    #[must_use]
    pub fn with_tick_style(mut self, style: Style) -> Self {
        self.tick_style = style;
        self
    }

    /// Whether the button is checked.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state directly.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// Give or take keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

impl Widget for CheckButton {
    fn requested_size(&self) -> Size {
        // "[✓] label"
        Size::new(text_width(&self.label) as u16 + 4, 1)
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, surface: &mut Surface) {
        let Some(win) = self.window else {
            return;
        };
        surface.erase(win, self.style);
        let y = win.y + win.height / 2;
        let mark = if self.checked { '✓' } else { ' ' };
        let mut x = surface.draw_text(win.x, y, "[", self.style, win.right());
        x = surface.draw_text(x, y, &mark.to_string(), self.style.patched(self.tick_style), win.right());
        x = surface.draw_text(x, y, "] ", self.style, win.right());
        surface.draw_text(x, y, &self.label, self.style, win.right());
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && mouse_in(self.window, mouse)
                {
                    self.toggle();
                    return true;
                }
                false
            }
            Event::Key(key) if self.focused => {
                if key.code == KeyCode::Char(' ') {
                    self.toggle();
                    return true;
                }
                false
            }
            Event::Key(_) => false,
        }
    }
}

#[derive(Debug, Default)]
struct GroupInner {
    active: Option<u64>,
    next_id: u64,
}

/// Shared state tying a set of [`RadioButton`]s together.
///
/// At most one member of a group is active. The group is cheap to clone;
/// clones refer to the same state.
#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    inner: Rc<RefCell<GroupInner>>,
}

impl RadioGroup {
    /// Create an empty group with no active member.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    fn activate(&self, id: u64) {
        self.inner.borrow_mut().active = Some(id);
    }

    fn is_active(&self, id: u64) -> bool {
        self.inner.borrow().active == Some(id)
    }

    /// Whether any member of the group is active.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.inner.borrow().active.is_some()
    }
}

/// A `(•) label` widget; activating one deactivates its group siblings.
#[derive(Debug)]
pub struct RadioButton {
    window: Option<Rect>,
    label: String,
    group: RadioGroup,
    id: u64,
    style: Style,
    tick_style: Style,
    focused: bool,
}

impl RadioButton {
    /// Create a radio button as a member of `group`.
    #[must_use]
    pub fn new(label: impl Into<String>, group: &RadioGroup) -> Self {
        Self {
            window: None,
            label: label.into(),
            group: group.clone(),
            id: group.register(),
            style: Style::default(),
            tick_style: Style::default(),
            focused: false,
        }
    }

    /// Set the base style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style of the active mark (builder).
    #[must_use]
    pub fn with_tick_style(mut self, style: Style) -> Self {
        self.tick_style = style;
        self
    }

    /// Whether this button is the group's active member.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.group.is_active(self.id)
    }

    /// Make this button the group's active member.
    pub fn activate(&mut self) {
        self.group.activate(self.id);
    }

    /// Give or take keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

impl Widget for RadioButton {
    fn requested_size(&self) -> Size {
        // "(•) label"
        Size::new(text_width(&self.label) as u16 + 4, 1)
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, surface: &mut Surface) {
        let Some(win) = self.window else {
            return;
        };
        surface.erase(win, self.style);
        let y = win.y + win.height / 2;
        let mark = if self.is_active() { '•' } else { ' ' };
        let mut x = surface.draw_text(win.x, y, "(", self.style, win.right());
        x = surface.draw_text(x, y, &mark.to_string(), self.style.patched(self.tick_style), win.right());
        x = surface.draw_text(x, y, ") ", self.style, win.right());
        surface.draw_text(x, y, &self.label, self.style, win.right());
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && mouse_in(self.window, mouse)
                {
                    self.activate();
                    return true;
                }
                false
            }
            Event::Key(key) if self.focused => {
                if key.code == KeyCode::Char(' ') {
                    self.activate();
                    return true;
                }
                false
            }
            Event::Key(_) => false,
        }
    }
}
