#![forbid(unsafe_code)]

//! Push-button widget.

use weft_core::event::{Event, KeyCode, MouseButton, MouseEventKind};
use weft_core::geometry::{Rect, Size};
use weft_core::text::text_width;
use weft_style::Style;
use weft_surface::Surface;

use crate::{Widget, mouse_in};

/// A clickable button rendered as `< label >`.
///
/// The click fires on release with the pointer still inside the window;
/// pressing and dragging away cancels. A focused button also activates
/// on Enter or Space.
pub struct Button {
    window: Option<Rect>,
    label: String,
    style: Style,
    pressed_style: Style,
    on_click: Option<Box<dyn FnMut()>>,
    pressed: bool,
    focused: bool,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("window", &self.window)
            .field("pressed", &self.pressed)
            .field("focused", &self.focused)
            .field("on_click", &self.on_click.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Button {
    /// Create a button with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            window: None,
            label: label.into(),
            style: Style::default(),
            pressed_style: Style::default(),
            on_click: None,
            pressed: false,
            focused: false,
        }
    }

    /// Set the base style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style used while the button is held down (builder).
    #[must_use]
    pub fn with_pressed_style(mut self, style: Style) -> Self {
        self.pressed_style = style;
        self
    }

    /// Set the click callback (builder).
    #[must_use]
    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// The button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button is currently held down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Give or take keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn fire(&mut self) {
        if let Some(cb) = self.on_click.as_mut() {
            cb();
        }
    }
}

impl Widget for Button {
    fn requested_size(&self) -> Size {
        // "< label >"
        let cols = text_width(&self.label) as u16 + 4;
        Size::new(cols, 1)
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
        let style = if self.pressed {
            self.style.patched(self.pressed_style)
        } else {
            self.style
        };
        surface.erase(win, style);

        let text = format!("< {} >", self.label);
        let width = text_width(&text) as u16;
        let x = win.x + win.width.saturating_sub(width) / 2;
        let y = win.y + win.height / 2;
        surface.draw_text(x, y, &text, style, win.right());
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) if mouse_in(self.window, mouse) => {
                    self.pressed = true;
                    true
                }
                MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                    self.pressed = false;
                    if mouse_in(self.window, mouse) {
                        self.fire();
                    }
                    true
                }
                _ => false,
            },
            Event::Key(key) if self.focused => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.fire();
                    true
                }
                _ => false,
            },
            Event::Key(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as StdCell;
    use std::rc::Rc;
    use weft_core::event::{KeyEvent, MouseEvent};

    fn click_counter() -> (Rc<StdCell<u32>>, Button) {
        let count = Rc::new(StdCell::new(0));
        let counter = Rc::clone(&count);
        let button = Button::new("ok").on_click(move || counter.set(counter.get() + 1));
        (count, button)
    }

    #[test]
    fn requested_size_wraps_label() {
        assert_eq!(Button::new("ok").requested_size(), Size::new(6, 1));
        assert_eq!(Button::new("").requested_size(), Size::new(4, 1));
    }

    #[test]
    fn click_fires_on_release_inside() {
        let (count, mut button) = click_counter();
        button.reshape(Some(Rect::new(0, 0, 6, 1)));

        let down = Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 1, 0));
        let up = Event::Mouse(MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 2, 0));
        assert!(button.handle_event(&down));
        assert!(button.is_pressed());
        assert!(button.handle_event(&up));
        assert!(!button.is_pressed());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn release_outside_cancels() {
        let (count, mut button) = click_counter();
        button.reshape(Some(Rect::new(0, 0, 6, 1)));

        let down = Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 1, 0));
        let up = Event::Mouse(MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 20, 5));
        button.handle_event(&down);
        button.handle_event(&up);
        assert_eq!(count.get(), 0);
        assert!(!button.is_pressed());
    }

    #[test]
    fn press_outside_is_ignored() {
        let (count, mut button) = click_counter();
        button.reshape(Some(Rect::new(0, 0, 6, 1)));
        let down = Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 9, 9));
        assert!(!button.handle_event(&down));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn key_activation_requires_focus() {
        let (count, mut button) = click_counter();
        button.reshape(Some(Rect::new(0, 0, 6, 1)));

        let enter = Event::Key(KeyEvent::new(KeyCode::Enter));
        assert!(!button.handle_event(&enter));
        assert_eq!(count.get(), 0);

        button.set_focused(true);
        assert!(button.handle_event(&enter));
        let space = Event::Key(KeyEvent::new(KeyCode::Char(' ')));
        assert!(button.handle_event(&space));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn renders_centered_label() {
        let mut button = Button::new("ok");
        button.reshape(Some(Rect::new(0, 0, 10, 1)));
        let mut surface = Surface::new(10, 1);
        button.render(&mut surface);
        let row: String = (0..10).map(|x| surface.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, "  < ok >  ");
    }

    #[test]
    fn withdrawn_button_paints_nothing() {
        let mut button = Button::new("ok");
        let mut surface = Surface::new(10, 1);
        button.render(&mut surface);
        assert!(surface.damage().is_none());
    }
}
