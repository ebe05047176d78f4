#![forbid(unsafe_code)]

//! Border widget: a single child inset by per-edge margins.

use weft_core::event::Event;
use weft_core::geometry::{Rect, Sides, Size};
use weft_style::Style;
use weft_surface::Surface;

use crate::Widget;

/// Insets its child by configurable [`Sides`], painting the margin in
/// its own background style.
pub struct Border {
    window: Option<Rect>,
    sides: Sides,
    style: Style,
    child: Option<Box<dyn Widget>>,
}

impl std::fmt::Debug for Border {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Border")
            .field("window", &self.window)
            .field("sides", &self.sides)
            .field("child", &self.child.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Border {
    /// Create a border with the given margins and no child.
    #[must_use]
    pub fn new(sides: Sides) -> Self {
        Self {
            window: None,
            sides,
            style: Style::default(),
            child: None,
        }
    }

    /// Set the margin background style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the child (builder).
    #[must_use]
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Replace the child, returning the previous one.
    pub fn set_child(&mut self, child: Box<dyn Widget>) -> Option<Box<dyn Widget>> {
        let old = self.child.replace(child);
        self.reshape(self.window);
        old
    }

    /// Detach the child.
    pub fn take_child(&mut self) -> Option<Box<dyn Widget>> {
        self.child.take()
    }

    fn child_window(&self) -> Option<Rect> {
        let win = self.window?;
        let inner = win.inner(self.sides);
        (!inner.is_empty()).then_some(inner)
    }
}

impl Widget for Border {
    fn requested_size(&self) -> Size {
        let child = self
            .child
            .as_ref()
            .map(|c| c.requested_size())
            .unwrap_or(Size::ZERO);
        Size::new(
            child.cols.saturating_add(self.sides.horizontal_sum()),
            child.lines.saturating_add(self.sides.vertical_sum()),
        )
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
        let child_win = self.child_window();
        if let Some(child) = self.child.as_mut() {
            child.reshape(child_win);
        }
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, surface: &mut Surface) {
        let Some(win) = self.window else {
            return;
        };
        surface.erase(win, self.style);
        if let Some(child) = self.child.as_mut() {
            child.render(surface);
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        self.child
            .as_mut()
            .is_some_and(|child| child.handle_event(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Probe;

    #[test]
    fn requested_size_adds_margins() {
        let border = Border::new(Sides::vh(1, 2)).with_child(Probe::new(4, 3));
        assert_eq!(border.requested_size(), Size::new(8, 5));
    }

    #[test]
    fn child_is_inset() {
        let mut border = Border::new(Sides::all(1)).with_child(Probe::new(2, 2));
        border.reshape(Some(Rect::new(0, 0, 6, 6)));
        let mut surface = Surface::new(6, 6);
        border.render(&mut surface);
        assert_eq!(surface.get(1, 1).unwrap().ch, '·');
        assert_eq!(surface.get(4, 4).unwrap().ch, '·');
        assert_eq!(surface.get(0, 0).unwrap().ch, ' ');
        assert_eq!(surface.get(5, 5).unwrap().ch, ' ');
    }

    #[test]
    fn degenerate_inner_withdraws_child() {
        let mut border = Border::new(Sides::all(2)).with_child(Probe::new(2, 2));
        border.reshape(Some(Rect::new(0, 0, 4, 4)));
        // 4 wide minus 2+2 margin leaves nothing
        let mut surface = Surface::new(4, 4);
        border.render(&mut surface);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(surface.get(x, y).unwrap().ch, ' ');
            }
        }
    }

    #[test]
    fn withdraw_cascades_to_child() {
        let mut border = Border::new(Sides::all(1)).with_child(Probe::new(2, 2));
        border.reshape(Some(Rect::new(0, 0, 6, 6)));
        border.reshape(None);
        let mut surface = Surface::new(6, 6);
        border.render(&mut surface);
        assert!(surface.damage().is_none());
    }

    #[test]
    fn events_forward_to_child() {
        use weft_core::event::{KeyCode, KeyEvent};
        let mut border = Border::new(Sides::all(1)).with_child(Probe::new(2, 2).consuming());
        let key = Event::Key(KeyEvent::new(KeyCode::Tab));
        assert!(border.handle_event(&key));
        assert!(!Border::new(Sides::all(1)).handle_event(&key));
    }
}
