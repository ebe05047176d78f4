#![forbid(unsafe_code)]

//! Widget classes for Weft.
//!
//! Widgets own a window — a rectangle of the shared [`Surface`] assigned
//! by their parent — and are driven through four operations: a
//! requested-size query, a reshape (which may withdraw the window), a
//! render, and input handling. Containers partition their own window
//! into disjoint child windows and forward events down the tree.

pub mod border;
pub mod button;
pub mod check;
pub mod entry;
pub mod fill;
pub mod frame;
pub mod gridbox;
pub mod placegrid;
pub mod split;

pub use border::Border;
pub use button::Button;
pub use check::{CheckButton, RadioButton, RadioGroup};
pub use entry::Entry;
pub use fill::Fill;
pub use frame::{Frame, TitleAlign};
pub use gridbox::{CellOptions, GridBox, GridStyle};
pub use placegrid::Placegrid;
pub use split::{SplitBox, SplitStyle};

use weft_core::event::{Event, MouseEvent};
use weft_core::geometry::{Rect, Size};
use weft_surface::Surface;

/// A renderable, resizable, input-handling component.
///
/// A widget's window is `None` when withdrawn; a withdrawn widget must
/// not paint anything.
pub trait Widget {
    /// The size the widget would like, in columns and lines.
    fn requested_size(&self) -> Size;

    /// Assign a new window, or withdraw it with `None`.
    ///
    /// Containers recompute and reassign their children's windows here.
    fn reshape(&mut self, window: Option<Rect>);

    /// The currently assigned window, `None` when withdrawn.
    fn window(&self) -> Option<Rect>;

    /// Paint into the surface. Must be a no-op when withdrawn.
    fn render(&mut self, surface: &mut Surface);

    /// Handle an input event. Returns `true` when consumed.
    fn handle_event(&mut self, event: &Event) -> bool {
        let _ = event;
        false
    }
}

impl Widget for Box<dyn Widget> {
    fn requested_size(&self) -> Size {
        (**self).requested_size()
    }

    fn reshape(&mut self, window: Option<Rect>) {
        (**self).reshape(window);
    }

    fn window(&self) -> Option<Rect> {
        (**self).window()
    }

    fn render(&mut self, surface: &mut Surface) {
        (**self).render(surface);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        (**self).handle_event(event)
    }
}

/// Check whether a mouse event lands inside a widget's window.
pub(crate) fn mouse_in(window: Option<Rect>, mouse: &MouseEvent) -> bool {
    window.is_some_and(|win| win.contains(mouse.x, mouse.y))
}


#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::event::{MouseButton, MouseEventKind};

    #[test]
    fn mouse_in_checks_window() {
        let ev = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 3, 3);
        assert!(mouse_in(Some(Rect::new(0, 0, 5, 5)), &ev));
        assert!(!mouse_in(Some(Rect::new(4, 4, 5, 5)), &ev));
        assert!(!mouse_in(None, &ev));
    }

    #[test]
    fn widget_trait_is_object_safe() {
        let probe = testing::Probe::new(2, 1);
        let boxed: Box<dyn Widget> = Box::new(probe);
        assert_eq!(boxed.requested_size(), Size::new(2, 1));
    }
}
