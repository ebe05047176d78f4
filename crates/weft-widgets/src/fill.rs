#![forbid(unsafe_code)]

//! Fill widget.

use weft_core::geometry::{Rect, Size};
use weft_style::Style;
use weft_surface::{Cell, Surface};

use crate::Widget;

/// Fills its window with a single styled character.
#[derive(Debug, Clone)]
pub struct Fill {
    window: Option<Rect>,
    ch: char,
    style: Style,
}

impl Default for Fill {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl Fill {
    /// Create a fill with the given character.
    #[must_use]
    pub fn new(ch: char) -> Self {
        Self {
            window: None,
            ch,
            style: Style::default(),
        }
    }

    /// Set the fill style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Fill {
    fn requested_size(&self) -> Size {
        Size::new(1, 1)
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, surface: &mut Surface) {
        if let Some(win) = self.window {
            surface.fill(win, Cell::styled(self.ch, self.style));
        }
    }
}
