#![forbid(unsafe_code)]

//! Placeholder grid widget.

use weft_core::geometry::{Rect, Size};
use weft_style::{LineStyle, Style};
use weft_surface::{Cell, Surface};

use crate::Widget;

/// Draws a lattice pattern as a stand-in for unfinished content.
///
/// Grid lines repeat at a configurable cell pitch, with crossings at
/// intersections, so allocated space stays visible during layout work.
#[derive(Debug, Clone)]
pub struct Placegrid {
    window: Option<Rect>,
    pitch: Size,
    line_style: LineStyle,
    style: Style,
}

impl Default for Placegrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Placegrid {
    /// Create a placegrid with an 8×4 cell pitch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            pitch: Size::new(8, 4),
            line_style: LineStyle::Single,
            style: Style::default(),
        }
    }

    /// Set the lattice pitch in columns and lines (builder).
    ///
    /// Zero components are bumped to 1.
    #[must_use]
    pub fn with_pitch(mut self, cols: u16, lines: u16) -> Self {
        self.pitch = Size::new(cols.max(1), lines.max(1));
        self
    }

    /// Set the line character set (builder).
    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the paint style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Placegrid {
    fn requested_size(&self) -> Size {
        self.pitch
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
        let chars = self.line_style.chars();
        surface.erase(win, self.style);

        for y in 0..win.height {
            let on_row = y % self.pitch.lines == 0;
            for x in 0..win.width {
                let on_col = x % self.pitch.cols == 0;
                let ch = match (on_row, on_col) {
                    (true, true) => chars.cross,
                    (true, false) => chars.horizontal,
                    (false, true) => chars.vertical,
                    (false, false) => continue,
                };
                surface.set(win.x + x, win.y + y, Cell::styled(ch, self.style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_lands_on_pitch_multiples() {
        let mut grid = Placegrid::new().with_pitch(4, 2);
        grid.reshape(Some(Rect::new(0, 0, 9, 5)));
        let mut surface = Surface::new(9, 5);
        grid.render(&mut surface);

        let chars = LineStyle::Single.chars();
        assert_eq!(surface.get(0, 0).unwrap().ch, chars.cross);
        assert_eq!(surface.get(4, 0).unwrap().ch, chars.cross);
        assert_eq!(surface.get(4, 2).unwrap().ch, chars.cross);
        assert_eq!(surface.get(2, 0).unwrap().ch, chars.horizontal);
        assert_eq!(surface.get(0, 1).unwrap().ch, chars.vertical);
        assert_eq!(surface.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn withdrawn_paints_nothing() {
        let mut grid = Placegrid::new();
        let mut surface = Surface::new(8, 8);
        grid.render(&mut surface);
        assert!(surface.damage().is_none());
    }

    #[test]
    fn pitch_zero_is_bumped() {
        let grid = Placegrid::new().with_pitch(0, 0);
        assert_eq!(grid.requested_size(), Size::new(1, 1));
    }
}
