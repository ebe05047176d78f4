#![forbid(unsafe_code)]

//! The cell-grid drawing surface.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use weft_core::geometry::Rect;
use weft_style::Style;

use crate::cell::Cell;

/// An in-memory cell grid widgets paint into.
///
/// Every mutating operation accumulates a damage rectangle; the host
/// drains it with [`take_damage`](Surface::take_damage) to learn what
/// changed since the last present. Column-shift operations
/// ([`insert_cols`](Surface::insert_cols), [`delete_cols`](Surface::delete_cols))
/// are capability-gated: a surface built with
/// [`without_shift_ops`](Surface::without_shift_ops) rejects them, which
/// callers treat as "repaint instead".
#[derive(Debug, Clone)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: Option<(u16, u16)>,
    shift_ops: bool,
    damage: Option<Rect>,
}

impl Surface {
    /// Create a surface of the given size, with shift operations enabled.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
            cursor: None,
            shift_ops: true,
            damage: None,
        }
    }

    /// Disable column-shift operations (builder).
    ///
    /// Mirrors terminals that lack insert/delete-character support.
    #[must_use]
    pub fn without_shift_ops(mut self) -> Self {
        self.shift_ops = false;
        self
    }

    /// Surface width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Surface height in lines.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full surface rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Whether column-shift operations are available.
    #[must_use]
    pub const fn supports_shift_ops(&self) -> bool {
        self.shift_ops
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read the cell at `(x, y)`, `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write the cell at `(x, y)`. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
            self.mark_damage(Rect::new(x, y, 1, 1));
        }
    }

    /// Fill a rectangle with a cell, clipped to the surface.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let Some(rect) = rect.intersection(&self.bounds()) else {
            return;
        };
        for y in rect.y..rect.bottom() {
            let row = y as usize * self.width as usize;
            for x in rect.x..rect.right() {
                self.cells[row + x as usize] = cell;
            }
        }
        self.mark_damage(rect);
    }

    /// Erase a rectangle to blank cells carrying the style's colors.
    pub fn erase(&mut self, rect: Rect, style: Style) {
        self.fill(rect, Cell::styled(' ', style));
    }

    /// Apply a style patch to every cell in a rectangle, keeping content.
    pub fn apply_style(&mut self, rect: Rect, style: Style) {
        if style.is_empty() {
            return;
        }
        let Some(rect) = rect.intersection(&self.bounds()) else {
            return;
        };
        for y in rect.y..rect.bottom() {
            let row = y as usize * self.width as usize;
            for x in rect.x..rect.right() {
                self.cells[row + x as usize].apply(style);
            }
        }
        self.mark_damage(rect);
    }

    /// Draw a text run at `(x, y)`, stopping at `max_x` (exclusive).
    ///
    /// Walks grapheme clusters, honoring display widths; a wide cluster
    /// that would straddle `max_x` is not drawn. Returns the column after
    /// the last drawn cluster.
    pub fn draw_text(&mut self, mut x: u16, y: u16, content: &str, style: Style, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        if y >= self.height || x >= max_x {
            return x;
        }
        let start_x = x;
        for grapheme in content.graphemes(true) {
            let w = UnicodeWidthStr::width(grapheme);
            if w == 0 {
                continue;
            }
            if x + w as u16 > max_x {
                break;
            }
            if let Some(c) = grapheme.chars().next() {
                self.set_raw(x, y, Cell::styled(c, style));
                // Continuation cells of a wide cluster are blanked so
                // stale content can't peek out from under it.
                for cont in 1..w as u16 {
                    self.set_raw(x + cont, y, Cell::styled(' ', style));
                }
            }
            x = x.saturating_add(w as u16);
        }
        if x > start_x {
            self.mark_damage(Rect::new(start_x, y, x - start_x, 1));
        }
        x
    }

    fn set_raw(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Shift row `y` right within `[x, right)` by `n` columns.
    ///
    /// Cells falling off `right` are discarded; the vacated columns are
    /// filled with `fill`. Returns `false` (and does nothing) when shift
    /// operations are unavailable.
    pub fn insert_cols(&mut self, y: u16, x: u16, n: u16, right: u16, fill: Cell) -> bool {
        if !self.shift_ops {
            return false;
        }
        let right = right.min(self.width);
        if y >= self.height || x >= right || n == 0 {
            return true;
        }
        let n = n.min(right - x);
        let row = y as usize * self.width as usize;
        let (lo, hi) = (row + x as usize, row + right as usize);
        self.cells.copy_within(lo..hi - n as usize, lo + n as usize);
        self.cells[lo..lo + n as usize].fill(fill);
        self.mark_damage(Rect::new(x, y, right - x, 1));
        true
    }

    /// Shift row `y` left within `[x, right)` by `n` columns.
    ///
    /// The vacated columns at the right end are filled with `fill`.
    /// Returns `false` (and does nothing) when shift operations are
    /// unavailable.
    pub fn delete_cols(&mut self, y: u16, x: u16, n: u16, right: u16, fill: Cell) -> bool {
        if !self.shift_ops {
            return false;
        }
        let right = right.min(self.width);
        if y >= self.height || x >= right || n == 0 {
            return true;
        }
        let n = n.min(right - x);
        let row = y as usize * self.width as usize;
        let (lo, hi) = (row + x as usize, row + right as usize);
        self.cells.copy_within(lo + n as usize..hi, lo);
        self.cells[hi - n as usize..hi].fill(fill);
        self.mark_damage(Rect::new(x, y, right - x, 1));
        true
    }

    /// Place or hide the hardware cursor.
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    /// Current hardware cursor position.
    #[must_use]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Reset every cell to blank and damage the whole surface.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.mark_damage(self.bounds());
    }

    /// The accumulated damage region, if any.
    #[must_use]
    pub const fn damage(&self) -> Option<Rect> {
        self.damage
    }

    /// Drain the accumulated damage region.
    pub fn take_damage(&mut self) -> Option<Rect> {
        self.damage.take()
    }

    fn mark_damage(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.damage = Some(match self.damage {
            Some(d) => d.union(&rect),
            None => rect,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_style::Color;

    #[test]
    fn set_and_get_roundtrip() {
        let mut surface = Surface::new(4, 2);
        surface.set(1, 1, Cell::from_char('x'));
        assert_eq!(surface.get(1, 1).unwrap().ch, 'x');
        assert_eq!(surface.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn out_of_bounds_set_is_dropped() {
        let mut surface = Surface::new(2, 2);
        surface.set(5, 5, Cell::from_char('x'));
        assert!(surface.get(5, 5).is_none());
        assert!(surface.take_damage().is_none());
    }

    #[test]
    fn fill_clips_to_bounds() {
        let mut surface = Surface::new(3, 3);
        surface.fill(Rect::new(2, 2, 10, 10), Cell::from_char('#'));
        assert_eq!(surface.get(2, 2).unwrap().ch, '#');
        assert_eq!(surface.get(1, 1).unwrap().ch, ' ');
        assert_eq!(surface.take_damage(), Some(Rect::new(2, 2, 1, 1)));
    }

    #[test]
    fn draw_text_basic() {
        let mut surface = Surface::new(10, 1);
        let end = surface.draw_text(0, 0, "abc", Style::default(), 10);
        assert_eq!(end, 3);
        assert_eq!(surface.get(0, 0).unwrap().ch, 'a');
        assert_eq!(surface.get(2, 0).unwrap().ch, 'c');
        assert_eq!(surface.take_damage(), Some(Rect::new(0, 0, 3, 1)));
    }

    #[test]
    fn draw_text_clips_at_max_x() {
        let mut surface = Surface::new(10, 1);
        let end = surface.draw_text(0, 0, "abcdef", Style::default(), 3);
        assert_eq!(end, 3);
        assert_eq!(surface.get(3, 0).unwrap().ch, ' ');
    }

    #[test]
    fn draw_text_wide_cluster_does_not_straddle() {
        let mut surface = Surface::new(4, 1);
        // "日" is two columns; with max_x 1 it cannot be drawn at all
        let end = surface.draw_text(0, 0, "日", Style::default(), 1);
        assert_eq!(end, 0);
        let end = surface.draw_text(0, 0, "日", Style::default(), 4);
        assert_eq!(end, 2);
        assert_eq!(surface.get(0, 0).unwrap().ch, '日');
    }

    #[test]
    fn apply_style_keeps_content() {
        let mut surface = Surface::new(3, 1);
        surface.draw_text(0, 0, "ab", Style::default(), 3);
        surface.apply_style(Rect::new(0, 0, 3, 1), Style::new().fg(Color::Red));
        assert_eq!(surface.get(0, 0).unwrap().ch, 'a');
        assert_eq!(surface.get(0, 0).unwrap().fg, Color::Red);
    }

    #[test]
    fn insert_cols_shifts_right() {
        let mut surface = Surface::new(6, 1);
        surface.draw_text(0, 0, "abcd", Style::default(), 6);
        assert!(surface.insert_cols(0, 1, 2, 6, Cell::BLANK));
        let row: String = (0..6).map(|x| surface.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, "a  bcd");
    }

    #[test]
    fn insert_cols_discards_past_right_limit() {
        let mut surface = Surface::new(4, 1);
        surface.draw_text(0, 0, "abcd", Style::default(), 4);
        assert!(surface.insert_cols(0, 0, 1, 4, Cell::BLANK));
        let row: String = (0..4).map(|x| surface.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, " abc");
    }

    #[test]
    fn delete_cols_shifts_left() {
        let mut surface = Surface::new(6, 1);
        surface.draw_text(0, 0, "abcdef", Style::default(), 6);
        assert!(surface.delete_cols(0, 1, 2, 6, Cell::BLANK));
        let row: String = (0..6).map(|x| surface.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, "adef  ");
    }

    #[test]
    fn shift_ops_rejected_when_disabled() {
        let mut surface = Surface::new(4, 1).without_shift_ops();
        surface.draw_text(0, 0, "abcd", Style::default(), 4);
        surface.take_damage();
        assert!(!surface.insert_cols(0, 0, 1, 4, Cell::BLANK));
        assert!(!surface.delete_cols(0, 0, 1, 4, Cell::BLANK));
        // Rejected calls leave the row and damage untouched
        let row: String = (0..4).map(|x| surface.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, "abcd");
        assert!(surface.damage().is_none());
    }

    #[test]
    fn damage_accumulates_as_union() {
        let mut surface = Surface::new(10, 10);
        surface.set(1, 1, Cell::from_char('a'));
        surface.set(4, 6, Cell::from_char('b'));
        assert_eq!(surface.take_damage(), Some(Rect::new(1, 1, 4, 6)));
        assert!(surface.damage().is_none());
    }

    #[test]
    fn cursor_roundtrip() {
        let mut surface = Surface::new(4, 4);
        assert_eq!(surface.cursor(), None);
        surface.set_cursor(Some((2, 3)));
        assert_eq!(surface.cursor(), Some((2, 3)));
        surface.set_cursor(None);
        assert_eq!(surface.cursor(), None);
    }
}
