#![forbid(unsafe_code)]

//! Single-line text entry widget.
//!
//! All edits funnel through one primitive, [`splice`](Entry::splice),
//! which replaces a grapheme range with new text and returns what it
//! removed. Every mutation also computes a redraw plan — the cheapest
//! screen update that reflects it — which the next [`render`] pass
//! consumes:
//!
//! - edits wholly right of the viewport issue no repaint at all;
//! - pure cursor motion only moves the cursor indicator;
//! - in-view edits shift the unaffected tail with the surface's
//!   column-shift operations and repaint just the inserted columns,
//!   falling back to a tail repaint when the surface lacks shift support;
//! - scroll changes, and edits landing left of the viewport, repaint the
//!   visible line. (The left-of-viewport case is deliberate: the scroll
//!   is clamped and the line repainted rather than treated as
//!   unreachable.)
//!
//! [`render`]: Widget::render

use weft_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEventKind};
use weft_core::geometry::{Rect, Size};
use weft_core::text::{byte_offset, col_of_index, grapheme_count, index_near_col, text_width};
use weft_style::Style;
use weft_surface::Surface;

use crate::{Widget, mouse_in};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Columns of slack kept between the cursor and a viewport edge.
const SCROLL_MARGIN: usize = 5;

/// The cheapest screen update covering the mutations since last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Redraw {
    /// Nothing visible changed.
    #[default]
    None,
    /// Only the cursor indicator moved.
    Cursor,
    /// One in-view edit: shift the tail and repaint the edited columns.
    Text {
        /// Viewport-relative column of the edit.
        at: usize,
        /// Net column delta of the edit (insert width − delete width).
        shift: isize,
        /// Columns of inserted text to repaint at `at`.
        repaint: usize,
    },
    /// Repaint the whole visible line.
    Line,
}

/// A single-line editable text field.
pub struct Entry {
    window: Option<Rect>,
    text: String,
    cursor: usize,
    scroll_offset: usize,
    overwrite: bool,
    style: Style,
    on_enter: Option<Box<dyn FnMut(&str)>>,
    redraw: Redraw,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("window", &self.window)
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("scroll_offset", &self.scroll_offset)
            .field("overwrite", &self.overwrite)
            .field("redraw", &self.redraw)
            .finish()
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    /// Create an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            text: String::new(),
            cursor: 0,
            scroll_offset: 0,
            overwrite: false,
            style: Style::default(),
            on_enter: None,
            redraw: Redraw::None,
        }
    }

    /// Set the initial text, cursor at the end (builder).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = grapheme_count(&self.text);
        self
    }

    /// Set the paint style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the line-commit callback (builder).
    ///
    /// Invoked on Enter with the buffer content when it is non-empty.
    /// The buffer is left as it was; clear it from outside if the
    /// committed line should vanish.
    #[must_use]
    pub fn on_enter(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    // --- Buffer access ---

    /// The buffer content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cursor position as a grapheme index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The horizontal scroll offset in columns.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Whether typed text replaces instead of inserting.
    #[must_use]
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Replace the whole buffer, cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = grapheme_count(&self.text);
        self.reposition_scroll();
        self.bump(Redraw::Line);
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Move the cursor to a grapheme index, clamped to the buffer.
    pub fn set_cursor_position(&mut self, position: usize) {
        let position = position.min(grapheme_count(&self.text));
        if position != self.cursor {
            self.cursor = position;
            let plan = if self.reposition_scroll() {
                Redraw::Line
            } else {
                Redraw::Cursor
            };
            self.bump(plan);
        }
    }

    // --- The mutation primitive ---

    /// Replace `delete_count` graphemes at `pos` with `insert`.
    ///
    /// Returns the deleted text. Positions are clamped to the buffer.
    /// The cursor shifts with the edit: positions past the spliced range
    /// move by the length delta, positions within it land at the end of
    /// the inserted text, and positions before it stay put.
    pub fn splice(&mut self, pos: usize, delete_count: usize, insert: &str) -> String {
        let count = grapheme_count(&self.text);
        let pos = pos.min(count);
        let delete_count = delete_count.min(count - pos);

        let byte_start = byte_offset(&self.text, pos);
        let byte_end = byte_offset(&self.text, pos + delete_count);
        let deleted = self.text[byte_start..byte_end].to_string();
        self.text.replace_range(byte_start..byte_end, insert);

        let insert_len = grapheme_count(insert);
        let end = pos + delete_count;
        if self.cursor >= end {
            self.cursor = self.cursor - delete_count + insert_len;
        } else if self.cursor >= pos {
            self.cursor = pos + insert_len;
        }

        let edit_col = col_of_index(&self.text, pos);
        let scroll_changed = self.reposition_scroll();
        if let Some(win) = self.window {
            let width = win.width as usize;
            let plan = if scroll_changed {
                Redraw::Line
            } else if edit_col >= self.scroll_offset + width {
                // Every touched column sits right of the viewport
                Redraw::None
            } else if edit_col < self.scroll_offset {
                // Edit left of the viewport: everything visible may have
                // shifted, so repaint the line
                Redraw::Line
            } else {
                Redraw::Text {
                    at: edit_col - self.scroll_offset,
                    shift: text_width(insert) as isize - text_width(&deleted) as isize,
                    repaint: text_width(insert),
                }
            };
            self.bump(plan);
        }

        deleted
    }

    // --- Word boundaries (whitespace-delimited) ---

    fn is_ws(g: &str) -> bool {
        g.chars().all(char::is_whitespace)
    }

    /// Start of the word at or before `pos`; `0` when there is none.
    #[must_use]
    pub fn find_word_start_backward(&self, pos: usize) -> usize {
        let gs: Vec<&str> = self.text.graphemes(true).collect();
        let mut p = pos.min(gs.len());
        while p > 0 && Self::is_ws(gs[p - 1]) {
            p -= 1;
        }
        while p > 0 && !Self::is_ws(gs[p - 1]) {
            p -= 1;
        }
        p
    }

    /// End of the last word ending at or before `pos`; `0` when there is
    /// none.
    #[must_use]
    pub fn find_word_end_backward(&self, pos: usize) -> usize {
        let gs: Vec<&str> = self.text.graphemes(true).collect();
        let mut p = pos.min(gs.len());
        while p > 0 && Self::is_ws(gs[p - 1]) {
            p -= 1;
        }
        p
    }

    /// Start of the next word after `pos`, or `None` past the last word.
    #[must_use]
    pub fn find_word_start_forward(&self, pos: usize) -> Option<usize> {
        let gs: Vec<&str> = self.text.graphemes(true).collect();
        let mut p = pos.min(gs.len());
        while p < gs.len() && !Self::is_ws(gs[p]) {
            p += 1;
        }
        while p < gs.len() && Self::is_ws(gs[p]) {
            p += 1;
        }
        (p < gs.len()).then_some(p)
    }

    /// End of the word at or after `pos`, or `None` when no word remains.
    #[must_use]
    pub fn find_word_end_forward(&self, pos: usize) -> Option<usize> {
        let gs: Vec<&str> = self.text.graphemes(true).collect();
        let mut p = pos.min(gs.len());
        while p < gs.len() && Self::is_ws(gs[p]) {
            p += 1;
        }
        if p >= gs.len() {
            return None;
        }
        while p < gs.len() && !Self::is_ws(gs[p]) {
            p += 1;
        }
        Some(p)
    }

    // --- Editing operations ---

    fn type_text(&mut self, text: &str) {
        let count = grapheme_count(&self.text);
        let delete = if self.overwrite {
            grapheme_count(text).min(count - self.cursor)
        } else {
            0
        };
        self.splice(self.cursor, delete, text);
    }

    fn delete_char_backward(&mut self) {
        if self.cursor > 0 {
            self.splice(self.cursor - 1, 1, "");
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < grapheme_count(&self.text) {
            self.splice(self.cursor, 1, "");
        }
    }

    fn delete_word_backward(&mut self) {
        let start = self.find_word_start_backward(self.cursor);
        if start < self.cursor {
            self.splice(start, self.cursor - start, "");
        }
    }

    fn delete_word_forward(&mut self) {
        let end = self
            .find_word_end_forward(self.cursor)
            .unwrap_or_else(|| grapheme_count(&self.text));
        if end > self.cursor {
            self.splice(self.cursor, end - self.cursor, "");
        }
    }

    fn delete_to_line_start(&mut self) {
        if self.cursor > 0 {
            self.splice(0, self.cursor, "");
        }
    }

    fn delete_to_line_end(&mut self) {
        let count = grapheme_count(&self.text);
        if self.cursor < count {
            self.splice(self.cursor, count - self.cursor, "");
        }
    }

    fn commit(&mut self) {
        if self.text.is_empty() {
            return;
        }
        if let Some(callback) = self.on_enter.as_mut() {
            callback(&self.text);
        }
    }

    // --- Scrolling ---

    /// Re-derive the scroll offset from the cursor column.
    ///
    /// The cursor is kept outside a margin of both viewport edges by
    /// stepping the offset in half-viewport increments; the offset never
    /// goes negative and never scrolls the buffer fully out of view.
    fn reposition_scroll(&mut self) -> bool {
        let Some(win) = self.window else {
            return false;
        };
        let width = win.width as usize;
        if width == 0 {
            return false;
        }

        let col = col_of_index(&self.text, self.cursor);
        let margin = SCROLL_MARGIN.min(width.saturating_sub(1) / 2);
        let half = (width / 2).max(1);

        let mut scroll = self.scroll_offset;
        while scroll > 0 && col < scroll + margin {
            scroll = scroll.saturating_sub(half);
        }
        while col > scroll + width - 1 - margin {
            scroll += half;
        }

        if scroll != self.scroll_offset {
            self.scroll_offset = scroll;
            true
        } else {
            false
        }
    }

    fn bump(&mut self, plan: Redraw) {
        self.redraw = match (self.redraw, plan) {
            (Redraw::Line, _) | (_, Redraw::Line) => Redraw::Line,
            (Redraw::None, p) | (p, Redraw::None) => p,
            (Redraw::Cursor, p) => p,
            (p @ Redraw::Text { .. }, Redraw::Cursor) => p,
            (Redraw::Text { .. }, Redraw::Text { .. }) => Redraw::Line,
        };
    }

    // --- Input ---

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let count = grapheme_count(&self.text);
        match key.code {
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => {
                self.type_text(&c.to_string());
                true
            }
            KeyCode::Char('b') if key.alt() => {
                self.set_cursor_position(self.find_word_start_backward(self.cursor));
                true
            }
            KeyCode::Char('f') if key.alt() => {
                let pos = self.find_word_start_forward(self.cursor).unwrap_or(count);
                self.set_cursor_position(pos);
                true
            }
            KeyCode::Char('a') if key.ctrl() => {
                self.set_cursor_position(0);
                true
            }
            KeyCode::Char('e') if key.ctrl() => {
                self.set_cursor_position(count);
                true
            }
            KeyCode::Char('d') if key.ctrl() => {
                self.delete_char_forward();
                true
            }
            KeyCode::Char('w') if key.ctrl() => {
                self.delete_word_backward();
                true
            }
            KeyCode::Char('d') if key.alt() => {
                self.delete_word_forward();
                true
            }
            KeyCode::Char('u') if key.ctrl() => {
                self.delete_to_line_start();
                true
            }
            KeyCode::Char('k') if key.ctrl() => {
                self.delete_to_line_end();
                true
            }
            KeyCode::Left if key.ctrl() => {
                self.set_cursor_position(self.find_word_start_backward(self.cursor));
                true
            }
            KeyCode::Right if key.ctrl() => {
                let pos = self.find_word_start_forward(self.cursor).unwrap_or(count);
                self.set_cursor_position(pos);
                true
            }
            KeyCode::Left => {
                self.set_cursor_position(self.cursor.saturating_sub(1));
                true
            }
            KeyCode::Right => {
                self.set_cursor_position(self.cursor + 1);
                true
            }
            KeyCode::Home => {
                self.set_cursor_position(0);
                true
            }
            KeyCode::End => {
                self.set_cursor_position(count);
                true
            }
            KeyCode::Backspace if key.ctrl() || key.alt() => {
                self.delete_word_backward();
                true
            }
            KeyCode::Backspace => {
                self.delete_char_backward();
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Insert => {
                self.overwrite = !self.overwrite;
                true
            }
            KeyCode::Enter => {
                self.commit();
                true
            }
            _ => false,
        }
    }

    // --- Painting ---

    fn place_cursor(&self, surface: &mut Surface, win: Rect) {
        let col = col_of_index(&self.text, self.cursor);
        if col >= self.scroll_offset {
            let rel = col - self.scroll_offset;
            if rel < win.width as usize {
                surface.set_cursor(Some((win.x + rel as u16, win.y)));
                return;
            }
        }
        surface.set_cursor(None);
    }

    /// Repaint buffer columns `[from_rel, to_rel)` of the viewport.
    fn render_span(&self, surface: &mut Surface, win: Rect, from_rel: usize, to_rel: usize) {
        let width = win.width as usize;
        let from_rel = from_rel.min(width);
        let to_rel = to_rel.min(width);
        if from_rel >= to_rel {
            return;
        }

        surface.erase(
            Rect::new(
                win.x + from_rel as u16,
                win.y,
                (to_rel - from_rel) as u16,
                1,
            ),
            self.style,
        );

        let span_start = self.scroll_offset + from_rel;
        let span_end = self.scroll_offset + to_rel;
        let mut col = 0usize;
        for g in self.text.graphemes(true) {
            let w = UnicodeWidthStr::width(g);
            if w == 0 {
                continue;
            }
            let start = col;
            col += w;
            if col <= span_start {
                continue;
            }
            if start >= span_end {
                break;
            }
            // A cluster straddling the left viewport edge cannot be
            // painted in half; leave that column blank.
            if start < self.scroll_offset {
                continue;
            }
            let rel = start - self.scroll_offset;
            surface.draw_text(win.x + rel as u16, win.y, g, self.style, win.right());
        }
    }

    fn render_line(&self, surface: &mut Surface, win: Rect) {
        surface.erase(win, self.style);
        self.render_span(surface, win, 0, win.width as usize);
        self.place_cursor(surface, win);
    }

    fn render_edit(&self, surface: &mut Surface, win: Rect, at: usize, shift: isize, repaint: usize) {
        let width = win.width as usize;
        let x = win.x + at.min(width) as u16;
        let fill = weft_surface::Cell::styled(' ', self.style);

        let shifted = match shift {
            0 => true,
            s if s > 0 => surface.insert_cols(win.y, x, s as u16, win.right(), fill),
            s => surface.delete_cols(win.y, x, (-s) as u16, win.right(), fill),
        };

        if shifted {
            self.render_span(surface, win, at, at + repaint);
            if shift < 0 {
                // A leftward shift reveals columns at the right edge;
                // text previously scrolled out slides into them.
                let revealed = ((-shift) as usize).min(width);
                self.render_span(surface, win, width - revealed, width);
            }
        } else {
            // No column-shift support: repaint from the edit to the edge
            self.render_span(surface, win, at, width);
        }
        self.place_cursor(surface, win);
    }
}

impl Widget for Entry {
    fn requested_size(&self) -> Size {
        // One line, plus a column for the cursor to rest past the text
        Size::new(text_width(&self.text) as u16 + 1, 1)
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
        if window.is_some() {
            self.reposition_scroll();
            self.redraw = Redraw::Line;
        }
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, surface: &mut Surface) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "entry_render",
            cursor = self.cursor,
            scroll = self.scroll_offset
        )
        .entered();

        let Some(win) = self.window else {
            return;
        };
        if win.is_empty() {
            return;
        }

        match std::mem::take(&mut self.redraw) {
            Redraw::None => {}
            Redraw::Cursor => self.place_cursor(surface, win),
            Redraw::Text { at, shift, repaint } => {
                self.render_edit(surface, win, at, shift, repaint)
            }
            Redraw::Line => self.render_line(surface, win),
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some(win) = self.window
                    && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && mouse_in(self.window, mouse)
                {
                    let col = (mouse.x - win.x) as usize + self.scroll_offset;
                    self.set_cursor_position(index_near_col(&self.text, col));
                    return true;
                }
                false
            }
        }
    }
}
