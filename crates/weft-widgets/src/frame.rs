#![forbid(unsafe_code)]

//! Frame widget: a line-drawn border with an optional title.

use weft_core::event::Event;
use weft_core::geometry::{Rect, Sides, Size};
use weft_core::text::text_width;
use weft_style::{LineStyle, Style};
use weft_surface::{Cell, Surface};

use crate::Widget;

/// Horizontal placement of a frame title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleAlign {
    /// Against the left corner.
    #[default]
    Left,
    /// Centered in the top edge.
    Center,
    /// Against the right corner.
    Right,
}

/// A single child surrounded by a box-drawn border.
///
/// The title is drawn in the top edge, clipped width-aware to the space
/// between the corners.
pub struct Frame {
    window: Option<Rect>,
    line_style: LineStyle,
    style: Style,
    title: Option<String>,
    title_align: TitleAlign,
    title_style: Style,
    child: Option<Box<dyn Widget>>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("window", &self.window)
            .field("line_style", &self.line_style)
            .field("title", &self.title)
            .field("child", &self.child.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Create an empty frame with single lines.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            line_style: LineStyle::Single,
            style: Style::default(),
            title: None,
            title_align: TitleAlign::Left,
            title_style: Style::default(),
            child: None,
        }
    }

    /// Set the border line style (builder).
    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the border paint style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the title (builder).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title alignment (builder).
    #[must_use]
    pub fn with_title_align(mut self, align: TitleAlign) -> Self {
        self.title_align = align;
        self
    }

    /// Set the title paint style (builder).
    #[must_use]
    pub fn with_title_style(mut self, style: Style) -> Self {
        self.title_style = style;
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

    /// Change the line style by configuration name.
    ///
    /// Unknown names are rejected and leave the frame unchanged.
    pub fn set_line_style_by_name(&mut self, name: &str) -> bool {
        match LineStyle::from_name(name) {
            Some(style) => {
                self.line_style = style;
                true
            }
            None => false,
        }
    }

    fn child_window(&self) -> Option<Rect> {
        let win = self.window?;
        let inner = win.inner(Sides::all(1));
        (!inner.is_empty()).then_some(inner)
    }

    fn border_cell(&self, ch: char) -> Cell {
        Cell::styled(ch, self.style)
    }

    fn render_border(&self, win: Rect, surface: &mut Surface) {
        let chars = self.line_style.chars();

        for x in win.x..win.right() {
            surface.set(x, win.y, self.border_cell(chars.horizontal));
            surface.set(x, win.bottom() - 1, self.border_cell(chars.horizontal));
        }
        for y in win.y..win.bottom() {
            surface.set(win.x, y, self.border_cell(chars.vertical));
            surface.set(win.right() - 1, y, self.border_cell(chars.vertical));
        }

        // Corners overwrite the edge characters
        surface.set(win.x, win.y, self.border_cell(chars.top_left));
        surface.set(win.right() - 1, win.y, self.border_cell(chars.top_right));
        surface.set(win.x, win.bottom() - 1, self.border_cell(chars.bottom_left));
        surface.set(
            win.right() - 1,
            win.bottom() - 1,
            self.border_cell(chars.bottom_right),
        );
    }

    fn render_title(&self, win: Rect, surface: &mut Surface) {
        let Some(title) = self.title.as_deref() else {
            return;
        };
        if win.width < 3 {
            return;
        }

        let available = (win.width - 2) as usize;
        let display = text_width(title).min(available);
        let x = match self.title_align {
            TitleAlign::Left => win.x + 1,
            TitleAlign::Center => win.x + 1 + ((available - display) / 2) as u16,
            TitleAlign::Right => win.right() - 1 - display as u16,
        };
        surface.draw_text(
            x,
            win.y,
            title,
            self.style.patched(self.title_style),
            win.right() - 1,
        );
    }
}

impl Widget for Frame {
    fn requested_size(&self) -> Size {
        let child = self
            .child
            .as_ref()
            .map(|c| c.requested_size())
            .unwrap_or(Size::ZERO);
        Size::new(child.cols.saturating_add(2), child.lines.saturating_add(2))
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
        if win.is_empty() {
            return;
        }

        self.render_border(win, surface);
        self.render_title(win, surface);
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
