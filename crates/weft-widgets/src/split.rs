#![forbid(unsafe_code)]

//! Split container widget.
//!
//! Two children separated by a draggable divider bar. The divider drag
//! is a two-state machine: `idle` until a primary-button press lands on
//! the divider, `dragging` until the button is released — wherever the
//! pointer ends up. While dragging, pointer movement moves the split
//! position (always clamped to the window) and relayouts both children.

use weft_core::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use weft_core::geometry::{Rect, Size};
use weft_layout::Direction;
use weft_style::{LineStyle, Style};
use weft_surface::{Cell, Surface};

use crate::{Widget, mouse_in};

/// Divider paint values for a [`SplitBox`], injected as plain data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitStyle {
    /// Divider style when idle.
    pub divider: Style,
    /// Extra styling applied while the divider is being dragged.
    pub divider_active: Style,
    /// Line character set for the divider bar.
    pub line: LineStyle,
}

/// A container holding two children either side of a draggable divider.
///
/// [`hsplit`](SplitBox::hsplit) stacks the children with a horizontal
/// bar between them; [`vsplit`](SplitBox::vsplit) places them side by
/// side with a vertical bar.
pub struct SplitBox {
    window: Option<Rect>,
    direction: Direction,
    first: Box<dyn Widget>,
    second: Box<dyn Widget>,
    split_position: Option<u16>,
    divider_thickness: u16,
    dragging: bool,
    style: SplitStyle,
}

impl std::fmt::Debug for SplitBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitBox")
            .field("window", &self.window)
            .field("direction", &self.direction)
            .field("split_position", &self.split_position)
            .field("dragging", &self.dragging)
            .finish()
    }
}

impl SplitBox {
    /// Stack `first` above `second` with a horizontal divider.
    #[must_use]
    pub fn hsplit(first: impl Widget + 'static, second: impl Widget + 'static) -> Self {
        Self::new(Direction::Vertical, first, second)
    }

    /// Place `first` left of `second` with a vertical divider.
    #[must_use]
    pub fn vsplit(first: impl Widget + 'static, second: impl Widget + 'static) -> Self {
        Self::new(Direction::Horizontal, first, second)
    }

    fn new(
        direction: Direction,
        first: impl Widget + 'static,
        second: impl Widget + 'static,
    ) -> Self {
        Self {
            window: None,
            direction,
            first: Box::new(first),
            second: Box::new(second),
            split_position: None,
            divider_thickness: 1,
            dragging: false,
            style: SplitStyle::default(),
        }
    }

    /// Set the divider style (builder).
    #[must_use]
    pub fn with_style(mut self, style: SplitStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the divider thickness in lines or columns (builder).
    ///
    /// Zero is bumped to 1.
    #[must_use]
    pub fn with_divider_thickness(mut self, thickness: u16) -> Self {
        self.divider_thickness = thickness.max(1);
        self
    }

    /// The current split position along the layout axis.
    #[must_use]
    pub fn split_position(&self) -> Option<u16> {
        self.split_position
    }

    /// Move the split position, clamped to the window, and relayout.
    pub fn set_split_position(&mut self, position: u16) {
        self.split_position = Some(position);
        self.reshape(self.window);
    }

    /// Whether a divider drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn extent_of(&self, win: Rect) -> u16 {
        match self.direction {
            Direction::Vertical => win.height,
            Direction::Horizontal => win.width,
        }
    }

    /// The divider's rectangle, `None` while withdrawn or overflowed.
    fn divider_rect(&self) -> Option<Rect> {
        let win = self.window?;
        let pos = self.split_position?;
        if self.extent_of(win) < self.divider_thickness {
            return None;
        }
        Some(match self.direction {
            Direction::Vertical => {
                Rect::new(win.x, win.y + pos, win.width, self.divider_thickness)
            }
            Direction::Horizontal => {
                Rect::new(win.x + pos, win.y, self.divider_thickness, win.height)
            }
        })
    }

    /// Initial split from the children's requested sizes.
    fn initial_position(&self, max_pos: u16) -> u16 {
        let (a, b) = match self.direction {
            Direction::Vertical => (
                self.first.requested_size().lines,
                self.second.requested_size().lines,
            ),
            Direction::Horizontal => (
                self.first.requested_size().cols,
                self.second.requested_size().cols,
            ),
        };
        if a + b == 0 {
            max_pos / 2
        } else {
            ((max_pos as u32 * a as u32) / (a + b) as u32) as u16
        }
    }

    fn drag_position(&self, win: Rect, mouse: &MouseEvent) -> u16 {
        let coord = match self.direction {
            Direction::Vertical => mouse.y.saturating_sub(win.y),
            Direction::Horizontal => mouse.x.saturating_sub(win.x),
        };
        coord.min(self.extent_of(win).saturating_sub(self.divider_thickness))
    }
}

impl Widget for SplitBox {
    fn requested_size(&self) -> Size {
        let a = self.first.requested_size();
        let b = self.second.requested_size();
        match self.direction {
            Direction::Vertical => Size::new(
                a.cols.max(b.cols),
                a.lines
                    .saturating_add(b.lines)
                    .saturating_add(self.divider_thickness),
            ),
            Direction::Horizontal => Size::new(
                a.cols
                    .saturating_add(b.cols)
                    .saturating_add(self.divider_thickness),
                a.lines.max(b.lines),
            ),
        }
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
        let Some(win) = window else {
            self.first.reshape(None);
            self.second.reshape(None);
            return;
        };

        let extent = self.extent_of(win);
        if extent < self.divider_thickness || win.is_empty() {
            // No room for even the divider
            self.first.reshape(None);
            self.second.reshape(None);
            return;
        }

        let max_pos = extent - self.divider_thickness;
        let pos = match self.split_position {
            Some(p) => p.min(max_pos),
            None => self.initial_position(max_pos),
        };
        self.split_position = Some(pos);

        let second_size = extent - pos - self.divider_thickness;
        let (first_win, second_win) = match self.direction {
            Direction::Vertical => (
                Rect::new(win.x, win.y, win.width, pos),
                Rect::new(
                    win.x,
                    win.y + pos + self.divider_thickness,
                    win.width,
                    second_size,
                ),
            ),
            Direction::Horizontal => (
                Rect::new(win.x, win.y, pos, win.height),
                Rect::new(
                    win.x + pos + self.divider_thickness,
                    win.y,
                    second_size,
                    win.height,
                ),
            ),
        };
        self.first
            .reshape((!first_win.is_empty()).then_some(first_win));
        self.second
            .reshape((!second_win.is_empty()).then_some(second_win));
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, surface: &mut Surface) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("split_render", dragging = self.dragging).entered();

        if self.window.is_none() {
            return;
        }

        self.first.render(surface);
        self.second.render(surface);

        if let Some(divider) = self.divider_rect() {
            let style = if self.dragging {
                self.style.divider.patched(self.style.divider_active)
            } else {
                self.style.divider
            };
            let chars = self.style.line.chars();
            let ch = match self.direction {
                Direction::Vertical => chars.horizontal,
                Direction::Horizontal => chars.vertical,
            };
            surface.fill(divider, Cell::styled(ch, style));
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::Mouse(mouse) = event {
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left)
                    if self
                        .divider_rect()
                        .is_some_and(|d| d.contains(mouse.x, mouse.y)) =>
                {
                    self.dragging = true;
                    return true;
                }
                MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                    if let Some(win) = self.window {
                        let pos = self.drag_position(win, mouse);
                        if Some(pos) != self.split_position {
                            self.split_position = Some(pos);
                            self.reshape(self.window);
                        }
                    }
                    return true;
                }
                MouseEventKind::Up(MouseButton::Left) if self.dragging => {
                    // The drag ends wherever the pointer is
                    self.dragging = false;
                    return true;
                }
                _ => {}
            }

            if mouse_in(self.first.window(), mouse) {
                return self.first.handle_event(event);
            }
            if mouse_in(self.second.window(), mouse) {
                return self.second.handle_event(event);
            }
            return false;
        }

        self.first.handle_event(event) || self.second.handle_event(event)
    }
}
