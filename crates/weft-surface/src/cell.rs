#![forbid(unsafe_code)]

//! A single surface cell.

use weft_style::{Color, Style, StyleFlags};

/// One character cell on a [`Surface`](crate::Surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character occupying the cell.
    pub ch: char,
    /// Resolved foreground color.
    pub fg: Color,
    /// Resolved background color.
    pub bg: Color,
    /// Resolved attribute flags.
    pub attrs: StyleFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// An empty cell: a space with default colors and no attributes.
    pub const BLANK: Self = Self {
        ch: ' ',
        fg: Color::Reset,
        bg: Color::Reset,
        attrs: StyleFlags::empty(),
    };

    /// Create a cell from a character with default styling.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: Color::Reset,
            bg: Color::Reset,
            attrs: StyleFlags::empty(),
        }
    }

    /// Create a cell from a character with a style applied.
    #[must_use]
    pub fn styled(ch: char, style: Style) -> Self {
        let mut cell = Self::from_char(ch);
        cell.apply(style);
        cell
    }

    /// Apply a style patch: only the fields the style carries change.
    pub fn apply(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = fg;
        }
        if let Some(bg) = style.bg {
            self.bg = bg;
        }
        if let Some(attrs) = style.attrs {
            self.attrs = attrs;
        }
    }

    /// Check whether this is a blank cell.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}
