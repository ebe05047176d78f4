#![forbid(unsafe_code)]

//! Style primitives: colors, attribute flags, pens, and line styles.
//!
//! A [`Style`] is a patch: every field is optional, and applying a style
//! to a cell only overrides the fields it carries. Widgets receive
//! resolved style values as plain data; no cascade or lookup happens
//! here.

use bitflags::bitflags;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default color.
    #[default]
    Reset,
    /// Black (ANSI 0).
    Black,
    /// Red (ANSI 1).
    Red,
    /// Green (ANSI 2).
    Green,
    /// Yellow (ANSI 3).
    Yellow,
    /// Blue (ANSI 4).
    Blue,
    /// Magenta (ANSI 5).
    Magenta,
    /// Cyan (ANSI 6).
    Cyan,
    /// White (ANSI 7).
    White,
    /// An indexed color from the 256-color palette.
    Indexed(u8),
    /// A 24-bit RGB color.
    Rgb(u8, u8, u8),
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold weight.
        const BOLD      = 0b0000_0001;
        /// Italic slant.
        const ITALIC    = 0b0000_0010;
        /// Underline.
        const UNDERLINE = 0b0000_0100;
        /// Reverse video.
        const REVERSE   = 0b0000_1000;
    }
}

/// A style patch applied to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color override.
    pub fg: Option<Color>,
    /// Background color override.
    pub bg: Option<Color>,
    /// Attribute flags override.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Check whether the style carries no overrides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay another style on top of this one.
    ///
    /// Fields set on `other` win; unset fields fall through.
    #[must_use]
    pub fn patched(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }
}

/// The character set used to draw a line or border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// Single light box-drawing lines.
    #[default]
    Single,
    /// Double box-drawing lines.
    Double,
    /// Heavy box-drawing lines.
    Thick,
    /// Plain ASCII (`-`, `|`, `+`).
    Ascii,
}

/// The characters for one [`LineStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub cross: char,
}

impl LineStyle {
    /// Look up a line style by its configuration name.
    ///
    /// Unknown names are rejected with `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "thick" => Some(Self::Thick),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }

    /// The drawing characters for this style.
    #[must_use]
    pub const fn chars(self) -> LineChars {
        match self {
            Self::Single => LineChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                cross: '┼',
            },
            Self::Double => LineChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                cross: '╬',
            },
            Self::Thick => LineChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                cross: '╋',
            },
            Self::Ascii => LineChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                cross: '+',
            },
        }
    }
}
