#![forbid(unsafe_code)]

//! Weft public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use weft_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use weft_core::geometry::{Rect, Sides, Size};
pub use weft_core::text;

// --- Style re-exports ------------------------------------------------------

pub use weft_style::{Color, LineChars, LineStyle, Style, StyleFlags};

// --- Surface re-exports ----------------------------------------------------

pub use weft_surface::{Cell, Surface};

// --- Layout re-exports -----------------------------------------------------

pub use weft_layout::{Bucket, Direction, Span, distribute};

// --- Widget re-exports -----------------------------------------------------

pub use weft_widgets::{
    Border, Button, CellOptions, CheckButton, Entry, Fill, Frame, GridBox, GridStyle, Placegrid,
    RadioButton, RadioGroup, SplitBox, SplitStyle, TitleAlign, Widget,
};

/// The commonly used names in one import.
pub mod prelude {
    pub use crate::{
        Bucket, Button, CellOptions, CheckButton, Entry, Event, Fill, Frame, GridBox, GridStyle,
        KeyCode, KeyEvent, LineStyle, Modifiers, MouseButton, MouseEvent, MouseEventKind, Rect,
        Sides, Size, SplitBox, SplitStyle, Style, Surface, Widget, distribute,
    };
}
