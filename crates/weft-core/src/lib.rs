#![forbid(unsafe_code)]

//! Core primitives for Weft: geometry, input events, and text measurement.

pub mod event;
pub mod geometry;
pub mod text;

pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Rect, Sides, Size};
