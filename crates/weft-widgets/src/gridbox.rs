#![forbid(unsafe_code)]

//! Grid container widget.
//!
//! Children live in a sparse row × column arrangement. Every reshape
//! rebuilds the row and column buckets from the children's requested
//! sizes and runs the distributor once per axis; there is no cached
//! layout state to invalidate.

use weft_core::event::Event;
use weft_core::geometry::{Rect, Size};
use weft_layout::{Bucket, distribute};
use weft_style::Style;
use weft_surface::Surface;

use crate::{Widget, mouse_in};

/// Spacing values for a [`GridBox`], injected as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStyle {
    /// Blank lines between rows.
    pub row_spacing: u16,
    /// Blank columns between columns.
    pub col_spacing: u16,
}

/// Per-cell layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellOptions {
    /// Expand weight contributed to the cell's row.
    pub row_expand: u16,
    /// Expand weight contributed to the cell's column.
    pub col_expand: u16,
}

impl CellOptions {
    /// No expansion in either direction.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            row_expand: 0,
            col_expand: 0,
        }
    }

    /// Set the row expand weight (builder).
    #[must_use]
    pub const fn row_expand(mut self, weight: u16) -> Self {
        self.row_expand = weight;
        self
    }

    /// Set the column expand weight (builder).
    #[must_use]
    pub const fn col_expand(mut self, weight: u16) -> Self {
        self.col_expand = weight;
        self
    }

    /// Set both expand weights (builder).
    #[must_use]
    pub const fn expand(self, weight: u16) -> Self {
        self.row_expand(weight).col_expand(weight)
    }
}

struct GridCell {
    child: Box<dyn Widget>,
    opts: CellOptions,
}

/// A container laying children out on a sparse 2-D grid.
pub struct GridBox {
    window: Option<Rect>,
    rows: Vec<Vec<Option<GridCell>>>,
    max_col: usize,
    style: GridStyle,
    background: Style,
}

impl std::fmt::Debug for GridBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridBox")
            .field("window", &self.window)
            .field("rows", &self.rows.len())
            .field("cols", &self.col_count())
            .field("style", &self.style)
            .finish()
    }
}

impl Default for GridBox {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBox {
    /// Create an empty grid with no spacing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            rows: Vec::new(),
            max_col: 0,
            style: GridStyle::default(),
            background: Style::default(),
        }
    }

    /// Set the spacing style (builder).
    #[must_use]
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the background style (builder).
    #[must_use]
    pub fn with_background(mut self, style: Style) -> Self {
        self.background = style;
        self
    }

    /// Change the spacing style and relayout.
    pub fn set_style(&mut self, style: GridStyle) {
        self.style = style;
        self.reshape(self.window);
    }

    /// Number of rows with any populated cell at or below them.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns up to the highest populated column index.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.max_col
    }

    /// Place a child at `(row, col)`, growing the grid as needed.
    ///
    /// Any previous occupant is detached and returned; disposing of it
    /// is the caller's business.
    pub fn add(
        &mut self,
        row: usize,
        col: usize,
        child: impl Widget + 'static,
        opts: CellOptions,
    ) -> Option<Box<dyn Widget>> {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, || None);
        }
        let old = cells[col].replace(GridCell {
            child: Box::new(child),
            opts,
        });
        self.max_col = self.max_col.max(col + 1);
        self.reshape(self.window);
        old.map(|cell| cell.child)
    }

    /// Detach and return the child at `(row, col)`.
    ///
    /// Out-of-bounds indices and empty cells are rejected with `None`.
    /// Trailing rows and columns left fully empty are trimmed from the
    /// tracked bounds.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<Box<dyn Widget>> {
        let cell = self.rows.get_mut(row)?.get_mut(col)?.take()?;
        self.trim();
        self.reshape(self.window);
        Some(cell.child)
    }

    /// Drop trailing empty rows, then re-derive the column bound.
    fn trim(&mut self) {
        while self
            .rows
            .last()
            .is_some_and(|row| row.iter().all(Option::is_none))
        {
            self.rows.pop();
        }
        self.max_col = self
            .rows
            .iter()
            .flat_map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, c)| c.is_some())
                    .map(|(i, _)| i + 1)
            })
            .max()
            .unwrap_or(0);
        for row in &mut self.rows {
            row.truncate(self.max_col);
        }
    }

    /// Base size and expand weight per row.
    fn row_metrics(&self) -> Vec<(u16, u16)> {
        self.rows
            .iter()
            .map(|row| {
                row.iter().flatten().fold((0, 0), |(size, expand), cell| {
                    (
                        size.max(cell.child.requested_size().lines),
                        expand.max(cell.opts.row_expand),
                    )
                })
            })
            .collect()
    }

    /// Base size and expand weight per column.
    fn col_metrics(&self) -> Vec<(u16, u16)> {
        let mut metrics = vec![(0u16, 0u16); self.max_col];
        for row in &self.rows {
            for (c, cell) in row.iter().enumerate() {
                if let Some(cell) = cell {
                    let (size, expand) = &mut metrics[c];
                    *size = (*size).max(cell.child.requested_size().cols);
                    *expand = (*expand).max(cell.opts.col_expand);
                }
            }
        }
        metrics
    }

    /// Interleave flexible metric buckets with fixed spacing buckets.
    fn buckets(metrics: &[(u16, u16)], spacing: u16) -> Vec<Bucket> {
        let mut buckets = Vec::with_capacity(metrics.len() * 2);
        for (i, &(base, expand)) in metrics.iter().enumerate() {
            if i > 0 {
                buckets.push(Bucket::fixed(spacing));
            }
            buckets.push(Bucket::flexible(base, expand));
        }
        buckets
    }

    fn withdraw_children(&mut self) {
        for row in &mut self.rows {
            for cell in row.iter_mut().flatten() {
                cell.child.reshape(None);
            }
        }
    }
}

impl Widget for GridBox {
    fn requested_size(&self) -> Size {
        let rows = self.row_metrics();
        let cols = self.col_metrics();
        if rows.is_empty() || cols.is_empty() {
            return Size::ZERO;
        }
        let lines = rows.iter().map(|&(s, _)| s).sum::<u16>()
            + self.style.row_spacing * (rows.len() as u16 - 1);
        let width = cols.iter().map(|&(s, _)| s).sum::<u16>()
            + self.style.col_spacing * (cols.len() as u16 - 1);
        Size::new(width, lines)
    }

    fn reshape(&mut self, window: Option<Rect>) {
        self.window = window;
        let Some(win) = window else {
            self.withdraw_children();
            return;
        };

        let row_spans = distribute(
            win.height,
            &Self::buckets(&self.row_metrics(), self.style.row_spacing),
        );
        let col_spans = distribute(
            win.width,
            &Self::buckets(&self.col_metrics(), self.style.col_spacing),
        );

        for (r, row) in self.rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let Some(cell) = cell else {
                    continue;
                };
                // Metric buckets sit at even indices, spacing between them
                let rs = row_spans[r * 2];
                let cs = col_spans[c * 2];
                let assigned = if rs.size == 0 || cs.size == 0 {
                    None
                } else {
                    Rect::new(
                        win.x.saturating_add(cs.start),
                        win.y.saturating_add(rs.start),
                        cs.size,
                        rs.size,
                    )
                    .intersection(&win)
                };
                cell.child.reshape(assigned);
            }
        }
    }

    fn window(&self) -> Option<Rect> {
        self.window
    }

    fn render(&mut self, surface: &mut Surface) {
        let Some(win) = self.window else {
            return;
        };
        surface.erase(win, self.background);
        for row in &mut self.rows {
            for cell in row.iter_mut().flatten() {
                cell.child.render(surface);
            }
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                for row in &mut self.rows {
                    for cell in row.iter_mut().flatten() {
                        if mouse_in(cell.child.window(), mouse) {
                            return cell.child.handle_event(event);
                        }
                    }
                }
                false
            }
            Event::Key(_) => {
                for row in &mut self.rows {
                    for cell in row.iter_mut().flatten() {
                        if cell.child.handle_event(event) {
                            return true;
                        }
                    }
                }
                false
            }
        }
    }
}
