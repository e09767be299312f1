use crate::core::data::domain::Domain;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell (column: {column}, row: {row}) is outside the {width}x{height} grid")]
    CellOutsideGrid {
        column: u32,
        row: u32,
        width: u32,
        height: u32,
    },
}

/// How the vertical distance between rows is derived.
///
/// The legacy sampler divided the vertical span by the *width* of the output,
/// which only matches the requested domain when the grid is square.
/// `Height` is the corrected behaviour; `Width` reproduces the old output
/// bit for bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VerticalStep {
    #[default]
    Height,
    Width,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    domain: Domain,
    width: u32,
    height: u32,
    vertical_step: VerticalStep,
}

impl Grid {
    /// A zero width or height is allowed and produces an empty grid.
    #[must_use]
    pub fn new(domain: Domain, width: u32, height: u32) -> Self {
        Self {
            domain,
            width,
            height,
            vertical_step: VerticalStep::default(),
        }
    }

    #[must_use]
    pub fn with_vertical_step(mut self, vertical_step: VerticalStep) -> Self {
        self.vertical_step = vertical_step;
        self
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn vertical_step(&self) -> VerticalStep {
        self.vertical_step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn dx(&self) -> f64 {
        self.domain.x_span() / self.width as f64
    }

    #[must_use]
    pub fn dy(&self) -> f64 {
        let divisor = match self.vertical_step {
            VerticalStep::Height => self.height,
            VerticalStep::Width => self.width,
        };

        self.domain.y_span() / divisor as f64
    }

    #[must_use]
    pub fn contains_cell(&self, column: u32, row: u32) -> bool {
        column < self.width && row < self.height
    }

    pub fn point_at(&self, column: u32, row: u32) -> Result<Point, GridError> {
        if !self.contains_cell(column, row) {
            return Err(GridError::CellOutsideGrid {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.point_unchecked(column, row))
    }

    // Caller guarantees the cell is inside the grid, so dx and dy are finite.
    pub(crate) fn point_unchecked(&self, column: u32, row: u32) -> Point {
        Point::new(
            self.domain.x_min() + column as f64 * self.dx(),
            self.domain.y_min() + row as f64 * self.dy(),
        )
    }
}
