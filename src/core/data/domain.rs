use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum DomainError {
    #[error("domain bounds must be finite: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    NonFinite {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// Rectangular region of the complex plane.
///
/// Bounds are not required to be ordered: an inverted domain simply walks the
/// grid in the opposite direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Domain {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, DomainError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|bound| bound.is_finite()) {
            return Err(DomainError::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    // For literal presets only; skips the finiteness check.
    pub(crate) const fn from_finite(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x_min, self.y_min)
    }

    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}
