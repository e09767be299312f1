use crate::core::actions::sample_grid::ports::point_algorithm::PointAlgorithm;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::point::Point;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates z₀ = c, zₙ₊₁ = zₙ² + c and reports the first check that finds
/// |zₙ|² > 4, counting checks from 1.
///
/// At most `max_iterations` checks are made; a budget of zero reports every
/// point as bounded.
#[must_use]
pub fn escape_time(c: Point, max_iterations: u32) -> EscapeTime {
    match escape_index(c, max_iterations) {
        Some(index) => EscapeTime::Escaped(index + 1),
        None => EscapeTime::Bounded,
    }
}

/// Same orbit as [`escape_time`], returning the 0-based index of the escaping
/// check and 0 when the point stays bounded.
///
/// Kept for compatibility with the old integer output. A return of 0 cannot
/// tell a bounded point from one that started outside the escape radius.
#[must_use]
pub fn legacy_escape_time(c: Point, max_iterations: u32) -> u32 {
    escape_index(c, max_iterations).unwrap_or(0)
}

fn escape_index(c: Point, max_iterations: u32) -> Option<u32> {
    let (cx, cy) = (c.x(), c.y());
    let mut x = cx;
    let mut y = cy;

    for n in 0..max_iterations {
        let x2 = x * x;
        let y2 = y * y;

        if x2 + y2 > ESCAPE_RADIUS_SQUARED {
            return Some(n);
        }

        y = 2.0 * x * y + cy;
        x = x2 - y2 + cx;
    }

    None
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl PointAlgorithm for MandelbrotAlgorithm {
    type Output = EscapeTime;

    fn compute(&self, point: Point) -> EscapeTime {
        escape_time(point, self.max_iterations)
    }
}
