use crate::core::data::domain::Domain;
use crate::core::data::grid::{Grid, VerticalStep};
use crate::core::data::sample_order::SampleOrder;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

const DEFAULT_MAX_ITERATIONS: u32 = 256;
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

const BENCHMARK_MAX_ITERATIONS: u32 = 2048;
const BENCHMARK_SIZE: u32 = 1000;

const fn classic_region() -> Domain {
    Domain::from_finite(-2.5, 1.0, -1.0, 1.0)
}

const fn benchmark_region() -> Domain {
    Domain::from_finite(-0.74877, -0.74872, 0.065053, 0.065103)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    pub domain: Domain,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub vertical_step: VerticalStep,
    pub order: SampleOrder,
    pub colour_map_kind: ColourMapKind,
}

impl Default for SamplerConfig {
    /// The whole set, framed for a 4:3 image.
    fn default() -> Self {
        Self {
            domain: classic_region(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            vertical_step: VerticalStep::Height,
            order: SampleOrder::ColumnMajor,
            colour_map_kind: ColourMapKind::default(),
        }
    }
}

impl SamplerConfig {
    /// Deep zoom near the seahorse valley used to time the sampler, with the
    /// legacy row step and layout so its output matches the old integers.
    #[must_use]
    pub fn benchmark() -> Self {
        Self {
            domain: benchmark_region(),
            width: BENCHMARK_SIZE,
            height: BENCHMARK_SIZE,
            max_iterations: BENCHMARK_MAX_ITERATIONS,
            vertical_step: VerticalStep::Width,
            order: SampleOrder::ColumnMajor,
            colour_map_kind: ColourMapKind::default(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.domain, self.width, self.height).with_vertical_step(self.vertical_step)
    }

    #[must_use]
    pub fn algorithm(&self) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(self.max_iterations)
    }
}
