//! Mandelbrot escape-time sampling over rectangular grids of the complex plane.
//!
//! The core is two pure functions: [`escape_time`] classifies a single point
//! and [`sample_grid`] evaluates any [`PointAlgorithm`] over every cell of a
//! [`Grid`]. Everything else colours, prints or writes the resulting
//! [`Samples`].

mod controllers;
mod core;
mod presenters;

pub use controllers::cli::args::{Args, ColourMapArg, OrderArg, Preset};
pub use controllers::cli::sampler_controller::{CliController, ControllerError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::ports::text_presenter::TextPresenterPort;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::actions::sample_grid::ports::point_algorithm::PointAlgorithm;
pub use crate::core::actions::sample_grid::sample_grid::sample_grid;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::domain::{Domain, DomainError};
pub use crate::core::data::escape_time::EscapeTime;
pub use crate::core::data::grid::{Grid, GridError, VerticalStep};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::sample_order::SampleOrder;
pub use crate::core::data::samples::{Samples, SamplesError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    MandelbrotAlgorithm, escape_time, legacy_escape_time,
};
pub use crate::core::fractals::mandelbrot::colour_maps::{
    blue_white_gradient::BlueWhiteGradient, factory::colour_map_factory,
    fire_gradient::FireGradient, kinds::ColourMapKind, map::MandelbrotColourMap,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::SamplerConfig;
pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use presenters::text::ascii::AsciiPresenter;
