use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::data::domain::{Domain, DomainError};
use crate::core::data::grid::VerticalStep;
use crate::core::data::sample_order::SampleOrder;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::mandelbrot_config::SamplerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// Whole set, 800x600, 256 iterations
    #[default]
    Classic,
    /// Deep zoom, 1000x1000, 2048 iterations, legacy layout
    Benchmark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    ColumnMajor,
    RowMajor,
}

impl From<OrderArg> for SampleOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::ColumnMajor => Self::ColumnMajor,
            OrderArg::RowMajor => Self::RowMajor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColourMapArg {
    Fire,
    BlueWhite,
}

impl From<ColourMapArg> for ColourMapKind {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::Fire => Self::FireGradient,
            ColourMapArg::BlueWhite => Self::BlueWhiteGradient,
        }
    }
}

/// Sample Mandelbrot escape times over a rectangular grid.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Starting configuration; the flags below override individual fields
    #[arg(long, value_enum, default_value_t = Preset::Classic)]
    pub preset: Preset,

    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Grid columns
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid rows
    #[arg(long)]
    pub height: Option<u32>,

    /// Iteration budget per point
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Derive the row step from the width, reproducing the old output
    #[arg(long)]
    pub legacy_vertical_step: bool,

    /// Layout of the flat sample vector
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    #[arg(long, value_enum)]
    pub colour_map: Option<ColourMapArg>,

    /// Write a PPM image to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the grid as text art
    #[arg(long)]
    pub ascii: bool,
}

impl Args {
    pub fn to_config(&self) -> Result<SamplerConfig, DomainError> {
        let base = match self.preset {
            Preset::Classic => SamplerConfig::default(),
            Preset::Benchmark => SamplerConfig::benchmark(),
        };

        let domain = Domain::new(
            self.x_min.unwrap_or(base.domain.x_min()),
            self.x_max.unwrap_or(base.domain.x_max()),
            self.y_min.unwrap_or(base.domain.y_min()),
            self.y_max.unwrap_or(base.domain.y_max()),
        )?;

        let vertical_step = if self.legacy_vertical_step {
            VerticalStep::Width
        } else {
            base.vertical_step
        };

        Ok(SamplerConfig {
            domain,
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            vertical_step,
            order: self.order.map_or(base.order, SampleOrder::from),
            colour_map_kind: self.colour_map.map_or(base.colour_map_kind, ColourMapKind::from),
        })
    }
}
