use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use log::info;
use thiserror::Error;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::text_presenter::TextPresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::sample_grid::sample_grid::sample_grid;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::samples::Samples;
use crate::core::fractals::mandelbrot::colour_maps::factory::colour_map_factory;
use crate::core::fractals::mandelbrot::mandelbrot_config::SamplerConfig;
use crate::presenters::text::ascii::AsciiPresenter;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("nothing has been sampled yet")]
    NotSampled,
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    config: SamplerConfig,
    samples: Option<Samples<EscapeTime>>,
    duration: Duration,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, config: SamplerConfig) -> Self {
        Self {
            presenter,
            config,
            samples: None,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    #[must_use]
    pub fn samples(&self) -> Option<&Samples<EscapeTime>> {
        self.samples.as_ref()
    }

    pub fn generate(&mut self) -> &Samples<EscapeTime> {
        let grid = self.config.grid();
        let algorithm = self.config.algorithm();

        info!(
            "sampling {}x{} grid, {} iterations",
            grid.width(),
            grid.height(),
            algorithm.max_iterations()
        );

        let start = Instant::now();
        let samples = sample_grid(&grid, &algorithm, self.config.order);
        self.duration = start.elapsed();

        info!("sampled {} points in {:?}", samples.len(), self.duration);

        self.samples.insert(samples)
    }

    pub fn write_summary(&self, out: &mut impl Write) -> Result<(), ControllerError> {
        let samples = self.samples.as_ref().ok_or(ControllerError::NotSampled)?;
        let domain = self.config.domain;
        let bounded = samples.bounded_count();

        writeln!(
            out,
            "Domain:         x [{}, {}], y [{}, {}]",
            domain.x_min(),
            domain.x_max(),
            domain.y_min(),
            domain.y_max()
        )?;
        writeln!(out, "Grid size:      {}x{}", samples.width(), samples.height())?;
        writeln!(out, "Max iterations: {}", self.config.max_iterations)?;
        writeln!(out, "Layout:         {}", samples.order().display_name())?;
        writeln!(out, "Bounded:        {}", bounded)?;
        writeln!(out, "Escaped:        {}", samples.len() - bounded)?;
        writeln!(out, "Duration:       {:?}", self.duration)?;

        Ok(())
    }

    pub fn write_ascii(&self, out: &mut impl Write) -> Result<(), ControllerError> {
        let samples = self.samples.as_ref().ok_or(ControllerError::NotSampled)?;

        AsciiPresenter::new(self.config.max_iterations).present(samples, out)?;

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), ControllerError> {
        let samples = self.samples.as_ref().ok_or(ControllerError::NotSampled)?;
        let colour_map = colour_map_factory(self.config.colour_map_kind, self.config.max_iterations);
        let buffer = generate_pixel_buffer(samples, &colour_map)?;

        self.presenter.present(&buffer, filepath)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(u32, u32, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, _filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((buffer.width(), buffer.height(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn small_config() -> SamplerConfig {
        SamplerConfig {
            width: 12,
            height: 8,
            max_iterations: 32,
            ..SamplerConfig::default()
        }
    }

    #[test]
    fn test_outputs_fail_before_generate() {
        let presenter = RecordingPresenter::default();
        let controller = CliController::new(&presenter, small_config());

        assert!(matches!(
            controller.write("unused.ppm"),
            Err(ControllerError::NotSampled)
        ));
        assert!(matches!(
            controller.write_summary(&mut Vec::<u8>::new()),
            Err(ControllerError::NotSampled)
        ));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_samples_whole_grid() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, small_config());

        let samples = controller.generate();

        assert_eq!(samples.len(), 96);
        assert!(controller.samples().is_some());
    }

    #[test]
    fn test_write_presents_coloured_buffer() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, small_config());

        controller.generate();
        controller.write("unused.ppm").unwrap();

        assert_eq!(*presenter.presented.borrow(), vec![(12, 8, 12 * 8 * 3)]);
    }

    #[test]
    fn test_summary_reports_grid() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, small_config());
        let mut out = Vec::new();

        controller.generate();
        controller.write_summary(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Grid size:      12x8"));
        assert!(text.contains("Max iterations: 32"));
        assert!(text.contains("Layout:         column-major"));
    }

    #[test]
    fn test_ascii_has_one_line_per_row() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, small_config());
        let mut out = Vec::new();

        controller.generate();
        controller.write_ascii(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().all(|line| line.chars().count() == 12));
        // The classic view contains the main cardioid
        assert!(text.contains('@'));
    }
}
