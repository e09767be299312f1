use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::EscapeTime;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_maps::map::MandelbrotColourMap;

#[derive(Debug)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<EscapeTime> for BlueWhiteGradient {
    fn map(&self, escape: EscapeTime) -> Result<Colour, ColourMapError> {
        let iterations = match escape {
            EscapeTime::Bounded => return Ok(Colour::BLACK),
            EscapeTime::Escaped(n) => n,
        };

        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        let t = iterations as f64 / self.max_iterations as f64;

        // Bernstein-style polynomials, peaking blue early and red late
        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        ColourMapKind::BlueWhiteGradient.display_name()
    }
}

impl MandelbrotColourMap for BlueWhiteGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
