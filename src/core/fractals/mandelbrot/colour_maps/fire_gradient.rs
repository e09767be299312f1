use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::EscapeTime;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_maps::map::MandelbrotColourMap;

/// Black through red, orange and yellow to white as escape time grows.
#[derive(Debug)]
pub struct FireGradient {
    max_iterations: u32,
}

impl ColourMap<EscapeTime> for FireGradient {
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

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        ColourMapKind::FireGradient.display_name()
    }
}

impl MandelbrotColourMap for FireGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
