use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::EscapeTime;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

pub trait MandelbrotColourMap: ColourMap<EscapeTime> + std::fmt::Debug {
    fn kind(&self) -> ColourMapKind;
}

impl ColourMap<EscapeTime> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: EscapeTime) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
