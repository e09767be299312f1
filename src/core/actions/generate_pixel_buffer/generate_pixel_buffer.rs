use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::samples::Samples;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours every sample, emitting pixels row by row with row 0 at the top.
pub fn generate_pixel_buffer<T: Copy, CMap: ColourMap<T>>(
    samples: &Samples<T>,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    debug!(
        "colouring {}x{} samples with {}",
        samples.width(),
        samples.height(),
        mapper.display_name()
    );

    let mut buffer: PixelBufferData = Vec::with_capacity(samples.len() * 3);

    for &value in samples.iter_row_major() {
        let Colour { r, g, b } = mapper.map(value)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(samples.width(), samples.height(), buffer)?)
}
