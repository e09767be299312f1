use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::info;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary PPM image.
pub fn write_ppm(buffer: &PixelBuffer, mut out: impl Write) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())?;
    out.flush()
}

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let file = std::fs::File::create(filepath)?;

        write_ppm(buffer, BufWriter::new(file))?;
        info!("wrote {}x{} PPM to {}", buffer.width(), buffer.height(), filepath.display());

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ppm_header_and_body() {
        let buffer = PixelBuffer::from_data(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let buffer = PixelBuffer::from_data(1, 1, vec![1, 2, 3]).unwrap();
        let path = std::env::temp_dir().join(format!("mandelbrot_sampler_{}.ppm", std::process::id()));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, b"P6\n1 1\n255\n\x01\x02\x03");
    }

    #[test]
    fn test_present_missing_directory_fails() {
        let buffer = PixelBuffer::from_data(1, 1, vec![0, 0, 0]).unwrap();

        let result = PpmFilePresenter::new().present(&buffer, "/nonexistent-dir/out.ppm");

        assert!(result.is_err());
    }
}
