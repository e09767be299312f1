use crate::controllers::ports::text_presenter::TextPresenterPort;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::samples::Samples;
use std::io::Write;

const BOUNDED_GLYPH: char = '@';
// Sparse to dense: slow escapes sit close to the set boundary.
const ESCAPE_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%'];

/// Renders samples as text art, one line per grid row.
pub struct AsciiPresenter {
    max_iterations: u32,
}

impl AsciiPresenter {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn glyph(&self, escape: EscapeTime) -> char {
        match escape {
            EscapeTime::Bounded => BOUNDED_GLYPH,
            EscapeTime::Escaped(n) => {
                let t = n.min(self.max_iterations) as f64 / self.max_iterations.max(1) as f64;
                let index = (t * (ESCAPE_RAMP.len() - 1) as f64).round() as usize;

                ESCAPE_RAMP[index.min(ESCAPE_RAMP.len() - 1)]
            }
        }
    }
}

impl TextPresenterPort for AsciiPresenter {
    fn present(&self, samples: &Samples<EscapeTime>, out: &mut impl Write) -> std::io::Result<()> {
        let width = samples.width() as usize;
        if width == 0 {
            return Ok(());
        }

        let glyphs: Vec<char> = samples.iter_row_major().map(|&e| self.glyph(e)).collect();

        for row in glyphs.chunks(width) {
            let line: String = row.iter().collect();
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }
}
