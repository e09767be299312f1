use std::io::Write;

use crate::core::data::escape_time::EscapeTime;
use crate::core::data::samples::Samples;

pub trait TextPresenterPort {
    fn present(&self, samples: &Samples<EscapeTime>, out: &mut impl Write) -> std::io::Result<()>;
}
