use crate::core::fractals::mandelbrot::colour_maps::{
    blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient, kinds::ColourMapKind,
    map::MandelbrotColourMap,
};

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, max_iterations: u32) -> Box<dyn MandelbrotColourMap> {
    match kind {
        ColourMapKind::FireGradient => Box::new(FireGradient::new(max_iterations)),
        ColourMapKind::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(max_iterations)),
    }
}
