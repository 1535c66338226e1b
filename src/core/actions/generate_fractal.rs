use crate::core::data::iteration::IterationResult;
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::algorithm::escape_time;
use crate::core::util::pixel_to_plane::pixel_to_plane;

/// Evaluates every pixel of a width x height frame, row-major.
///
/// Infallible once the configuration has been validated by the caller
/// (see `render`); runs to completion on the calling thread.
#[must_use]
pub fn generate_fractal(viewport: &Viewport, width: u32, height: u32) -> Vec<IterationResult> {
    (0..height)
        .flat_map(|py| (0..width).map(move |px| (px, py)))
        .map(|(px, py)| {
            let c = pixel_to_plane(f64::from(px), f64::from(py), width, height, viewport);
            escape_time(c, viewport.max_iterations)
        })
        .collect()
}
