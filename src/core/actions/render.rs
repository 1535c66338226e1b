use crate::core::actions::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::colour_maps::hsl_gradient::HslGradient;
use std::error::Error;
use std::fmt;

/// Rejected configuration, detected before any pixel work begins.
///
/// A zero iteration budget or empty dimensions would otherwise produce a
/// degenerate all-one-colour frame that is indistinguishable from a real
/// render, so both are surfaced to the caller instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidConfiguration {
    ZeroIterationBudget,
    EmptyDimensions { width: u32, height: u32 },
    NonPositiveZoom { zoom: f64 },
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationBudget => {
                write!(f, "iteration budget must be at least 1")
            }
            Self::EmptyDimensions { width, height } => {
                write!(f, "output dimensions must be positive: {}x{}", width, height)
            }
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom must be a positive finite number, got {}", zoom)
            }
        }
    }
}

impl Error for InvalidConfiguration {}

#[derive(Debug)]
pub enum RenderError {
    InvalidConfiguration(InvalidConfiguration),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "invalid configuration: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<InvalidConfiguration> for RenderError {
    fn from(err: InvalidConfiguration) -> Self {
        Self::InvalidConfiguration(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

fn validate(viewport: &Viewport, width: u32, height: u32) -> Result<(), InvalidConfiguration> {
    if viewport.max_iterations == 0 {
        return Err(InvalidConfiguration::ZeroIterationBudget);
    }

    if width == 0 || height == 0 {
        return Err(InvalidConfiguration::EmptyDimensions { width, height });
    }

    if !(viewport.zoom.is_finite() && viewport.zoom > 0.0) {
        return Err(InvalidConfiguration::NonPositiveZoom {
            zoom: viewport.zoom,
        });
    }

    Ok(())
}

/// Renders one frame of the Mandelbrot set with the default HSL gradient.
///
/// The single operation the core exposes to its shell: a pure function of
/// the viewport snapshot and the output dimensions. Identical inputs yield
/// byte-identical buffers; no I/O, no state between calls. Runs to
/// completion synchronously on the calling thread.
pub fn render(viewport: Viewport, width: u32, height: u32) -> Result<PixelBuffer, RenderError> {
    let colour_map = HslGradient::new(viewport.max_iterations);

    render_with(viewport, width, height, &colour_map)
}

/// Same pipeline as [`render`] with a caller-supplied palette.
pub fn render_with<M: ColourMap>(
    viewport: Viewport,
    width: u32,
    height: u32,
    colour_map: &M,
) -> Result<PixelBuffer, RenderError> {
    validate(&viewport, width, height)?;

    let results = generate_fractal(&viewport, width, height);
    let buffer = generate_pixel_buffer(results, colour_map, width, height)?;

    Ok(buffer)
}
