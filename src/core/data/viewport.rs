use crate::core::data::complex::Complex;

/// Real-axis span of the visible plane at zoom 1. Both axes use the same
/// base span, so horizontal and vertical plane units differ when the output
/// is not square. Kept deliberately for compatibility with the reference
/// view mapping.
pub const BASE_SPAN: f64 = 4.0;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Snapshot of the visible region: which point is centred, how far in the
/// view is zoomed and how many escape-time iterations each pixel gets.
///
/// Plain `Copy` data. The `ViewportController` is the only mutator; the
/// evaluator receives snapshots by value and re-validates before rendering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
}

impl Viewport {
    /// The classic whole-set view: centred on (-0.5, 0) at zoom 1.
    #[must_use]
    pub fn home() -> Self {
        Self {
            center: Complex {
                real: -0.5,
                imag: 0.0,
            },
            zoom: 1.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Plane units per pixel along the real axis for the given output width.
    #[must_use]
    pub fn scale_x(&self, width: u32) -> f64 {
        (BASE_SPAN / f64::from(width)) / self.zoom
    }

    /// Plane units per pixel along the imaginary axis for the given output
    /// height.
    #[must_use]
    pub fn scale_y(&self, height: u32) -> f64 {
        (BASE_SPAN / f64::from(height)) / self.zoom
    }
}
