use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps an output-surface coordinate to its point on the complex plane.
///
/// Coordinates are `f64` so fractional cursor positions and whole pixel
/// centres go through the same mapping. Each axis spans the 4-unit base span
/// at zoom 1 independently of the other, so plane units differ per axis when
/// the output is not square; this matches the reference view mapping and is
/// pinned by tests.
#[must_use]
pub fn pixel_to_plane(x: f64, y: f64, width: u32, height: u32, viewport: &Viewport) -> Complex {
    Complex {
        real: (x - f64::from(width) / 2.0) * viewport.scale_x(width) + viewport.center.real,
        imag: (y - f64::from(height) / 2.0) * viewport.scale_y(height) + viewport.center.imag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_maps_to_viewport_center() {
        let viewport = Viewport::home();

        let c = pixel_to_plane(50.0, 50.0, 100, 100, &viewport);

        assert_eq!(c.real, -0.5);
        assert_eq!(c.imag, 0.0);
    }

    #[test]
    fn test_home_view_spans_expected_region() {
        let viewport = Viewport::home();

        let top_left = pixel_to_plane(0.0, 0.0, 100, 100, &viewport);
        let bottom_right = pixel_to_plane(100.0, 100.0, 100, 100, &viewport);

        assert_eq!(top_left.real, -2.5);
        assert_eq!(top_left.imag, -2.0);
        assert_eq!(bottom_right.real, 1.5);
        assert_eq!(bottom_right.imag, 2.0);
    }

    #[test]
    fn test_zoom_halves_the_visible_span() {
        let mut viewport = Viewport::home();
        viewport.zoom = 2.0;

        let left = pixel_to_plane(0.0, 50.0, 100, 100, &viewport);
        let right = pixel_to_plane(100.0, 50.0, 100, 100, &viewport);

        assert!((right.real - left.real - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_each_axis_spans_base_span_regardless_of_aspect() {
        // 200x100 output: both axes still cover 4 plane units
        let viewport = Viewport::home();

        let top_left = pixel_to_plane(0.0, 0.0, 200, 100, &viewport);
        let bottom_right = pixel_to_plane(200.0, 100.0, 200, 100, &viewport);

        assert_eq!(bottom_right.real - top_left.real, 4.0);
        assert_eq!(bottom_right.imag - top_left.imag, 4.0);
    }
}
