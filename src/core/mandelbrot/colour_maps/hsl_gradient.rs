use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration::IterationResult;

/// Rainbow gradient over the iteration count.
///
/// Escaped points take hue = iterations / max_iterations at full saturation
/// and mid lightness; points inside the set reuse hue 0 (the red family)
/// through the same conversion. That sentinel matches the reference palette
/// and is easy to mistake for an early escape; [`ColourMap`] is the seam for
/// anything that wants a dedicated inside colour instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HslGradient {
    max_iterations: u32,
}

impl HslGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for HslGradient {
    fn map(&self, result: IterationResult) -> Colour {
        let hue = if result.escaped {
            f64::from(result.iterations) / f64::from(self.max_iterations)
        } else {
            0.0
        };

        hsl_to_rgb(hue, 1.0, 0.5)
    }

    fn display_name(&self) -> &str {
        "HSL gradient"
    }
}

/// Standard piecewise-linear HSL to RGB conversion.
///
/// `h`, `s` and `l` are fractions; `h` is a turn, not degrees. Channels are
/// scaled to [0, 255] and rounded half away from zero (`f64::round`), which
/// the exact-value tests below rely on.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Colour {
    let (r, g, b) = if s == 0.0 {
        (l, l, l) // achromatic
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Colour {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(
            hsl_to_rgb(1.0 / 3.0, 1.0, 0.5),
            Colour { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            hsl_to_rgb(2.0 / 3.0, 1.0, 0.5),
            Colour { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_hsl_achromatic() {
        assert_eq!(
            hsl_to_rgb(0.5, 0.0, 0.5),
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Colour { r: 0, g: 0, b: 0 });
        assert_eq!(
            hsl_to_rgb(0.0, 0.0, 1.0),
            Colour {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_hsl_half_turn_is_cyan() {
        assert_eq!(
            hsl_to_rgb(0.5, 1.0, 0.5),
            Colour {
                r: 0,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_channel_rounding_is_half_away_from_zero() {
        // l = 0.5 with s = 0 puts every channel at exactly 127.5
        assert_eq!(
            hsl_to_rgb(0.0, 0.0, 0.5),
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_map_escaped_point_uses_iteration_hue() {
        let gradient = HslGradient::new(300);
        // 100/300 of a turn is exactly the green primary
        let colour = gradient.map(IterationResult::new(100, 300));

        assert_eq!(colour, Colour { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn test_map_inside_point_reuses_hue_zero() {
        // reference sentinel: inside-the-set renders red, not black
        let gradient = HslGradient::new(256);
        let colour = gradient.map(IterationResult::new(256, 256));

        assert_eq!(colour, Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_map_zero_iterations_matches_inside_sentinel() {
        // hue 0 from either side of the classification looks identical;
        // kept from the reference palette, see the type-level docs
        let gradient = HslGradient::new(256);

        assert_eq!(
            gradient.map(IterationResult::new(0, 256)),
            gradient.map(IterationResult::new(256, 256))
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(HslGradient::new(1).display_name(), "HSL gradient");
    }
}
