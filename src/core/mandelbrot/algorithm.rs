use crate::core::data::complex::Complex;
use crate::core::data::iteration::IterationResult;

/// Squared escape radius: |z| > 2 guarantees divergence.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time iteration for a single point `c`.
///
/// z starts at 0 and steps through z = z² + c while |z|² stays within the
/// escape radius and the budget is not exhausted. The count is the number of
/// steps taken before the magnitude test failed, capped at `max_iterations`;
/// points that survive the full budget come back with `escaped == false`.
///
/// Pure and total over finite inputs. Callers validate `max_iterations >= 1`
/// before evaluating a frame; a zero budget here degenerates to an immediate
/// non-escaped result.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> IterationResult {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return IterationResult::new(iteration, max_iterations);
        }
        z = z * z + c;
    }

    IterationResult::new(max_iterations, max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        let result = escape_time(Complex::ZERO, 256);

        assert_eq!(result.iterations, 256);
        assert!(!result.escaped);
    }

    #[test]
    fn test_interior_point_reaches_full_budget() {
        // -0.5 lies inside the main cardioid
        let c = Complex {
            real: -0.5,
            imag: 0.0,
        };
        let result = escape_time(c, 1000);

        assert_eq!(result.iterations, 1000);
        assert!(!result.escaped);
    }

    #[test]
    fn test_far_point_escapes_at_iteration_one() {
        let result = escape_time(
            Complex {
                real: 3.0,
                imag: 3.0,
            },
            256,
        );

        assert_eq!(result.iterations, 1);
        assert!(result.escaped);
    }

    #[test]
    fn test_point_outside_radius_still_takes_one_step() {
        // |c|² = 8 > 4, but z₀ = 0 always passes the first magnitude test
        let result = escape_time(
            Complex {
                real: 2.0,
                imag: 2.0,
            },
            256,
        );

        assert_eq!(result.iterations, 1);
        assert!(result.escaped);
    }

    #[test]
    fn test_budget_of_one_caps_every_point() {
        let far = escape_time(
            Complex {
                real: 3.0,
                imag: 3.0,
            },
            1,
        );
        let inside = escape_time(Complex::ZERO, 1);

        // the single allowed step is always taken, so both classify as
        // non-escaped at the budget
        assert_eq!(far.iterations, 1);
        assert!(!far.escaped);
        assert_eq!(inside.iterations, 1);
        assert!(!inside.escaped);
    }

    #[test]
    fn test_deterministic() {
        let c = Complex {
            real: -0.7453,
            imag: 0.1127,
        };

        assert_eq!(escape_time(c, 500), escape_time(c, 500));
    }

    #[test]
    fn test_slowly_diverging_point_escapes_below_budget() {
        // c = 0.26 sits just outside the cardioid cusp
        let result = escape_time(
            Complex {
                real: 0.26,
                imag: 0.0,
            },
            10_000,
        );

        assert!(result.escaped);
        assert!(result.iterations > 1);
        assert!(result.iterations < 10_000);
    }
}
