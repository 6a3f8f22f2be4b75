use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector4;

use crate::error::NonRealError;
use crate::math::is_zero;

use super::{Coefficients, Derivable, Polynomial, Quadratic};

/// A polynomial in the form of `f(t) = at^3 + bt^2 + ct + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    coeffs: [f64; 4],
}

impl Cubic {
    /// Creates the degree-3 polynomial `f(t) = at^3 + bt^2 + ct + d`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            coeffs: [a, b, c, d],
        }
    }

    /// Creates a cubic from a coefficient vector, highest degree first.
    #[must_use]
    pub fn from_vector(v: Vector4<f64>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Returns the coefficients as an `(a, b, c, d)` tuple.
    #[must_use]
    pub fn abcd(&self) -> (f64, f64, f64, f64) {
        (
            self.coeffs[0],
            self.coeffs[1],
            self.coeffs[2],
            self.coeffs[3],
        )
    }

    /// Checks the coefficients for NaN or infinity. NaN takes priority.
    ///
    /// # Errors
    ///
    /// Returns the offending classification if any coefficient is non-real.
    pub fn or_err(&self) -> Result<Self, NonRealError> {
        super::coeffs_or_err(&self.coeffs).map(|()| *self)
    }
}

impl Coefficients for Cubic {
    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Polynomial for Cubic {
    fn degree(&self) -> usize {
        3
    }

    fn at_t(&self, t: f64) -> f64 {
        let (a, b, c, d) = self.abcd();
        ((a * t + b) * t + c) * t + d
    }

    /// Closed-form real roots via the depressed cubic `t^3 + pt + q = 0`.
    ///
    /// Dispatch on the discriminant `disc = q^2/4 + p^3/27`:
    /// near-zero with non-vanishing `p` gives the two rational roots,
    /// positive gives the single Cardano root (sum of two real cube roots),
    /// negative gives three real roots via the cosine method. When both `p`
    /// and `q` vanish the depressed equation is `t^3 = 0` and the triple
    /// root is reported once. Every branch shifts by `-b/3a` before return.
    fn roots(&self) -> Vec<f64> {
        let (a, b, c, d) = self.abcd();
        if is_zero(a) {
            return Quadratic::new(b, c, d).roots();
        }

        // depress
        let p = (3.0 * a * c - b * b) / (3.0 * a * a);
        let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);
        let shift = b / (3.0 * a);

        if is_zero(p) && is_zero(q) {
            return vec![-shift];
        }

        let disc = q * q / 4.0 + p * p * p / 27.0;
        let mut roots = if is_zero(disc) && !is_zero(p) {
            vec![-1.5 * q / p, 3.0 * q / p]
        } else if disc > 0.0 || is_zero(disc) {
            let sd = disc.max(0.0).sqrt();
            let q2 = -q / 2.0;
            vec![(q2 + sd).cbrt() + (q2 - sd).cbrt()]
        } else {
            let u = 2.0 * (-p / 3.0).sqrt();
            let theta = (3.0 * q / p / u).acos() / 3.0;
            let k = 2.0 * PI / 3.0;
            vec![
                u * theta.cos(),
                u * (theta - k).cos(),
                u * (theta - 2.0 * k).cos(),
            ]
        };

        // un-depress
        for r in &mut roots {
            *r -= shift;
        }
        roots
    }
}

impl Derivable for Cubic {
    type Derivative = Quadratic;

    fn derivative(&self) -> Quadratic {
        let (a, b, c, _) = self.abcd();
        Quadratic::new(3.0 * a, 2.0 * b, c)
    }
}

impl fmt::Display for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text('t', true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_equal;

    #[test]
    fn three_real_roots() {
        let eq = Cubic::new(3.0, -16.0, 23.0, -6.0);
        let roots = eq.roots();
        assert_eq!(roots.len(), 3);
        assert!(is_equal(roots[0], 3.0), "{}", roots[0]);
        assert!(is_equal(roots[1], 2.0), "{}", roots[1]);
        assert!(is_equal(roots[2], 1.0 / 3.0), "{}", roots[2]);
    }

    #[test]
    fn single_real_root() {
        // t^3 + t + 1 has one real root near -0.6823278.
        let eq = Cubic::new(1.0, 0.0, 1.0, 1.0);
        let roots = eq.roots();
        assert_eq!(roots.len(), 1);
        assert!(is_equal(roots[0], -0.682_327_803_8), "{}", roots[0]);
    }

    #[test]
    fn double_root_branch_undepresses() {
        // (t-1)^2 (t-2) = t^3 - 4t^2 + 5t - 2, discriminant zero.
        let eq = Cubic::new(1.0, -4.0, 5.0, -2.0);
        let roots = eq.roots();
        assert_eq!(roots.len(), 2);
        for r in &roots {
            assert!(eq.at_t(*r).abs() < 1e-9, "{r}");
        }
        assert!(is_equal(roots[0], 1.0));
        assert!(is_equal(roots[1], 2.0));
    }

    #[test]
    fn triple_root_reported_once() {
        // (t-2)^3 = t^3 - 6t^2 + 12t - 8.
        let eq = Cubic::new(1.0, -6.0, 12.0, -8.0);
        assert_eq!(eq.roots(), vec![2.0]);
        // Plain t^3.
        assert_eq!(Cubic::new(1.0, 0.0, 0.0, 0.0).roots(), vec![0.0]);
    }

    #[test]
    fn roots_evaluate_to_zero_and_respect_degree() {
        let cases = [
            Cubic::new(3.0, -16.0, 23.0, -6.0),
            Cubic::new(-85.0, 120.0, 0.0, 10.0),
            Cubic::new(1.0, 0.0, -7.0, 6.0),
            Cubic::new(2.0, -3.0, 4.0, -5.0),
        ];
        for eq in cases {
            let roots = eq.roots();
            assert!(roots.len() <= 3, "{eq}");
            for r in roots {
                assert!(eq.at_t(r).abs() < 1e-7, "{eq} at {r} = {}", eq.at_t(r));
            }
        }
    }

    #[test]
    fn degenerate_leading_coefficient_delegates_to_quadratic() {
        let eq = Cubic::new(0.0, 3.0, 13.0, 2.0);
        let roots = eq.roots();
        assert_eq!(roots.len(), 2);
        assert!(is_equal(roots[0], -0.159_734_236_868));
        assert!(is_equal(roots[1], -4.173_599_096_465_4));
    }

    #[test]
    fn derivative_downcasts_to_quadratic() {
        assert_eq!(
            Cubic::new(3.0, -16.0, 23.0, -6.0).derivative(),
            Quadratic::new(9.0, -32.0, 23.0)
        );
    }

    #[test]
    fn fallibility() {
        assert!(Cubic::new(1.0, 2.0, 3.0, 4.0).or_err().is_ok());
        assert_eq!(
            Cubic::new(f64::INFINITY, f64::NAN, 0.0, 0.0).or_err(),
            Err(NonRealError::NaN)
        );
    }
}
