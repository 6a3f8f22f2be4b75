use std::fmt;

use crate::error::NonRealError;
use crate::math::is_zero;

use super::{Coefficients, Cubic, Derivable, Polynomial, Quadratic};

/// A polynomial in the form of `f(t) = at^4 + bt^3 + ct^2 + dt + e`.
///
/// Root-finding classifies the quartic by its discriminant before falling
/// back to the general depressed-quartic solve (resolvent cubic plus two
/// quadratic factors). Only real roots are ever returned; complex conjugate
/// pairs are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartic {
    coeffs: [f64; 5],
}

impl Quartic {
    /// Creates the degree-4 polynomial `f(t) = at^4 + bt^3 + ct^2 + dt + e`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self {
            coeffs: [a, b, c, d, e],
        }
    }

    /// Returns the coefficients as an `(a, b, c, d, e)` tuple.
    #[must_use]
    pub fn abcde(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.coeffs[0],
            self.coeffs[1],
            self.coeffs[2],
            self.coeffs[3],
            self.coeffs[4],
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

    /// The quartic discriminant and its companion quantities
    /// `(delta, P, R, delta0, D)` used to classify the root structure.
    #[allow(clippy::similar_names)]
    fn discriminant(&self) -> (f64, f64, f64, f64, f64) {
        let (a, b, c, d, e) = self.abcde();

        let delta = 256.0 * a.powi(3) * e.powi(3) - 192.0 * a * a * b * d * e * e
            - 128.0 * a * a * c * c * e * e
            + 144.0 * a * a * c * d * d * e
            - 27.0 * a * a * d.powi(4)
            + 144.0 * a * b * b * c * e * e
            - 6.0 * a * b * b * d * d * e
            - 80.0 * a * b * c * c * d * e
            + 18.0 * a * b * c * d.powi(3)
            + 16.0 * a * c.powi(4) * e
            - 4.0 * a * c.powi(3) * d * d
            - 27.0 * b.powi(4) * e * e
            + 18.0 * b.powi(3) * c * d * e
            - 4.0 * b.powi(3) * d.powi(3)
            - 4.0 * b * b * c.powi(3) * e
            + b * b * c * c * d * d;

        let p_big = 8.0 * a * c - 3.0 * b * b;
        let r_big = b.powi(3) + 8.0 * d * a * a - 4.0 * a * b * c;
        let delta0 = c * c - 3.0 * b * d + 12.0 * a * e;
        let d_big = 64.0 * a.powi(3) * e - 16.0 * a * a * c * c + 16.0 * a * b * b * c
            - 16.0 * a * a * b * d
            - 3.0 * b.powi(4);

        (delta, p_big, r_big, delta0, d_big)
    }

    /// Solves the depressed quartic `x^4 + px^2 + qx + r = 0` via a
    /// resolvent cubic, then shifts every root back by `-b/4a`.
    #[allow(clippy::similar_names)]
    fn depressed_roots(&self, p_big: f64, r_big: f64, d_big: f64) -> Vec<f64> {
        let (a, b, c, d, e) = self.abcde();
        let shift = b / (4.0 * a);
        let undepress = |mut roots: Vec<f64>| -> Vec<f64> {
            for r in &mut roots {
                *r -= shift;
            }
            roots
        };

        let p = p_big / (8.0 * a * a);
        let q = r_big / (8.0 * a * a * a);
        let r = (d_big + 16.0 * a * a * (12.0 * e * a - 3.0 * d * b + c * c))
            / (256.0 * a.powi(4));

        if is_zero(r) {
            // x (x^3 + px + q) = 0
            let mut roots = vec![0.0];
            roots.extend(Cubic::new(1.0, 0.0, p, q).roots());
            return undepress(roots);
        } else if is_zero(q) {
            // Biquadratic: x^4 + px^2 + r = 0.
            let mut roots = Vec::with_capacity(4);
            for root in Quadratic::new(1.0, p, r).roots() {
                if is_zero(root) {
                    roots.push(0.0);
                } else if root > 0.0 {
                    let x = root.sqrt();
                    roots.push(x);
                    roots.push(-x);
                }
            }
            return undepress(roots);
        }

        let b2 = p * 5.0 / 2.0;
        let b1 = 2.0 * p * p - r;
        let half_q = q / 2.0;
        let b0 = (p * p * p - p * r - half_q * half_q) / 2.0;

        let resolvent_roots = Cubic::new(1.0, b2, b1, b0).roots();
        let y = match resolvent_roots.last() {
            Some(&y) => y,
            None => return Vec::new(),
        };

        let p2y = p + 2.0 * y;
        if p2y > 0.0 {
            let sqrt_p2y = p2y.sqrt();
            let q0a = p + y - half_q / sqrt_p2y;
            let q0b = p + y + half_q / sqrt_p2y;

            let mut roots = Quadratic::new(1.0, sqrt_p2y, q0a).roots();
            roots.extend(Quadratic::new(1.0, -sqrt_p2y, q0b).roots());
            return undepress(roots);
        }
        Vec::new()
    }
}

impl Coefficients for Quartic {
    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Polynomial for Quartic {
    fn degree(&self) -> usize {
        4
    }

    fn at_t(&self, t: f64) -> f64 {
        let tv = [t * t * t * t, t * t * t, t * t, t, 1.0];
        let mut result = 0.0;
        for (term, coeff) in tv.iter().zip(&self.coeffs) {
            result = term.mul_add(*coeff, result);
        }
        result
    }

    #[allow(clippy::similar_names)]
    fn roots(&self) -> Vec<f64> {
        let (a, b, c, d, e) = self.abcde();
        if is_zero(a) {
            return Cubic::new(b, c, d, e).roots();
        } else if is_zero(e) {
            // Zero is a root; the rest come from the factored cubic.
            let mut roots: Vec<f64> = Cubic::new(a, b, c, d)
                .roots()
                .into_iter()
                .filter(|r| !is_zero(*r))
                .collect();
            roots.push(0.0);
            return roots;
        } else if is_zero(b) && is_zero(d) {
            // Biquadratic: substitute u = t^2.
            let mut roots = Vec::with_capacity(4);
            for root in Quadratic::new(a, c, e).roots() {
                if is_zero(root) {
                    roots.push(0.0);
                } else if root > 0.0 {
                    let x = root.sqrt();
                    roots.push(x);
                    roots.push(-x);
                }
            }
            return roots;
        }

        let (delta, p_big, r_big, delta0, d_big) = self.discriminant();

        if is_zero(delta) {
            if is_zero(d_big) && is_zero(delta0) {
                // All four roots coincide at -b/4a.
                return vec![-b / (4.0 * a)];
            } else if is_zero(delta0) {
                // A triple root and a simple root, all real.
                let x0 = (-72.0 * a * a * e + 10.0 * a * c * c - 3.0 * b * b * c)
                    / (9.0 * (8.0 * a * a * d - 4.0 * a * b * c + b * b * b));
                let x1 = -(b / a + 3.0 * x0);
                return vec![x0, x1];
            } else if is_zero(d_big) && p_big > 0.0 && is_zero(r_big) {
                // Two complex conjugate double roots; nothing real.
                return Vec::new();
            }
        } else if delta > 0.0 && (p_big > 0.0 || d_big > 0.0) {
            // All four roots are complex.
            return Vec::new();
        }

        self.depressed_roots(p_big, r_big, d_big)
    }
}

impl Derivable for Quartic {
    type Derivative = Cubic;

    fn derivative(&self) -> Cubic {
        let (a, b, c, d, _) = self.abcde();
        Cubic::new(4.0 * a, 3.0 * b, 2.0 * c, d)
    }
}

impl fmt::Display for Quartic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text('t', true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_equal;

    fn assert_root_set(eq: &Quartic, expected: &[f64]) {
        let mut roots = eq.roots();
        roots.sort_by(f64::total_cmp);
        let mut want = expected.to_vec();
        want.sort_by(f64::total_cmp);
        assert_eq!(roots.len(), want.len(), "{eq}: {roots:?} != {want:?}");
        for (r, w) in roots.iter().zip(&want) {
            assert!(is_equal(*r, *w), "{eq}: {r} != {w}");
        }
    }

    #[test]
    fn degree_is_four() {
        assert_eq!(Quartic::new(1.0, 0.0, 0.0, 0.0, -1.0).degree(), 4);
    }

    #[test]
    fn four_distinct_real_roots() {
        // (t-1)(t+1)(t-2)(t+2) = t^4 - 5t^2 + 4
        assert_root_set(
            &Quartic::new(1.0, 0.0, -5.0, 0.0, 4.0),
            &[-2.0, -1.0, 1.0, 2.0],
        );
        // (t-1)(t-2)(t-3)(t-4) = t^4 - 10t^3 + 35t^2 - 50t + 24
        assert_root_set(
            &Quartic::new(1.0, -10.0, 35.0, -50.0, 24.0),
            &[1.0, 2.0, 3.0, 4.0],
        );
    }

    #[test]
    fn no_real_roots() {
        // t^4 + 1 > 0 everywhere.
        assert!(Quartic::new(1.0, 0.0, 0.0, 0.0, 1.0).roots().is_empty());
        // (t^2+1)(t^2+4) = t^4 + 5t^2 + 4
        assert!(Quartic::new(1.0, 0.0, 5.0, 0.0, 4.0).roots().is_empty());
    }

    #[test]
    fn mixed_real_and_complex_roots() {
        // (t^2+1)(t-1)(t-3) = t^4 - 4t^3 + 4t^2 - 4t + 3
        assert_root_set(&Quartic::new(1.0, -4.0, 4.0, -4.0, 3.0), &[1.0, 3.0]);
    }

    #[test]
    fn quadruple_root() {
        // (t-1)^4 = t^4 - 4t^3 + 6t^2 - 4t + 1
        assert_root_set(&Quartic::new(1.0, -4.0, 6.0, -4.0, 1.0), &[1.0]);
        // (t+2)^4 = t^4 + 8t^3 + 24t^2 + 32t + 16
        assert_root_set(&Quartic::new(1.0, 8.0, 24.0, 32.0, 16.0), &[-2.0]);
    }

    #[test]
    fn triple_and_simple_root() {
        // (t-1)^3 (t-2) = t^4 - 5t^3 + 9t^2 - 7t + 2
        let roots = Quartic::new(1.0, -5.0, 9.0, -7.0, 2.0).roots();
        assert_eq!(roots.len(), 2);
        assert!(is_equal(roots[0], 1.0), "{}", roots[0]);
        assert!(is_equal(roots[1], 2.0), "{}", roots[1]);
    }

    #[test]
    fn zero_constant_term_adds_explicit_zero_root() {
        // t(t-1)(t-2)(t-3) = t^4 - 6t^3 + 11t^2 - 6t
        let roots = Quartic::new(1.0, -6.0, 11.0, -6.0, 0.0).roots();
        assert_eq!(roots.last(), Some(&0.0));
        assert_root_set(
            &Quartic::new(1.0, -6.0, 11.0, -6.0, 0.0),
            &[0.0, 1.0, 2.0, 3.0],
        );
    }

    #[test]
    fn degenerate_leading_coefficient_delegates_to_cubic() {
        let eq = Quartic::new(0.0, 3.0, -16.0, 23.0, -6.0);
        assert_root_set(&eq, &[1.0 / 3.0, 2.0, 3.0]);
    }

    #[test]
    fn roots_evaluate_to_zero_and_respect_degree() {
        let cases = [
            Quartic::new(1.0, 0.0, -5.0, 0.0, 4.0),
            Quartic::new(2.0, -3.0, -12.0, 5.0, 6.0),
            Quartic::new(1.0, -10.0, 35.0, -50.0, 24.0),
            Quartic::new(-1.0, 2.0, 3.0, -4.0, 5.0),
        ];
        for eq in cases {
            let roots = eq.roots();
            assert!(roots.len() <= 4, "{eq}");
            for r in roots {
                assert!(eq.at_t(r).abs() < 1e-6, "{eq} at {r} = {}", eq.at_t(r));
            }
        }
    }

    #[test]
    fn derivative_downcasts_to_cubic() {
        assert_eq!(
            Quartic::new(1.0, -4.0, 4.0, -4.0, 3.0).derivative(),
            Cubic::new(4.0, -12.0, 8.0, -4.0)
        );
    }

    #[test]
    fn fallibility() {
        assert!(Quartic::new(1.0, 2.0, 3.0, 4.0, 5.0).or_err().is_ok());
        assert_eq!(
            Quartic::new(1.0, 2.0, f64::NEG_INFINITY, 4.0, 5.0).or_err(),
            Err(NonRealError::NegativeInfinity)
        );
    }
}
