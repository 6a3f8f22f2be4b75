use std::fmt;

use nalgebra::Vector3;

use crate::error::NonRealError;
use crate::math::is_zero;

use super::{Coefficients, Derivable, Linear, Polynomial};

/// A polynomial in the form of `f(t) = at^2 + bt + c`.
///
/// When `a` is within the zero tolerance, root-finding delegates entirely
/// to the linear solver. This is normative fallback behavior, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    coeffs: [f64; 3],
}

impl Quadratic {
    /// Creates the degree-2 polynomial `f(t) = at^2 + bt + c`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { coeffs: [a, b, c] }
    }

    /// Creates a quadratic from a coefficient vector, highest degree first.
    #[must_use]
    pub fn from_vector(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Returns the coefficients as an `(a, b, c)` triple.
    #[must_use]
    pub fn abc(&self) -> (f64, f64, f64) {
        (self.coeffs[0], self.coeffs[1], self.coeffs[2])
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

impl Coefficients for Quadratic {
    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Polynomial for Quadratic {
    fn degree(&self) -> usize {
        2
    }

    fn at_t(&self, t: f64) -> f64 {
        let (a, b, c) = self.abc();
        (a * t + b) * t + c
    }

    fn roots(&self) -> Vec<f64> {
        let (a, b, c) = self.abc();
        if is_zero(a) {
            return Linear::new(b, c).roots();
        }

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return Vec::new();
        }
        let f = -b / (2.0 * a);
        if is_zero(disc) {
            return vec![f];
        }
        let g = disc.sqrt() / (2.0 * a);
        vec![f + g, f - g]
    }
}

impl Derivable for Quadratic {
    type Derivative = Linear;

    fn derivative(&self) -> Linear {
        Linear::new(2.0 * self.coeffs[0], self.coeffs[1])
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text('t', true))
    }
}
