//! Polynomial suite: fixed-degree value types from constant through quartic.
//!
//! Each degree is a distinct concrete type so the derivative chain stays
//! statically checked (`Quartic -> Cubic -> Quadratic -> Linear -> Constant`)
//! and root-finding dispatches without branching on a runtime degree field.
//! The degree is a tag: a `Quadratic` with a leading coefficient of zero is
//! still degree 2, and delegates root-finding to the lower-degree solver.

mod constant;
mod cubic;
mod linear;
mod quadratic;
mod quartic;

pub use constant::Constant;
pub use cubic::Cubic;
pub use linear::Linear;
pub use quadratic::Quadratic;
pub use quartic::Quartic;

use crate::error::NonRealError;
use crate::math::{human_format, is_equal};

/// Access to the coefficient vector of an equation, highest degree first.
pub trait Coefficients {
    fn coefficients(&self) -> &[f64];
}

/// A single-indeterminate polynomial equation. Mainly used for Bézier
/// curves.
pub trait Polynomial: Coefficients {
    /// The polynomial degree. Also known as the largest exponent. This is a
    /// declared property of the type, independent of coefficient values.
    fn degree(&self) -> usize;

    /// Evaluates the polynomial for the provided `t` value.
    fn at_t(&self, t: f64) -> f64;

    /// Returns the real roots of the equation. Complex roots are dropped,
    /// never represented, so the result holds at most `degree` values.
    fn roots(&self) -> Vec<f64>;

    /// Renders the polynomial as a formula string, using `var` for the
    /// variable symbol and optionally prefixing with `f(var)=`.
    fn text(&self, var: char, prefix: bool) -> String {
        format_polynomial(self.coefficients(), var, prefix)
    }
}

/// A polynomial that can produce its first derivative. The derivative of a
/// degree-n type is statically the degree-(n-1) type.
pub trait Derivable: Polynomial {
    type Derivative: Polynomial;

    fn derivative(&self) -> Self::Derivative;
}

/// Compares the coefficient vectors of two equations element-wise within
/// the comparison tolerance.
#[must_use]
pub fn is_equal_equations<T: Coefficients>(a: &T, b: &T) -> bool {
    let (av, bv) = (a.coefficients(), b.coefficients());
    av.len() == bv.len() && av.iter().zip(bv).all(|(&x, &y)| is_equal(x, y))
}

/// Scans a coefficient slice for non-real values. A NaN anywhere wins over
/// an infinity; otherwise the first infinity in order is reported.
pub(crate) fn coeffs_or_err(coeffs: &[f64]) -> Result<(), NonRealError> {
    let mut inf = None;
    for &c in coeffs {
        match NonRealError::of(c) {
            Some(e) if e.is_nan() => return Err(e),
            Some(e) if inf.is_none() => inf = Some(e),
            _ => {}
        }
    }
    match inf {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Shared `f(t)=...` formatter. Coefficients are highest degree first; the
/// degree-0 form renders as `a(t^0)` to distinguish a constant from a bare
/// number in fixtures.
fn format_polynomial(coeffs: &[f64], var: char, prefix: bool) -> String {
    let mut out = String::new();
    if prefix {
        out.push_str(&format!("f({var})="));
    }

    if let [a] = coeffs {
        out.push_str(&format!("{}({var}^0)", human_format(9, *a)));
        return out;
    }

    let top = coeffs.len() - 1;
    for (h, &c) in coeffs.iter().enumerate() {
        let exp = top - h;
        if h == 0 {
            out.push_str(&human_format(9, c));
        } else {
            let (sign, mag) = if c < 0.0 { ('-', -c) } else { ('+', c) };
            out.push(sign);
            out.push_str(&human_format(9, mag));
        }
        match exp {
            0 => {}
            1 => out.push(var),
            _ => out.push_str(&format!("{var}^{exp}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_match_fixture_notation() {
        assert_eq!(Constant::new(12.0).text('t', true), "f(t)=12(t^0)");
        assert_eq!(Linear::new(13.0, 2.0).text('t', true), "f(t)=13t+2");
        assert_eq!(
            Quadratic::new(3.0, 13.0, 2.0).text('t', true),
            "f(t)=3t^2+13t+2"
        );
        assert_eq!(
            Cubic::new(-85.0, 120.0, 0.0, 10.0).text('t', false),
            "-85t^3+120t^2+0t+10"
        );
        assert_eq!(
            Quartic::new(6.52, -21.04, 21.6, 9.12, -2.42).text('t', false),
            "6.52t^4-21.04t^3+21.6t^2+9.12t-2.42"
        );
    }

    #[test]
    fn equation_equality_is_coefficient_wise() {
        let a = Quadratic::new(1.0, 2.0, 3.0);
        let b = Quadratic::new(1.0, 2.0000001, 3.0);
        let c = Quadratic::new(1.0, 2.1, 3.0);
        assert!(is_equal_equations(&a, &b));
        assert!(!is_equal_equations(&a, &c));
    }
}
