use thiserror::Error;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    NonReal(#[from] NonRealError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A floating-point value left the real number line.
///
/// NaN and infinities are never rejected at construction time — they
/// propagate through arithmetic exactly as IEEE-754 dictates and are only
/// surfaced when a caller asks for them via an `or_err` check. NaN takes
/// priority over the infinities when both are present in one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NonRealError {
    #[error("NaN encountered")]
    NaN,

    #[error("positive infinity encountered")]
    PositiveInfinity,

    #[error("negative infinity encountered")]
    NegativeInfinity,
}

impl NonRealError {
    /// Classifies a scalar, returning `None` for ordinary finite values.
    #[must_use]
    pub fn of(v: f64) -> Option<Self> {
        if v.is_nan() {
            Some(Self::NaN)
        } else if v == f64::INFINITY {
            Some(Self::PositiveInfinity)
        } else if v == f64::NEG_INFINITY {
            Some(Self::NegativeInfinity)
        } else {
            None
        }
    }

    /// Checks a scalar, passing finite values through.
    ///
    /// # Errors
    ///
    /// Returns the classification if `v` is NaN or infinite.
    pub fn check(v: f64) -> std::result::Result<f64, Self> {
        match Self::of(v) {
            Some(err) => Err(err),
            None => Ok(v),
        }
    }

    /// Returns true if the error is the NaN variant.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self == Self::NaN
    }

    /// Returns true if the error is either infinity variant.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::PositiveInfinity | Self::NegativeInfinity)
    }
}

/// Errors related to degenerate geometric configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("line has no direction: a and b coefficients are both zero")]
    DegenerateLine,

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scalars() {
        assert_eq!(NonRealError::of(1.5), None);
        assert_eq!(NonRealError::of(f64::NAN), Some(NonRealError::NaN));
        assert_eq!(
            NonRealError::of(f64::INFINITY),
            Some(NonRealError::PositiveInfinity)
        );
        assert_eq!(
            NonRealError::of(f64::NEG_INFINITY),
            Some(NonRealError::NegativeInfinity)
        );
    }

    #[test]
    fn check_passes_finite_values() {
        assert!(NonRealError::check(0.0).is_ok());
        assert_eq!(NonRealError::check(f64::NAN), Err(NonRealError::NaN));
    }

    #[test]
    fn variant_predicates() {
        assert!(NonRealError::NaN.is_nan());
        assert!(!NonRealError::NaN.is_infinite());
        assert!(NonRealError::PositiveInfinity.is_infinite());
        assert!(NonRealError::NegativeInfinity.is_infinite());
    }
}
