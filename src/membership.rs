//! Membership functions: scalar shapes mapping a crisp value onto `[0, 1]`.

use std::fmt::Debug;

use crate::error::{FuzzyError, Result};
use crate::math::interp_one;

/// Multiple of a Gaussian's width used as its practical support
const GAUSSIAN_SIGMAS: f64 = 3.;

/// A membership function `ℝ → [0, 1]` with a finite bounding interval.
pub trait MembershipFunction: Debug + Send + Sync {
    /// Membership degree of `x`, always in `[0, 1]`
    fn calculate(&self, x: f64) -> f64;

    /// Finite interval outside of which the function is zero (or practically zero)
    fn domain(&self) -> (f64, f64);

    /// Midpoint of [`domain`](Self::domain)
    fn center(&self) -> f64 {
        let (min, max) = self.domain();

        min / 2. + max / 2.
    }
}

/// Rises linearly from `a` to a peak of one at `b`, falls back to zero at `c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a < b && b < c) || !a.is_finite() || !c.is_finite() {
            return Err(FuzzyError::InvalidParameter(format!(
                "triangular requires a < b < c, got ({a}, {b}, {c})"
            )));
        }

        Ok(Self { a, b, c })
    }

    pub fn points(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl MembershipFunction for Triangular {
    fn calculate(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;

        if x.is_nan() || x <= a || x >= c {
            0.
        } else if x == b {
            1.
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (c - x) / (c - b)
        }
    }

    fn domain(&self) -> (f64, f64) {
        (self.a, self.c)
    }
}

/// Rises on `[a, b]`, plateaus at one on `[b, c]`, falls on `[c, d]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoidal {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Trapezoidal {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        if !(a < b && b < c && c < d) || !a.is_finite() || !d.is_finite() {
            return Err(FuzzyError::InvalidParameter(format!(
                "trapezoidal requires a < b < c < d, got ({a}, {b}, {c}, {d})"
            )));
        }

        Ok(Self { a, b, c, d })
    }

    pub fn points(&self) -> (f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d)
    }
}

impl MembershipFunction for Trapezoidal {
    fn calculate(&self, x: f64) -> f64 {
        let Self { a, b, c, d } = *self;

        if x.is_nan() || x <= a || x >= d {
            0.
        } else if b <= x && x <= c {
            1.
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (d - x) / (d - c)
        }
    }

    fn domain(&self) -> (f64, f64) {
        (self.a, self.d)
    }
}

/// `exp(-0.5 * ((x - center) / width)^2)`. Never exactly zero; its domain is
/// truncated at three widths either side of the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    center: f64,
    width: f64,
}

impl Gaussian {
    pub fn new(center: f64, width: f64) -> Result<Self> {
        // Also rejects NaN
        if !(width > 0.) || !center.is_finite() || !width.is_finite() {
            return Err(FuzzyError::InvalidParameter(format!(
                "gaussian width must be positive and finite, got center {center}, width {width}"
            )));
        }

        Ok(Self { center, width })
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl MembershipFunction for Gaussian {
    fn calculate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.;
        }

        let z = (x - self.center) / self.width;

        (-0.5 * z * z).exp()
    }

    fn domain(&self) -> (f64, f64) {
        let spread = GAUSSIAN_SIGMAS * self.width;

        (self.center - spread, self.center + spread)
    }

    fn center(&self) -> f64 {
        self.center
    }
}

/// Linear interpolation between `(x, μ)` control points, extended flat past
/// the first and last point (a shoulder).
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseLinear {
    points: Vec<(f64, f64)>,
}

impl PiecewiseLinear {
    pub fn new(points: impl Into<Vec<(f64, f64)>>) -> Result<Self> {
        let points = points.into();

        if points.len() < 2 {
            return Err(FuzzyError::InvalidParameter(format!(
                "piecewise linear needs at least two points, got {}",
                points.len()
            )));
        }
        if points.windows(2).any(|w| !(w[0].0 < w[1].0)) || points.iter().any(|(x, _)| !x.is_finite()) {
            return Err(FuzzyError::InvalidParameter(
                "piecewise linear x coordinates must be finite and strictly increasing".into(),
            ));
        }
        if let Some((_, mu)) = points.iter().find(|(_, mu)| !(0. ..=1.).contains(mu)) {
            return Err(FuzzyError::InvalidParameter(format!(
                "piecewise linear membership {mu} is outside [0, 1]"
            )));
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl MembershipFunction for PiecewiseLinear {
    fn calculate(&self, x: f64) -> f64 {
        interp_one(x, &self.points)
    }

    fn domain(&self) -> (f64, f64) {
        // Validated to hold at least two points
        (self.points[0].0, self.points[self.points.len() - 1].0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_triangular() {
        let tri = Triangular::new(0., 5., 10.).unwrap();

        assert_eq!(tri.calculate(5.), 1.);
        assert_eq!(tri.calculate(0.), 0.);
        assert_eq!(tri.calculate(10.), 0.);
        assert_eq!(tri.calculate(-3.), 0.);
        assert_eq!(tri.calculate(2.5), 0.5);
        assert_eq!(tri.calculate(7.5), 0.5);
        assert_eq!(tri.domain(), (0., 10.));
        assert_eq!(tri.center(), 5.);

        assert!(matches!(Triangular::new(0., 0., 1.), Err(FuzzyError::InvalidParameter(_))));
        assert!(matches!(Triangular::new(2., 1., 3.), Err(FuzzyError::InvalidParameter(_))));
        assert!(Triangular::new(f64::NAN, 1., 2.).is_err());
        assert!(Triangular::new(f64::NEG_INFINITY, 1., 2.).is_err());

        assert_eq!(tri.calculate(f64::NAN), 0.);
        assert_eq!(Trapezoidal::new(0., 1., 2., 3.).unwrap().calculate(f64::NAN), 0.);
        assert_eq!(Gaussian::new(0., 1.).unwrap().calculate(f64::NAN), 0.);
        assert_eq!(PiecewiseLinear::new(vec![(0., 0.), (1., 1.)]).unwrap().calculate(f64::NAN), 0.);
    }

    #[test]
    fn test_trapezoidal() {
        let trap = Trapezoidal::new(0., 2., 4., 8.).unwrap();

        assert_eq!(trap.calculate(0.), 0.);
        assert_eq!(trap.calculate(1.), 0.5);
        assert_eq!(trap.calculate(2.), 1.);
        assert_eq!(trap.calculate(3.), 1.);
        assert_eq!(trap.calculate(4.), 1.);
        assert_eq!(trap.calculate(6.), 0.5);
        assert_eq!(trap.calculate(8.), 0.);
        assert_eq!(trap.calculate(100.), 0.);
        assert_eq!(trap.domain(), (0., 8.));

        assert!(Trapezoidal::new(0., 2., 2., 8.).is_err());
        assert!(Trapezoidal::new(0., 2., 4., 3.).is_err());
    }

    #[test]
    fn test_gaussian() {
        let gauss = Gaussian::new(10., 2.).unwrap();

        assert_eq!(gauss.calculate(10.), 1.);
        assert_relative_eq!(gauss.calculate(12.), (-0.5f64).exp());
        assert_relative_eq!(gauss.calculate(8.), gauss.calculate(12.));
        assert!(gauss.calculate(1000.) >= 0.);
        assert_eq!(gauss.domain(), (4., 16.));
        assert_eq!(gauss.center(), 10.);

        assert!(Gaussian::new(0., 0.).is_err());
        assert!(Gaussian::new(0., -1.).is_err());
        assert!(Gaussian::new(0., f64::NAN).is_err());
    }

    #[test]
    fn test_piecewise_linear() {
        let low = PiecewiseLinear::new(vec![(155., 1.), (160., 0.8), (165., 0.5), (170., 0.2), (175., 0.)]).unwrap();

        assert_eq!(low.calculate(150.), 1.);
        assert_eq!(low.calculate(160.), 0.8);
        assert_relative_eq!(low.calculate(162.5), 0.65);
        assert_eq!(low.calculate(190.), 0.);
        assert_eq!(low.domain(), (155., 175.));

        assert!(PiecewiseLinear::new(vec![(0., 1.)]).is_err());
        assert!(PiecewiseLinear::new(vec![(1., 0.), (0., 1.)]).is_err());
        assert!(PiecewiseLinear::new(vec![(0., 0.), (1., 1.5)]).is_err());
    }
}
