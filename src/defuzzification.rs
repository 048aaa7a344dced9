use std::fmt::Debug;

use crate::error::{FuzzyError, Result};
use crate::linspace::Linspace;
use crate::math::interp_one;

pub const DEFAULT_SAMPLES: usize = 1000;

/// Collapses an aggregated membership function over `[min, max]` into a crisp value.
///
/// Implementations must return a finite value inside `[min, max]`.
pub trait Defuzzifier: Debug + Send + Sync {
    fn defuzzify(&self, membership: &dyn Fn(f64) -> f64, min: f64, max: f64) -> f64;
}

/// Method for defuzzifcating the resulting membership function.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DefuzzificationOp {
    /// Center of Gravity
    #[default]
    Cog,
    /// Bisector of Area
    Boa,
    /// Mean of the values for which the membership function is maximum
    Mom,
    /// Largest value for which the membership function is maximum
    Lom,
    /// Smallest value for which the membership function is maximum
    Som,
}

/// A defuzzification method evaluated over `samples + 1` evenly spaced points.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Defuzzification {
    op: DefuzzificationOp,
    samples: usize,
}

impl Default for Defuzzification {
    fn default() -> Self {
        Self {
            op: DefuzzificationOp::Cog,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl Defuzzification {
    pub fn new(op: DefuzzificationOp, samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(FuzzyError::InvalidSampleCount(samples));
        }

        Ok(Self { op, samples })
    }

    pub fn centroid() -> Self {
        Self::default()
    }

    pub fn mean_of_maximum() -> Self {
        Self {
            op: DefuzzificationOp::Mom,
            samples: DEFAULT_SAMPLES,
        }
    }

    pub fn op(&self) -> DefuzzificationOp {
        self.op
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    fn centroid_of(&self, membership: &dyn Fn(f64) -> f64, min: f64, max: f64) -> Option<f64> {
        let mut num = 0.;
        let mut den = 0.;

        for x in Linspace::intervals(min, max, self.samples) {
            let mu = membership(x);

            num += x * mu;
            den += mu;
        }

        (den != 0.).then(|| num / den)
    }

    /// Every sampled position sharing the highest positive membership. Equality is
    /// exact, so a plateau that wobbles in the last bit splits into separate maxima.
    fn maxima(&self, membership: &dyn Fn(f64) -> f64, min: f64, max: f64) -> Vec<f64> {
        let mut max_mu = 0.;
        let mut points = Vec::new();

        for x in Linspace::intervals(min, max, self.samples) {
            let mu = membership(x);

            if mu > max_mu {
                max_mu = mu;
                points.clear();
                points.push(x);
            } else if mu == max_mu && max_mu > 0. {
                points.push(x);
            }
        }

        points
    }

    fn bisector_of(&self, membership: &dyn Fn(f64) -> f64, min: f64, max: f64) -> Option<f64> {
        let universe: Vec<f64> = Linspace::intervals(min, max, self.samples).collect();
        let mu: Vec<f64> = universe.iter().map(|x| membership(*x)).collect();
        let areas: Vec<f64> = universe
            .windows(2)
            .zip(mu.windows(2))
            .map(|(x, m)| (m[0] + m[1]) * (x[1] - x[0]) / 2.)
            .collect();
        let total_area = areas.iter().sum::<f64>();

        if total_area <= 0. {
            return None;
        }

        let target = total_area / 2.;
        let mut cum_area = 0.;

        for (i_area, area) in areas.iter().enumerate() {
            cum_area += area;

            if cum_area >= target {
                let xp = [(cum_area - area, universe[i_area]), (cum_area, universe[i_area + 1])];

                return Some(interp_one(target, &xp));
            }
        }

        universe.last().copied()
    }
}

impl Defuzzifier for Defuzzification {
    fn defuzzify(&self, membership: &dyn Fn(f64) -> f64, min: f64, max: f64) -> f64 {
        let midpoint = min / 2. + max / 2.;

        let crisp = match self.op {
            DefuzzificationOp::Cog => self.centroid_of(membership, min, max),
            DefuzzificationOp::Boa => self.bisector_of(membership, min, max),
            DefuzzificationOp::Mom => {
                let points = self.maxima(membership, min, max);

                (!points.is_empty()).then(|| points.iter().sum::<f64>() / points.len() as f64)
            },
            DefuzzificationOp::Lom => self.maxima(membership, min, max).last().copied(),
            DefuzzificationOp::Som => self.maxima(membership, min, max).first().copied(),
        };

        crisp.filter(|x| x.is_finite()).unwrap_or(midpoint)
    }
}
