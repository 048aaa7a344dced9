use num::Float;

/// Evenly spaced samples over a closed interval, like `numpy.linspace`
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = if n > 1 {
            // Counts beyond F's range are not reachable from a sample count
            let num_steps = F::from(n - 1).unwrap_or_else(F::one);
            (max - min) / num_steps
        } else {
            F::zero()
        };

        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }

    /// The grid a defuzzifier with `samples` intervals walks: `samples + 1` points
    pub fn intervals(min: F, max: F, samples: usize) -> Self {
        Self::new(min, max, samples + 1)
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = F::from(self.index)?;
            self.index += 1;
            Some(self.start + self.step * i)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace() {
    let points: Vec<f64> = Linspace::new(0., 1., 5).collect();

    assert_eq!(points, vec![0., 0.25, 0.5, 0.75, 1.]);

    let points: Vec<f64> = Linspace::intervals(0., 10., 4).collect();

    assert_eq!(points, vec![0., 2.5, 5., 7.5, 10.]);
    assert_eq!(Linspace::new(3.0f32, 3.0, 1).collect::<Vec<_>>(), vec![3.]);
    assert_eq!(Linspace::new(0.0f64, 1.0, 0).count(), 0);
}
