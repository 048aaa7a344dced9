use num::Float;

/// Similar to numpy.interp for a single point. `coords` must be sorted by x and non-empty.
pub(crate) fn interp_one<F: Float>(x: F, coords: &[(F, F)]) -> F {
    let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) = (coords.first(), coords.last()) else {
        return F::zero();
    };

    // Base cases
    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    for window in coords.windows(2) {
        let (x1, y1) = window[0];
        let (x2, y2) = window[1];

        // Actual interpolation
        if x1 <= x && x <= x2 {
            if x2 == x1 {
                return y2;
            }

            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    // NaN falls through every comparison
    F::zero()
}

#[test]
fn test_interp() {
    let interp = |x: &[f64], coords: &[(f64, f64)]| x.iter().map(|x| interp_one(*x, coords)).collect::<Vec<_>>();

    let x = [0., 1., 1.5, 2.72, 3.24];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];

    assert_eq!(interp(&x, &coords), vec![3., 3., 2.5, 0.5599999999999996, 0.]);

    let x = [2.5, -1., 7.5];
    let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];

    assert_eq!(interp(&x, &coords), vec![4., 0., 2.]);
    assert_eq!(interp_one(1.0f64, &[]), 0.);
}
