use crate::error::{WindError, ZeroDivisor};
use crate::wind::Stencil;

/// Equally spaced altitudes spanning `[y_min, y_max]` inclusive
///
/// A grid with `intervals = N` holds `N + 1` samples `y_j = j * step + y_min`.
/// The grid is a plain value, so it can be iterated any number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeGrid {
    y_min: f64,
    step: f64,
    intervals: usize,
}

impl AltitudeGrid {
    /// Build a grid from altitude bounds and a subdivision count
    ///
    /// # Errors
    /// `WindError::DivisionByZero` when `intervals` is zero or the bounds coincide,
    /// since the step size would then divide by zero or be zero itself.
    pub fn new(y_min: f64, y_max: f64, intervals: usize) -> Result<Self, WindError> {
        if intervals == 0 {
            return Err(WindError::DivisionByZero(ZeroDivisor::Intervals));
        }
        // A tiny range can still underflow to a zero step
        let step = (y_max - y_min) / intervals as f64;
        if step == 0.0 {
            return Err(WindError::DivisionByZero(ZeroDivisor::EmptyRange));
        }
        Ok(Self {
            y_min,
            step,
            intervals,
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples, always `intervals + 1`
    pub fn len(&self) -> usize {
        self.intervals + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Altitude of sample `j`
    pub fn altitude(&self, j: usize) -> f64 {
        j as f64 * self.step + self.y_min
    }

    /// Finite-difference formula for sample `j`
    pub fn stencil(&self, j: usize) -> Stencil {
        Stencil::for_index(j, self.intervals)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + use<> {
        let grid = *self;
        (0..grid.len()).map(move |j| grid.altitude(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 1e6, 10)]
    #[case(-50.0, 50.0, 1)]
    #[case(0.0, 1.0, 7)]
    #[case(100.0, 0.0, 4)]
    fn test_grid_has_n_plus_one_samples(#[case] y_min: f64, #[case] y_max: f64, #[case] n: usize) {
        let grid = AltitudeGrid::new(y_min, y_max, n).unwrap();

        assert_eq!(grid.len(), n + 1);
        assert_eq!(grid.iter().len(), n + 1);
        assert_eq!(grid.iter().count(), n + 1);
    }

    #[test]
    fn test_grid_is_ascending_and_evenly_spaced() {
        let grid = AltitudeGrid::new(0.0, 1e6, 10).unwrap();
        let ys: Vec<f64> = grid.iter().collect();

        assert_eq!(ys[0], 0.0);
        assert!((ys[10] - 1e6).abs() < 1e-6);
        for pair in ys.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 1e5).abs() < 1e-6, "spacing was {}", pair[1] - pair[0]);
        }
    }

    #[test]
    fn test_grid_can_be_iterated_twice() {
        let grid = AltitudeGrid::new(0.0, 3.0, 3).unwrap();

        let first: Vec<f64> = grid.iter().collect();
        let second: Vec<f64> = grid.iter().collect();

        assert_eq!(first, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reversed_bounds_give_descending_grid() {
        let grid = AltitudeGrid::new(4.0, 0.0, 4).unwrap();

        assert_eq!(grid.step(), -1.0);
        assert_eq!(grid.iter().collect::<Vec<_>>(), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_stencils_along_grid() {
        let grid = AltitudeGrid::new(0.0, 1.0, 3).unwrap();

        assert_eq!(grid.stencil(0), Stencil::Forward);
        assert_eq!(grid.stencil(1), Stencil::Centered);
        assert_eq!(grid.stencil(2), Stencil::Centered);
        assert_eq!(grid.stencil(3), Stencil::Backward);
    }

    #[rstest]
    #[case(0.0, 1.0, 0, ZeroDivisor::Intervals)]
    #[case(5.0, 5.0, 10, ZeroDivisor::EmptyRange)]
    #[case(5.0, 5.0, 0, ZeroDivisor::Intervals)]
    #[case(0.0, 5e-324, 10, ZeroDivisor::EmptyRange)] // step underflows
    fn test_degenerate_grid_is_rejected(
        #[case] y_min: f64,
        #[case] y_max: f64,
        #[case] n: usize,
        #[case] expected: ZeroDivisor,
    ) {
        assert_eq!(
            AltitudeGrid::new(y_min, y_max, n),
            Err(WindError::DivisionByZero(expected))
        );
    }
}
