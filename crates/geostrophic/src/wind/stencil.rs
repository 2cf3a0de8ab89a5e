/// Finite-difference formula used for dp/dy at one grid sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stencil {
    /// `(p(y + dy) - p(y)) / dy`, first order, left boundary
    Forward,
    /// `(p(y) - p(y - dy)) / dy`, first order, right boundary
    Backward,
    /// `(p(y + dy) - p(y - dy)) / (2 dy)`, second order, interior
    Centered,
}

impl Stencil {
    /// Pick the formula for sample `j` of a grid with `intervals` subdivisions
    pub fn for_index(j: usize, intervals: usize) -> Self {
        if j == 0 {
            Stencil::Forward
        } else if j >= intervals {
            Stencil::Backward
        } else {
            Stencil::Centered
        }
    }

    /// Estimate dp/dy at `y` with spacing `dy`
    ///
    /// Errors from `p` are passed through untouched.
    pub fn gradient<F, E>(self, p: &mut F, y: f64, dy: f64) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let d_p = match self {
            Stencil::Forward => (p(y + dy)? - p(y)?) / dy,
            Stencil::Backward => (p(y)? - p(y - dy)?) / dy,
            Stencil::Centered => (p(y + dy)? - p(y - dy)?) / (2.0 * dy),
        };
        Ok(d_p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::convert::Infallible;

    fn square(y: f64) -> Result<f64, Infallible> {
        Ok(y * y)
    }

    #[rstest]
    #[case(0, 10, Stencil::Forward)]
    #[case(1, 10, Stencil::Centered)]
    #[case(9, 10, Stencil::Centered)]
    #[case(10, 10, Stencil::Backward)]
    #[case(0, 1, Stencil::Forward)]
    #[case(1, 1, Stencil::Backward)]
    fn test_stencil_for_index(#[case] j: usize, #[case] n: usize, #[case] expected: Stencil) {
        assert_eq!(Stencil::for_index(j, n), expected);
    }

    #[rstest]
    #[case(Stencil::Forward, 5.0)] // (9 - 4) / 1
    #[case(Stencil::Backward, 3.0)] // (4 - 1) / 1
    #[case(Stencil::Centered, 4.0)] // (9 - 1) / 2, exact for a parabola
    fn test_gradient_of_square_at_two(#[case] stencil: Stencil, #[case] expected: f64) {
        let mut p = square;
        let d_p = stencil.gradient(&mut p, 2.0, 1.0).unwrap();
        assert_eq!(d_p, expected);
    }

    #[test]
    fn test_gradient_propagates_failure() {
        let mut p = |y: f64| if y > 2.5 { Err("out of range") } else { Ok(y) };

        assert_eq!(Stencil::Forward.gradient(&mut p, 2.0, 1.0), Err("out of range"));
        assert_eq!(Stencil::Backward.gradient(&mut p, 2.0, 1.0), Ok(1.0));
    }
}
