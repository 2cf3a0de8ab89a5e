// Computed vs analytic geostrophic wind for the cosine reference field

use crate::config::{AtmosphereConfig, DomainConfig, ScenarioConfig};
use crate::error::WindError;
use crate::pressure::CosinePressure;
use crate::wind::wind_speeds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonPoint {
    pub altitude: f64,
    pub computed: f64,
    pub analytic: f64,
    pub abs_error: f64,
}

/// Finite-difference wind next to the exact solution at every grid altitude
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub intervals: usize,
    pub points: Vec<ComparisonPoint>,
}

impl Comparison {
    pub fn compute(
        field: CosinePressure,
        domain: &DomainConfig,
        atmosphere: &AtmosphereConfig,
    ) -> Result<Self, WindError> {
        let (rho, f) = (atmosphere.density, atmosphere.coriolis);
        let winds = wind_speeds(field, domain.y_min, domain.y_max, rho, f, domain.intervals)?;

        let points = winds
            .iter()
            .map(|(altitude, computed)| {
                let analytic = field.analytic_wind(altitude, rho, f);
                ComparisonPoint {
                    altitude,
                    computed,
                    analytic,
                    abs_error: (computed - analytic).abs(),
                }
            })
            .collect();

        Ok(Self {
            intervals: domain.intervals,
            points,
        })
    }

    pub fn for_scenario(config: &ScenarioConfig) -> Result<Self, WindError> {
        Self::compute(config.pressure.field(), &config.domain, &config.atmosphere)
    }

    pub fn altitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.altitude)
    }

    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.abs_error)
    }

    pub fn max_abs_error(&self) -> f64 {
        self.errors().fold(0.0, f64::max)
    }

    /// Largest error away from the two one-sided boundary samples, 0 when there are none
    pub fn max_interior_error(&self) -> f64 {
        let n = self.points.len();
        if n <= 2 {
            return 0.0;
        }
        self.points[1..n - 1]
            .iter()
            .map(|p| p.abs_error)
            .fold(0.0, f64::max)
    }

    /// Smallest non-zero finite error, the floor of a log-scaled error axis
    pub fn min_positive_error(&self) -> Option<f64> {
        self.errors()
            .filter(|e| *e > 0.0 && e.is_finite())
            .fold(None, |acc, e| Some(acc.map_or(e, |m: f64| m.min(e))))
    }
}

/// How much the interior error shrinks when the interval count doubles
///
/// Errors are compared at the interior altitudes of the coarse grid, which are
/// every second sample of the fine grid. Close to 4 for a second-order scheme.
/// `None` when the coarse grid has no interior point or its error is already zero.
pub fn convergence_ratio(config: &ScenarioConfig) -> Result<Option<f64>, WindError> {
    let coarse = Comparison::for_scenario(config)?;
    let fine_domain = DomainConfig {
        intervals: config.domain.intervals * 2,
        ..config.domain.clone()
    };
    let fine = Comparison::compute(config.pressure.field(), &fine_domain, &config.atmosphere)?;

    let n = coarse.intervals;
    let coarse_err = (1..n)
        .map(|j| coarse.points[j].abs_error)
        .fold(0.0, f64::max);
    let fine_err = (1..n)
        .map(|j| fine.points[2 * j].abs_error)
        .fold(0.0, f64::max);

    if n < 2 || fine_err == 0.0 {
        return Ok(None);
    }
    Ok(Some(coarse_err / fine_err))
}
