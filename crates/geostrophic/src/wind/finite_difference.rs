// Finite-difference geostrophic wind along a single altitude axis

use crate::error::{WindError, ZeroDivisor};
use crate::grid::AltitudeGrid;
use crate::pressure::PressureField;
use crate::profile::WindProfile;

/// Geostrophic balance: `u = -(1 / (rho * f)) * dp/dy`
pub fn geostrophic_wind(gradient: f64, rho: f64, f: f64) -> f64 {
    -(1.0 / (rho * f)) * gradient
}

/// Calculate geostrophic wind speeds between altitudes `y_min` and `y_max`
///
/// The pressure gradient is estimated with finite differences on `intervals + 1`
/// equally spaced altitudes: centered (second order) at interior points,
/// forward at `y_min` and backward at `y_max` (first order).
///
/// # Arguments
/// * `p` - Pressure as a function of altitude
/// * `y_min`, `y_max` - Altitude bounds
/// * `rho` - Mean air density
/// * `f` - Coriolis parameter
/// * `intervals` - Number of subdivisions of the altitude range
///
/// # Returns
/// Wind speed at each grid altitude, in grid order
///
/// # Errors
/// `WindError::DivisionByZero` if the step size, `rho` or `f` (or `rho * f`) is zero
pub fn wind_speeds<P>(
    p: P,
    y_min: f64,
    y_max: f64,
    rho: f64,
    f: f64,
    intervals: usize,
) -> Result<WindProfile, WindError>
where
    P: PressureField,
{
    try_wind_speeds(|y| Ok(p.pressure(y)), y_min, y_max, rho, f, intervals)
}

/// Same as [`wind_speeds`] for a pressure function that can fail
///
/// The first error returned by `p` stops the computation and is handed back as is.
pub fn try_wind_speeds<F, E>(
    mut p: F,
    y_min: f64,
    y_max: f64,
    rho: f64,
    f: f64,
    intervals: usize,
) -> Result<WindProfile, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<WindError>,
{
    let grid = AltitudeGrid::new(y_min, y_max, intervals)?;
    if rho == 0.0 {
        return Err(WindError::DivisionByZero(ZeroDivisor::Density).into());
    }
    if f == 0.0 {
        return Err(WindError::DivisionByZero(ZeroDivisor::Coriolis).into());
    }
    if rho * f == 0.0 {
        return Err(WindError::DivisionByZero(ZeroDivisor::BalanceFactor).into());
    }

    let d_y = grid.step();
    log::debug!(
        "Computing geostrophic wind at {} altitudes in [{}, {}], dy = {}",
        grid.len(),
        y_min,
        y_max,
        d_y
    );

    let mut winds = WindProfile::with_capacity(grid.len());
    for (j, y) in grid.iter().enumerate() {
        let d_p = grid.stencil(j).gradient(&mut p, y, d_y)?;
        winds.insert(y, geostrophic_wind(d_p, rho, f));
    }
    Ok(winds)
}
