// Reference scenario: a cosine pressure wave over the lowest 1000 km

/// Mean pressure (Pa)
pub const BASE_PRESSURE: f64 = 1e5;
/// Pressure wave amplitude (Pa)
pub const PRESSURE_AMPLITUDE: f64 = 200.0;
/// Length scale of the pressure wave (m)
pub const PRESSURE_WAVELENGTH: f64 = 2.4e6;

pub const Y_MIN: f64 = 0.0;
pub const Y_MAX: f64 = 1e6;

/// Mean air density (kg m^-3)
pub const AIR_DENSITY: f64 = 1.0;
/// Coriolis parameter (s^-1)
pub const CORIOLIS_PARAMETER: f64 = 1e-4;

pub const DEFAULT_INTERVALS: usize = 10;

pub const CONFIG_FILE: &str = "geowind_config.toml";
