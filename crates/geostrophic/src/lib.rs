pub mod comparison;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod pressure;
pub mod profile;
pub mod wind;

pub use comparison::{Comparison, ComparisonPoint, convergence_ratio};
pub use config::{ScenarioConfig, get_config, reload_config};
pub use error::{ConfigError, WindError, ZeroDivisor};
pub use grid::AltitudeGrid;
pub use pressure::{CosinePressure, PressureField};
pub use profile::WindProfile;
pub use wind::{Stencil, geostrophic_wind, try_wind_speeds, wind_speeds};
