// Pure geostrophic wind logic

pub mod finite_difference;
pub mod stencil;

pub use finite_difference::{geostrophic_wind, try_wind_speeds, wind_speeds};
pub use stencil::Stencil;
