use std::f64::consts::PI;

/// Pressure as a function of altitude
///
/// Implemented for every `Fn(f64) -> f64`, so closures can be passed directly.
pub trait PressureField {
    fn pressure(&self, altitude: f64) -> f64;
}

impl<F> PressureField for F
where
    F: Fn(f64) -> f64,
{
    fn pressure(&self, altitude: f64) -> f64 {
        self(altitude)
    }
}

/// `p(y) = base + amplitude * cos(y * PI / wavelength)`
///
/// Smooth enough that its geostrophic wind has a closed form, which makes it
/// the reference field for checking the finite-difference estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosinePressure {
    pub base: f64,
    pub amplitude: f64,
    pub wavelength: f64,
}

impl CosinePressure {
    pub fn new(base: f64, amplitude: f64, wavelength: f64) -> Self {
        Self {
            base,
            amplitude,
            wavelength,
        }
    }

    fn phase(&self, altitude: f64) -> f64 {
        altitude * PI / self.wavelength
    }

    /// Exact dp/dy
    pub fn gradient(&self, altitude: f64) -> f64 {
        -self.amplitude * PI / self.wavelength * self.phase(altitude).sin()
    }

    /// Exact geostrophic wind `sin(y * PI / L) * amplitude * PI / (L * rho * f)`
    pub fn analytic_wind(&self, altitude: f64, rho: f64, f: f64) -> f64 {
        self.phase(altitude).sin() * self.amplitude * PI / (self.wavelength * rho * f)
    }
}

impl PressureField for CosinePressure {
    fn pressure(&self, altitude: f64) -> f64 {
        self.base + self.amplitude * self.phase(altitude).cos()
    }
}
