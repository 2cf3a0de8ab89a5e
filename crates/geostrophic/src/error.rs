use thiserror::Error;

/// Which divisor of the finite-difference computation came out as zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroDivisor {
    /// No subdivision intervals were requested (N = 0)
    Intervals,
    /// The altitude range collapses to a point (y_min == y_max)
    EmptyRange,
    /// Mean air density is zero
    Density,
    /// Coriolis parameter is zero
    Coriolis,
    /// Density and Coriolis parameter are non-zero but `rho * f` underflows to zero
    BalanceFactor,
}

impl std::fmt::Display for ZeroDivisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self {
            ZeroDivisor::Intervals => "interval count is zero",
            ZeroDivisor::EmptyRange => "altitude range is empty",
            ZeroDivisor::Density => "air density is zero",
            ZeroDivisor::Coriolis => "coriolis parameter is zero",
            ZeroDivisor::BalanceFactor => "rho * f underflows to zero",
        };
        f.write_str(what)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindError {
    #[error("division by zero: {0}")]
    DivisionByZero(ZeroDivisor),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
