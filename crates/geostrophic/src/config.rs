use crate::constants::*;
use crate::error::ConfigError;
use crate::pressure::CosinePressure;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

static CONFIG: OnceLock<Mutex<ScenarioConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading from file if not already loaded
///
/// Falls back to the reference scenario when the file is missing or invalid.
pub fn get_config() -> ScenarioConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        let config = ScenarioConfig::load_from_file(CONFIG_FILE).unwrap_or_else(|err| {
            log::warn!("Could not load {}: {}; using the reference scenario", CONFIG_FILE, err);
            ScenarioConfig::default()
        });
        Mutex::new(config)
    });
    config_mutex
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Re-read the config file, keeping the cached copy if it cannot be loaded
pub fn reload_config() -> Result<ScenarioConfig, ConfigError> {
    reload_config_from_file(CONFIG_FILE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub pressure: PressureConfig,
    pub domain: DomainConfig,
    pub atmosphere: AtmosphereConfig,
}

/// Cosine pressure wave parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureConfig {
    pub base: f64,
    pub amplitude: f64,
    pub wavelength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default = "default_intervals")]
    pub intervals: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub density: f64,
    pub coriolis: f64,
}

const fn default_intervals() -> usize {
    DEFAULT_INTERVALS
}

impl PressureConfig {
    pub fn field(&self) -> CosinePressure {
        CosinePressure::new(self.base, self.amplitude, self.wavelength)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            pressure: PressureConfig {
                base: BASE_PRESSURE,
                amplitude: PRESSURE_AMPLITUDE,
                wavelength: PRESSURE_WAVELENGTH,
            },
            domain: DomainConfig {
                y_min: Y_MIN,
                y_max: Y_MAX,
                intervals: DEFAULT_INTERVALS,
            },
            atmosphere: AtmosphereConfig {
                density: AIR_DENSITY,
                coriolis: CORIOLIS_PARAMETER,
            },
        }
    }
}

impl ScenarioConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ScenarioConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn reload_config_from_file<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let new_config = ScenarioConfig::load_from_file(&path)?;

    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex.lock().unwrap_or_else(PoisonError::into_inner) = new_config.clone();

    log::info!("Reloaded scenario config from {}", path.as_ref().display());
    Ok(new_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("geostrophic_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_default_is_reference_scenario() {
        let config = ScenarioConfig::default();

        assert_eq!(config.pressure.base, 1e5);
        assert_eq!(config.pressure.amplitude, 200.0);
        assert_eq!(config.pressure.wavelength, 2.4e6);
        assert_eq!(config.domain.y_min, 0.0);
        assert_eq!(config.domain.y_max, 1e6);
        assert_eq!(config.domain.intervals, 10);
        assert_eq!(config.atmosphere.density, 1.0);
        assert_eq!(config.atmosphere.coriolis, 1e-4);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save_and_load");
        let mut config = ScenarioConfig::default();
        config.domain.intervals = 25;
        config.atmosphere.coriolis = 1.4e-4;

        config.save_to_file(&path).unwrap();
        let loaded = ScenarioConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_intervals_default_when_omitted() {
        let raw = r#"
            [pressure]
            base = 101325.0
            amplitude = 150.0
            wavelength = 3.0e6

            [domain]
            y_min = 0.0
            y_max = 5.0e5

            [atmosphere]
            density = 1.2
            coriolis = 1.0e-4
        "#;
        let config: ScenarioConfig = toml::from_str(raw).unwrap();

        assert_eq!(config.domain.intervals, DEFAULT_INTERVALS);
        assert_eq!(config.pressure.field().amplitude, 150.0);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = ScenarioConfig::load_from_file(temp_path("does_not_exist"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "[domain]\ny_min = \"low\"\n").unwrap();

        let result = ScenarioConfig::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_reload_updates_cached_config() {
        let path = temp_path("reload");
        let mut config = ScenarioConfig::default();
        config.domain.intervals = 42;
        config.save_to_file(&path).unwrap();

        let reloaded = reload_config_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reloaded.domain.intervals, 42);
        assert_eq!(get_config().domain.intervals, 42);
    }
}
