//! Configuration file support for the glucose simulator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/glucose-sim/config.toml`.

use crate::timeline::check_granularity;
use crate::{Error, Result, SimulationSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Simulation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_granularity_minutes")]
    pub granularity_minutes: u32,

    #[serde(default = "default_glycation_threshold")]
    pub glycation_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            granularity_minutes: default_granularity_minutes(),
            glycation_threshold: default_glycation_threshold(),
        }
    }
}

/// Reference catalog sources and load-time defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Food CSV, built-in dataset when unset
    #[serde(default)]
    pub food_path: Option<PathBuf>,

    /// Exercise CSV, built-in dataset when unset
    #[serde(default)]
    pub exercise_path: Option<PathBuf>,

    #[serde(default = "default_food_duration_hours")]
    pub food_duration_hours: f64,

    #[serde(default = "default_exercise_duration_hours")]
    pub exercise_duration_hours: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            food_path: None,
            exercise_path: None,
            food_duration_hours: default_food_duration_hours(),
            exercise_duration_hours: default_exercise_duration_hours(),
        }
    }
}

// Default value functions
fn default_granularity_minutes() -> u32 {
    5
}

fn default_glycation_threshold() -> f64 {
    crate::DEFAULT_GLYCATION_THRESHOLD
}

fn default_food_duration_hours() -> f64 {
    2.0
}

fn default_exercise_duration_hours() -> f64 {
    1.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        base.join("glucose-sim").join("config.toml")
    }

    /// Check values that would make every simulation fail
    pub fn validate(&self) -> Result<()> {
        check_granularity(self.simulation.granularity_minutes)
            .map_err(|e| Error::Config(e.to_string()))?;

        SimulationSettings::from(self.simulation.clone()).validate()?;

        for (key, hours) in [
            ("food_duration_hours", self.catalog.food_duration_hours),
            ("exercise_duration_hours", self.catalog.exercise_duration_hours),
        ] {
            if !(hours.is_finite() && hours > 0.0) {
                return Err(Error::Config(format!(
                    "{} must be positive, got {}",
                    key, hours
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.granularity_minutes, 5);
        assert_eq!(config.simulation.glycation_threshold, 150.0);
        assert_eq!(config.catalog.food_duration_hours, 2.0);
        assert_eq!(config.catalog.exercise_duration_hours, 1.0);
        assert!(config.catalog.food_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            config.simulation.granularity_minutes,
            parsed.simulation.granularity_minutes
        );
        assert_eq!(
            config.catalog.food_duration_hours,
            parsed.catalog.food_duration_hours
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[simulation]
granularity_minutes = 10
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.granularity_minutes, 10);
        assert_eq!(config.simulation.glycation_threshold, 150.0); // default
        assert_eq!(config.catalog.exercise_duration_hours, 1.0); // default
    }

    #[test]
    fn test_load_from_rejects_zero_granularity() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[simulation]\ngranularity_minutes = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_rejects_nan_threshold() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[simulation]\nglycation_threshold = nan\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_catalog_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[catalog]\nfood_path = \"/data/FoodDB.csv\"\nfood_duration_hours = 2.5\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.catalog.food_path,
            Some(PathBuf::from("/data/FoodDB.csv"))
        );
        assert_eq!(config.catalog.food_duration_hours, 2.5);
        assert!(config.catalog.exercise_path.is_none());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let mut config = Config::default();
        config.catalog.exercise_duration_hours = -1.0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
