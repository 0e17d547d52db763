use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::vehicle::{TierSpec, VehicleTier, VehicleTierTable};

/// Effective process configuration. Defaults are compiled in; an optional
/// TOML file, `HAULBOT_*` environment variables, and programmatic
/// overrides are layered on top, in that order.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub pricing: PricingConfig,
    pub distances: DistanceConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingConfig {
    pub tiers: VehicleTierTable,
    pub transit_speed_km_per_day: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConfig {
    pub pairs: Vec<CityPairDistance>,
    pub fallback_km: f64,
}

/// One directional city-pair entry. (origin, destination) is the key;
/// the reverse leg is a separate entry if the operator populates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityPairDistance {
    pub origin: String,
    pub destination: String,
    pub km: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://haulbot.db".to_string(),
                max_connections: 5,
                timeout_secs: 30,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
            pricing: PricingConfig::default(),
            distances: DistanceConfig::default(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        let tiers = VehicleTierTable::new(
            TierSpec { base_fare: 800.0, per_km_rate: 18.0, max_payload_kg: 1500.0 },
            TierSpec { base_fare: 1500.0, per_km_rate: 22.0, max_payload_kg: 3500.0 },
            TierSpec { base_fare: 2200.0, per_km_rate: 28.0, max_payload_kg: 5500.0 },
            TierSpec { base_fare: 3200.0, per_km_rate: 35.0, max_payload_kg: 9000.0 },
        )
        .unwrap_or_else(|_| unreachable!("built-in tier table is valid"));
        Self { tiers, transit_speed_km_per_day: 350.0 }
    }
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            pairs: vec![
                CityPairDistance {
                    origin: "Nigha".to_string(),
                    destination: "Varanasi".to_string(),
                    km: 310.0,
                },
                CityPairDistance {
                    origin: "Nigha".to_string(),
                    destination: "Lucknow".to_string(),
                    km: 430.0,
                },
            ],
            fallback_km: 400.0,
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    database: Option<DatabasePatch>,
    logging: Option<LoggingPatch>,
    pricing: Option<PricingPatch>,
    distances: Option<DistancePatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatabasePatch {
    url: Option<String>,
    max_connections: Option<u32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PricingPatch {
    tiers: Option<BTreeMap<String, TierSpec>>,
    transit_speed_km_per_day: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DistancePatch {
    pairs: Option<Vec<CityPairDistance>>,
    fallback_km: Option<f64>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch)?;
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("haulbot.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) -> Result<(), ConfigError> {
        if let Some(database) = patch.database {
            if let Some(url) = database.url {
                self.database.url = url;
            }
            if let Some(max_connections) = database.max_connections {
                self.database.max_connections = max_connections;
            }
            if let Some(timeout_secs) = database.timeout_secs {
                self.database.timeout_secs = timeout_secs;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }

        if let Some(pricing) = patch.pricing {
            if let Some(tier_patch) = pricing.tiers {
                self.pricing.tiers = patched_tier_table(&self.pricing.tiers, tier_patch)?;
            }
            if let Some(speed) = pricing.transit_speed_km_per_day {
                self.pricing.transit_speed_km_per_day = speed;
            }
        }

        if let Some(distances) = patch.distances {
            if let Some(pairs) = distances.pairs {
                self.distances.pairs = pairs;
            }
            if let Some(fallback_km) = distances.fallback_km {
                self.distances.fallback_km = fallback_km;
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("HAULBOT_DATABASE_URL") {
            self.database.url = value;
        }
        if let Some(value) = read_env("HAULBOT_DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections =
                parse_env("HAULBOT_DATABASE_MAX_CONNECTIONS", &value)?;
        }
        if let Some(value) = read_env("HAULBOT_DATABASE_TIMEOUT_SECS") {
            self.database.timeout_secs = parse_env("HAULBOT_DATABASE_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = read_env("HAULBOT_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = read_env("HAULBOT_LOG_FORMAT") {
            self.logging.format = value.parse()?;
        }
        if let Some(value) = read_env("HAULBOT_FALLBACK_DISTANCE_KM") {
            self.distances.fallback_km = parse_env("HAULBOT_FALLBACK_DISTANCE_KM", &value)?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation("database url must not be empty".to_string()));
        }
        if self.pricing.transit_speed_km_per_day <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "transit_speed_km_per_day must be positive, got {}",
                self.pricing.transit_speed_km_per_day
            )));
        }
        if self.distances.fallback_km <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "fallback_km must be positive, got {}",
                self.distances.fallback_km
            )));
        }
        let mut seen = std::collections::BTreeSet::new();
        for pair in &self.distances.pairs {
            if pair.origin.trim().is_empty() || pair.destination.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "distance pairs require non-empty origin and destination".to_string(),
                ));
            }
            if pair.km <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "distance for ({}, {}) must be positive, got {}",
                    pair.origin, pair.destination, pair.km
                )));
            }
            if !seen.insert((pair.origin.clone(), pair.destination.clone())) {
                return Err(ConfigError::Validation(format!(
                    "duplicate distance pair ({}, {})",
                    pair.origin, pair.destination
                )));
            }
        }
        Ok(())
    }
}

fn patched_tier_table(
    current: &VehicleTierTable,
    patch: BTreeMap<String, TierSpec>,
) -> Result<VehicleTierTable, ConfigError> {
    let mut specs: BTreeMap<VehicleTier, TierSpec> =
        VehicleTier::ALL.iter().map(|tier| (*tier, *current.spec(*tier))).collect();

    for (name, spec) in patch {
        let tier = VehicleTier::parse(&name).ok_or_else(|| {
            ConfigError::Validation(format!(
                "unknown vehicle tier `{name}` in config (expected pickup|14ft|17ft|22ft)"
            ))
        })?;
        specs.insert(tier, spec);
    }

    VehicleTierTable::new(
        specs[&VehicleTier::Pickup],
        specs[&VehicleTier::FourteenFt],
        specs[&VehicleTier::SeventeenFt],
        specs[&VehicleTier::TwentyTwoFt],
    )
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        return None;
    }
    let default = PathBuf::from("haulbot.toml");
    default.exists().then_some(default)
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}
