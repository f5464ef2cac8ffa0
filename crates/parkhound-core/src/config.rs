use thiserror::Error;

use crate::app_config::AppConfig;
use crate::geo::RegionBounds;
use crate::rank::DEFAULT_RESULT_LIMIT;

const DEFAULT_PARK_LOCATIONS_URL: &str =
    "https://data.brisbane.qld.gov.au/api/explore/v2.1/catalog/datasets/park-locations/records?limit=100";
const DEFAULT_OFF_LEASH_URL: &str =
    "https://data.brisbane.qld.gov.au/api/explore/v2.1/catalog/datasets/park-dog-off-leash-areas/records?limit=100";
const DEFAULT_WATER_FOUNTAIN_URL: &str =
    "https://data.brisbane.qld.gov.au/api/explore/v2.1/catalog/datasets/park-drinking-fountain-tap-locations/records?limit=200";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any set variable has an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any set variable has an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function. Decoupled from the real environment so tests can drive it
/// with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let bind_addr = parse_addr("PARKHOUND_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PARKHOUND_LOG_LEVEL", "info");

    let park_locations_url = or_default("PARKHOUND_PARK_LOCATIONS_URL", DEFAULT_PARK_LOCATIONS_URL);
    let off_leash_url = or_default("PARKHOUND_OFF_LEASH_URL", DEFAULT_OFF_LEASH_URL);
    let water_fountain_url = or_default("PARKHOUND_WATER_FOUNTAIN_URL", DEFAULT_WATER_FOUNTAIN_URL);

    let region = RegionBounds {
        south: parse_f64("PARKHOUND_BOUNDS_SOUTH", "-27.7")?,
        north: parse_f64("PARKHOUND_BOUNDS_NORTH", "-27.2")?,
        west: parse_f64("PARKHOUND_BOUNDS_WEST", "152.8")?,
        east: parse_f64("PARKHOUND_BOUNDS_EAST", "153.3")?,
    };
    validate_region(&region)?;

    let result_limit = parse_usize("PARKHOUND_RESULT_LIMIT", &DEFAULT_RESULT_LIMIT.to_string())?;
    let request_timeout_secs = parse_u64("PARKHOUND_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PARKHOUND_USER_AGENT", "parkhound/0.1 (park-directory)");
    let lexicon_path = lookup("PARKHOUND_LEXICON_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        bind_addr,
        log_level,
        park_locations_url,
        off_leash_url,
        water_fountain_url,
        region,
        result_limit,
        request_timeout_secs,
        user_agent,
        lexicon_path,
    })
}

fn validate_region(region: &RegionBounds) -> Result<(), ConfigError> {
    if region.south >= region.north {
        return Err(ConfigError::Validation(format!(
            "bounds south ({}) must be below north ({})",
            region.south, region.north
        )));
    }
    if region.west >= region.east {
        return Err(ConfigError::Validation(format!(
            "bounds west ({}) must be below east ({})",
            region.west, region.east
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
