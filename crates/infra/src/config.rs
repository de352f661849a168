use std::str::FromStr;
use tracing::warn;

const DEFAULT_PORT: usize = 5050;
const DEFAULT_DATABASE_URL: &str = "sqlite://enterprise_planner.db";
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60 * 60;
const DEFAULT_SWEEP_STARTUP_DELAY_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Connection string of the SQLite database
    pub database_url: String,
    /// Seconds between two scheduled compliance sweeps
    pub compliance_sweep_interval_secs: u64,
    /// Seconds after startup until the first compliance sweep runs
    pub compliance_sweep_startup_delay_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                warn!(
                    "Did not find DATABASE_URL environment variable. Falling back to: {}.",
                    DEFAULT_DATABASE_URL
                );
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        Self {
            port: env_or_default("PORT", DEFAULT_PORT),
            database_url,
            compliance_sweep_interval_secs: env_or_default(
                "COMPLIANCE_SWEEP_INTERVAL_SECS",
                DEFAULT_SWEEP_INTERVAL_SECS,
            ),
            compliance_sweep_startup_delay_secs: env_or_default(
                "COMPLIANCE_SWEEP_STARTUP_DELAY_SECS",
                DEFAULT_SWEEP_STARTUP_DELAY_SECS,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn env_or_default<T: FromStr + std::fmt::Display + Copy>(key: &str, default: T) -> T {
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default value: {}.",
                key, value, default
            );
            default
        }
    }
}
