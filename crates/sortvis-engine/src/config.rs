//! Engine configuration: array bounds, default algorithm, speed mapping.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sortvis_trace::{Algorithm, Element};

use crate::error::{Error, Result};

/// Maps the speed control value to a per-step delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedConfig {
    /// Lowest accepted control value (slowest).
    pub min_speed: u8,
    /// Highest accepted control value (fastest).
    pub max_speed: u8,
    /// Control value used until the first speed change.
    pub default_speed: u8,
    /// Delay at `min_speed`.
    pub max_delay: Duration,
    /// Delay at `max_speed`.
    pub min_delay: Duration,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            min_speed: 1,
            max_speed: 10,
            default_speed: 5,
            max_delay: Duration::from_millis(1000),
            min_delay: Duration::from_millis(10),
        }
    }
}

impl SpeedConfig {
    /// Clamp a control value into `min_speed..=max_speed`.
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn clamp(&self, value: u8) -> u8 {
        let (slowest, fastest) = self.speed_bounds();
        value.clamp(slowest, fastest)
    }

    fn speed_bounds(&self) -> (u8, u8) {
        (
            self.min_speed.min(self.max_speed),
            self.min_speed.max(self.max_speed),
        )
    }

    /// Delay before the next step at control value `value`.
    ///
    /// Inversely linear: `min_speed` gives `max_delay`, `max_speed` gives
    /// `min_delay`. Values outside the range are clamped. An unvalidated
    /// config with inverted bounds still yields a delay between them.
    pub fn step_delay(&self, value: u8) -> Duration {
        let slow = self.max_delay.max(self.min_delay);
        let fast = self.max_delay.min(self.min_delay);
        let (slowest, fastest) = self.speed_bounds();
        let span = fastest - slowest;
        if span == 0 {
            return slow;
        }
        let fraction = f64::from(self.clamp(value) - slowest) / f64::from(span);
        slow.saturating_sub((slow - fast).mul_f64(fraction))
    }

    /// Check that the ranges are ordered.
    pub fn validate(&self) -> Result<()> {
        if self.min_speed > self.max_speed {
            return Err(Error::Config(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        if self.min_delay > self.max_delay {
            return Err(Error::Config(format!(
                "min_delay {:?} exceeds max_delay {:?}",
                self.min_delay, self.max_delay
            )));
        }
        if !(self.min_speed..=self.max_speed).contains(&self.default_speed) {
            return Err(Error::Config(format!(
                "default_speed {} outside {}..={}",
                self.default_speed, self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }
}

/// Configuration for a playback engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Size of the array generated at startup.
    pub default_size: usize,
    /// Largest array `generate_array` accepts.
    pub max_size: usize,
    /// Generated values are drawn from `1..=max_value`.
    pub max_value: Element,
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Seed for the array source; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Speed control mapping.
    pub speed: SpeedConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_size: 50,
            max_size: 200,
            max_value: 100,
            algorithm: Algorithm::Bubble,
            seed: None,
            speed: SpeedConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Create config from `SORTVIS_*` environment variables over the defaults.
    ///
    /// Reads `SORTVIS_DEFAULT_SIZE`, `SORTVIS_MAX_SIZE`, `SORTVIS_MAX_VALUE`,
    /// `SORTVIS_ALGORITHM`, `SORTVIS_SEED`, `SORTVIS_SPEED`,
    /// `SORTVIS_MAX_DELAY_MS` and `SORTVIS_MIN_DELAY_MS`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let speed = SpeedConfig {
            default_speed: env_or("SORTVIS_SPEED", defaults.speed.default_speed)?,
            max_delay: Duration::from_millis(env_or(
                "SORTVIS_MAX_DELAY_MS",
                defaults.speed.max_delay.as_millis() as u64,
            )?),
            min_delay: Duration::from_millis(env_or(
                "SORTVIS_MIN_DELAY_MS",
                defaults.speed.min_delay.as_millis() as u64,
            )?),
            ..defaults.speed
        };

        let config = Self {
            default_size: env_or("SORTVIS_DEFAULT_SIZE", defaults.default_size)?,
            max_size: env_or("SORTVIS_MAX_SIZE", defaults.max_size)?,
            max_value: env_or("SORTVIS_MAX_VALUE", defaults.max_value)?,
            algorithm: env_or("SORTVIS_ALGORITHM", defaults.algorithm)?,
            seed: env_var("SORTVIS_SEED")?,
            speed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for inconsistencies.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::Config("max_size must be positive".into()));
        }
        if !(1..=self.max_size).contains(&self.default_size) {
            return Err(Error::Config(format!(
                "default_size {} outside 1..={}",
                self.default_size, self.max_size
            )));
        }
        if self.max_value == 0 {
            return Err(Error::Config("max_value must be positive".into()));
        }
        self.speed.validate()
    }

    /// Use a fixed seed for array generation.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Select the startup algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the startup array size.
    #[must_use]
    pub fn with_default_size(mut self, size: usize) -> Self {
        self.default_size = size;
        self
    }
}

fn env_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("{key}={raw:?}: {e}"))),
        Err(_) => Ok(None),
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(env_var(key)?.unwrap_or(default))
}
