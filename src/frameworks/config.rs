use crate::domain::Bounds;
use crate::use_cases::{ArenaSettings, SimulationPlan};
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

// Runtime constants (not gameplay tuning).

pub const MAILBOX_CAPACITY: usize = 1000;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_WIDTH: f64 = 1000.0;
pub const DEFAULT_HEIGHT: f64 = 1000.0;
pub const DEFAULT_PLAYERS: u64 = 100;
pub const DEFAULT_TICKS: u64 = 1000;
pub const DEFAULT_LOG_INTERVAL: u64 = 100;
pub const DEFAULT_FIRE_PROBABILITY: f64 = 0.1;
// Roughly 60 ticks per second.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub players: u64,
    pub ticks: u64,
    pub log_interval: u64,
    pub fire_probability: f64,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub leaderboard_size: usize,
    pub report_format: ReportFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            players: DEFAULT_PLAYERS,
            ticks: DEFAULT_TICKS,
            log_interval: DEFAULT_LOG_INTERVAL,
            fire_probability: DEFAULT_FIRE_PROBABILITY,
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            report_format: ReportFormat::Text,
        }
    }
}

impl SimulationConfig {
    /// Reads the process environment. Call after `.env` has been loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let width = parse_or(&lookup, "ARENA_WIDTH", defaults.width)?;
        let height = parse_or(&lookup, "ARENA_HEIGHT", defaults.height)?;
        for (key, value) in [("ARENA_WIDTH", width), ("ARENA_HEIGHT", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(key, value, "must be a positive number"));
            }
        }

        let log_interval = parse_or(&lookup, "ARENA_LOG_INTERVAL", defaults.log_interval)?;
        if log_interval == 0 {
            return Err(invalid("ARENA_LOG_INTERVAL", log_interval, "must be at least 1"));
        }

        let fire_probability =
            parse_or(&lookup, "ARENA_FIRE_PROBABILITY", defaults.fire_probability)?;
        if !(0.0..=1.0).contains(&fire_probability) {
            return Err(invalid(
                "ARENA_FIRE_PROBABILITY",
                fire_probability,
                "must be within [0, 1]",
            ));
        }

        let tick_interval_ms = parse_or(
            &lookup,
            "ARENA_TICK_INTERVAL_MS",
            defaults.tick_interval.as_millis() as u64,
        )?;

        let seed = match lookup("ARENA_SEED") {
            Some(raw) => Some(parse("ARENA_SEED", &raw)?),
            None => None,
        };

        let report_format = match lookup("REPORT_FORMAT").as_deref() {
            None | Some("text") => ReportFormat::Text,
            Some("json") => ReportFormat::Json,
            Some(other) => {
                return Err(invalid("REPORT_FORMAT", other, "expected `text` or `json`"));
            }
        };

        Ok(Self {
            width,
            height,
            players: parse_or(&lookup, "ARENA_PLAYERS", defaults.players)?,
            ticks: parse_or(&lookup, "ARENA_TICKS", defaults.ticks)?,
            log_interval,
            fire_probability,
            tick_interval: Duration::from_millis(tick_interval_ms),
            seed,
            leaderboard_size: parse_or(
                &lookup,
                "ARENA_LEADERBOARD_SIZE",
                defaults.leaderboard_size,
            )?,
            report_format,
        })
    }

    pub fn plan(&self) -> SimulationPlan {
        SimulationPlan {
            arena: ArenaSettings {
                bounds: Bounds::new(self.width, self.height),
                mailbox_capacity: MAILBOX_CAPACITY,
                world_broadcast_capacity: WORLD_BROADCAST_CAPACITY,
            },
            players: self.players,
            ticks: self.ticks,
            log_interval: self.log_interval,
            fire_probability: self.fire_probability,
            tick_interval: self.tick_interval,
            leaderboard_size: self.leaderboard_size,
        }
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| invalid(key, raw, e.to_string()))
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse(key, &raw),
        None => Ok(default),
    }
}

fn invalid(key: &'static str, value: impl ToString, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn when_nothing_is_set_then_defaults_mirror_the_reference_run() {
        let config = SimulationConfig::from_lookup(lookup(&[])).expect("config");

        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.players, 100);
        assert_eq!(config.ticks, 1000);
        assert_eq!(config.tick_interval, Duration::from_millis(16));
    }

    #[test]
    fn when_values_are_set_then_they_override_defaults() {
        let config = SimulationConfig::from_lookup(lookup(&[
            ("ARENA_WIDTH", "640"),
            ("ARENA_PLAYERS", " 12 "),
            ("ARENA_TICK_INTERVAL_MS", "0"),
            ("ARENA_SEED", "99"),
            ("REPORT_FORMAT", "json"),
        ]))
        .expect("config");

        assert_eq!(config.width, 640.0);
        assert_eq!(config.players, 12);
        assert_eq!(config.tick_interval, Duration::ZERO);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn when_number_is_unparseable_then_config_fails() {
        let err = SimulationConfig::from_lookup(lookup(&[("ARENA_TICKS", "many")]))
            .expect_err("should fail");

        assert!(matches!(err, ConfigError::Invalid { key: "ARENA_TICKS", .. }));
    }

    #[test]
    fn when_probability_is_out_of_range_then_config_fails() {
        let err = SimulationConfig::from_lookup(lookup(&[("ARENA_FIRE_PROBABILITY", "1.5")]))
            .expect_err("should fail");

        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "ARENA_FIRE_PROBABILITY",
                ..
            }
        ));
    }

    #[test]
    fn when_bounds_are_not_positive_then_config_fails() {
        assert!(SimulationConfig::from_lookup(lookup(&[("ARENA_HEIGHT", "0")])).is_err());
        assert!(SimulationConfig::from_lookup(lookup(&[("ARENA_WIDTH", "-5")])).is_err());
        assert!(SimulationConfig::from_lookup(lookup(&[("ARENA_LOG_INTERVAL", "0")])).is_err());
    }

    #[test]
    fn when_building_a_plan_then_runtime_constants_are_applied() {
        let plan = SimulationConfig::default().plan();

        assert_eq!(plan.arena.mailbox_capacity, MAILBOX_CAPACITY);
        assert_eq!(plan.arena.bounds, Bounds::new(1000.0, 1000.0));
        assert_eq!(plan.leaderboard_size, 5);
    }
}
