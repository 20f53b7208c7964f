//! Runtime configuration: `TAMBOLA_*` environment variables overridden by
//! command-line flags.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::{MAX_NUMBER, TICKET_BATCH_MAX};
use crate::voice::{default_preferences, parse_preferences};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid {flag} value {value:?}: {reason}")]
    InvalidArg {
        flag: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

const SEED_REASON: &str = "expected an unsigned 32-bit integer";
const BATCH_REASON: &str = "expected a ticket count from 1 to 6";
const BOOL_REASON: &str = "expected 1/true/on or 0/false/off";

/// Settings for the interactive game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// Initial ticket batch size
    pub batch: u8,
    pub voice: bool,
    pub voice_prefer: Vec<String>,
    /// Speech program name; empty autodetects, `none` disables
    pub speech_cmd: String,
    pub log_path: Option<PathBuf>,
    /// `EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            batch: 1,
            voice: true,
            voice_prefer: default_preferences(),
            speech_cmd: String::new(),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (blank values count as unset).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let mut config = Self::default();

        if let Some(v) = get("TAMBOLA_SEED") {
            config.seed = parse_seed(&v)
                .ok_or_else(|| invalid_env("TAMBOLA_SEED", &v, SEED_REASON))?;
        }
        if let Some(v) = get("TAMBOLA_TICKETS") {
            config.batch = parse_batch(&v)
                .ok_or_else(|| invalid_env("TAMBOLA_TICKETS", &v, BATCH_REASON))?;
        }
        if let Some(v) = get("TAMBOLA_VOICE") {
            config.voice = parse_bool(&v)
                .ok_or_else(|| invalid_env("TAMBOLA_VOICE", &v, BOOL_REASON))?;
        }
        if let Some(v) = get("TAMBOLA_VOICE_PREFER") {
            config.voice_prefer = parse_preferences(&v);
        }
        if let Some(v) = get("TAMBOLA_SPEECH_CMD") {
            config.speech_cmd = v;
        }
        config.log_path = get("TAMBOLA_LOG_PATH").map(PathBuf::from);
        if let Some(v) = get("TAMBOLA_LOG") {
            config.log_filter = v;
        }

        Ok(config)
    }

    /// Apply interactive flags: `--seed N`, `--tickets N`, `--no-voice`.
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), ConfigError> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = flag_value(args, i, "--seed")?;
                    self.seed =
                        parse_seed(v).ok_or_else(|| invalid_arg("--seed", v, SEED_REASON))?;
                }
                "--tickets" => {
                    i += 1;
                    let v = flag_value(args, i, "--tickets")?;
                    self.batch = parse_batch(v)
                        .ok_or_else(|| invalid_arg("--tickets", v, BATCH_REASON))?;
                }
                "--no-voice" => self.voice = false,
                other => return Err(ConfigError::UnknownArg(other.to_string())),
            }
            i += 1;
        }
        Ok(())
    }
}

/// Settings for `tambola simulate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulateConfig {
    pub seed: u32,
    pub tickets: usize,
    pub draws: u8,
    pub pretty: bool,
}

/// Parse `simulate [--seed N] [--tickets N] [--draws N] [--pretty]`.
///
/// Returns `Ok(None)` when `args` is not a simulate invocation. Seed and ticket
/// count default to `base`.
pub fn parse_simulate_args(
    args: &[String],
    base: &AppConfig,
) -> Result<Option<SimulateConfig>, ConfigError> {
    if args.first().map(String::as_str) != Some("simulate") {
        return Ok(None);
    }

    let mut config = SimulateConfig {
        seed: base.seed,
        tickets: base.batch as usize,
        draws: MAX_NUMBER,
        pretty: false,
    };
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = flag_value(args, i, "--seed")?;
                config.seed = parse_seed(v).ok_or_else(|| invalid_arg("--seed", v, SEED_REASON))?;
            }
            "--tickets" => {
                i += 1;
                let v = flag_value(args, i, "--tickets")?;
                config.tickets = v
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| invalid_arg("--tickets", v, "expected at least 1 ticket"))?;
            }
            "--draws" => {
                i += 1;
                let v = flag_value(args, i, "--draws")?;
                config.draws = v
                    .parse::<u8>()
                    .ok()
                    .filter(|n| *n <= MAX_NUMBER)
                    .ok_or_else(|| invalid_arg("--draws", v, "expected 0 to 90"))?;
            }
            "--pretty" => config.pretty = true,
            other => return Err(ConfigError::UnknownArg(other.to_string())),
        }
        i += 1;
    }

    Ok(Some(config))
}

pub fn parse_seed(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

pub fn parse_batch(s: &str) -> Option<u8> {
    s.trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=TICKET_BATCH_MAX).contains(n))
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn flag_value<'a>(
    args: &'a [String],
    i: usize,
    flag: &'static str,
) -> Result<&'a str, ConfigError> {
    args.get(i)
        .map(String::as_str)
        .ok_or(ConfigError::MissingValue(flag))
}

fn invalid_env(var: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
        reason,
    }
}

fn invalid_arg(flag: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidArg {
        flag,
        value: value.to_string(),
        reason,
    }
}
