//! Runtime configuration.
//!
//! Values come from the environment (optionally via a `.env` file) and are
//! then overridden by command-line flags.

use crate::processing::HostPolicy;
use clap::{Parser, ValueEnum};
use std::error::Error;

pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_RFC3021: &str = "SUBNET_CALC_RFC3021";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    fn from_name(name: &str) -> Result<OutputFormat, Box<dyn Error>> {
        OutputFormat::from_str(name.trim(), true).map_err(|_| {
            format!("Invalid {ENV_FORMAT}='{name}' (expected text, json or csv)").into()
        })
    }
}

/// IPv4 subnet calculator.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Address as `a.b.c.d/n`, or `a.b.c.d` followed by PREFIX
    #[arg(required_unless_present = "batch")]
    pub address: Option<String>,

    /// Prefix length 0-32, when ADDRESS has no `/n`
    pub prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat /31 as a two-host point-to-point link (RFC 3021)
    #[arg(long)]
    pub rfc3021: bool,

    /// Read one `a.b.c.d/n` entry per line from FILE
    #[arg(short, long, value_name = "FILE", conflicts_with = "address")]
    pub batch: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub policy: HostPolicy,
    pub log_config: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            policy: HostPolicy::Strict,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Build from the process environment, then apply `cli` on top.
    pub fn from_env(cli: &Cli) -> Result<Config, Box<dyn Error>> {
        Config::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Environment values overridden by `cli`. An environment value the
    /// command line replaces is not parsed.
    pub fn resolve<F>(cli: &Cli, lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Config::from_lookup(|key: &str| {
            if key == ENV_FORMAT && cli.format.is_some() {
                None
            } else {
                lookup(key)
            }
        })?;
        Ok(env.merge_cli(cli))
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = OutputFormat::from_name(&format)?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(flag) = lookup(ENV_RFC3021) {
            if parse_bool(&flag) {
                config.policy = HostPolicy::Rfc3021;
            }
        }
        log::debug!("Config from env: {config:?}");
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn merge_cli(mut self, cli: &Cli) -> Config {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.rfc3021 {
            self.policy = HostPolicy::Rfc3021;
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
