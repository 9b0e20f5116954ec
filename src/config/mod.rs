//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `FAQROUTE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{DEFAULT_API_KEY_ENV, DEFAULT_CORPUS_PATH, DEFAULT_MODEL};
use crate::matching::MatchConfig;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `FAQROUTE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Knowledge-base document. Default: `./data/faq.json`.
    pub corpus_path: PathBuf,

    /// Model used when the knowledge base has no answer.
    pub model: String,

    /// Name of the environment variable holding the provider secret.
    pub api_key_env: String,

    /// Answer misses with a canned reply instead of calling a provider.
    pub mock_provider: bool,

    /// Scoring weights and thresholds.
    pub matching: MatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            mock_provider: false,
            matching: MatchConfig::default(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "FAQROUTE_PORT";
    const ENV_BIND_ADDR: &'static str = "FAQROUTE_BIND_ADDR";
    const ENV_CORPUS_PATH: &'static str = "FAQROUTE_CORPUS_PATH";
    const ENV_MODEL: &'static str = "FAQROUTE_MODEL";
    const ENV_API_KEY_ENV: &'static str = "FAQROUTE_API_KEY_ENV";
    const ENV_MOCK_PROVIDER: &'static str = "FAQROUTE_MOCK_PROVIDER";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let corpus_path = Self::parse_path_from_env(Self::ENV_CORPUS_PATH, defaults.corpus_path);
        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let api_key_env = Self::parse_string_from_env(Self::ENV_API_KEY_ENV, defaults.api_key_env);
        let mock_provider = env::var_os(Self::ENV_MOCK_PROVIDER).is_some_and(|v| !v.is_empty());
        let matching = MatchConfig::from_env()?;

        Ok(Self {
            port,
            bind_addr,
            corpus_path,
            model,
            api_key_env,
            mock_provider,
            matching,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.corpus_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.corpus_path.clone(),
            });
        }
        if !self.corpus_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.corpus_path.clone(),
            });
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_MODEL,
            });
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_API_KEY_ENV,
            });
        }

        self.matching.validate()?;
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
