use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

// Runtime configuration, read once at startup.

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
// Room tokens stay valid for a week.
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;
// Upper bound keeps `iat + ttl` far from u64 overflow.
pub const MAX_TOKEN_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

// The key pair and shared secret are the whole trust root; issuing and
// verifying deployments must be provisioned with the same values.
#[derive(Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub api_key: String,
    pub api_secret: String,
    pub shared_secret: String,
    pub ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: parse_or(&lookup, "TOKEN_SERVER_HOST", DEFAULT_HOST)?,
            port: parse_or(&lookup, "TOKEN_SERVER_PORT", DEFAULT_PORT)?,
            api_key: required(&lookup, "LIVEKIT_API_KEY")?,
            api_secret: required(&lookup, "LIVEKIT_API_SECRET")?,
            shared_secret: required(&lookup, "CUSTOM_API_SECRET")?,
            ttl_seconds: token_ttl(&lookup)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("shared_secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

// A zero TTL would mint tokens that are already expired.
fn token_ttl<F>(lookup: &F) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    const NAME: &str = "TOKEN_TTL_SECONDS";
    let ttl = parse_or(lookup, NAME, DEFAULT_TOKEN_TTL_SECONDS)?;
    if (1..=MAX_TOKEN_TTL_SECONDS).contains(&ttl) {
        Ok(ttl)
    } else {
        Err(ConfigError::Invalid {
            name: NAME,
            value: ttl.to_string(),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
