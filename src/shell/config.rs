// Runtime settings read from the environment (and an optional `.env`).

use anyhow::Context;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub seed_fixtures: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("PORTAL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .parse::<IpAddr>()
            .with_context(|| format!("PORTAL_HOST is not an IP address: {host}"))?;

        let port = match lookup("PORTAL_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORTAL_PORT is not a port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let seed_fixtures = match lookup("PORTAL_SEED_FIXTURES").as_deref() {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => anyhow::bail!("PORTAL_SEED_FIXTURES must be true or false, got {other}"),
        };

        Ok(Self {
            host,
            port,
            seed_fixtures,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
