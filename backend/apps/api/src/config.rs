//! Server configuration
//!
//! Read from the process environment after `.env` has been loaded.

use anyhow::Context;
use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(host) => host
                .trim()
                .parse()
                .with_context(|| format!("HOST must be an IP address, got {host:?}"))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?,
            None => defaults.port,
        };

        let allowed_origins = lookup("FRONTEND_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect()
}
