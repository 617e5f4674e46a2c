use std::{net::IpAddr, path::PathBuf};

use anyhow::Context;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub app_name: String,
    pub app_version: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            app_name: "Trail Guardian Pro".into(),
            app_version: "1.0.0".into(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            cors_origins: vec!["http://localhost:3000".into()],
            seed_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup("APP_NAME") {
            config.app_name = name;
        }
        if let Some(version) = lookup("APP_VERSION") {
            config.app_version = version;
        }
        if let Some(host) = lookup("HOST") {
            config.host = host.parse().with_context(|| format!("HOST is not an IP address: {host}"))?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().with_context(|| format!("PORT is not a port number: {port}"))?;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors_origins = parse_origins(&origins);
        }
        config.seed_file = lookup("TRAILS_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
