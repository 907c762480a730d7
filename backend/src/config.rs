use std::env;

use anyhow::{anyhow, Context, Result};

const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_BODY: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bind: String,
    pub port: u16,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
    pub max_body: usize, // bytes
}

impl Config {
    /// Reads `HERO_TRACK_*` from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("HERO_TRACK_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("HERO_TRACK_API_KEY must be set"))?;

        let bind = lookup("HERO_TRACK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());

        let port = match lookup("HERO_TRACK_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("invalid HERO_TRACK_PORT {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let max_body = match lookup("HERO_TRACK_MAX_BODY") {
            Some(size) => size
                .parse()
                .with_context(|| format!("invalid HERO_TRACK_MAX_BODY {size:?}"))?,
            None => DEFAULT_MAX_BODY,
        };

        let cors_origin = lookup("HERO_TRACK_CORS_ORIGIN").filter(|origin| !origin.is_empty());

        Ok(Self {
            api_key,
            bind,
            port,
            cors_origin,
            max_body,
        })
    }
}
