use std::str::FromStr;

use anyhow::{Context, Result};

use crate::render::TemplateKind;

/// Application configuration loaded from environment variables.
/// Every setting has a default; a malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Loopback by default: the preview server is for the person editing.
    pub bind_addr: String,
    pub port: u16,
    pub rust_log: String,
    pub default_template: TemplateKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            bind_addr: var("BIND_ADDR", "127.0.0.1"),
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            default_template: TemplateKind::from_str(&var("DEFAULT_TEMPLATE", "classic"))
                .context("DEFAULT_TEMPLATE must be one of classic, modern, creative, minimalist")?,
        })
    }
}
