use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{TimeDelta, Utc};

/// Secrets that ship as defaults and must be replaced in any real deployment.
pub const PLACEHOLDER_SECRETS: &[&str] = &["secret_key", "change-me-to-a-random-string"];

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 10_000;
const DEFAULT_BODY_LIMIT_MB: usize = 10;

/// Runtime settings, read from `GLASSDESK_*` environment variables.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// HS256 signing key for bearer tokens.
    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
    /// Where uploaded profile pictures are written (served at `/uploads`).
    pub upload_dir: PathBuf,
    /// Where uploaded wallpapers are written (served at `/wallpapers`).
    pub wallpaper_dir: PathBuf,
    /// Prefix of the URLs handed out for uploaded assets.
    pub public_url: String,
    pub body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("GLASSDESK_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match var("GLASSDESK_PORT") {
            Some(v) => v.parse().context("GLASSDESK_PORT must be a port number")?,
            None => DEFAULT_PORT,
        };
        let ttl_hours: i64 = match var("GLASSDESK_TOKEN_TTL_HOURS") {
            Some(v) => v
                .parse()
                .context("GLASSDESK_TOKEN_TTL_HOURS must be a whole number of hours")?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };
        let body_limit_mb: usize = match var("GLASSDESK_BODY_LIMIT_MB") {
            Some(v) => v
                .parse()
                .context("GLASSDESK_BODY_LIMIT_MB must be a whole number of megabytes")?,
            None => DEFAULT_BODY_LIMIT_MB,
        };

        if ttl_hours <= 0 {
            bail!("GLASSDESK_TOKEN_TTL_HOURS must be positive, got {}", ttl_hours);
        }
        let token_ttl = TimeDelta::try_hours(ttl_hours)
            .context("GLASSDESK_TOKEN_TTL_HOURS is out of range")?;
        // Tokens issued now must still have a representable expiry.
        Utc::now()
            .checked_add_signed(token_ttl)
            .context("GLASSDESK_TOKEN_TTL_HOURS puts token expiry beyond the supported date range")?;
        let body_limit = body_limit_mb
            .checked_mul(1024 * 1024)
            .context("GLASSDESK_BODY_LIMIT_MB is out of range")?;

        Ok(Self {
            host,
            port,
            jwt_secret: var("GLASSDESK_JWT_SECRET").unwrap_or_else(|| PLACEHOLDER_SECRETS[0].into()),
            token_ttl,
            upload_dir: var("GLASSDESK_UPLOAD_DIR")
                .unwrap_or_else(|| "./uploads".into())
                .into(),
            wallpaper_dir: var("GLASSDESK_WALLPAPER_DIR")
                .unwrap_or_else(|| "./wallpapers".into())
                .into(),
            public_url: var("GLASSDESK_PUBLIC_URL")
                .unwrap_or_else(|| format!("http://localhost:{}", port)),
            body_limit,
        })
    }

    pub fn uses_placeholder_secret(&self) -> bool {
        self.jwt_secret.is_empty() || PLACEHOLDER_SECRETS.contains(&self.jwt_secret.as_str())
    }
}
