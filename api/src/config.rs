use std::env;

use anyhow::Context;

use crate::domain::entities::SkinHash;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Public asset locations used to build skin links
    pub asset_urls: AssetUrls,
    /// Sustained requests per second allowed per client IP
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_or("PORT", 8080)?,
            asset_urls: AssetUrls::new(
                env::var("SKIN_CDN_URL")
                    .unwrap_or_else(|_| "https://cdn.webampskins.org".to_string()),
                env::var("MUSEUM_URL").unwrap_or_else(|_| "https://skins.webamp.org".to_string()),
            ),
            rate_limit_per_second: parse_or("RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", 30)?,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

/// Builds public links to skin assets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetUrls {
    cdn_base: String,
    museum_base: String,
}

impl AssetUrls {
    pub fn new(cdn_base: String, museum_base: String) -> Self {
        Self {
            cdn_base: cdn_base.trim_end_matches('/').to_string(),
            museum_base: museum_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn screenshot_url(&self, hash: &SkinHash) -> String {
        format!("{}/screenshots/{}.png", self.cdn_base, hash)
    }

    pub fn download_url(&self, hash: &SkinHash) -> String {
        format!("{}/skins/{}.wsz", self.cdn_base, hash)
    }

    /// Permalink to the skin's museum page
    pub fn museum_url(&self, hash: &SkinHash, filename: &str) -> String {
        format!(
            "{}/skin/{}/{}/",
            self.museum_base,
            hash,
            urlencoding::encode(filename)
        )
    }
}
