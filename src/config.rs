// src/config.rs
use std::{env, num::NonZeroU64};
use thiserror::Error;

use crate::domain::slug::SlugColumn;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug: SlugSettings,
}

/// Typed slug options handed to the resolver and the storage adapters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlugSettings {
    column: SlugColumn,
    max_attempts: Option<NonZeroU64>,
}

impl SlugSettings {
    pub fn new(column: SlugColumn, max_attempts: Option<NonZeroU64>) -> Self {
        Self {
            column,
            max_attempts,
        }
    }

    pub fn column(&self) -> &SlugColumn {
        &self.column
    }

    /// Cap on conflicting probes per resolution; `None` keeps probing until a
    /// free slug is found.
    pub fn max_attempts(&self) -> Option<NonZeroU64> {
        self.max_attempts
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://slugs.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or_else(default_max_connections);

        let column = match lookup("SLUG_COLUMN") {
            Some(raw) => SlugColumn::new(raw.trim())
                .map_err(|err| ConfigError::Invalid(format!("SLUG_COLUMN: {err}")))?,
            None => SlugColumn::default(),
        };

        let max_attempts = lookup("SLUG_MAX_ATTEMPTS")
            .map(|raw| {
                raw.trim()
                    .parse::<NonZeroU64>()
                    .map_err(|_| {
                        ConfigError::Invalid(format!(
                            "SLUG_MAX_ATTEMPTS must be a positive integer, got `{raw}`"
                        ))
                    })
            })
            .transpose()?;

        Ok(Self {
            database_url,
            database_max_connections,
            slug: SlugSettings::new(column, max_attempts),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn slug(&self) -> &SlugSettings {
        &self.slug
    }
}
