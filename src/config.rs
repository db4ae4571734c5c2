// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Where listings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    Firestore {
        project_id: String,
        api_key: Option<String>,
        /// Overrides the public endpoint, e.g. for the emulator.
        base_url: Option<String>,
    },
    Fixture(PathBuf),
    /// Nothing configured; every page shows the "no listings yet" notice.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub collection: String,
    pub store: StoreSource,
    pub search_latency: Duration,
    pub contact_phone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            collection: "properties".to_string(),
            store: StoreSource::Empty,
            search_latency: Duration::from_millis(800),
            contact_phone: String::new(),
        }
    }
}

/// Load configuration from `.env` (if any) and the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    from_lookup(|key| std::env::var(key).ok())
}

/// Builds the config from any key lookup. Blank values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let mut config = AppConfig::default();

    if let Some(addr) = get("ESTATE_BIND_ADDR") {
        config.bind_addr = addr.parse().map_err(|e| ConfigError::Invalid {
            key: "ESTATE_BIND_ADDR",
            reason: format!("{e}"),
        })?;
    }
    if let Some(workers) = get("ESTATE_MAX_WORKERS") {
        config.max_workers = match workers.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "ESTATE_MAX_WORKERS",
                    reason: "must be an integer > 0".into(),
                })
            }
        };
    }
    if let Some(collection) = get("ESTATE_COLLECTION") {
        config.collection = collection;
    }
    if let Some(ms) = get("ESTATE_SEARCH_LATENCY_MS") {
        let ms = ms.parse::<u64>().map_err(|_| ConfigError::Invalid {
            key: "ESTATE_SEARCH_LATENCY_MS",
            reason: "must be a whole number of milliseconds".into(),
        })?;
        config.search_latency = Duration::from_millis(ms);
    }
    if let Some(phone) = get("ESTATE_CONTACT_PHONE") {
        config.contact_phone = phone;
    }

    config.store = match (get("FIRESTORE_PROJECT_ID"), get("ESTATE_FIXTURE_PATH")) {
        (Some(project_id), _) => StoreSource::Firestore {
            project_id,
            api_key: get("FIRESTORE_API_KEY"),
            base_url: get("FIRESTORE_BASE_URL"),
        },
        (None, Some(path)) => StoreSource::Fixture(PathBuf::from(path)),
        (None, None) => StoreSource::Empty,
    };

    Ok(config)
}
