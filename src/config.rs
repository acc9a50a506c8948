//! # Configuration
//!
//! Environment-driven settings for the API client and the cart's storage backend.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `STOREFRONT_API_URL` | `https://fake.jsonmockapi.com` |
//! | `STOREFRONT_API_TIMEOUT_SECS` | `10` |
//! | `STOREFRONT_PRODUCTS_PAGE_SIZE` | `12` |
//! | `STOREFRONT_ORDERS_PAGE_SIZE` | `10` |
//! | `STOREFRONT_DATA_DIR` | unset (in-memory storage) |

use crate::storage::{FileStorage, MemoryStorage, Storage, StorageError};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://fake.jsonmockapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PRODUCTS_PAGE_SIZE: usize = 12;
pub const DEFAULT_ORDERS_PAGE_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the product/order API, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// `length` sent with `GET /products`.
    pub products_page_size: usize,

    /// `length` sent with `GET /orders`.
    pub orders_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            products_page_size: DEFAULT_PRODUCTS_PAGE_SIZE,
            orders_page_size: DEFAULT_ORDERS_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("STOREFRONT_API_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(ConfigError::Empty("STOREFRONT_API_URL"));
            }
            config.base_url = url;
        }
        if let Some(secs) = parse_positive(&lookup, "STOREFRONT_API_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs as u64);
        }
        if let Some(n) = parse_positive(&lookup, "STOREFRONT_PRODUCTS_PAGE_SIZE")? {
            config.products_page_size = n;
        }
        if let Some(n) = parse_positive(&lookup, "STOREFRONT_ORDERS_PAGE_SIZE")? {
            config.orders_page_size = n;
        }

        Ok(config)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the product and order page sizes.
    pub fn with_page_sizes(mut self, products: usize, orders: usize) -> Self {
        self.products_page_size = products;
        self.orders_page_size = orders;
        self
    }
}

fn parse_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidNumber { name, value: raw }),
    }
}

/// Where the cart is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory for [`FileStorage`]. `None` selects [`MemoryStorage`].
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os("STOREFRONT_DATA_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Opens the configured backend.
    pub fn open(&self) -> Result<Arc<dyn Storage>, StorageError> {
        match &self.data_dir {
            Some(dir) => Ok(Arc::new(FileStorage::new(dir)?)),
            None => Ok(Arc::new(MemoryStorage::new())),
        }
    }
}
