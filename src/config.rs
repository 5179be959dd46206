//! Configuration for a product manager and the actor in front of it.

use std::path::PathBuf;

/// Environment variable overriding [`ManagerConfig::store_path`].
pub const STORE_PATH_ENV: &str = "PRODUCTS_PATH";

/// Environment variable switching to [`LoadPolicy::Strict`] when set to `1` or `true`.
pub const STRICT_LOAD_ENV: &str = "PRODUCTS_STRICT_LOAD";

/// What to do when the backing store exists but cannot be read or parsed.
///
/// A missing store is never an error: it is the first run and yields an empty
/// collection under both policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Log the failure and carry on with an empty collection.
    #[default]
    Lenient,
    /// Return the failure to the caller and leave the in-memory state untouched.
    Strict,
}

/// Configuration for creating a product manager.
///
/// # Examples
///
/// ```
/// use product_manager::config::{LoadPolicy, ManagerConfig};
///
/// let config = ManagerConfig::new("./Products.json")
///     .with_load_policy(LoadPolicy::Strict)
///     .with_channel_capacity(8);
/// assert_eq!(config.channel_capacity, 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    /// Backing file for the collection
    pub store_path: PathBuf,
    /// Handling of unreadable or corrupt stores
    pub load_policy: LoadPolicy,
    /// Capacity of the actor's request channel
    pub channel_capacity: usize,
}

impl ManagerConfig {
    /// Default path of the backing file.
    pub const DEFAULT_STORE_PATH: &'static str = "./Products.json";

    /// Default capacity of the actor's request channel.
    pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            load_policy: LoadPolicy::default(),
            channel_capacity: Self::DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Defaults overridden by [`STORE_PATH_ENV`] and [`STRICT_LOAD_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(STORE_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup(STRICT_LOAD_ENV) {
            let flag = flag.trim();
            if flag == "1" || flag.eq_ignore_ascii_case("true") {
                config.load_policy = LoadPolicy::Strict;
            }
        }
        config
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Set the request channel capacity (at least 1).
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STORE_PATH)
    }
}
