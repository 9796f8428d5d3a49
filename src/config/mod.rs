//! Layered configuration: TOML files plus `BAZAAR_*` environment overrides.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ApplicationConfig, DatabaseConfig, LoggerConfig, PeersConfig, ServerConfig, Settings,
};
