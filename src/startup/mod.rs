//! Startup: configuration from the environment and log setup.
//!
//! - [`config`] - API and application configuration
//! - [`logging`] - tracing subscriber writing to a log file
//!
//! ```ignore
//! use unsplash_tui::startup::{AppConfig, init_logging};
//!
//! let config = AppConfig::from_env()?;
//! let _guard = init_logging(config.log_dir.as_deref())?;
//! ```

pub mod config;
pub mod logging;

pub use config::{ApiConfig, AppConfig, ConfigError};
pub use logging::{init_logging, LogGuard};
