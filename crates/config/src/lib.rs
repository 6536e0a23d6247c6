//! Configuration management for the pipeboard application.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`source`]: Snapshot source and paging settings
//! - [`logging`]: Log level and log file settings
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./pipeboard.json5` or `./pipeboard.json`)
//! 2. User config (`~/.config/pipeboard/config.json5` or `~/.config/pipeboard/config.json`)
//! 3. Built-in defaults
//!
//! The `PIPEBOARD_LOG` environment variable overrides `logging.level` when
//! the binary sets up logging.
//!
//! # File Format
//!
//! ```json5
//! {
//!   source: {
//!     // Omit to browse the built-in demo pipeline
//!     snapshot_path: "applications.json5",
//!     page_size: 20,
//!     order: "newest",
//!   },
//!   viewer: { name: "Sam", enterprise: "Acme Corp" },
//!   logging: { level: "debug", file: "/tmp/pipeboard.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use pipeboard_config::Config;
//!
//! # async fn example() -> pipeboard_config::Result<()> {
//! let config = Config::load().await?;
//! let request = config.source.first_page()?;
//! println!("{} cards per page", request.page_size);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod source;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
pub use source::SourceConfig;
