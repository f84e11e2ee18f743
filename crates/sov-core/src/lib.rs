//! Shared configuration for the Share of Voice workspace.
//!
//! Holds the environment-driven [`AppConfig`] and the immutable
//! [`BrandRoster`] every pipeline run is parameterised with.

pub mod app_config;
pub mod brands;
pub mod config;
pub mod error;

pub use app_config::{AppConfig, SearchSettings};
pub use brands::{load_brands, parse_brands, BrandConfig, BrandRoster, BrandsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
