//! Configuration management: defaults, validation, environment overrides.

pub mod app_config;
pub mod validation;

pub use app_config::AppConfig;
