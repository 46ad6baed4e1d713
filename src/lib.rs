//! Preferences persistence for the Quest app launcher
//!
//! Loads `config.json` onto built-in defaults at startup and writes it back
//! whenever a setting changes.

#![deny(unsafe_code)]

pub mod config;
pub mod constants;

pub use config::{CategoryType, ConfigError, ConfigModel, ConfigSession, ConfigStore, GridSize};
