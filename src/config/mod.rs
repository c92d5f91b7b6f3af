//! Configuration module for SpendVista
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendVistaPaths;
pub use settings::{LoadedSettings, Settings};
