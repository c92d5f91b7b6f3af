//! SpendVista - local-first personal finance tracker
//!
//! Records income and expense transactions, a monthly budget, an emergency
//! fund and any number of savings goals, and derives dashboard metrics from
//! them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `metrics`: Pure derivation engine (monthly sums, budget and savings
//!   status, category breakdown, chart data)
//! - `models`: Core data models (transactions, budget, emergency fund, goals)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `display` and `cli`: Terminal output and command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use spendvista::config::{paths::SpendVistaPaths, settings::Settings};
//! use spendvista::services::DashboardService;
//! use spendvista::storage::Storage;
//!
//! let paths = SpendVistaPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let dashboard = DashboardService::new(&storage).snapshot(today)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;

pub use error::SpendVistaError;
