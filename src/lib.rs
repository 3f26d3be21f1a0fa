//! tour-splitter - Shared travel expense splitting from the terminal
//!
//! This library tracks who paid what on a group trip and works out who owes
//! whom. Expenses are split equally among their participants; the settlement
//! engine then reduces the resulting balances to a short list of payments.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (tours, members, expenses)
//! - `engine`: Balance calculator, settlement optimizer and aggregations
//! - `storage`: JSON file storage layer
//! - `session`: Loaded tours plus the active tour selection
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: Report, workbook, CSV, JSON and YAML exports
//! - `cli`: Command handlers for the `toursplit` binary
//!
//! # Example
//!
//! ```rust
//! use tour_splitter::engine::TourOverview;
//! use tour_splitter::storage::sample_tour;
//!
//! let overview = TourOverview::compute(&sample_tour());
//! assert_eq!(overview.settlements.len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{TourError, TourResult};
pub use session::Session;
