//! Configuration module for tour-splitter
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TourPaths;
pub use settings::{format_date, Settings};
