//! Storage layer for tour-splitter
//!
//! Provides JSON file storage with atomic writes behind the [`TourStore`]
//! trait, plus an in-memory store for tests.

pub mod file_io;
pub mod init;
pub mod tours;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use init::{initialize_storage, sample_tour, seed_sample_tour};
pub use tours::{JsonTourStore, MemoryTourStore, TourStore};
