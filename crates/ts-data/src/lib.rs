//! Ingestion boundary and the frozen record store.
//!
//! Raw catalog rows come in through `sources`, get normalized into
//! `TitleRecord`s and frozen into a `RecordStore`. Everything downstream
//! reads from the store and never mutates it.

pub mod record;
pub mod sources;
pub mod store;

// Re-export commonly used types
pub use record::{parse_minutes, parse_seasons, ContentType, TitleRecord};
pub use sources::{read_catalog, RawTitleRow};
pub use store::RecordStore;

use thiserror::Error;

/// Errors that can occur while loading source data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("boundary data error: {0}")]
    Boundary(String),
}
