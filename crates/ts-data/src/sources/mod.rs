//! Raw row sources for the catalog.

pub mod csv_source;

pub use csv_source::{read_catalog, RawTitleRow};
