//! Cross-filter core for the title dashboard.
//!
//! This crate owns the filter configuration, the click-selection protocol
//! that mutates it, and the evaluator that turns store + configuration into
//! the filtered subset every view is computed from.

pub mod evaluate;
pub mod filter;
pub mod select;
pub mod session;

// Re-export commonly used types
pub use evaluate::{filtered, filtered_ignoring_year};
pub use filter::{FilterState, YearFilter};
pub use select::SelectionEvent;
pub use session::Session;
