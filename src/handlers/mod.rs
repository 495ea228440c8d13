//! HTTP handlers for value ingestion and query.

pub mod n_value;
pub use n_value::*;
