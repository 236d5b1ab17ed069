//! Raw export ingestion.
//!
//! The accessor layer in `document` is the only place that touches untyped
//! JSON; everything past `normalize_split_report` works on the canonical
//! model in `crate::core`.

pub mod document;
mod normalizer;

pub use document::RawNode;
pub use normalizer::{normalize_split_report, normalize_split_report_str};
