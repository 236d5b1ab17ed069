//! race-splits: normalization and team analytics for race-timing exports.
//!
//! Raw split-report JSON goes through [`ingest`] into the canonical model in
//! [`core`]; [`analytics`] derives team statistics from it and [`api`]
//! bundles everything behind an owned [`RaceAnalytics`] value for a chart
//! layer to query.

pub mod analytics;
pub mod api;
pub mod core;
pub mod error;
pub mod ingest;
pub mod palette;
pub mod telemetry;

pub use api::{AnalyticsConfig, RaceAnalytics};
pub use error::{SplitsError, SplitsResult};
