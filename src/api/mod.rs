//! Analytics facade handed to a rendering layer.

mod engine;
mod engine_config;
mod json_contract;
mod results_table;
mod series_views;

pub use engine::{RaceAnalytics, RaceSummary};
pub use engine_config::AnalyticsConfig;
pub use json_contract::{
    TEAM_AGGREGATES_JSON_SCHEMA_V1, TeamAggregatesJsonContractV1, TeamAggregatesPayload,
};
pub use results_table::{ResultsRow, ResultsTable};
pub use series_views::{LineKind, SeriesChart, SeriesLine, TeamPaceOptions};
