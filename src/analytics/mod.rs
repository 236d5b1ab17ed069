//! Team-level statistics derived from the canonical model.

mod scoring;
mod spread;
mod team_aggregate;

pub use scoring::{
    DEFAULT_SCORING_SIZE, ScoringSubset, TeamScore, default_teams, scoring_subset, team_count,
    team_members, team_names, team_score,
};
pub use spread::{
    DEFAULT_SPREAD_THRESHOLD_S, DispersionSignal, dispersion_signals, team_finish_spread,
};
pub use team_aggregate::{
    TeamAggregate, TeamSplitStats, aggregate_team, aggregate_teams, team_average_series,
};
