use serde::{Deserialize, Serialize};

use crate::core::{Athlete, option_to_f64, range_finite};

use super::scoring::team_members;

/// Finish-time spread above which a team is flagged.
pub const DEFAULT_SPREAD_THRESHOLD_S: f64 = 90.0;

/// Gap in seconds between the fastest and slowest finisher of `team`.
///
/// Covers every athlete of the team, not only scorers. Needs at least two
/// finite finish times; otherwise the result is `NaN`.
#[must_use]
pub fn team_finish_spread(athletes: &[Athlete], team: &str) -> f64 {
    option_to_f64(range_finite(
        team_members(athletes, team).map(Athlete::final_seconds),
        2,
    ))
}

/// A team whose finish-time spread exceeds the configured threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersionSignal {
    pub team: String,
    pub spread_seconds: f64,
    pub threshold_seconds: f64,
}

impl DispersionSignal {
    /// Short human-readable summary, e.g. `"Team: wide spread (120s)"`.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{}: wide spread ({:.0}s)", self.team, self.spread_seconds)
    }
}

/// Signals for every team in `teams` whose spread is strictly above
/// `threshold_seconds`. Teams without a finite spread are skipped.
#[must_use]
pub fn dispersion_signals(
    athletes: &[Athlete],
    teams: &[String],
    threshold_seconds: f64,
) -> Vec<DispersionSignal> {
    teams
        .iter()
        .filter_map(|team| {
            let spread = team_finish_spread(athletes, team);
            (spread.is_finite() && spread > threshold_seconds).then(|| DispersionSignal {
                team: team.clone(),
                spread_seconds: spread,
                threshold_seconds,
            })
        })
        .collect()
}
