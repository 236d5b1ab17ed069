use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::analytics::{
    self, DispersionSignal, TeamAggregate, TeamScore, aggregate_team, aggregate_teams,
    dispersion_signals,
};
use crate::core::{
    Athlete, NormalizedReport, RaceReport, discover_split_columns, format_pace,
};
use crate::error::SplitsResult;
use crate::ingest::{normalize_split_report, normalize_split_report_str};
use crate::palette::{TeamColorDocument, TeamPalette};

use super::AnalyticsConfig;

/// Headline numbers of a loaded report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSummary {
    pub name: String,
    pub athlete_count: usize,
    pub team_count: usize,
    pub split_count: usize,
}

/// Owned analytics view over one normalized export.
///
/// Every query reads the report held here; nothing is cached globally.
/// [`RaceAnalytics::reload`] swaps in a fully normalized replacement, so a
/// caller never observes a half-loaded report.
#[derive(Debug, Clone)]
pub struct RaceAnalytics {
    pub(super) report: NormalizedReport,
    pub(super) config: AnalyticsConfig,
    pub(super) palette: TeamPalette,
}

impl RaceAnalytics {
    pub fn new(report: NormalizedReport, config: AnalyticsConfig) -> SplitsResult<Self> {
        config.validate()?;
        let mut palette = TeamPalette::default().with_alpha(config.series_alpha)?;
        for (team, hex) in &config.team_colors {
            palette.set_override_hex(team.clone(), hex)?;
        }
        debug!(
            athletes = report.athletes.len(),
            splits = report.race.splits.len(),
            "race analytics ready"
        );
        Ok(Self {
            report,
            config,
            palette,
        })
    }

    pub fn from_json_value(raw: &Value, config: AnalyticsConfig) -> SplitsResult<Self> {
        Self::new(normalize_split_report(raw)?, config)
    }

    pub fn from_json_str(input: &str, config: AnalyticsConfig) -> SplitsResult<Self> {
        Self::new(normalize_split_report_str(input)?, config)
    }

    /// Replaces the current report with a new export.
    ///
    /// On error the previous report stays in place.
    pub fn reload(&mut self, raw: &Value) -> SplitsResult<()> {
        let report = normalize_split_report(raw)?;
        debug!(
            previous_athletes = self.report.athletes.len(),
            athletes = report.athletes.len(),
            "reloading race report"
        );
        self.report = report;
        Ok(())
    }

    /// Merges a team-colors document into the palette overrides.
    pub fn apply_team_colors(&mut self, document: &TeamColorDocument) -> usize {
        self.palette.apply_team_colors(document)
    }

    #[must_use]
    pub fn report(&self) -> &NormalizedReport {
        &self.report
    }

    #[must_use]
    pub fn race(&self) -> &RaceReport {
        &self.report.race
    }

    #[must_use]
    pub fn athletes(&self) -> &[Athlete] {
        &self.report.athletes
    }

    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> &TeamPalette {
        &self.palette
    }

    /// Column labels, with `S{n}` fallbacks when the race defines none.
    #[must_use]
    pub fn split_labels(&self) -> Vec<String> {
        self.report.column_labels()
    }

    #[must_use]
    pub fn split_count(&self) -> usize {
        self.report.column_count()
    }

    /// Split labels found on athletes, ordered by estimated distance.
    #[must_use]
    pub fn split_columns(&self) -> Vec<String> {
        discover_split_columns(&self.report.athletes)
    }

    #[must_use]
    pub fn summary(&self) -> RaceSummary {
        RaceSummary {
            name: self.report.race.name.clone(),
            athlete_count: self.report.athletes.len(),
            team_count: analytics::team_count(&self.report.athletes),
            split_count: self.report.race.splits.len(),
        }
    }

    #[must_use]
    pub fn athlete(&self, athlete_id: &str) -> Option<&Athlete> {
        self.report
            .athletes
            .iter()
            .find(|athlete| athlete.athlete_id == athlete_id)
    }

    /// Split label to elapsed clock text for one athlete.
    ///
    /// Records without elapsed text fall back to the formatted seconds, which
    /// is the placeholder when those are missing too.
    #[must_use]
    pub fn athlete_splits(&self, athlete_id: &str) -> Option<IndexMap<String, String>> {
        let athlete = self.athlete(athlete_id)?;
        Some(
            athlete
                .splits
                .iter()
                .map(|record| {
                    let text = if record.elapsed.is_empty() {
                        format_pace(record.elapsed_s)
                    } else {
                        record.elapsed.clone()
                    };
                    (record.label.clone(), text)
                })
                .collect(),
        )
    }

    /// Distinct named teams, sorted.
    #[must_use]
    pub fn team_names(&self) -> Vec<String> {
        analytics::team_names(&self.report.athletes)
    }

    /// Deduplicates `teams` keeping first occurrences; an empty selection
    /// falls back to the first configured number of teams in report order.
    #[must_use]
    pub fn select_teams<S: AsRef<str>>(&self, teams: &[S]) -> Vec<String> {
        if teams.is_empty() {
            return analytics::default_teams(&self.report.athletes, self.config.default_team_count);
        }
        teams
            .iter()
            .map(|team| team.as_ref().to_owned())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn team_aggregate(&self, team: &str) -> TeamAggregate {
        aggregate_team(
            &self.report.athletes,
            team,
            self.split_count(),
            self.config.scoring_size,
        )
    }

    /// Aggregates for the selected teams; see [`RaceAnalytics::select_teams`].
    #[must_use]
    pub fn team_aggregates<S: AsRef<str>>(&self, teams: &[S]) -> Vec<TeamAggregate> {
        let teams = self.select_teams(teams);
        aggregate_teams(
            &self.report.athletes,
            &teams,
            self.split_count(),
            self.config.scoring_size,
        )
    }

    #[must_use]
    pub fn team_score(&self, team: &str) -> TeamScore {
        analytics::team_score(&self.report.athletes, team, self.config.scoring_size)
    }

    /// Finish-time spread over every athlete of `team`; `NaN` when fewer
    /// than two finish times parse.
    #[must_use]
    pub fn team_finish_spread(&self, team: &str) -> f64 {
        analytics::team_finish_spread(&self.report.athletes, team)
    }

    /// Dispersion signals for the selected teams.
    #[must_use]
    pub fn insights<S: AsRef<str>>(&self, teams: &[S]) -> Vec<DispersionSignal> {
        let teams = self.select_teams(teams);
        dispersion_signals(
            &self.report.athletes,
            &teams,
            self.config.spread_threshold_s,
        )
    }
}
