use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::{team_average_series, team_members};
use crate::core::{Athlete, SeriesView, series_for_view};
use crate::palette::Color;

use super::RaceAnalytics;

/// Line role inside a chart payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    TeamAverage,
    Runner,
}

/// One labelled series aligned to the race splits. `None` values are gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLine {
    pub label: String,
    pub team: String,
    pub kind: LineKind,
    pub color: Color,
    /// Drawn dashed when it belongs to a comparison team.
    pub dashed: bool,
    pub values: Vec<Option<f64>>,
}

/// Chart-ready series plus the split labels they align to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesChart {
    pub view: SeriesView,
    pub labels: Vec<String>,
    pub lines: Vec<SeriesLine>,
}

/// What the team pace view draws besides the primary team's runners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPaceOptions {
    pub show_average: bool,
    pub comparison_team: Option<String>,
    pub show_comparison_runners: bool,
}

impl Default for TeamPaceOptions {
    fn default() -> Self {
        Self {
            show_average: true,
            comparison_team: None,
            show_comparison_runners: false,
        }
    }
}

const RUNNER_BASE_ALPHA: f64 = 0.25;
const RUNNER_ALPHA_STEP: f64 = 0.04;

impl RaceAnalytics {
    /// Side-by-side series of two athletes from any teams.
    ///
    /// Unknown ids are left out of the chart rather than reported.
    #[must_use]
    pub fn runner_compare(
        &self,
        athlete_a: &str,
        athlete_b: &str,
        view: SeriesView,
    ) -> SeriesChart {
        let split_count = self.split_count();
        let lines: Vec<SeriesLine> = [athlete_a, athlete_b]
            .into_iter()
            .filter_map(|id| self.athlete(id))
            .map(|athlete| SeriesLine {
                label: format!("{} ({})", athlete.name, athlete.team),
                team: athlete.team.clone(),
                kind: LineKind::Runner,
                color: self.palette.color_for(&athlete.team),
                dashed: false,
                values: gapped_series(athlete, view, split_count),
            })
            .collect();
        debug!(lines = lines.len(), ?view, "runner compare series");

        SeriesChart {
            view,
            labels: self.split_labels(),
            lines,
        }
    }

    /// Average line and individual runner lines for `team`, optionally
    /// overlaid with a comparison team.
    ///
    /// Averages cover every runner of the team. Runner lines are capped at
    /// the configured maximum per team and fade in with their report order.
    #[must_use]
    pub fn team_pace_view(
        &self,
        team: &str,
        view: SeriesView,
        options: &TeamPaceOptions,
    ) -> SeriesChart {
        let split_count = self.split_count();
        let mut lines = Vec::new();

        if options.show_average {
            lines.extend(self.team_average_line(team, view, split_count, false));
        }
        lines.extend(self.runner_lines(team, view, split_count, false));

        if let Some(comparison) = options.comparison_team.as_deref() {
            lines.extend(self.team_average_line(comparison, view, split_count, true));
            if options.show_comparison_runners {
                lines.extend(self.runner_lines(comparison, view, split_count, true));
            }
        }

        SeriesChart {
            view,
            labels: self.split_labels(),
            lines,
        }
    }

    fn team_average_line(
        &self,
        team: &str,
        view: SeriesView,
        split_count: usize,
        dashed: bool,
    ) -> Option<SeriesLine> {
        let mut members = team_members(&self.report.athletes, team).peekable();
        members.peek()?;
        Some(SeriesLine {
            label: format!("{team} (avg)"),
            team: team.to_owned(),
            kind: LineKind::TeamAverage,
            color: self.palette.color_for(team),
            dashed,
            values: team_average_series(members, view, split_count),
        })
    }

    fn runner_lines(
        &self,
        team: &str,
        view: SeriesView,
        split_count: usize,
        dashed: bool,
    ) -> Vec<SeriesLine> {
        team_members(&self.report.athletes, team)
            .take(self.config.max_runner_lines)
            .enumerate()
            .map(|(index, athlete)| {
                let alpha = (RUNNER_BASE_ALPHA + index as f64 * RUNNER_ALPHA_STEP).min(1.0);
                let label = if dashed {
                    format!("{} (B)", athlete.name)
                } else {
                    athlete.name.clone()
                };
                SeriesLine {
                    label,
                    team: team.to_owned(),
                    kind: LineKind::Runner,
                    color: self.palette.color_for_with_alpha(team, alpha),
                    dashed,
                    values: gapped_series(athlete, view, split_count),
                }
            })
            .collect()
    }
}

// Padded to `split_count` so every line aligns with the chart labels.
fn gapped_series(athlete: &Athlete, view: SeriesView, split_count: usize) -> Vec<Option<f64>> {
    let series = series_for_view(athlete, view);
    (0..split_count)
        .map(|index| series.get(index).copied().filter(|value| value.is_finite()))
        .collect()
}
