#[cfg(feature = "parallel-aggregation")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Athlete, SeriesView, mean_finite, range_finite, series_for_view, sum_finite};

use super::scoring::scoring_subset;

/// Team statistics at one split. `None` marks a gap that charts span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSplitStats {
    /// Mean segment seconds over scorers with a finite pace.
    pub avg_pace: Option<f64>,
    /// Mean place over scorers with a known place at this split.
    pub avg_position: Option<f64>,
    /// Cumulative-time gap between the first and last scorer, needs two times.
    pub spread_seconds: Option<f64>,
    /// Sum of scorer places at this split.
    pub cumulative_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregate {
    pub team: String,
    pub scoring_athletes: Vec<Athlete>,
    /// One entry per race split.
    pub per_split: Vec<TeamSplitStats>,
}

impl TeamAggregate {
    /// Per-split values of one statistic, ready to hand to a chart.
    #[must_use]
    pub fn column(&self, pick: impl Fn(&TeamSplitStats) -> Option<f64>) -> Vec<Option<f64>> {
        self.per_split.iter().map(pick).collect()
    }
}

/// Aggregates the scoring subset of `team` across `split_count` splits.
///
/// Athletes with shorter split lists contribute gaps at the missing indexes.
#[must_use]
pub fn aggregate_team(
    athletes: &[Athlete],
    team: &str,
    split_count: usize,
    scoring_size: usize,
) -> TeamAggregate {
    let scorers = scoring_subset(athletes, team, scoring_size);
    let paces: Vec<Vec<f64>> = scorers
        .iter()
        .map(|athlete| series_for_view(athlete, SeriesView::Pace))
        .collect();

    let per_split = (0..split_count)
        .map(|index| {
            let positions = || {
                scorers.iter().map(move |athlete| {
                    athlete
                        .split(index)
                        .and_then(|record| record.place_at_split)
                        .map_or(f64::NAN, f64::from)
                })
            };
            TeamSplitStats {
                avg_pace: mean_finite(
                    paces
                        .iter()
                        .map(|series| series.get(index).copied().unwrap_or(f64::NAN)),
                ),
                avg_position: mean_finite(positions()),
                spread_seconds: range_finite(
                    scorers.iter().map(|athlete| {
                        athlete
                            .split(index)
                            .map_or(f64::NAN, |record| record.elapsed_s)
                    }),
                    2,
                ),
                cumulative_score: sum_finite(positions()),
            }
        })
        .collect();

    TeamAggregate {
        team: team.to_owned(),
        scoring_athletes: scorers.into_iter().cloned().collect(),
        per_split,
    }
}

/// Aggregates every team in `teams`, in the given order.
#[must_use]
pub fn aggregate_teams(
    athletes: &[Athlete],
    teams: &[String],
    split_count: usize,
    scoring_size: usize,
) -> Vec<TeamAggregate> {
    #[cfg(feature = "parallel-aggregation")]
    {
        teams
            .par_iter()
            .map(|team| aggregate_team(athletes, team, split_count, scoring_size))
            .collect()
    }

    #[cfg(not(feature = "parallel-aggregation"))]
    {
        teams
            .iter()
            .map(|team| aggregate_team(athletes, team, split_count, scoring_size))
            .collect()
    }
}

/// Mean of `view` per split over every athlete given, scorer or not.
///
/// Each index averages the finite values present; an index with none is
/// `None`.
#[must_use]
pub fn team_average_series<'a, I>(
    athletes: I,
    view: SeriesView,
    split_count: usize,
) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = &'a Athlete>,
{
    let series: Vec<Vec<f64>> = athletes
        .into_iter()
        .map(|athlete| series_for_view(athlete, view))
        .collect();
    (0..split_count)
        .map(|index| {
            mean_finite(
                series
                    .iter()
                    .map(|values| values.get(index).copied().unwrap_or(f64::NAN)),
            )
        })
        .collect()
}
