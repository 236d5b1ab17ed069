use serde::{Deserialize, Serialize};

use crate::core::Athlete;

/// Which per-split quantity a series carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesView {
    /// Seconds spent on each segment.
    #[default]
    Pace,
    /// Place held at each checkpoint.
    Position,
}

/// Seconds spent on each segment, one value per split.
///
/// A finite lap time is used as-is. Otherwise the segment is the difference
/// between this split's cumulative time and the previous split's; the first
/// split uses its own cumulative time. Non-finite inputs stay non-finite.
#[must_use]
pub fn pace_series(athlete: &Athlete) -> Vec<f64> {
    let mut out = Vec::with_capacity(athlete.splits.len());
    let mut previous_elapsed = 0.0;
    for record in &athlete.splits {
        let segment = if record.has_lap() {
            record.lap_s
        } else {
            record.elapsed_s - previous_elapsed
        };
        out.push(segment);
        previous_elapsed = record.elapsed_s;
    }
    out
}

/// Place held at each split, unchanged from the record.
#[must_use]
pub fn position_series(athlete: &Athlete) -> Vec<Option<f64>> {
    athlete
        .splits
        .iter()
        .map(|record| record.place_at_split.map(f64::from))
        .collect()
}

/// Series for `view` with gaps as `NaN`, convenient for averaging.
#[must_use]
pub fn series_for_view(athlete: &Athlete, view: SeriesView) -> Vec<f64> {
    match view {
        SeriesView::Pace => pace_series(athlete),
        SeriesView::Position => position_series(athlete)
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect(),
    }
}
