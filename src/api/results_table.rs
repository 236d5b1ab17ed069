use serde::{Deserialize, Serialize};

use crate::analytics::team_names;

use super::RaceAnalytics;

const FIXED_COLUMNS: [&str; 5] = ["Place", "Name", "Team", "Time", "Points"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsRow {
    pub athlete_id: String,
    pub place: Option<u32>,
    pub name: String,
    pub team: String,
    pub time: String,
    pub points: Option<u32>,
    /// Elapsed text per split column; empty for gaps.
    pub splits: Vec<String>,
}

/// Results in display order with one column per split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    pub columns: Vec<String>,
    pub rows: Vec<ResultsRow>,
    /// Named teams available to the team filter, sorted.
    pub team_options: Vec<String>,
}

impl RaceAnalytics {
    /// Builds the results table, optionally restricted to one team.
    ///
    /// Rows are ordered by place; athletes without one sort after every
    /// placed athlete using the configured display sentinel, keeping report
    /// order among themselves. An empty filter shows every team.
    #[must_use]
    pub fn results_table(&self, team_filter: Option<&str>) -> ResultsTable {
        let labels = self.split_labels();
        let sentinel = self.config.table_place_sentinel;

        let mut ordered: Vec<_> = self.report.athletes.iter().collect();
        ordered.sort_by_key(|athlete| athlete.place.unwrap_or(sentinel));

        let filter = team_filter.filter(|team| !team.is_empty());
        let rows = ordered
            .into_iter()
            .filter(|athlete| filter.is_none_or(|team| athlete.team == team))
            .map(|athlete| ResultsRow {
                athlete_id: athlete.athlete_id.clone(),
                place: athlete.place,
                name: athlete.name.clone(),
                team: athlete.team.clone(),
                time: athlete.final_time.clone(),
                points: athlete.place,
                splits: (0..labels.len())
                    .map(|index| {
                        athlete
                            .split(index)
                            .map(|record| record.elapsed.clone())
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect();

        let columns = FIXED_COLUMNS
            .iter()
            .map(|column| (*column).to_owned())
            .chain(labels)
            .collect();

        ResultsTable {
            columns,
            rows,
            team_options: team_names(&self.report.athletes),
        }
    }
}
