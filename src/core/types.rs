use serde::{Deserialize, Serialize};

/// One timed checkpoint of a race, e.g. `"2K"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLabel {
    pub label: String,
}

impl SplitLabel {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Race metadata plus the canonical checkpoint order.
///
/// `splits` is the spine every athlete's split list aligns to: index `i`
/// always refers to the same checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceReport {
    pub name: String,
    pub splits: Vec<SplitLabel>,
}

/// One athlete's timing at one checkpoint.
///
/// `elapsed_s` and `lap_s` are `NaN` when the source text does not parse;
/// they serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub label: String,
    pub elapsed: String,
    #[serde(with = "nan_as_null")]
    pub elapsed_s: f64,
    #[serde(with = "nan_as_null")]
    pub lap_s: f64,
    pub place_at_split: Option<u32>,
}

impl SplitRecord {
    #[must_use]
    pub fn has_lap(&self) -> bool {
        self.lap_s.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub athlete_id: String,
    pub name: String,
    /// Empty when the export does not name a team.
    pub team: String,
    /// Finish place; `None` means the athlete is never a scorer.
    pub place: Option<u32>,
    /// Raw finish clock text, possibly empty.
    pub final_time: String,
    pub splits: Vec<SplitRecord>,
}

impl Athlete {
    /// Finish time in seconds, `NaN` when `final_time` does not parse.
    #[must_use]
    pub fn final_seconds(&self) -> f64 {
        crate::core::parse_clock_str(&self.final_time)
    }

    /// Record at split index `index`; `None` is a gap.
    #[must_use]
    pub fn split(&self, index: usize) -> Option<&SplitRecord> {
        self.splits.get(index)
    }
}

/// Canonical model produced from one raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedReport {
    pub race: RaceReport,
    pub athletes: Vec<Athlete>,
}

impl NormalizedReport {
    /// Number of split columns a table or chart should show: the race spine
    /// length, or the longest athlete split list when the race has none.
    #[must_use]
    pub fn column_count(&self) -> usize {
        if self.race.splits.is_empty() {
            self.athletes
                .iter()
                .map(|athlete| athlete.splits.len())
                .max()
                .unwrap_or(0)
        } else {
            self.race.splits.len()
        }
    }

    /// Display labels for every column; columns without a race label fall
    /// back to `S{n}`.
    #[must_use]
    pub fn column_labels(&self) -> Vec<String> {
        if self.race.splits.is_empty() {
            (1..=self.column_count()).map(|n| format!("S{n}")).collect()
        } else {
            self.race
                .splits
                .iter()
                .map(|split| split.label.clone())
                .collect()
        }
    }
}

/// Serde adapter writing non-finite floats as `null` and reading `null` back
/// as `NaN`.
pub(crate) mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
