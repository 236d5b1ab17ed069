use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analytics::{DEFAULT_SCORING_SIZE, DEFAULT_SPREAD_THRESHOLD_S};
use crate::error::{SplitsError, SplitsResult};
use crate::palette::{Color, DEFAULT_TEAM_ALPHA};

/// Public analytics configuration.
///
/// This type is serializable so host applications can persist/load their
/// setup without inventing their own ad-hoc format. Every field has a
/// default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_scoring_size")]
    pub scoring_size: usize,
    #[serde(default = "default_spread_threshold_s")]
    pub spread_threshold_s: f64,
    #[serde(default = "default_series_alpha")]
    pub series_alpha: f64,
    #[serde(default = "default_max_runner_lines")]
    pub max_runner_lines: usize,
    #[serde(default = "default_table_place_sentinel")]
    pub table_place_sentinel: u32,
    #[serde(default = "default_default_team_count")]
    pub default_team_count: usize,
    /// Team name to `#RRGGBB`, applied over the built-in team colors.
    #[serde(default)]
    pub team_colors: IndexMap<String, String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scoring_size: default_scoring_size(),
            spread_threshold_s: default_spread_threshold_s(),
            series_alpha: default_series_alpha(),
            max_runner_lines: default_max_runner_lines(),
            table_place_sentinel: default_table_place_sentinel(),
            default_team_count: default_default_team_count(),
            team_colors: IndexMap::new(),
        }
    }

    /// Loads a config from JSON and validates it.
    pub fn from_json_str(input: &str) -> SplitsResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets how many athletes per team score.
    #[must_use]
    pub fn with_scoring_size(mut self, scoring_size: usize) -> Self {
        self.scoring_size = scoring_size;
        self
    }

    /// Sets the finish-spread threshold for dispersion signals.
    #[must_use]
    pub fn with_spread_threshold_s(mut self, threshold: f64) -> Self {
        self.spread_threshold_s = threshold;
        self
    }

    #[must_use]
    pub fn with_series_alpha(mut self, alpha: f64) -> Self {
        self.series_alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_max_runner_lines(mut self, max_runner_lines: usize) -> Self {
        self.max_runner_lines = max_runner_lines;
        self
    }

    #[must_use]
    pub fn with_default_team_count(mut self, count: usize) -> Self {
        self.default_team_count = count;
        self
    }

    /// Adds a runtime color override for `team`.
    #[must_use]
    pub fn with_team_color(mut self, team: impl Into<String>, hex: impl Into<String>) -> Self {
        self.team_colors.insert(team.into(), hex.into());
        self
    }

    pub fn validate(&self) -> SplitsResult<()> {
        if self.scoring_size == 0 {
            return Err(SplitsError::InvalidData(
                "scoring size must be > 0".to_owned(),
            ));
        }
        if !self.spread_threshold_s.is_finite() || self.spread_threshold_s < 0.0 {
            return Err(SplitsError::InvalidData(
                "spread threshold must be finite and >= 0".to_owned(),
            ));
        }
        if self.table_place_sentinel == 0 {
            return Err(SplitsError::InvalidData(
                "table place sentinel must be > 0".to_owned(),
            ));
        }
        Color::rgb(0, 0, 0).with_alpha(self.series_alpha).validate()?;
        for hex in self.team_colors.values() {
            Color::from_hex(hex)?;
        }
        Ok(())
    }
}

fn default_scoring_size() -> usize {
    DEFAULT_SCORING_SIZE
}

fn default_spread_threshold_s() -> f64 {
    DEFAULT_SPREAD_THRESHOLD_S
}

fn default_series_alpha() -> f64 {
    DEFAULT_TEAM_ALPHA
}

fn default_max_runner_lines() -> usize {
    15
}

fn default_table_place_sentinel() -> u32 {
    1_000_000_000
}

fn default_default_team_count() -> usize {
    4
}
