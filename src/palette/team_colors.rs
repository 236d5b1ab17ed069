use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{SplitsError, SplitsResult};

/// One entry of the optional team-colors document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColorRecord {
    #[serde(default)]
    pub primary_hex: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub palette: Vec<String>,
}

/// Team-colors document keyed by team identifier, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamColorDocument {
    pub entries: IndexMap<String, TeamColorRecord>,
}

impl TeamColorDocument {
    pub fn from_json_str(input: &str) -> SplitsResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    /// Reads every well-formed entry of `value`.
    ///
    /// Entries that are not color records are skipped; only a top-level value
    /// that is not an object (or `null`) is an error.
    pub fn from_json_value(value: &Value) -> SplitsResult<Self> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::default()),
            _ => {
                return Err(SplitsError::InvalidInput(
                    "team colors must be a JSON object".to_owned(),
                ));
            }
        };

        let mut entries = IndexMap::with_capacity(object.len());
        for (key, raw) in object {
            match TeamColorRecord::deserialize(raw) {
                Ok(record) => {
                    entries.insert(key.clone(), record);
                }
                Err(err) => warn!(key = %key, error = %err, "skipping malformed team color entry"),
            }
        }
        Ok(Self { entries })
    }
}

/// Keys that read like display names ("Texas State") rather than file slugs
/// ("texas-state").
#[must_use]
pub fn looks_like_team_name(key: &str) -> bool {
    key.chars()
        .any(|ch| ch.is_ascii_uppercase() || ch.is_whitespace())
}
