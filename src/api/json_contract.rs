use serde::{Deserialize, Serialize};

use crate::analytics::{DispersionSignal, TeamAggregate};
use crate::core::RaceReport;
use crate::error::{SplitsError, SplitsResult};

use super::RaceAnalytics;

pub const TEAM_AGGREGATES_JSON_SCHEMA_V1: u32 = 1;

/// Everything a chart layer needs to draw the team panels of one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregatesPayload {
    pub race: RaceReport,
    pub labels: Vec<String>,
    pub aggregates: Vec<TeamAggregate>,
    pub signals: Vec<DispersionSignal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregatesJsonContractV1 {
    pub schema_version: u32,
    pub payload: TeamAggregatesPayload,
}

impl TeamAggregatesPayload {
    pub fn to_json_contract_v1_pretty(&self) -> SplitsResult<String> {
        let contract = TeamAggregatesJsonContractV1 {
            schema_version: TEAM_AGGREGATES_JSON_SCHEMA_V1,
            payload: self.clone(),
        };
        serde_json::to_string_pretty(&contract).map_err(|e| {
            SplitsError::InvalidData(format!(
                "failed to serialize team aggregates contract v1: {e}"
            ))
        })
    }

    /// Reads either a bare payload or a versioned contract.
    pub fn from_json_compat_str(input: &str) -> SplitsResult<Self> {
        if let Ok(payload) = serde_json::from_str::<TeamAggregatesPayload>(input) {
            return Ok(payload);
        }
        let contract: TeamAggregatesJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SplitsError::InvalidData(format!("failed to parse team aggregates json payload: {e}"))
        })?;
        if contract.schema_version != TEAM_AGGREGATES_JSON_SCHEMA_V1 {
            return Err(SplitsError::InvalidData(format!(
                "unsupported team aggregates schema version: {}",
                contract.schema_version
            )));
        }
        Ok(contract.payload)
    }
}

impl RaceAnalytics {
    #[must_use]
    pub fn team_aggregates_payload<S: AsRef<str>>(&self, teams: &[S]) -> TeamAggregatesPayload {
        let teams = self.select_teams(teams);
        TeamAggregatesPayload {
            race: self.report.race.clone(),
            labels: self.split_labels(),
            aggregates: self.team_aggregates(teams.as_slice()),
            signals: self.insights(teams.as_slice()),
        }
    }

    pub fn team_aggregates_json_contract_v1_pretty<S: AsRef<str>>(
        &self,
        teams: &[S],
    ) -> SplitsResult<String> {
        self.team_aggregates_payload(teams).to_json_contract_v1_pretty()
    }
}
