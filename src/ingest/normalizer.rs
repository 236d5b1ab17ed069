use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{Athlete, NormalizedReport, RaceReport, SplitLabel, SplitRecord, parse_clock};
use crate::error::{SplitsError, SplitsResult};

use super::document::{RawNode, first_text};

/// Parses JSON text and normalizes it with [`normalize_split_report`].
pub fn normalize_split_report_str(input: &str) -> SplitsResult<NormalizedReport> {
    let raw: Value = serde_json::from_str(input)?;
    normalize_split_report(&raw)
}

/// Converts a raw split-report export into the canonical model.
///
/// Accepts the export either wrapped in a `_source` envelope or bare. Field
/// defects never fail the call: they degrade to empty text, `NaN` or `None`
/// and the remaining athletes are still processed. A `null` document yields
/// an empty report. Only a top-level value that is neither an object nor
/// `null` is rejected.
pub fn normalize_split_report(raw: &Value) -> SplitsResult<NormalizedReport> {
    let root = RawNode::new(raw);
    if !root.is_object() && !root.is_nullish() {
        return Err(SplitsError::InvalidInput(format!(
            "split report must be a JSON object, got {}",
            json_kind(raw)
        )));
    }

    let envelope = root.get("_source");
    let source = if envelope.is_object() { envelope } else { root };

    let splits = split_labels(source.get("spd"));
    let entries = source.get("spr");
    if !entries.is_array() {
        debug!("split report has no athlete list");
    }

    let mut ids = AthleteIds::default();
    let athletes: Vec<Athlete> = entries
        .items()
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_athlete(RawNode::new(entry), index, &splits, &mut ids))
        .collect();

    let race = RaceReport {
        name: source.get("n").text().unwrap_or_default(),
        splits,
    };

    debug!(
        race = %race.name,
        split_count = race.splits.len(),
        athlete_count = athletes.len(),
        "normalized split report"
    );

    Ok(NormalizedReport { race, athletes })
}

// Split definitions ordered by their own ordinal (`nu`); ties keep input order.
fn split_labels(definitions: RawNode<'_>) -> Vec<SplitLabel> {
    let mut keyed: Vec<(f64, SplitLabel)> = definitions
        .items()
        .iter()
        .map(|definition| {
            let definition = RawNode::new(definition);
            let ordinal = definition.get("nu").number().unwrap_or(0.0);
            let label = definition.get("n").text().unwrap_or_default();
            (ordinal, SplitLabel::new(label))
        })
        .collect();
    keyed.sort_by(|(left, _), (right, _)| left.total_cmp(right));
    keyed.into_iter().map(|(_, label)| label).collect()
}

fn normalize_athlete(
    entry: RawNode<'_>,
    index: usize,
    labels: &[SplitLabel],
    ids: &mut AthleteIds,
) -> Athlete {
    let result = entry.get("r");
    let identity = result.get("a");
    let team_node = identity.get("t");

    let name = identity.get("n").text().unwrap_or_else(|| {
        let first = identity.get("fn").text().unwrap_or_default();
        let last = identity.get("l").text().unwrap_or_default();
        format!("{first} {last}").trim().to_owned()
    });
    let team = first_text([team_node.get("n"), team_node.get("f")]).unwrap_or_default();

    let place = result.get("p").place();
    if place.is_none() && !result.get("p").is_nullish() {
        warn!(index, name = %name, "athlete place is not a positive whole number");
    }

    let splits: Vec<SplitRecord> = entry
        .get("sp")
        .items()
        .iter()
        .enumerate()
        .map(|(split_index, raw)| normalize_split(RawNode::new(raw), split_index, labels))
        .collect();

    let final_time = result
        .get("m")
        .text()
        .or_else(|| {
            splits
                .last()
                .map(|record| record.elapsed.clone())
                .filter(|elapsed| !elapsed.is_empty())
        })
        .unwrap_or_default();

    let source_id = first_text([identity.get("i"), result.get("i")]);
    let athlete_id = ids.assign(source_id, index, &name, &team);

    trace!(
        athlete_id = %athlete_id,
        split_count = splits.len(),
        "normalized athlete"
    );

    Athlete {
        athlete_id,
        name,
        team,
        place,
        final_time,
        splits,
    }
}

fn normalize_split(raw: RawNode<'_>, index: usize, labels: &[SplitLabel]) -> SplitRecord {
    let label = labels
        .get(index)
        .map(|split| split.label.as_str())
        .filter(|label| !label.is_empty())
        .map_or_else(|| format!("S{}", index + 1), str::to_owned);

    let times = raw.get("sp");
    let elapsed = times.get("cs").text().unwrap_or_default();
    let lap = times.get("sp").text();

    SplitRecord {
        label,
        elapsed_s: parse_clock(Some(elapsed.as_str())),
        lap_s: parse_clock(lap.as_deref()),
        elapsed,
        place_at_split: raw.get("p").place(),
    }
}

/// Hands out athlete ids that are unique within one report.
///
/// Missing source ids get a token derived from the entry index, name and
/// team, so normalizing the same export twice yields the same ids.
#[derive(Debug, Default)]
struct AthleteIds {
    used: HashSet<String>,
}

impl AthleteIds {
    fn assign(
        &mut self,
        source_id: Option<String>,
        index: usize,
        name: &str,
        team: &str,
    ) -> String {
        let base = source_id.unwrap_or_else(|| {
            let token = format!("anon-{index}-{:016x}", fnv1a64(&[name, team]));
            warn!(index, token = %token, "athlete has no id, using derived token");
            token
        });

        if self.used.insert(base.clone()) {
            return base;
        }

        let mut suffix = 2_usize;
        loop {
            let candidate = format!("{base}#{suffix}");
            if self.used.insert(candidate.clone()) {
                warn!(id = %base, assigned = %candidate, "duplicate athlete id disambiguated");
                return candidate;
            }
            suffix += 1;
        }
    }
}

fn fnv1a64(parts: &[&str]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET;
    for (position, part) in parts.iter().enumerate() {
        if position > 0 {
            hash ^= 0x1f;
            hash = hash.wrapping_mul(PRIME);
        }
        for byte in part.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
    }
    hash
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
