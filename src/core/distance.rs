use std::borrow::Cow;
use std::sync::LazyLock;

use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use regex::Regex;

use crate::core::Athlete;

/// Meters per statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Leading `split` word plus any separators after it.
static SPLIT_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^split[_\s:.\-]*").expect("Invalid split prefix regex"));

static KM_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^km\b").expect("Invalid km prefix regex"));

/// ASCII digits only; other Unicode digits would not parse as `f64`.
static DECIMAL_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("Invalid decimal number regex"));

static MILE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bmi|mile").expect("Invalid mile marker regex"));

/// Estimates the distance in meters a free-form checkpoint label refers to.
///
/// Handles labels such as `"4.1K"`, `"1k"`, `"km 3"`, `"Mile 1"`, `"mi 2"` and
/// `"Split_2K"`. Numbers are kilometers unless a mile marker is present.
/// Labels without a number resolve to `+inf` so they sort after every
/// parseable label. This is an ordering key, not a measurement.
#[must_use]
pub fn distance_meters(label: &str) -> f64 {
    let lowered = label.trim().to_lowercase();
    let stripped = strip_split_prefix(&lowered);
    let normalized = normalize_km_prefix(&stripped);

    let Some(value) = first_decimal_number(&normalized) else {
        return f64::INFINITY;
    };

    if has_mile_marker(&normalized) {
        value * METERS_PER_MILE
    } else {
        value * 1000.0
    }
}

/// Stable ascending sort of labels by [`distance_meters`].
///
/// Labels with equal estimates keep their input order.
#[must_use]
pub fn sort_labels_by_distance<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut keyed: Vec<(OrderedFloat<f64>, &str)> = labels
        .iter()
        .map(|label| (OrderedFloat(distance_meters(label.as_ref())), label.as_ref()))
        .collect();
    keyed.sort_by_key(|(distance, _)| *distance);
    keyed.into_iter().map(|(_, label)| label.to_owned()).collect()
}

/// Collects every non-empty split label carried by `athletes` and orders the
/// union by estimated distance.
///
/// Used for column discovery when a report carries no ordinal of its own.
#[must_use]
pub fn discover_split_columns(athletes: &[Athlete]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for athlete in athletes {
        for record in &athlete.splits {
            if !record.label.is_empty() {
                seen.insert(record.label.as_str());
            }
        }
    }
    let labels: Vec<&str> = seen.into_iter().collect();
    sort_labels_by_distance(&labels)
}

fn strip_split_prefix(text: &str) -> Cow<'_, str> {
    SPLIT_PREFIX_REGEX.replace(text, "")
}

fn normalize_km_prefix(text: &str) -> Cow<'_, str> {
    KM_PREFIX_REGEX.replace(text, "k")
}

fn first_decimal_number(text: &str) -> Option<f64> {
    DECIMAL_NUMBER_REGEX.find(text)?.as_str().parse().ok()
}

// A word starting with "mi" anywhere, or the text "mile".
fn has_mile_marker(text: &str) -> bool {
    MILE_MARKER_REGEX.is_match(text)
}
