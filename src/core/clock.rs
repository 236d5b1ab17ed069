//! Clock-text codec for split and finish times.
//!
//! Parsing never fails: anything that does not look like a clock value maps
//! to `NaN` so downstream aggregation can filter it out.

/// Placeholder rendered for non-finite pace values.
pub const PACE_PLACEHOLDER: &str = "—";

/// Parses `mm:ss[.d]` or `h:mm:ss[.d]` clock text into seconds.
///
/// `None`, empty text, and any component that is not a number yield `NaN`.
/// Text without exactly two or three components falls back to a direct
/// numeric parse of the whole string (`"75.5"` is 75.5 seconds).
#[must_use]
pub fn parse_clock(text: Option<&str>) -> f64 {
    match text {
        Some(text) => parse_clock_str(text),
        None => f64::NAN,
    }
}

/// Same as [`parse_clock`] for text that is known to be present.
#[must_use]
pub fn parse_clock_str(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }

    let mut parts = [0.0_f64; 3];
    let mut count = 0_usize;
    for component in trimmed.split(':') {
        let Some(value) = parse_component(component) else {
            return f64::NAN;
        };
        if count < parts.len() {
            parts[count] = value;
        }
        count += 1;
    }

    match count {
        2 => parts[0] * 60.0 + parts[1],
        3 => parts[0] * 3600.0 + parts[1] * 60.0 + parts[2],
        _ => parse_component(trimmed).unwrap_or(f64::NAN),
    }
}

/// Formats seconds as an `m:ss` pace label.
///
/// Minutes are floored and the remainder rounded to whole seconds. A
/// remainder that rounds up to 60 carries into the next minute, so 239.6
/// renders as `4:00`.
#[must_use]
pub fn format_pace(seconds: f64) -> String {
    if !seconds.is_finite() {
        return PACE_PLACEHOLDER.to_owned();
    }

    let mut minutes = (seconds / 60.0).floor();
    let mut rest = (seconds - minutes * 60.0).round();
    if rest >= 60.0 {
        minutes += 1.0;
        rest -= 60.0;
    }
    format!("{}:{:02}", minutes as i64, rest as i64)
}

/// Formats whole seconds as clock text: `m:ss` below one hour, `h:mm:ss` above.
///
/// Fractional input is rounded to the nearest second. Non-finite or negative
/// input renders as [`PACE_PLACEHOLDER`].
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return PACE_PLACEHOLDER.to_owned();
    }

    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

// Mirrors numeric coercion of clock components: surrounding whitespace is
// ignored and an empty component counts as zero.
fn parse_component(component: &str) -> Option<f64> {
    let component = component.trim();
    if component.is_empty() {
        return Some(0.0);
    }
    if !component
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    component.parse::<f64>().ok().filter(|value| value.is_finite())
}
