//! Finite-value helpers shared by series and team aggregation.
//!
//! Every helper drops non-finite inputs before doing arithmetic, so a `NaN`
//! sentinel never leaks into a sum.

/// Mean of the finite values, `None` when there are none.
#[must_use]
pub fn mean_finite<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Sum of the finite values, `None` when there are none.
#[must_use]
pub fn sum_finite<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| Some(acc.unwrap_or(0.0) + value))
}

/// `max - min` of the finite values when at least `min_count` of them exist.
#[must_use]
pub fn range_finite<I>(values: I, min_count: usize) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut count = 0_usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.into_iter().filter(|value| value.is_finite()) {
        count += 1;
        min = min.min(value);
        max = max.max(value);
    }
    (count >= min_count.max(1)).then_some(max - min)
}

/// Maps `None` to `NaN` so optional values can flow through the helpers above.
#[must_use]
pub fn option_to_f64(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}
