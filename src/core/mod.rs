pub mod clock;
pub mod distance;
pub mod primitives;
pub mod series;
pub mod types;

pub use clock::{PACE_PLACEHOLDER, format_clock, format_pace, parse_clock, parse_clock_str};
pub use distance::{
    METERS_PER_MILE, discover_split_columns, distance_meters, sort_labels_by_distance,
};
pub use primitives::{mean_finite, option_to_f64, range_finite, sum_finite};
pub use series::{SeriesView, pace_series, position_series, series_for_view};
pub use types::{Athlete, NormalizedReport, RaceReport, SplitLabel, SplitRecord};
