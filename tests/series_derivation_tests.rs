use race_splits::core::{
    Athlete, SeriesView, SplitRecord, pace_series, parse_clock_str, position_series,
    series_for_view,
};

fn record(label: &str, elapsed: &str, lap: Option<&str>, place: Option<u32>) -> SplitRecord {
    SplitRecord {
        label: label.to_owned(),
        elapsed: elapsed.to_owned(),
        elapsed_s: parse_clock_str(elapsed),
        lap_s: lap.map_or(f64::NAN, parse_clock_str),
        place_at_split: place,
    }
}

fn athlete(splits: Vec<SplitRecord>) -> Athlete {
    Athlete {
        athlete_id: "a1".to_owned(),
        name: "Runner".to_owned(),
        team: "Team".to_owned(),
        place: Some(1),
        final_time: String::new(),
        splits,
    }
}

#[test]
fn pace_is_derived_from_cumulative_differences() {
    let runner = athlete(vec![
        record("1K", "2:00", None, Some(4)),
        record("2K", "4:10", None, Some(3)),
        record("3K", "6:40", None, Some(1)),
    ]);

    assert_eq!(pace_series(&runner), vec![120.0, 130.0, 150.0]);
}

#[test]
fn finite_lap_time_wins_over_difference() {
    let runner = athlete(vec![
        record("1K", "2:00", Some("1:58"), None),
        record("2K", "4:10", None, None),
    ]);

    assert_eq!(pace_series(&runner), vec![118.0, 130.0]);
}

#[test]
fn unparsable_elapsed_poisons_its_segment_and_the_next() {
    let runner = athlete(vec![
        record("1K", "2:00", None, None),
        record("2K", "DNF", None, None),
        record("3K", "6:40", None, None),
        record("4K", "9:00", None, None),
    ]);

    let pace = pace_series(&runner);
    assert_eq!(pace[0], 120.0);
    assert!(pace[1].is_nan());
    assert!(pace[2].is_nan());
    assert_eq!(pace[3], 140.0);
}

#[test]
fn position_series_projects_places_and_keeps_gaps() {
    let runner = athlete(vec![
        record("1K", "2:00", None, Some(7)),
        record("2K", "4:10", None, None),
        record("3K", "6:40", None, Some(2)),
    ]);

    assert_eq!(position_series(&runner), vec![Some(7.0), None, Some(2.0)]);

    let view = series_for_view(&runner, SeriesView::Position);
    assert_eq!(view[0], 7.0);
    assert!(view[1].is_nan());
    assert_eq!(view[2], 2.0);
}

#[test]
fn empty_split_list_yields_empty_series() {
    let runner = athlete(Vec::new());
    assert!(pace_series(&runner).is_empty());
    assert!(position_series(&runner).is_empty());
    assert_eq!(SeriesView::default(), SeriesView::Pace);
}
