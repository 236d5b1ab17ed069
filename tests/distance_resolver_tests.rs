use approx::assert_relative_eq;
use race_splits::core::{
    Athlete, METERS_PER_MILE, SplitRecord, discover_split_columns, distance_meters,
    sort_labels_by_distance,
};

fn athlete_with_labels(id: &str, labels: &[&str]) -> Athlete {
    Athlete {
        athlete_id: id.to_owned(),
        name: id.to_owned(),
        team: String::new(),
        place: None,
        final_time: String::new(),
        splits: labels
            .iter()
            .map(|label| SplitRecord {
                label: (*label).to_owned(),
                elapsed: String::new(),
                elapsed_s: f64::NAN,
                lap_s: f64::NAN,
                place_at_split: None,
            })
            .collect(),
    }
}

#[test]
fn kilometer_labels_resolve_to_meters() {
    assert_relative_eq!(distance_meters("1K"), 1000.0);
    assert_relative_eq!(distance_meters("4.1K"), 4100.0);
    assert_relative_eq!(distance_meters("km 3"), 3000.0);
    assert_relative_eq!(distance_meters("Split_2K"), 2000.0);
    assert_relative_eq!(distance_meters("split 6k"), 6000.0);
}

#[test]
fn mile_labels_use_statute_miles() {
    assert_relative_eq!(distance_meters("Mile 1"), METERS_PER_MILE);
    assert_relative_eq!(distance_meters("2 mile"), 2.0 * METERS_PER_MILE);
    assert_relative_eq!(distance_meters("mi 3"), 3.0 * METERS_PER_MILE);
}

#[test]
fn labels_without_numbers_sort_last() {
    assert_eq!(distance_meters("Finish"), f64::INFINITY);
    assert_eq!(distance_meters(""), f64::INFINITY);
}

#[test]
fn mixed_labels_order_by_race_progression() {
    let sorted = sort_labels_by_distance(&["10K", "Mile 1", "4.1K", "2K", "1K"]);
    assert_eq!(sorted, vec!["1K", "2K", "Mile 1", "4.1K", "10K"]);
}

#[test]
fn equal_estimates_keep_input_order() {
    let sorted = sort_labels_by_distance(&["Finish", "2k", "Split_2K", "Result"]);
    assert_eq!(sorted, vec!["2k", "Split_2K", "Finish", "Result"]);
}

#[test]
fn discovered_columns_merge_labels_across_athletes() {
    let athletes = vec![
        athlete_with_labels("a", &["1K", "3K"]),
        athlete_with_labels("b", &["Mile 1", "1K", ""]),
        athlete_with_labels("c", &["5K", "3K"]),
    ];

    assert_eq!(
        discover_split_columns(&athletes),
        vec!["1K", "Mile 1", "3K", "5K"]
    );
}

#[test]
fn mile_marker_needs_a_word_boundary_before_mi() {
    assert_relative_eq!(distance_meters("1mi"), 1000.0);
    assert_relative_eq!(distance_meters("Semifinal 2"), 2000.0);
    assert_relative_eq!(distance_meters("KM5"), 5000.0);
}
