use approx::assert_relative_eq;
use race_splits::api::{LineKind, TeamPaceOptions};
use race_splits::core::SeriesView;
use race_splits::palette::{Color, TeamColorDocument};
use race_splits::{AnalyticsConfig, RaceAnalytics, SplitsError};
use serde_json::json;

const CONFERENCE_8K_JSON: &str = include_str!("fixtures/split_report/conference_8k.json");
const TEAM_COLORS_JSON: &str = include_str!("fixtures/split_report/team_colors.json");

fn analytics() -> RaceAnalytics {
    RaceAnalytics::from_json_str(CONFERENCE_8K_JSON, AnalyticsConfig::default())
        .expect("fixture analytics")
}

#[test]
fn summary_reports_headline_counts() {
    let summary = analytics().summary();
    assert_eq!(summary.name, "Conference Championship 8K");
    assert_eq!(summary.athlete_count, 11);
    assert_eq!(summary.team_count, 3);
    assert_eq!(summary.split_count, 3);
}

#[test]
fn split_labels_and_columns() {
    let analytics = analytics();
    assert_eq!(analytics.split_labels(), vec!["2K", "5K", "8K"]);
    assert_eq!(analytics.split_count(), 3);
    assert_eq!(analytics.split_columns(), vec!["2K", "5K", "8K"]);
}

#[test]
fn labels_fall_back_when_race_defines_none() {
    let raw = json!({
        "spr": [
            {
                "r": { "a": { "i": 1, "t": { "n": "A" } }, "p": 1 },
                "sp": [{ "sp": { "cs": "3:00" } }, { "sp": { "cs": "6:00" } }]
            }
        ]
    });
    let analytics =
        RaceAnalytics::from_json_value(&raw, AnalyticsConfig::default()).expect("analytics");
    assert_eq!(analytics.split_labels(), vec!["S1", "S2"]);
    assert_eq!(analytics.split_count(), 2);
    assert_eq!(analytics.team_aggregate("A").per_split.len(), 2);
}

#[test]
fn team_selection_defaults_and_dedupes() {
    let analytics = analytics();
    let none: [&str; 0] = [];

    assert_eq!(analytics.select_teams(&none), vec!["Coastal Carolina", "Texas State", ""]);
    assert_eq!(
        analytics.select_teams(&["Texas State", "Coastal Carolina", "Texas State"]),
        vec!["Texas State", "Coastal Carolina"]
    );
    assert_eq!(analytics.team_names(), vec!["Coastal Carolina", "Texas State"]);

    let narrow = RaceAnalytics::from_json_str(
        CONFERENCE_8K_JSON,
        AnalyticsConfig::default().with_default_team_count(1),
    )
    .expect("analytics");
    assert_eq!(narrow.team_aggregates(&none).len(), 1);
}

#[test]
fn insights_flag_wide_teams_only() {
    let analytics = analytics();
    let none: [&str; 0] = [];

    let signals = analytics.insights(&none);
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].team, "Coastal Carolina");
    assert_eq!(signals[0].threshold_seconds, 90.0);

    assert!(analytics.insights(&["Texas State"]).is_empty());
    assert_eq!(analytics.team_finish_spread("Texas State"), 80.0);
}

#[test]
fn scoring_size_follows_config() {
    let analytics = RaceAnalytics::from_json_str(
        CONFERENCE_8K_JSON,
        AnalyticsConfig::default().with_scoring_size(3),
    )
    .expect("analytics");

    let score = analytics.team_score("Coastal Carolina");
    assert_eq!(score.score, Some(9));
    assert_eq!(analytics.team_aggregate("Coastal Carolina").scoring_athletes.len(), 3);
}

#[test]
fn athlete_lookup_and_split_map() {
    let analytics = analytics();

    let splits = analytics.athlete_splits("101").expect("known athlete");
    let pairs: Vec<(&str, &str)> = splits.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(pairs, vec![("2K", "6:10"), ("5K", "15:20"), ("8K", "25:00.0")]);

    assert!(analytics.athlete("nope").is_none());
    assert!(analytics.athlete_splits("nope").is_none());
}

#[test]
fn runner_compare_labels_and_skips_unknown_ids() {
    let analytics = analytics();
    let chart = analytics.runner_compare("101", "102", SeriesView::Pace);

    assert_eq!(chart.labels, vec!["2K", "5K", "8K"]);
    assert_eq!(chart.lines.len(), 2);
    assert_eq!(chart.lines[0].label, "Ana Silva (Coastal Carolina)");
    assert_eq!(chart.lines[1].label, "Beth Jones (Texas State)");
    assert_eq!(chart.lines[0].values, vec![Some(370.0), Some(550.0), Some(580.0)]);
    assert!(chart.lines.iter().all(|line| line.kind == LineKind::Runner));

    let partial = analytics.runner_compare("101", "missing", SeriesView::Position);
    assert_eq!(partial.lines.len(), 1);
    assert_eq!(partial.lines[0].values, vec![Some(3.0), Some(2.0), Some(1.0)]);
}

#[test]
fn team_pace_view_builds_average_and_fading_runners() {
    let analytics = analytics();
    let chart = analytics.team_pace_view(
        "Texas State",
        SeriesView::Position,
        &TeamPaceOptions::default(),
    );

    assert_eq!(chart.lines.len(), 4);
    let average = &chart.lines[0];
    assert_eq!(average.kind, LineKind::TeamAverage);
    assert_eq!(average.label, "Texas State (avg)");
    assert_eq!(average.values, vec![Some(4.0), Some(4.0), Some(3.0)]);

    let runners = &chart.lines[1..];
    assert_eq!(runners[0].label, "Beth Jones");
    assert_relative_eq!(runners[0].color.alpha, 0.25);
    assert_relative_eq!(runners[2].color.alpha, 0.33, epsilon = 1e-12);
    assert_eq!(runners[1].values, vec![Some(6.0), None, None]);
    assert!(runners.iter().all(|line| !line.dashed));
}

#[test]
fn team_pace_view_overlays_comparison_team() {
    let analytics = RaceAnalytics::from_json_str(
        CONFERENCE_8K_JSON,
        AnalyticsConfig::default().with_max_runner_lines(2),
    )
    .expect("analytics");
    let options = TeamPaceOptions {
        show_average: false,
        comparison_team: Some("Coastal Carolina".to_owned()),
        show_comparison_runners: true,
    };
    let chart = analytics.team_pace_view("Texas State", SeriesView::Pace, &options);

    let labels: Vec<&str> = chart.lines.iter().map(|line| line.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Beth Jones",
            "Dee Park",
            "Coastal Carolina (avg)",
            "Ana Silva (B)",
            "Cara Diaz (B)"
        ]
    );
    assert!(chart.lines[2..].iter().all(|line| line.dashed));
    assert!(chart.lines[..2].iter().all(|line| !line.dashed));
}

#[test]
fn config_colors_and_team_color_documents_reach_the_palette() {
    let mut analytics = RaceAnalytics::from_json_str(
        CONFERENCE_8K_JSON,
        AnalyticsConfig::default().with_team_color("Texas State", "#010203"),
    )
    .expect("analytics");
    assert_eq!(analytics.palette().color_for("Texas State"), Color::rgba(1, 2, 3, 0.85));

    let document = TeamColorDocument::from_json_str(TEAM_COLORS_JSON).expect("document");
    assert_eq!(analytics.apply_team_colors(&document), 2);

    let chart = analytics.runner_compare("101", "101", SeriesView::Pace);
    assert_eq!(chart.lines[0].color, Color::rgba(0x0A, 0x7B, 0x83, 0.85));
}

#[test]
fn reload_swaps_report_and_keeps_it_on_error() {
    let mut analytics = analytics();

    let err = analytics.reload(&json!([1, 2])).expect_err("array report");
    assert!(matches!(err, SplitsError::InvalidInput(_)));
    assert_eq!(analytics.summary().athlete_count, 11);

    analytics
        .reload(&json!({ "_source": { "n": "Dual Meet", "spr": [] } }))
        .expect("reload");
    let summary = analytics.summary();
    assert_eq!(summary.name, "Dual Meet");
    assert_eq!(summary.athlete_count, 0);
    assert!(analytics.team_aggregates(&["Coastal Carolina"])[0].scoring_athletes.is_empty());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let err = RaceAnalytics::from_json_str(
        CONFERENCE_8K_JSON,
        AnalyticsConfig::default().with_scoring_size(0),
    )
    .expect_err("zero scoring size");
    assert!(matches!(err, SplitsError::InvalidData(_)));
}
