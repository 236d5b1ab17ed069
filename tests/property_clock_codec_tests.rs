use race_splits::core::{format_clock, format_pace, parse_clock_str};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_clock_inverts_format_clock_for_whole_seconds(seconds in 0u32..36_000) {
        let text = format_clock(f64::from(seconds));
        prop_assert_eq!(parse_clock_str(&text), f64::from(seconds));
    }

    #[test]
    fn parse_clock_reads_generated_minute_clock_text(minutes in 0u32..600, seconds in 0u32..60) {
        let text = format!("{minutes}:{seconds:02}");
        prop_assert_eq!(parse_clock_str(&text), f64::from(minutes * 60 + seconds));
    }

    #[test]
    fn parse_clock_reads_generated_hour_clock_text(
        hours in 0u32..10,
        minutes in 0u32..60,
        seconds in 0u32..60
    ) {
        let text = format!("{hours}:{minutes:02}:{seconds:02}");
        prop_assert_eq!(
            parse_clock_str(&text),
            f64::from(hours * 3600 + minutes * 60 + seconds)
        );
    }

    #[test]
    fn format_pace_never_renders_sixty_seconds(seconds in 0.0f64..20_000.0) {
        let label = format_pace(seconds);
        let (_, secs) = label.split_once(':').expect("pace label has a colon");
        let secs: u32 = secs.parse().expect("numeric seconds");
        prop_assert!(secs < 60);
        prop_assert!((parse_clock_str(&label) - seconds).abs() <= 0.5 + 1e-9);
    }

    #[test]
    fn parse_clock_never_panics_on_arbitrary_text(text in ".{0,24}") {
        let _ = parse_clock_str(&text);
    }
}
