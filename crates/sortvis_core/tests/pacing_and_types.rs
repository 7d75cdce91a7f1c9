use std::time::Duration;

use sortvis_core::{delay_for_speed, Algorithm, PacingConfig, RunStatus};

#[test]
fn delay_matches_slider_mapping() {
    let config = PacingConfig::default();
    assert_eq!(delay_for_speed(200, &config), Duration::from_millis(2));
    assert_eq!(delay_for_speed(100, &config), Duration::from_millis(101));
    assert_eq!(delay_for_speed(1, &config), Duration::from_millis(199));
}

#[test]
fn delay_is_non_increasing_and_bounded() {
    let config = PacingConfig::default();
    let min = Duration::from_millis(config.min_delay_ms);
    let max = Duration::from_millis(config.max_delay_ms);

    let mut previous = delay_for_speed(0, &config);
    for speed in 0..=400 {
        let delay = delay_for_speed(speed, &config);
        assert!(delay <= previous, "speed {speed} increased the delay");
        assert!(delay >= min && delay <= max, "speed {speed} out of bounds");
        previous = delay;
    }
}

#[test]
fn inverted_bounds_still_clamp() {
    let config = PacingConfig {
        max_speed: 0,
        min_delay_ms: 50,
        max_delay_ms: 10,
    };
    assert_eq!(delay_for_speed(5, &config), Duration::from_millis(10));
}

#[test]
fn algorithm_names_round_trip_case_insensitively() {
    for algo in Algorithm::ALL {
        assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
    }
    assert_eq!(" Quick ".parse::<Algorithm>(), Ok(Algorithm::Quick));
    let err = "heap".parse::<Algorithm>().unwrap_err();
    assert!(err.to_string().contains("heap"));
}

#[test]
fn active_statuses() {
    assert!(RunStatus::Running.is_active());
    assert!(RunStatus::Stopping.is_active());
    assert!(!RunStatus::Idle.is_active());
    assert!(!RunStatus::Completed.is_active());
    assert!(!RunStatus::Aborted.is_active());
}
