#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_text_yields_defaults() {
    let config = SiteConfig::from_json("   ").expect("blank config parses");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty object parses");
    assert_eq!(config.carousel_interval_ms, 6000);
    assert_eq!(config.puzzle_threshold, 0.3);
    assert_eq!(config.reveal_threshold, 0.15);
    assert_eq!(config.mobile_query, "(max-width: 768px)");
    assert!(config.contact_webhook.is_none());
}

#[test]
fn overrides_are_read_in_camel_case() {
    let config = SiteConfig::from_json(
        r#"{ "carouselIntervalMs": 8000, "contactWebhook": "https://hooks.example.com/c", "logLevel": "debug" }"#,
    )
    .expect("config parses");
    assert_eq!(config.carousel_interval_ms, 8000);
    assert_eq!(config.contact_webhook.as_deref(), Some("https://hooks.example.com/c"));
    assert_eq!(config.log_level().expect("level parses"), log::Level::Debug);
}

#[test]
fn short_interval_is_raised_to_minimum() {
    let config = SiteConfig::from_json(r#"{ "carouselIntervalMs": 10 }"#).expect("config parses");
    assert_eq!(config.carousel_interval_ms, 1000);
}

#[test]
fn thresholds_are_clamped() {
    let config = SiteConfig::from_json(r#"{ "puzzleThreshold": 4.0, "revealThreshold": -1 }"#)
        .expect("config parses");
    assert_eq!(config.puzzle_threshold, 1.0);
    assert_eq!(config.reveal_threshold, 0.0);
}

#[test]
fn blank_webhook_is_treated_as_missing() {
    let config = SiteConfig::from_json(r#"{ "contactWebhook": "  " }"#).expect("config parses");
    assert!(config.contact_webhook.is_none());
}

#[test]
fn blank_queries_fall_back_to_defaults() {
    let config = SiteConfig::from_json(r#"{ "mobileQuery": "", "reducedMotionQuery": " " }"#)
        .expect("config parses");
    assert_eq!(config.mobile_query, "(max-width: 768px)");
    assert_eq!(config.reduced_motion_query, "(prefers-reduced-motion: reduce)");
}

#[test]
fn malformed_json_is_an_error() {
    let err = SiteConfig::from_json("{ nope").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_log_level_is_an_error() {
    let config = SiteConfig { log_level: "loud".to_owned(), ..SiteConfig::default() };
    let err = config.log_level().expect_err("should fail");
    assert_eq!(err.to_string(), "unknown log level: loud");
}
