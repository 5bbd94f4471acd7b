#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_constants() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.mobile_breakpoint_px, 768.0);
    assert_eq!(cfg.carousel_interval_ms, 5000);
    assert_eq!(cfg.count_up_ms, 1500.0);
    assert_eq!(cfg.submit_latency_ms, 1500);
    assert_eq!(cfg.status_clear_ms, 5000);
    assert_eq!(cfg.reveal_threshold, 0.1);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{"carousel_interval_ms": 8000}"#).unwrap();
    assert_eq!(cfg.carousel_interval_ms, 8000);
    assert_eq!(cfg.count_up_ms, 1500.0);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn unknown_key_is_rejected() {
    assert!(SiteConfig::from_json(r#"{"carousel_speed": 1}"#).is_err());
}

#[test]
fn malformed_document_is_a_config_error() {
    let err = SiteConfig::from_json("not json").unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}

#[test]
fn breakpoint_is_inclusive() {
    let cfg = SiteConfig::default();
    assert!(cfg.is_mobile(768.0));
    assert!(cfg.is_mobile(320.0));
    assert!(!cfg.is_mobile(768.5));
}

#[test]
fn root_margin_insets_bottom_edge() {
    assert_eq!(SiteConfig::default().reveal_root_margin(), "0px 0px -50px 0px");
}

#[test]
fn log_level_parses_and_falls_back() {
    let mut cfg = SiteConfig::default();
    assert_eq!(cfg.level(), log::Level::Info);
    cfg.log_level = "debug".to_owned();
    assert_eq!(cfg.level(), log::Level::Debug);
    cfg.log_level = "loud".to_owned();
    assert_eq!(cfg.level(), log::Level::Info);
}
