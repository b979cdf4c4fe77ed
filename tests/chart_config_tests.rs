use donut_rs::ChartError;
use donut_rs::animation::Easing;
use donut_rs::api::{DEFAULT_MARGIN_PX, DonutChartConfig};

#[test]
fn defaults_match_reference_reveal_timing() {
    let config = DonutChartConfig::new(300.0);
    assert_eq!(config.inner_radius_px, 0.0);
    assert_eq!(config.margin_px, DEFAULT_MARGIN_PX);
    assert_eq!(config.margin_px, 10.0);
    assert_eq!(config.stagger_ms, 100.0);
    assert_eq!(config.duration_ms, 800.0);
    assert_eq!(config.easing, Easing::CubicInOut);
    assert_eq!(config.outer_radius(), 140.0);
}

#[test]
fn config_json_round_trip_preserves_values() {
    let config = DonutChartConfig::new(240.0)
        .with_inner_radius(70.0)
        .with_margin(4.0)
        .with_stagger_ms(60.0)
        .with_duration_ms(450.0)
        .with_easing(Easing::CubicOut)
        .with_coordinate_decimals(2);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"cubic_out\""));
    let parsed = DonutChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = DonutChartConfig::from_json_str(r#"{ "size": 180.0, "inner_radius_px": 30.0 }"#)
        .expect("parse");
    assert_eq!(parsed, DonutChartConfig::new(180.0).with_inner_radius(30.0));
}

#[test]
fn malformed_json_is_invalid_data() {
    let result = DonutChartConfig::from_json_str("{ \"size\": \"big\" }");
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn validation_rejects_impossible_geometry() {
    assert!(matches!(
        DonutChartConfig::new(f64::NAN).validate(),
        Err(ChartError::InvalidSize { .. })
    ));
    assert!(DonutChartConfig::new(20.0).validate().is_err());
    assert!(DonutChartConfig::new(200.0).with_inner_radius(90.0).validate().is_err());
    assert!(DonutChartConfig::new(200.0).with_inner_radius(-1.0).validate().is_err());
    assert!(DonutChartConfig::new(200.0).with_margin(-2.0).validate().is_err());
    assert!(DonutChartConfig::new(200.0).with_duration_ms(-5.0).validate().is_err());
    assert!(DonutChartConfig::new(200.0).with_stagger_ms(f64::INFINITY).validate().is_err());
    assert!(DonutChartConfig::new(200.0).with_coordinate_decimals(12).validate().is_err());
    assert!(DonutChartConfig::new(200.0).with_inner_radius(89.0).validate().is_ok());
}

#[test]
fn bundled_fixture_config_parses_and_validates() {
    let fixture: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/monthly_expenses.json")).expect("fixture");
    let config = DonutChartConfig::from_json_str(&fixture["config"].to_string()).expect("config");
    config.validate().expect("valid config");
    assert_eq!(config.inner_radius_px, 70.0);
    assert_eq!(config.outer_radius(), 110.0);
}
