use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = EditorConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.history_capacity, 50);
    assert!((cfg.snap_m - 0.25).abs() < f64::EPSILON);
    assert!((cfg.scale_px_per_m - 70.0).abs() < f64::EPSILON);
}

#[test]
fn from_json_empty_object_yields_defaults() {
    let cfg = EditorConfig::from_json("{}").unwrap();
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn from_json_overrides_selected_fields() {
    let cfg = EditorConfig::from_json(r#"{ "snap_m": 0.1, "history_capacity": 5 }"#).unwrap();
    assert!((cfg.snap_m - 0.1).abs() < f64::EPSILON);
    assert_eq!(cfg.history_capacity, 5);
    assert!((cfg.grid_m - 0.5).abs() < f64::EPSILON);
}

#[test]
fn from_json_malformed_is_parse_error() {
    let err = EditorConfig::from_json("{ snap").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_zero_snap() {
    let err = EditorConfig::from_json(r#"{ "snap_m": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("snap_m"));
}

#[test]
fn from_json_rejects_zero_capacity() {
    let err = EditorConfig::from_json(r#"{ "history_capacity": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn from_json_rejects_inverted_room_bounds() {
    let err = EditorConfig::from_json(r#"{ "room_min_m": 10, "room_max_m": 2 }"#).unwrap_err();
    assert!(err.to_string().contains("room_max_m"));
}

#[test]
fn handle_hit_radius_adds_slop() {
    let cfg = EditorConfig::default();
    assert!((cfg.handle_hit_radius_px() - 9.0).abs() < f64::EPSILON);
}
