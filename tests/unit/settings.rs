use super::*;

#[test]
fn defaults_match_phone_grid() {
    let s = LayoutSettings::default();
    assert_eq!(s.grid.column_count, 2);
    assert_eq!(s.grid.horizontal_gap, 8.0);
    assert_eq!(s.cache.capacity, None);
    assert!(s.validate().is_ok());
}

#[test]
fn parses_full_document() {
    let s = LayoutSettings::from_json_str(
        r#"{
            "grid": { "column_count": 3, "horizontal_gap": 4.0, "vertical_gap": 2.0 },
            "cache": { "capacity": 64 }
        }"#,
    )
    .unwrap();
    assert_eq!(s.grid.column_count, 3);
    assert_eq!(s.cache.capacity, Some(64));

    let layout = s.build_layout(320.0).unwrap();
    assert_eq!(layout.config().column_count(), 3);
    assert_eq!(layout.cache().capacity(), NonZeroUsize::new(64));
}

#[test]
fn empty_document_uses_defaults() {
    let s = LayoutSettings::from_json_str("{}").unwrap();
    assert_eq!(s, LayoutSettings::default());
    assert!(s.build_layout(375.0).unwrap().cache().capacity().is_none());
}

#[test]
fn rejects_invalid_values() {
    assert!(matches!(
        LayoutSettings::from_json_str(r#"{ "grid": { "column_count": 0 } }"#),
        Err(GridError::Validation(_))
    ));
    assert!(matches!(
        LayoutSettings::from_json_str(r#"{ "grid": { "vertical_gap": -1.0 } }"#),
        Err(GridError::Validation(_))
    ));
    assert!(matches!(
        LayoutSettings::from_json_str(r#"{ "cache": { "capacity": 0 } }"#),
        Err(GridError::Validation(_))
    ));
}

#[test]
fn rejects_unknown_fields_and_bad_json() {
    assert!(matches!(
        LayoutSettings::from_json_str(r#"{ "zoom": true }"#),
        Err(GridError::Serde(_))
    ));
    assert!(matches!(
        LayoutSettings::from_json_str("{"),
        Err(GridError::Serde(_))
    ));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = LayoutSettings::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, GridError::Other(_)));
    assert!(format!("{err:#}").contains("here.json") || err.to_string().contains("here.json"));
}
