use chart_tooltip::api::{
    SortOption, TOOLTIP_ROWS_JSON_SCHEMA_V1, TooltipConfig, TooltipOptions, get_tooltip_data,
    rows_to_json_contract_v1_pretty, rows_to_json_pretty,
};
use chart_tooltip::core::{FieldValue, MarkItem, MarkType};
use chart_tooltip::format::FormatType;
use chart_tooltip::TooltipError;

#[test]
fn config_json_maps_to_options() {
    let config = TooltipConfig::from_json_str(
        r#"{
            "showAllFields": false,
            "isComposition": true,
            "sort": "value",
            "fields": [
                {"field": "price", "title": "Price", "formatType": "number", "format": ",.2f"},
                {"field": "bin_x", "bin": true, "render": {"bold": true}},
                {"field": "YEAR(date)", "removeOriginalTemporalField": "date"}
            ]
        }"#,
    )
    .expect("parse config");
    let options = TooltipOptions::try_from(config).expect("valid config");

    assert!(options.is_composition);
    assert!(!options.show_all_fields);
    assert!(matches!(options.sort, Some(SortOption::Value)));
    assert_eq!(options.fields.len(), 3);
    assert_eq!(options.fields[0].format_type, Some(FormatType::Number));
    assert_eq!(options.fields[0].format.as_deref(), Some(",.2f"));
    assert!(options.fields[1].bin);
    assert_eq!(
        options.fields[1].render,
        Some(serde_json::json!({"bold": true}))
    );
    assert_eq!(
        options.fields[2].remove_original_temporal_field.as_deref(),
        Some("date")
    );
}

#[test]
fn unknown_sort_keyword_is_accepted_without_sorting() {
    let options = TooltipConfig::from_json_str(r#"{"sort": "size"}"#)
        .expect("parse config")
        .into_options()
        .expect("valid config");
    assert!(options.sort.is_none());
}

#[test]
fn invalid_configs_are_rejected() {
    let unknown_format = TooltipConfig::from_json_str(
        r#"{"fields": [{"field": "a", "formatType": "currency", "format": "$"}]}"#,
    )
    .expect("parse config")
    .into_options();
    assert!(matches!(unknown_format, Err(TooltipError::InvalidConfig(_))));

    let missing_field = TooltipConfig::from_json_str(r#"{"fields": [{"title": "No field"}]}"#)
        .expect("parse config")
        .into_options();
    assert!(matches!(missing_field, Err(TooltipError::InvalidConfig(_))));

    let malformed = TooltipConfig::from_json_str("{not json");
    assert!(matches!(malformed, Err(TooltipError::Json(_))));
}

#[test]
fn mark_item_json_converts_declared_date_fields() {
    let item = MarkItem::from_json_str(
        r#"{
            "markType": "line",
            "datum": {"date": "2016-03-01T00:00:00Z", "ts": 0, "symbol": "IBM", "nested": {"k": [1, 2]}},
            "dateFields": ["date", "ts", "absent"]
        }"#,
    )
    .expect("parse item");

    assert_eq!(item.mark_type, MarkType::Line);
    assert!(item.datum.get("date").is_some_and(FieldValue::is_date));
    assert!(item.datum.get("ts").is_some_and(FieldValue::is_date));
    assert_eq!(item.datum.get("symbol"), Some(&FieldValue::from("IBM")));

    let keys: Vec<&str> = item.datum.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["date", "ts", "symbol", "nested"]);
}

#[test]
fn mark_item_json_rejects_bad_dates_and_keeps_unknown_mark_types() {
    let bad = MarkItem::from_json_str(
        r#"{"markType": "symbol", "datum": {"d": "yesterday"}, "dateFields": ["d"]}"#,
    );
    assert!(matches!(bad, Err(TooltipError::InvalidConfig(_))));

    let custom = MarkItem::from_json_str(r#"{"markType": "hexbin", "datum": {}}"#)
        .expect("parse item");
    assert_eq!(custom.mark_type, MarkType::Other("hexbin".to_owned()));
    assert_eq!(custom.mark_type.to_string(), "hexbin");
}

#[test]
fn rows_serialize_with_camel_case_and_optional_render() {
    let item = MarkItem::from_json_str(
        r#"{"markType": "rect", "datum": {"a": 1.5, "b": "x"}}"#,
    )
    .expect("parse item");
    let options = TooltipConfig::from_json_str(
        r#"{"fields": [{"field": "a", "render": "bar"}, {"field": "b"}]}"#,
    )
    .expect("parse config")
    .into_options()
    .expect("valid config");
    let rows = get_tooltip_data(&item, &options).expect("rows");

    let json: serde_json::Value =
        serde_json::from_str(&rows_to_json_pretty(&rows).expect("serialize rows"))
            .expect("reparse rows");
    assert_eq!(
        json,
        serde_json::json!([
            {"title": "a", "value": "1.50", "rawValue": 1.5, "render": "bar"},
            {"title": "b", "value": "x", "rawValue": "x"}
        ])
    );

    let contract: serde_json::Value = serde_json::from_str(
        &rows_to_json_contract_v1_pretty(&rows).expect("serialize contract"),
    )
    .expect("reparse contract");
    assert_eq!(
        contract["schemaVersion"],
        serde_json::json!(TOOLTIP_ROWS_JSON_SCHEMA_V1)
    );
    assert_eq!(contract["rows"], json);
}
