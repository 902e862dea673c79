use chart_tooltip::api::{
    FieldOption, LAYOUT_METADATA_KEYS, combine_bin_fields, drop_fields_for_line_area,
    remove_duplicate_time_fields, remove_fields, strip_layout_metadata,
};
use chart_tooltip::core::{FieldRecord, FieldValue, MarkType};
use chrono::TimeZone;

fn record(entries: &[(&str, FieldValue)]) -> FieldRecord {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

fn keys(record: &FieldRecord) -> Vec<&str> {
    record.keys().map(String::as_str).collect()
}

#[test]
fn strip_layout_metadata_keeps_only_user_fields() {
    let mut data = record(&[
        ("layout_x", FieldValue::from(1)),
        ("value", FieldValue::from(2)),
        ("width", FieldValue::from(3)),
    ]);
    strip_layout_metadata(&mut data);
    assert_eq!(keys(&data), vec!["value"]);
}

#[test]
fn every_layout_key_is_stripped() {
    let mut data: FieldRecord = LAYOUT_METADATA_KEYS
        .iter()
        .map(|key| ((*key).to_owned(), FieldValue::from(1)))
        .collect();
    data.insert("kept".to_owned(), FieldValue::from("yes"));

    strip_layout_metadata(&mut data);
    assert_eq!(keys(&data), vec!["kept"]);
}

#[test]
fn remove_fields_preserves_remaining_order() {
    let mut data = record(&[
        ("a", FieldValue::from(1)),
        ("b", FieldValue::from(2)),
        ("c", FieldValue::from(3)),
        ("d", FieldValue::from(4)),
    ]);
    remove_fields(&mut data, &["b", "not_there"]);
    assert_eq!(keys(&data), vec!["a", "c", "d"]);
}

#[test]
fn duplicate_time_fields_drop_the_raw_source_field() {
    let mut data = record(&[
        ("Year", FieldValue::from(2016)),
        ("YEAR(Year)", FieldValue::from(2016)),
    ]);
    let fields = vec![
        FieldOption::new("YEAR(Year)").with_remove_original_temporal_field("Year"),
        FieldOption::new("other"),
    ];
    remove_duplicate_time_fields(&mut data, &fields);
    assert_eq!(keys(&data), vec!["YEAR(Year)"]);

    remove_duplicate_time_fields(&mut data, &[]);
    assert_eq!(keys(&data), vec!["YEAR(Year)"]);
}

#[test]
fn bin_combination_builds_range_and_drops_mid_and_end() {
    let mut data = record(&[
        ("age", FieldValue::from(10)),
        ("age_mid", FieldValue::from(15)),
        ("age_end", FieldValue::from(20)),
    ]);
    combine_bin_fields(&mut data, &[FieldOption::new("age").with_bin(true)]);

    assert_eq!(data.get("age"), Some(&FieldValue::from("10-20")));
    assert!(!data.contains_key("age_mid"));
    assert!(!data.contains_key("age_end"));
}

#[test]
fn bin_combination_without_end_still_drops_mid() {
    let mut data = record(&[
        ("age", FieldValue::from(10)),
        ("age_mid", FieldValue::from(15)),
        ("other", FieldValue::from("x")),
    ]);
    combine_bin_fields(&mut data, &[FieldOption::new("age").with_bin(true)]);

    assert_eq!(data.get("age"), Some(&FieldValue::from(10)));
    assert_eq!(keys(&data), vec!["age", "other"]);
}

#[test]
fn bin_combination_treats_null_as_defined_and_keeps_field_position() {
    let mut data = record(&[
        ("first", FieldValue::from(1)),
        ("bin_maxbins_10_x", FieldValue::from(0.5)),
        ("bin_maxbins_10_x_end", FieldValue::Null),
    ]);
    combine_bin_fields(
        &mut data,
        &[FieldOption::new("bin_maxbins_10_x").with_bin(true)],
    );

    assert_eq!(keys(&data), vec!["first", "bin_maxbins_10_x"]);
    assert_eq!(
        data.get("bin_maxbins_10_x"),
        Some(&FieldValue::from("0.5-null"))
    );
}

#[test]
fn non_bin_options_leave_record_alone() {
    let mut data = record(&[
        ("age", FieldValue::from(10)),
        ("age_end", FieldValue::from(20)),
    ]);
    combine_bin_fields(&mut data, &[FieldOption::new("age")]);
    assert_eq!(keys(&data), vec!["age", "age_end"]);
}

#[test]
fn line_and_area_marks_drop_date_fields_only() {
    let date = chrono::Utc
        .with_ymd_and_hms(2016, 3, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    for mark_type in [MarkType::Line, MarkType::Area] {
        let mut data = record(&[
            ("date", FieldValue::from(date)),
            ("symbol", FieldValue::from("MSFT")),
            ("price", FieldValue::from(28.5)),
        ]);
        drop_fields_for_line_area(&mark_type, &mut data);
        assert_eq!(keys(&data), vec!["symbol", "price"]);
    }

    let mut data = record(&[("date", FieldValue::from(date))]);
    drop_fields_for_line_area(&MarkType::Symbol, &mut data);
    assert_eq!(keys(&data), vec!["date"]);
}

#[test]
fn bin_range_of_tiny_values_uses_exponent_form() {
    let mut data = record(&[
        ("x", FieldValue::from(1e-7)),
        ("x_end", FieldValue::from(2e-7)),
    ]);
    combine_bin_fields(&mut data, &[FieldOption::new("x").with_bin(true)]);
    assert_eq!(data.get("x"), Some(&FieldValue::from("1e-7-2e-7")));
}
