use chart_tooltip::api::{FieldOption, TooltipOptions, get_tooltip_data};
use chart_tooltip::core::{FieldRecord, FieldValue, MarkItem, MarkType};
use chart_tooltip::format::{FormatType, auto_format, custom_format, format_field_value};
use chrono::TimeZone;

fn march_first() -> FieldValue {
    FieldValue::Date(
        chrono::Utc
            .with_ymd_and_hms(2016, 3, 1, 14, 5, 9)
            .single()
            .expect("valid date"),
    )
}

#[test]
fn auto_format_numbers_group_thousands() {
    assert_eq!(auto_format(&FieldValue::from(1234)), "1,234");
    assert_eq!(auto_format(&FieldValue::from(-1234567)), "-1,234,567");
    assert_eq!(auto_format(&FieldValue::from(1234.567)), "1,234.57");
    assert_eq!(auto_format(&FieldValue::from(0.5)), "0.50");
    assert_eq!(auto_format(&FieldValue::from(f64::NAN)), "NaN");
}

#[test]
fn auto_format_other_values() {
    assert_eq!(auto_format(&march_first()), "March 01, 2016");
    assert_eq!(auto_format(&FieldValue::from("text")), "text");
    assert_eq!(auto_format(&FieldValue::from(true)), "true");
    assert_eq!(auto_format(&FieldValue::Null), "null");

    let mut map = FieldRecord::new();
    map.insert("k".to_owned(), FieldValue::from(1));
    assert_eq!(auto_format(&FieldValue::Map(map)), r#"{"k":1.0}"#);
}

#[test]
fn custom_format_requires_both_hints() {
    let value = FieldValue::from(3.14159);
    assert_eq!(custom_format(&value, Some(FormatType::Number), None), None);
    assert_eq!(custom_format(&value, None, Some(".2f")), None);
    assert_eq!(
        custom_format(&value, Some(FormatType::Number), Some(".2f")),
        Some("3.14".to_owned())
    );
}

#[test]
fn number_hint_parses_numeric_strings_and_declines_others() {
    assert_eq!(
        custom_format(&FieldValue::from("0.256"), Some(FormatType::Number), Some(".0%")),
        Some("26%".to_owned())
    );
    assert_eq!(
        custom_format(&FieldValue::from("abc"), Some(FormatType::Number), Some(".0%")),
        None
    );
    assert_eq!(
        custom_format(&march_first(), Some(FormatType::Number), Some("d")),
        None
    );
}

#[test]
fn time_hint_formats_dates_in_utc() {
    assert_eq!(
        custom_format(&march_first(), Some(FormatType::Time), Some("%Y-%m-%d %H:%M")),
        Some("2016-03-01 14:05".to_owned())
    );
    assert_eq!(
        custom_format(&FieldValue::from(5), Some(FormatType::Time), Some("%Y")),
        None
    );
}

#[test]
fn string_hint_uses_display_string() {
    assert_eq!(
        custom_format(&FieldValue::from(7), Some(FormatType::String), Some("")),
        Some("7".to_owned())
    );
}

#[test]
fn invalid_or_empty_custom_results_fall_back_to_auto_format() {
    let value = FieldValue::from(1234.5);
    assert_eq!(
        format_field_value(&value, Some(FormatType::Number), Some("$,.2f")),
        "1,234.50"
    );
    assert_eq!(
        format_field_value(&march_first(), Some(FormatType::Time), Some("%Q")),
        "March 01, 2016"
    );
    assert_eq!(
        format_field_value(&FieldValue::from(""), Some(FormatType::String), Some("s")),
        ""
    );
}

#[test]
fn unrenderable_time_directive_falls_back_to_auto_format() {
    assert_eq!(
        custom_format(&march_first(), Some(FormatType::Time), Some("%#z")),
        None
    );
    assert_eq!(
        format_field_value(&march_first(), Some(FormatType::Time), Some("%#z")),
        "March 01, 2016"
    );

    let item = MarkItem::new(MarkType::Symbol, FieldRecord::new()).with_field("d", march_first());
    let options = TooltipOptions::new()
        .with_fields(vec![FieldOption::new("d").with_format(FormatType::Time, "%#z")]);
    let rows = get_tooltip_data(&item, &options).expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, "March 01, 2016");
}

#[test]
fn numbers_outside_decimal_range_use_exponent_form() {
    assert_eq!(auto_format(&FieldValue::from(1e21)), "1e+21");
    assert_eq!(auto_format(&FieldValue::from(-3e25)), "-3e+25");
    assert_eq!(
        auto_format(&FieldValue::from(999_999_999_999.0)),
        "999,999,999,999"
    );
}
