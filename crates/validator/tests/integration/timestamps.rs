use chrono::{Local, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use strata_validator::prelude::*;

#[test]
fn http_date() {
    let out = convert_to_timestamp(&Value::from("Sun, 06 Nov 1994 08:49:37 GMT"), None);
    let expected = NaiveDate::from_ymd_opt(1994, 11, 6)
        .and_then(|d| d.and_hms_opt(8, 49, 37))
        .unwrap();
    assert_eq!(out, Value::DateTime(expected));
}

#[test]
fn now_as_float_is_local_now() {
    let now = Utc::now();
    let seconds = now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6;
    let out = convert_to_timestamp(&Value::Float(seconds), None);
    let local = Local.timestamp_opt(now.timestamp(), 0).unwrap().naive_local();
    let delta = out.as_datetime().unwrap() - local;
    assert!(delta.num_milliseconds().abs() < 1000, "delta was {delta}");
}

#[test]
fn exactly_three_known_formats() {
    assert_eq!(TimeFormat::ALL.len(), 3);
    assert!(TimeFormat::iter().all(|f| !f.pattern().is_empty()));
}

#[rstest]
#[case(Value::Bool(true))]
#[case(Value::strings(["2024/01/02 03:04:05"]))]
#[case(Value::from("not a date"))]
fn unsupported_inputs_come_back(#[case] value: Value) {
    assert_eq!(convert_to_timestamp(&value, None), value);
}

#[test]
fn strict_parser_in_registry() {
    let mut registry = ConverterRegistry::default();
    let parser = TimestampParser::with_formats(["%Y-%m-%d %H:%M", "%Y-%d-%m %H:%M"]).strict();
    registry.register(ValueKind::DateTime, TimestampConverter::new(parser));

    let c = Coercion::expect(ValueKind::DateTime).default("conflict");
    assert_eq!(
        c.apply_with(Value::from("2024-01-02 10:00"), &registry),
        Value::from("conflict")
    );
    assert_eq!(
        c.apply_with(Value::from("2024-01-01 10:00"), &registry).kind(),
        ValueKind::DateTime
    );
}

#[test]
fn http_date_with_wrong_weekday_still_parses() {
    let out = convert_to_timestamp(&Value::from("Mon, 06 Nov 1994 08:49:37 GMT"), None);
    let expected = NaiveDate::from_ymd_opt(1994, 11, 6)
        .and_then(|d| d.and_hms_opt(8, 49, 37))
        .unwrap();
    assert_eq!(out, Value::DateTime(expected));
}

#[test]
fn explicit_format_keeps_the_hour() {
    let out = convert_to_timestamp(&Value::from("2024-03-05 08"), Some("%Y-%m-%d %H"));
    assert_eq!(
        out.as_datetime().map(|dt| dt.to_string()).as_deref(),
        Some("2024-03-05 08:00:00")
    );
}
