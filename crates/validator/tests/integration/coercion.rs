use pretty_assertions::assert_eq;
use rstest::rstest;
use strata_validator::prelude::*;

fn strip_more() -> impl Convert {
    from_fn(|v| match v {
        Value::String(s) => Ok(Value::from(s.strip_suffix("_more").unwrap_or(s))),
        other => Err(ConversionError::Unsupported {
            converter: "strip_more",
            found: other.kind(),
        }),
    })
}

#[test]
fn expected_string_passes() {
    let c = Coercion::expect(ValueKind::String).default("");
    assert_eq!(coerce_and_validate(Value::from("blah"), &c), Value::from("blah"));
}

#[test]
fn list_where_string_expected_yields_default() {
    let c = Coercion::expect(ValueKind::String).default("");
    assert_eq!(coerce_and_validate(Value::List(vec![]), &c), Value::from(""));
}

#[test]
fn joined_string_becomes_list() {
    let c = Coercion::expect(ValueKind::List);
    assert_eq!(
        coerce_and_validate(Value::from("a,b,c"), &c),
        Value::strings(["a", "b", "c"])
    );
}

#[test]
fn map_passes_as_map() {
    let map: Value = [("0", "a"), ("1", "b"), ("2", "c")].into_iter().collect();
    let c = Coercion::expect(ValueKind::Map);
    assert_eq!(coerce_and_validate(map.clone(), &c), map);
}

#[rstest]
#[case(Value::Map(Map::new()))]
#[case(Value::Null)]
fn string_where_map_expected_yields_default(#[case] default: Value) {
    let c = Coercion::expect(ValueKind::Map).default(default.clone());
    assert_eq!(coerce_and_validate(Value::from("not a dict"), &c), default);
}

#[test]
fn custom_validator_accepts() {
    let c = Coercion::expect(ValueKind::String).validator(equals("blah"));
    assert_eq!(coerce_and_validate(Value::from("blah"), &c), Value::from("blah"));
}

#[test]
fn custom_validator_rejects() {
    let c = Coercion::expect(ValueKind::String)
        .validator(predicate(Value::is_null))
        .default("");
    assert_eq!(coerce_and_validate(Value::from("blah"), &c), Value::from(""));
}

#[test]
fn custom_converter_then_equality() {
    let c = Coercion::expect(ValueKind::String)
        .converter(strip_more())
        .validator(equals("blah"));
    assert_eq!(coerce_and_validate(Value::from("blah_more"), &c), Value::from("blah"));
}

#[test]
fn failing_converter_keeps_original_for_validation() {
    let c = Coercion::expect(ValueKind::Int).converter(strip_more());
    assert_eq!(coerce_and_validate(Value::Int(3), &c), Value::Int(3));
}

#[test]
fn datetime_expected_parses_strings() {
    let c = Coercion::expect(ValueKind::DateTime);
    let out = coerce_and_validate(Value::from("2024/01/02 03:04:05"), &c);
    assert_eq!(out.kind(), ValueKind::DateTime);
}

#[test]
fn datetime_expected_uses_format_option() {
    let c = Coercion::expect(ValueKind::DateTime).format("%d.%m.%Y");
    let out = coerce_and_validate(Value::from("02.01.2024"), &c);
    assert_eq!(out.as_datetime().map(|dt| dt.to_string()).as_deref(), Some("2024-01-02 00:00:00"));
}

#[test]
fn unparseable_datetime_yields_default() {
    let c = Coercion::expect(ValueKind::DateTime).default("never");
    assert_eq!(coerce_and_validate(Value::from("soon"), &c), Value::from("never"));
}

#[test]
fn options_record_round_trips_through_serde() {
    let options: CoerceOptions = serde_json::from_str(r#"{"separator": ";"}"#).unwrap();
    let c = Coercion::expect(ValueKind::List).options(options);
    assert_eq!(coerce_and_validate(Value::from("x;y"), &c), Value::strings(["x", "y"]));
}

#[test]
fn coercion_is_shareable_across_threads() {
    let c = std::sync::Arc::new(Coercion::expect(ValueKind::List));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = std::sync::Arc::clone(&c);
            std::thread::spawn(move || c.apply(Value::from(format!("{i},x"))))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert_eq!(out, Value::strings([i.to_string(), "x".to_owned()]));
    }
}

#[rstest]
#[case("%Y-%m", "2024-03", "2024-03-01 00:00:00")]
#[case("%H:%M", "08:49", "1900-01-01 08:49:00")]
#[case("%Y", "2024", "2024-01-01 00:00:00")]
fn partial_formats_coerce_to_datetime(
    #[case] format: &str,
    #[case] input: &str,
    #[case] expected: &str,
) {
    let c = Coercion::expect(ValueKind::DateTime).format(format).default("dflt");
    let out = coerce_and_validate(Value::from(input), &c);
    assert_eq!(out.as_datetime().map(|dt| dt.to_string()).as_deref(), Some(expected));
}
