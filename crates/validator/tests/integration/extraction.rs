use pretty_assertions::assert_eq;
use strata_validator::prelude::*;

fn source() -> Value {
    [
        ("first", Value::from("")),
        ("second", Value::strings(["blah"])),
        ("tags", Value::from("a;b")),
        (
            "nested",
            [("when", Value::from("Sun, 06 Nov 1994 08:49:37 GMT"))]
                .into_iter()
                .collect(),
        ),
    ]
    .into_iter()
    .collect()
}

#[test]
fn list_of_lists() {
    let source = Value::List(vec![Value::from(""), Value::strings(["blah"])]);
    assert_eq!(extract_path(&source, &path![1, 0], None), Ok(Value::from("blah")));
}

#[test]
fn key_then_index() {
    assert_eq!(
        extract_path(&source(), &path!["second", 0], None),
        Ok(Value::from("blah"))
    );
}

#[test]
fn coercion_as_post_processor() {
    let tags = Coercion::expect(ValueKind::List).separator(";");
    assert_eq!(
        extract_path(&source(), &path!["tags"], Some(&tags)),
        Ok(Value::strings(["a", "b"]))
    );
}

#[test]
fn nested_timestamp() {
    let when = Coercion::expect(ValueKind::DateTime);
    let out = extract_path(&source(), &path!["nested", "when"], Some(&when)).unwrap();
    assert_eq!(out.kind(), ValueKind::DateTime);
}

#[test]
fn post_processor_default_applies_to_wrong_shape() {
    let as_string = Coercion::expect(ValueKind::String).default("missing");
    assert_eq!(
        extract_path(&source(), &path!["second"], Some(&as_string)),
        Ok(Value::from("missing"))
    );
}

#[test]
fn missing_key_is_reported() {
    let err = extract_path(&source(), &path!["nested", "nope"], None).unwrap_err();
    assert_eq!(
        err,
        PathError::MissingKey {
            key: "nope".into(),
            depth: 1
        }
    );
}

#[test]
fn negative_index_counts_from_end() {
    let source = Value::strings(["a", "b", "c"]);
    assert_eq!(extract_path(&source, &path![-1], None), Ok(Value::from("c")));
}

#[test]
fn owned_segments() {
    let keys: Vec<PathSegment> = ["second".to_owned()].into_iter().map(PathSegment::from).collect();
    assert_eq!(
        extract_path(&source(), &keys, None),
        Ok(Value::strings(["blah"]))
    );
}
