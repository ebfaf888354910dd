use pretty_assertions::assert_eq;
use serde_json::json;
use strata_validator::prelude::*;

#[test]
fn json_documents_can_be_walked() {
    let doc = Value::from(json!({
        "items": [{"id": 1, "labels": "x,y"}, {"id": 2, "labels": "z"}]
    }));
    let labels = Coercion::expect(ValueKind::List);
    assert_eq!(
        extract_path(&doc, &path!["items", 1, "labels"], Some(&labels)),
        Ok(Value::strings(["z"]))
    );
    assert_eq!(extract_path(&doc, &path!["items", 0, "id"], None), Ok(Value::Int(1)));
}

#[test]
fn value_deserializes_from_json_text() {
    let value: Value = serde_json::from_str(r#"{"a": [1, 2.5, null, true]}"#).unwrap();
    let list = extract_path(&value, &path!["a"], None).unwrap();
    assert_eq!(
        list,
        Value::List(vec![Value::Int(1), Value::Float(2.5), Value::Null, Value::Bool(true)])
    );
}
