use ordjson::{parse, serialize, Value};

/// Assert that serialize → parse reproduces the tree exactly. Only sound for
/// trees where the text form is unambiguous (no doubles whose fraction
/// vanishes, in particular).
fn assert_roundtrip(v: &Value) {
    let text = serialize(v);
    let back = parse(&text)
        .unwrap_or_else(|e| panic!("reparse failed:\n  tree: {v:?}\n  text: {text}\n  error: {e}"));
    assert_eq!(
        &back, v,
        "roundtrip mismatch:\n  tree: {v:?}\n  text: {text}\n  back: {back:?}"
    );
}

// ============================================================================
// Null / Bool / Int Trees (Exact Roundtrip Guaranteed)
// ============================================================================

#[test]
fn roundtrip_null() {
    assert_roundtrip(&Value::Null);
}

#[test]
fn roundtrip_bools() {
    assert_roundtrip(&Value::Bool(true));
    assert_roundtrip(&Value::Bool(false));
}

#[test]
fn roundtrip_ints() {
    for i in [0, 1, -1, 42, -7, i64::MAX, i64::MIN] {
        assert_roundtrip(&Value::Int(i));
    }
}

#[test]
fn roundtrip_int_array() {
    assert_roundtrip(&Value::Array(vec![
        Value::Int(1),
        Value::Int(-2),
        Value::Int(3),
    ]));
}

#[test]
fn roundtrip_empty_containers() {
    assert_roundtrip(&Value::Array(vec![]));
    assert_roundtrip(&Value::Object(std::collections::BTreeMap::new()));
}

#[test]
fn roundtrip_nested_scalar_tree() {
    let v: Value = [
        ("flags", Value::Array(vec![Value::Bool(true), Value::Null])),
        ("count", Value::Int(12)),
        (
            "inner",
            [("deep", Value::Array(vec![Value::Int(-1)]))]
                .into_iter()
                .collect(),
        ),
    ]
    .into_iter()
    .collect();
    assert_roundtrip(&v);
}

// ============================================================================
// Kinds Outside the Guaranteed Subset (Fixed Expected Strings)
// ============================================================================

#[test]
fn double_reparses_but_may_change_kind() {
    // 2.0 serializes without a fraction, so it comes back as an int.
    let text = serialize(&Value::Double(2.0));
    assert_eq!(text, "2");
    assert_eq!(parse(&text).unwrap(), Value::Int(2));

    // A fractional double keeps its kind.
    assert_roundtrip(&Value::Double(3.5));
}

#[test]
fn string_roundtrip_through_escapes() {
    assert_roundtrip(&Value::from("say \"hi\"\n\tpath\\done"));
}

#[test]
fn object_reserializes_in_key_order() {
    let reparsed = parse(r#"{"b":2,"a":1}"#).unwrap();
    assert_eq!(serialize(&reparsed), r#"{"a": 1, "b": 2}"#);
}

#[test]
fn serialized_form_is_stable_across_roundtrips() {
    let text = r#"{"a": [1, 2, {"b": null}], "c": true}"#;
    let once = serialize(&parse(text).unwrap());
    assert_eq!(once, text);
    let twice = serialize(&parse(&once).unwrap());
    assert_eq!(twice, once);
}

// ============================================================================
// Interop With serde_json
// ============================================================================

#[test]
fn value_converts_to_serde_json_and_back() {
    let v: Value = [
        ("n", Value::Null),
        ("i", Value::Int(-4)),
        ("d", Value::Double(0.5)),
        ("s", Value::from("text")),
        ("a", Value::Array(vec![Value::Bool(true)])),
    ]
    .into_iter()
    .collect();

    let through = Value::from(serde_json::Value::from(v.clone()));
    assert_eq!(through, v);
}

#[test]
fn non_finite_double_converts_to_serde_json_null() {
    assert_eq!(
        serde_json::Value::from(Value::Double(f64::NAN)),
        serde_json::Value::Null
    );
}

#[test]
fn serde_json_object_order_normalizes_to_lexicographic() {
    let reference: serde_json::Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
    let v = Value::from(reference);
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "z"]);
}
