// Public API behaviour of `parse`

use rdjson::{parse, Map, Parser, Value};

fn object(members: Vec<(&str, Value)>) -> Value {
    let map: Map = members
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    Value::Object(map)
}

#[test]
fn test_primitives() {
    assert_eq!(parse("null"), Ok(Value::Null));
    assert_eq!(parse("true"), Ok(Value::Boolean(true)));
    assert_eq!(parse("false"), Ok(Value::Boolean(false)));
}

#[test]
fn test_integers_are_classified_as_integer() {
    for (input, expected) in [("42", 42), ("-17", -17), ("0", 0), ("-0", 0)] {
        let value = parse(input).unwrap();
        assert!(value.is_integer(), "{input} should be an integer");
        assert_eq!(value, Value::Integer(expected));
    }
}

#[test]
fn test_fraction_or_exponent_is_classified_as_float() {
    for (input, expected) in [
        ("2.75", 2.75),
        ("1e10", 1e10),
        ("-2.5E-3", -2.5e-3),
        ("4.0", 4.0),
        ("7E2", 700.0),
    ] {
        let value = parse(input).unwrap();
        assert!(value.is_float(), "{input} should be a float");
        assert_eq!(value, Value::Float(expected));
    }
}

#[test]
fn test_string_escape() {
    let value = parse(r#""hello\nworld""#).unwrap();
    assert_eq!(value, Value::String("hello\nworld".to_string()));
}

#[test]
fn test_non_ascii_strings() {
    assert_eq!(
        parse(r#""olá_こんにちは_привіт 💩""#),
        Ok(Value::String("olá_こんにちは_привіт 💩".to_string()))
    );
}

#[test]
fn test_empty_containers() {
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("{}"), Ok(Value::Object(Map::new())));
}

#[test]
fn test_nested_structure_preserves_order_and_type() {
    let value = parse(r#"{"arr":[1,{"nested":true}]}"#).unwrap();
    let expected = object(vec![(
        "arr",
        Value::Array(vec![
            Value::Integer(1),
            object(vec![("nested", Value::Boolean(true))]),
        ]),
    )]);
    assert_eq!(value, expected);
}

#[test]
fn test_whitespace_insensitivity() {
    assert_eq!(
        parse(r#"  { "key" : "value" }  "#),
        parse(r#"{"key":"value"}"#)
    );
    assert_eq!(
        parse("\n\t[ 1 ,\r\n 2 ]\n"),
        Ok(Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
    );
}

#[test]
fn test_duplicate_keys_last_wins() {
    let value = parse(r#"{"a":1,"a":2}"#).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(value.get("a"), Some(&Value::Integer(2)));
}

#[test]
fn test_object_key_order_is_source_order() {
    let value = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_parsing_is_deterministic() {
    let input = r#"{"name": "rdjson", "tags": ["a", "b"], "score": 0.5, "n": -3}"#;
    assert_eq!(parse(input), parse(input));
    assert_eq!(parse(input), Parser::new(input).parse());
    assert_eq!(parse(input), input.parse::<Value>());
}

#[test]
fn test_scalar_roots() {
    assert_eq!(parse(r#""just a string""#), Ok(Value::String("just a string".into())));
    assert_eq!(parse(" 12 "), Ok(Value::Integer(12)));
}

#[test]
fn test_integer_limits() {
    assert_eq!(parse("9223372036854775807"), Ok(Value::Integer(i64::MAX)));
    assert_eq!(parse("-9223372036854775808"), Ok(Value::Integer(i64::MIN)));
}

#[test]
fn test_accessors_on_parsed_document() {
    let value = parse(r#"{"name": "x", "count": 3, "ratio": 0.25, "ok": false, "none": null}"#)
        .unwrap();
    assert_eq!(value.get("name").and_then(Value::as_str), Some("x"));
    assert_eq!(value.get("count").and_then(Value::as_i64), Some(3));
    assert_eq!(value.get("count").and_then(Value::as_f64), Some(3.0));
    assert_eq!(value.get("ratio").and_then(Value::as_f64), Some(0.25));
    assert_eq!(value.get("ok").and_then(Value::as_bool), Some(false));
    assert!(value.get("none").is_some_and(Value::is_null));
    assert_eq!(value.type_name(), "object");
}
