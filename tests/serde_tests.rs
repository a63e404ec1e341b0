use ini_doc::{from_str, ini, Document, Section};
use serde_json::json;

#[test]
fn test_document_serializes_as_nested_map() {
    let doc = from_str("top=1\n[net]\nhost=localhost\nport=8080\n").unwrap();

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        json!({
            "": { "top": "1" },
            "net": { "host": "localhost", "port": "8080" }
        })
    );
}

#[test]
fn test_document_deserializes_with_section_names() {
    let doc: Document = serde_json::from_str(r#"{"a": {"k": "v"}, "b": {}}"#).unwrap();

    assert_eq!(doc, ini!({ "a": { "k": "v" }, "b": {} }));
    assert_eq!(doc.section("a").unwrap().name(), "a");
    assert_eq!(doc.section("b").unwrap().name(), "b");
}

#[test]
fn test_json_roundtrip() {
    let doc = ini!({
        "": { "a": "a" },
        "foo": { "bar": "b", "baz": "ā" }
    });

    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_section_serializes_values_only() {
    let mut section = Section::new("ignored");
    section.set_value("k", "v");

    assert_eq!(serde_json::to_value(&section).unwrap(), json!({ "k": "v" }));

    let back: Section = serde_json::from_value(json!({ "k": "v" })).unwrap();
    assert_eq!(back.name(), "");
    assert_eq!(back.value("k").unwrap(), "v");
}

#[test]
fn test_non_utf8_value_serializes_as_bytes() {
    let doc = ini_doc::from_slice(b"[s]\nname=Jos\xE9\n").unwrap();

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value, json!({ "s": { "name": [74, 111, 115, 233] } }));
}

#[test]
fn test_non_string_values_are_rejected() {
    let result: Result<Document, _> = serde_json::from_str(r#"{"s": {"port": 8080}}"#);
    assert!(result.is_err());
}
