//! Integration tests for element model validation.
//!
//! Each case feeds JSON text through `serde_json` so member order matches the
//! source, then checks the exact error message.

use serde_json::Value;

use element_model::{ValidationErrorKind, validate};

fn parse(source: &str) -> Value {
    serde_json::from_str(source).expect("Invalid JSON in test case")
}

fn error_message(source: &str) -> String {
    let value = parse(source);
    match validate(&value) {
        Ok(_) => panic!("Expected validation of {source} to fail"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_valid_document() {
    let value = parse(
        r#"{
            "html": "html",
            "elem": [
                {"html": "h1", "elem": {"text": "Title"}},
                {
                    "html": "p",
                    "attr": null,
                    "elem": [
                        {"text": "This is some "},
                        {"text": ""},
                        {"html": "span", "attr": {"style": "font-weight: bold;"}, "elem": {"text": "bolded text!"}}
                    ]
                },
                {"html": "hr", "elem": null}
            ]
        }"#,
    );

    let validated = validate(&value).expect("Document should be valid");
    assert!(std::ptr::eq(validated, &value));
}

#[test]
fn test_missing_element_member() {
    assert_eq!(error_message("{}"), "Missing element member {} (type 'object')");
}

#[test]
fn test_multiple_element_members() {
    assert_eq!(
        error_message(r#"{"html": "html", "svg": "svg"}"#),
        r#"Multiple element members html,svg {"html":"html","svg":"svg"} (type 'object')"#
    );
}

#[test]
fn test_unknown_member() {
    assert_eq!(
        error_message(r#"{"html": "html", "unknown": "abc"}"#),
        "Unknown element member 'unknown'"
    );
}

#[test]
fn test_invalid_tags() {
    let cases = [
        (r#"{"html": ""}"#, r#"Invalid html tag "" (type 'string')"#),
        (r#"{"html": 0}"#, "Invalid html tag 0 (type 'number')"),
        (r#"{"svg": ""}"#, r#"Invalid svg tag "" (type 'string')"#),
        (r#"{"svg": 0}"#, "Invalid svg tag 0 (type 'number')"),
        (r#"{"text": 0}"#, "Invalid text tag 0 (type 'number')"),
        (r#"{"html": null}"#, "Invalid html tag null (type 'object')"),
    ];

    for (source, expected) in cases {
        assert_eq!(error_message(source), expected, "for input {source}");
    }
}

#[test]
fn test_numbers_in_messages_drop_integral_fractions() {
    let cases = [
        (r#"{"html": 1.0}"#, "Invalid html tag 1 (type 'number')"),
        (r#"{"html": 1e2}"#, "Invalid html tag 100 (type 'number')"),
        (r#"{"svg": 2.5}"#, "Invalid svg tag 2.5 (type 'number')"),
        (r#"{"a": 2.0}"#, r#"Missing element member {"a":2} (type 'object')"#),
    ];

    for (source, expected) in cases {
        assert_eq!(error_message(source), expected, "for input {source}");
    }
}

#[test]
fn test_invalid_attributes() {
    assert_eq!(
        error_message(r#"{"html": "html", "attr": 0}"#),
        "Invalid attributes 0 (type 'number')"
    );
    assert_eq!(
        error_message(r#"{"html": "html", "attr": ["a"]}"#),
        r#"Invalid attributes ["a"] (type 'object')"#
    );
}

#[test]
fn test_invalid_members_for_text() {
    assert_eq!(
        error_message(r#"{"text": "abc", "attr": null}"#),
        r#"Invalid member "attr" for text element "abc" (type 'string')"#
    );
    assert_eq!(
        error_message(r#"{"text": "abc", "elem": null}"#),
        r#"Invalid member "elem" for text element "abc" (type 'string')"#
    );
}

#[test]
fn test_invalid_child_element() {
    assert_eq!(
        error_message(r#"{"html": "html", "elem": [0]}"#),
        "Invalid element 0 (type 'number')"
    );
    assert_eq!(
        error_message(r#"{"html": "div", "elem": "text"}"#),
        r#"Invalid element "text" (type 'string')"#
    );
}

#[test]
fn test_invalid_callbacks() {
    assert_eq!(
        error_message(r#"{"html": "html", "callback": null}"#),
        "Invalid element callback function null (type 'object')"
    );
    assert_eq!(
        error_message(r#"{"html": "html", "callback": 0}"#),
        "Invalid element callback function 0 (type 'number')"
    );
}

#[test]
fn test_nested_error_is_reported() {
    let value = parse(r#"[[{"html": "div", "elem": [{"text": "ok"}, [{"svg": "g", "x": 1}]]}]]"#);
    let err = validate(&value).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::UnknownMember);
    assert_eq!(err.to_string(), "Unknown element member 'x'");
}
