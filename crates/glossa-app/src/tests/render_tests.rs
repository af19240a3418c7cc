use glossa_core::LookupResult;

use crate::render::{OutputFormat, render_lookup, render_suggestions, render_text};

#[test]
fn test_render_found() {
    let result = LookupResult::Found {
        definition: "a small domesticated feline".to_string(),
    };
    assert_eq!(render_text(&result), "a small domesticated feline");
}

#[test]
fn test_render_suggested() {
    let result = LookupResult::Suggested {
        word: "cat".to_string(),
        definition: "a small domesticated feline".to_string(),
    };
    assert_eq!(
        render_text(&result),
        "Word not found. Did you mean 'cat'? Definition: a small domesticated feline"
    );
}

#[test]
fn test_render_not_found() {
    assert_eq!(render_text(&LookupResult::NotFound), "Word not found.");
}

#[test]
fn test_render_lookup_json() {
    let result = LookupResult::Found {
        definition: "feline".to_string(),
    };
    let line = render_lookup("Cat", &result, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "query": "Cat", "kind": "found", "definition": "feline" })
    );
}

#[test]
fn test_render_suggestions_text() {
    let suggestions = vec![("horse".to_string(), 0.888_888), ("house".to_string(), 0.666_666)];
    assert_eq!(
        render_suggestions("hors", &suggestions, OutputFormat::Text).unwrap(),
        "Suggestions for 'hors':\n  horse (0.889)\n  house (0.667)"
    );
    assert_eq!(
        render_suggestions("zzz", &[], OutputFormat::Text).unwrap(),
        "No suggestions for 'zzz'."
    );
}

#[test]
fn test_render_suggestions_json() {
    let suggestions = vec![("cat".to_string(), 0.75)];
    let line = render_suggestions("kat", &suggestions, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "query": "kat", "suggestions": [{ "word": "cat", "ratio": 0.75 }] })
    );
}
