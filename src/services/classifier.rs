// src/services/classifier.rs
//
// Payload Classifier
//
// Pure, total function from raw scanned text to a structural shape.
//
// CRITICAL RULES:
// - No I/O, no side effects, no retries
// - Deterministic: same input, same output
// - Never fails: the chain always terminates in the Text fallback
// - Used only as a display fallback when the registry holds no record;
//   the raw string always goes to the resolver verbatim

use std::collections::BTreeMap;

use serde_json::Value;
use url::Url;

use crate::domain::ClassifiedPayload;

/// Ordered fallback chain: JSON object/array, then URL, then plain text.
/// First parse that succeeds wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayloadClassifier;

impl PayloadClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, raw: &str) -> ClassifiedPayload {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            // Scalars (numbers, bare strings, booleans, null) fall through
            // to the URL and text branches
            match value {
                Value::Object(map) => {
                    let value = map
                        .into_iter()
                        .map(|(key, val)| (key, Self::display_string(val)))
                        .collect::<BTreeMap<String, String>>();
                    return ClassifiedPayload::Json { value };
                }
                Value::Array(items) => {
                    let value = items
                        .into_iter()
                        .enumerate()
                        .map(|(idx, val)| (idx.to_string(), Self::display_string(val)))
                        .collect::<BTreeMap<String, String>>();
                    return ClassifiedPayload::Json { value };
                }
                _ => {}
            }
        }

        if let Ok(parsed) = Url::parse(raw) {
            return ClassifiedPayload::Url {
                href: parsed.as_str().to_string(),
                hostname: parsed.host_str().unwrap_or_default().to_string(),
                pathname: parsed.path().to_string(),
                search: parsed
                    .query()
                    .map(|q| format!("?{}", q))
                    .unwrap_or_default(),
            };
        }

        ClassifiedPayload::Text {
            content: raw.to_string(),
        }
    }

    /// Flatten a JSON value into the display string presentation expects.
    fn display_string(value: Value) -> String {
        match value {
            Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_object_payload() {
        let classifier = PayloadClassifier::new();

        let classified = classifier.classify(r#"{"a":"b"}"#);
        match classified {
            ClassifiedPayload::Json { value } => {
                assert_eq!(value.get("a").map(String::as_str), Some("b"));
                assert_eq!(value.len(), 1);
            }
            other => panic!("expected json variant, got {:?}", other),
        }
    }

    #[test]
    fn test_json_nested_values_flattened_to_strings() {
        let classifier = PayloadClassifier::new();

        let classified = classifier.classify(r#"{"lot":"L-1","qty":42,"ok":true}"#);
        match classified {
            ClassifiedPayload::Json { value } => {
                assert_eq!(value.get("lot").map(String::as_str), Some("L-1"));
                assert_eq!(value.get("qty").map(String::as_str), Some("42"));
                assert_eq!(value.get("ok").map(String::as_str), Some("true"));
            }
            other => panic!("expected json variant, got {:?}", other),
        }
    }

    #[test]
    fn test_url_payload() {
        let classifier = PayloadClassifier::new();

        let classified = classifier.classify("https://x.test/p?q=1");
        assert_eq!(
            classified,
            ClassifiedPayload::Url {
                href: "https://x.test/p?q=1".to_string(),
                hostname: "x.test".to_string(),
                pathname: "/p".to_string(),
                search: "?q=1".to_string(),
            }
        );
    }

    #[test]
    fn test_url_without_query_has_empty_search() {
        let classifier = PayloadClassifier::new();

        let classified = classifier.classify("https://x.test/p");
        match classified {
            ClassifiedPayload::Url { search, .. } => assert_eq!(search, ""),
            other => panic!("expected url variant, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text_fallback() {
        let classifier = PayloadClassifier::new();

        assert_eq!(
            classifier.classify("plain"),
            ClassifiedPayload::Text {
                content: "plain".to_string()
            }
        );
    }

    #[test]
    fn test_json_scalar_falls_through_to_text() {
        let classifier = PayloadClassifier::new();

        // "12345" parses as a JSON number but is scalar, and it is not a URL
        assert_eq!(
            classifier.classify("12345"),
            ClassifiedPayload::Text {
                content: "12345".to_string()
            }
        );
    }

    #[test]
    fn test_always_one_populated_variant() {
        let classifier = PayloadClassifier::new();

        // Hostile inputs must still terminate in exactly one variant
        for raw in ["", "{broken", "[1,2", "://", "\u{0}", "  ", "{\"a\":}"] {
            let classified = classifier.classify(raw);
            let populated = matches!(
                classified,
                ClassifiedPayload::Json { .. }
                    | ClassifiedPayload::Url { .. }
                    | ClassifiedPayload::Text { .. }
            );
            assert!(populated, "no variant for input {:?}", raw);
        }
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let classifier = PayloadClassifier::new();

        for _ in 0..50 {
            assert_eq!(
                classifier.classify(r#"{"a":"b"}"#),
                classifier.classify(r#"{"a":"b"}"#)
            );
        }
    }
}
