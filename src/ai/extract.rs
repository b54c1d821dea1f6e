use anyhow::anyhow;
use serde_json::Value;

/// Locates the first top-level `{...}` span in free-text model output.
///
/// Walks the bytes once, tracking brace depth and string literals (with
/// escapes), so braces inside string values and trailing prose after the
/// object do not confuse the boundary.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, b) in text.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extracts and parses the JSON object a prompted reply is expected to carry.
pub fn parse_model_json(reply: &str) -> anyhow::Result<Value> {
    let span =
        extract_json_object(reply).ok_or_else(|| anyhow!("could not parse AI response"))?;
    serde_json::from_str(span).map_err(|_| anyhow!("could not parse AI response"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let reply = "Sure! Here you go:\n{\"calories\": 250, \"protein\": 12.5}\nHope that helps.";
        let v = parse_model_json(reply).unwrap();
        assert_eq!(v["calories"], 250);
        assert_eq!(v["protein"], 12.5);
    }

    #[test]
    fn handles_nested_objects_and_braces_in_strings() {
        let reply = r#"{"name": "weird {dish}", "nested": {"a": 1}, "note": "b\" } c"}"#;
        let v = parse_model_json(reply).unwrap();
        assert_eq!(v["name"], "weird {dish}");
        assert_eq!(v["nested"]["a"], 1);
    }

    #[test]
    fn takes_the_first_of_multiple_objects() {
        let reply = r#"{"first": true} and also {"second": true}"#;
        let v = parse_model_json(reply).unwrap();
        assert_eq!(v["first"], true);
        assert!(v.get("second").is_none());
    }

    #[test]
    fn fails_without_any_brace() {
        let err = parse_model_json("no json here at all").unwrap_err();
        assert_eq!(err.to_string(), "could not parse AI response");
    }

    #[test]
    fn fails_on_unbalanced_or_malformed_json() {
        assert!(parse_model_json("{\"open\": ").is_err());
        assert!(parse_model_json("{not json}").is_err());
    }
}
