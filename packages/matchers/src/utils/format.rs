// Форматирование значений для сообщений

use serde_json::Value;

const SPACE_SYMBOL: char = '\u{00B7}';

/// Short type name of a candidate value, as shown in `has type:` lines.
pub fn get_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn render(value: &Value, depth: usize, max_depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&escape_string(s)),
        Value::Array(items) => {
            if depth >= max_depth {
                out.push_str("[Array]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render(item, depth + 1, max_depth, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            if depth >= max_depth {
                out.push_str("[Object]");
                return;
            }
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&escape_string(key));
                out.push_str(": ");
                render(item, depth + 1, max_depth, out);
            }
            out.push('}');
        }
    }
}

/// Compact one-line rendering. Output at or above `max_length` characters
/// is retried with half the depth until the depth reaches 1.
pub fn stringify(value: &Value, max_depth: usize, max_length: usize) -> String {
    let mut depth = max_depth;
    loop {
        let mut out = String::new();
        render(value, 0, depth, &mut out);
        if out.chars().count() < max_length || depth <= 1 {
            return out;
        }
        depth /= 2;
    }
}

/// Makes trailing spaces visible, one `·` per space.
pub fn replace_trailing_spaces(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim_end_matches(' ');
            let trailing = line.len() - trimmed.len();
            let mut out = String::with_capacity(line.len() + trailing);
            out.push_str(trimmed);
            out.extend(std::iter::repeat(SPACE_SYMBOL).take(trailing));
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_type() {
        assert_eq!(get_type(&json!(null)), "null");
        assert_eq!(get_type(&json!(true)), "boolean");
        assert_eq!(get_type(&json!(12345)), "number");
        assert_eq!(get_type(&json!("x")), "string");
        assert_eq!(get_type(&json!([1])), "array");
        assert_eq!(get_type(&json!({"a": 1})), "object");
    }

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify(&json!(12345), 10, 10_000), "12345");
        assert_eq!(stringify(&json!(1.5), 10, 10_000), "1.5");
        assert_eq!(stringify(&json!(null), 10, 10_000), "null");
        assert_eq!(stringify(&json!(false), 10, 10_000), "false");
        assert_eq!(stringify(&json!(r#"a"b\c"#), 10, 10_000), r#""a\"b\\c""#);
    }

    #[test]
    fn test_stringify_containers() {
        assert_eq!(stringify(&json!([]), 10, 10_000), "[]");
        assert_eq!(stringify(&json!({}), 10, 10_000), "{}");
        assert_eq!(stringify(&json!([1, "x"]), 10, 10_000), r#"[1, "x"]"#);
        assert_eq!(
            stringify(&json!({"b": 2, "a": [true]}), 10, 10_000),
            r#"{"a": [true], "b": 2}"#
        );
    }

    #[test]
    fn test_stringify_depth_limit() {
        let nested = json!({"a": {"b": [1]}});
        assert_eq!(stringify(&nested, 1, 10_000), r#"{"a": [Object]}"#);
        assert_eq!(stringify(&nested, 2, 10_000), r#"{"a": {"b": [Array]}}"#);
        assert_eq!(stringify(&json!([1]), 0, 10_000), "[Array]");
    }

    #[test]
    fn test_stringify_halves_depth_when_too_long() {
        let nested = json!([[[["deep"]]]]);
        // full render is 14 chars, depth 2 gives 11
        assert_eq!(stringify(&nested, 4, 12), "[[[Array]]]");
        assert_eq!(stringify(&nested, 4, 10), "[[Array]]");
    }

    #[test]
    fn test_stringify_length_counts_chars() {
        // 8 chars, 10 bytes
        let nested = json!([["\u{e9}\u{e9}"]]);
        assert_eq!(stringify(&nested, 4, 9), "[[\"\u{e9}\u{e9}\"]]");
        assert_eq!(stringify(&nested, 4, 8), "[[Array]]");
    }

    #[test]
    fn test_replace_trailing_spaces() {
        assert_eq!(replace_trailing_spaces("\"abc  \""), "\"abc  \"");
        assert_eq!(replace_trailing_spaces("abc  "), "abc\u{b7}\u{b7}");
        assert_eq!(replace_trailing_spaces("a \nb"), "a\u{b7}\nb");
    }
}
