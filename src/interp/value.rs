use serde_json::{Number, Value};

/// Cast a bare `update` value token. The same rule serves both grammars:
/// a token wrapped in matching quotes is a string with the quotes stripped
/// and no further escape processing; an unquoted token containing `.` is
/// attempted as a float, anything else as an integer; a token that fails
/// every parse stays a raw string.
pub fn cast_token(token: &str) -> Value {
    let token = token.trim();
    if let Some(inner) = strip_quotes(token) {
        return Value::String(inner.to_string());
    }
    if token.contains('.') {
        if let Ok(f) = token.parse::<f64>() {
            // from_f64 rejects non-finite values, which fall through as text
            if let Some(n) = Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    } else if let Ok(i) = token.parse::<i64>() {
        return Value::Number(i.into());
    }
    Value::String(token.to_string())
}

fn strip_quotes(token: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return Some(&token[1..token.len() - 1]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quoted_tokens_become_strings() {
        assert_eq!(cast_token("\"hello world\""), json!("hello world"));
        assert_eq!(cast_token("'a@b.com'"), json!("a@b.com"));
        assert_eq!(cast_token("\"42\""), json!("42"));
        assert_eq!(cast_token("''"), json!(""));
    }

    #[test]
    fn dotted_tokens_parse_as_floats() {
        assert_eq!(cast_token("3.14"), json!(3.14));
        assert_eq!(cast_token("-0.5"), json!(-0.5));
        assert_eq!(cast_token("12."), json!(12.0));
    }

    #[test]
    fn plain_tokens_parse_as_integers() {
        assert_eq!(cast_token("42"), json!(42));
        assert_eq!(cast_token("-7"), json!(-7));
    }

    #[test]
    fn unparseable_tokens_stay_strings() {
        assert_eq!(cast_token("hello"), json!("hello"));
        assert_eq!(cast_token("1e5"), json!("1e5"));
        assert_eq!(cast_token("1.2.3"), json!("1.2.3"));
        assert_eq!(cast_token("\"unterminated"), json!("\"unterminated"));
    }

    #[test]
    fn mismatched_quotes_are_not_stripped() {
        assert_eq!(cast_token("\"mixed'"), json!("\"mixed'"));
    }
}
