//! Raw query string → [`QueryArgs`].

use percent_encoding::percent_decode_str;

use crate::query::value::{QueryArgs, QueryValue};

/// Parse a raw query string, with or without the leading `?`.
///
/// Each parameter is split on its first `=` only, so `a=A=B` yields
/// `"A=B"`. Trailing whitespace is trimmed from every decoded value,
/// leading and inner spaces are kept.
pub fn parse_query(raw: &str) -> QueryArgs {
    let mut args = QueryArgs::new();

    let query = raw.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    for parameter in query.split('&') {
        let (key, value) = match parameter.split_once('=') {
            Some((key, rest)) => (key, QueryValue::Text(decode(rest))),
            None => (parameter, QueryValue::Flag),
        };
        if key.is_empty() {
            continue;
        }
        args.append(key, value);
    }

    args
}

fn decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> QueryValue {
        QueryValue::Text(s.to_string())
    }

    #[test]
    fn test_empty_queries() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
        assert!(parse_query("  ").is_empty());
    }

    #[test]
    fn test_flag_without_equals() {
        let args = parse_query("?a");
        assert_eq!(args.get("a"), Some(&QueryValue::Flag));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_leading_question_mark_is_optional() {
        assert_eq!(parse_query("a=1"), parse_query("?a=1"));
    }

    #[test]
    fn test_value_keeps_extra_equals() {
        assert_eq!(parse_query("?a=A=B").get("a"), Some(&text("A=B")));
        assert_eq!(parse_query("?token=abc==").get("token"), Some(&text("abc==")));
    }

    #[test]
    fn test_repeated_keys_accumulate_in_order() {
        let args = parse_query("?a=A&a=B&a=C");
        assert_eq!(
            args.get("a"),
            Some(&QueryValue::List(vec![text("A"), text("B"), text("C")]))
        );
    }

    #[test]
    fn test_flags_and_text_mix_in_lists() {
        let args = parse_query("?a&a=B");
        assert_eq!(
            args.get("a"),
            Some(&QueryValue::List(vec![QueryValue::Flag, text("B")]))
        );
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(parse_query("?a=A%20B").get("a"), Some(&text("A B")));
        assert_eq!(parse_query("?q=%C3%A9t%C3%A9").get("q"), Some(&text("été")));
        // '+' is not a space here
        assert_eq!(parse_query("?a=A+B").get("a"), Some(&text("A+B")));
    }

    #[test]
    fn test_keys_are_not_decoded() {
        let args = parse_query("?a%20b=1");
        assert!(args.contains_key("a%20b"));
        assert!(!args.contains_key("a b"));
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(parse_query("?a=A ").get("a"), Some(&text("A")));
        assert_eq!(parse_query("?a= A").get("a"), Some(&text(" A")));
        assert_eq!(parse_query("?a=x%20y%20z").get("a"), Some(&text("x y z")));
    }

    #[test]
    fn test_trailing_whitespace_trimmed_per_value() {
        let args = parse_query("?a=A &b=B");
        assert_eq!(args.get("a"), Some(&text("A")));
        assert_eq!(args.get("b"), Some(&text("B")));

        assert_eq!(parse_query("?a=A%20").get("a"), Some(&text("A")));
        assert_eq!(parse_query("?a=%20A%20%09").get("a"), Some(&text(" A")));
        assert_eq!(
            parse_query("?a=x%20&a=%20y").get("a"),
            Some(&QueryValue::List(vec![text("x"), text(" y")]))
        );
    }

    #[test]
    fn test_empty_parameters_and_keys_are_skipped() {
        let args = parse_query("?a=1&&b&=orphan&");
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("a"), Some(&text("1")));
        assert_eq!(args.get("b"), Some(&QueryValue::Flag));
    }

    #[test]
    fn test_empty_value_is_text_not_flag() {
        assert_eq!(parse_query("?a=").get("a"), Some(&text("")));
    }
}
