// Built-in parsers and the schemas built on them

use super::error::SchemaError;
use super::shared::Schema;
use super::view::View;

// Canonical boolean tokens; anything else (including "yes"/"no") is rejected
const TRUE_TOKENS: [&str; 6] = ["1", "t", "T", "true", "TRUE", "True"];
const FALSE_TOKENS: [&str; 6] = ["0", "f", "F", "false", "FALSE", "False"];

/// Strict base-10 integer: no whitespace, decimals or overflow
pub fn parse_int(raw: &str) -> Result<i64, SchemaError> {
    raw.parse::<i64>()
        .map_err(|e| SchemaError::parse(raw, "integer", e.to_string()))
}

pub fn parse_bool(raw: &str) -> Result<bool, SchemaError> {
    if TRUE_TOKENS.contains(&raw) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&raw) {
        Ok(false)
    } else {
        Err(SchemaError::parse(
            raw,
            "boolean",
            "expected one of 1, t, T, true, TRUE, True, 0, f, F, false, FALSE, False",
        ))
    }
}

/// Split on `delimiter` without trimming elements. Empty input is an empty
/// list; an empty delimiter splits into single characters.
pub fn parse_list(raw: &str, delimiter: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return raw.chars().map(String::from).collect();
    }
    raw.split(delimiter).map(str::to_string).collect()
}

/// Identity schema; every input, the empty string included, is accepted
pub fn string() -> View<String> {
    Schema::new(|raw: &str| Ok(raw.to_string()))
}

pub fn int() -> View<i64> {
    Schema::new(parse_int)
}

pub fn boolean() -> View<bool> {
    Schema::new(parse_bool)
}

pub fn list(delimiter: impl Into<String>) -> View<Vec<String>> {
    let delimiter = delimiter.into();
    Schema::new(move |raw: &str| Ok(parse_list(raw, &delimiter)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_strict() {
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("-7").unwrap(), -7);
        assert!(parse_int("").is_err());
        assert!(parse_int("   ").is_err());
        assert!(parse_int(" 1").is_err());
        assert!(parse_int("1.5").is_err());
        assert!(parse_int("abc").is_err());
        assert!(parse_int("9223372036854775808").is_err());
    }

    #[test]
    fn test_parse_bool_tokens() {
        for token in TRUE_TOKENS {
            assert!(parse_bool(token).unwrap(), "{token}");
        }
        for token in FALSE_TOKENS {
            assert!(!parse_bool(token).unwrap(), "{token}");
        }
        for token in ["yes", "no", "tRuE", "", " true", "2"] {
            assert!(parse_bool(token).is_err(), "{token}");
        }
    }

    #[test]
    fn test_parse_list() {
        assert!(parse_list("", ";").is_empty());
        assert_eq!(parse_list(";", ";"), vec!["", ""]);
        assert_eq!(parse_list("a; b;c", ";"), vec!["a", " b", "c"]);
        assert_eq!(parse_list("a::b", "::"), vec!["a", "b"]);
        assert_eq!(parse_list("ab", ""), vec!["a", "b"]);
    }

    #[test]
    fn test_string_accepts_empty() {
        assert_eq!(string().parse("").unwrap(), "");
        assert_eq!(string().parse("  padded ").unwrap(), "  padded ");
    }
}
