use super::Kind;
use std::collections::BTreeMap;

/// Dictionaries are only inferred up to this many tokens; anything
/// longer reads better as a list.
const DICT_MAX_TOKENS: usize = 20;

/// Strip one matching pair of outer braces, if present.
fn strip_braces(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('{') && value.ends_with('}') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Heuristically classify a textual value.
///
/// Precedence: empty, numeric, dictionary, list, string. The numeric
/// check is a strict full-string parse, so `"42abc"` and values with
/// surrounding whitespace stay strings. Dictionary wins over list for
/// even token counts between 2 and 20; later duplicate keys overwrite
/// earlier ones. A brace-wrapped single token is a plain string.
pub fn classify(value: &str) -> Kind {
    if value.is_empty() {
        return Kind::Empty;
    }

    if let Ok(f) = value.parse::<f64>() {
        if value.contains('.') {
            return Kind::Float(f);
        }
        if let Ok(i) = value.parse::<i64>() {
            return Kind::Integer(i);
        }
        // f64-parseable without a decimal point: exponent forms, inf, nan
        return Kind::Float(f);
    }

    let tokens: Vec<&str> = strip_braces(value).split_whitespace().collect();

    if tokens.len() >= 2 && tokens.len() <= DICT_MAX_TOKENS && tokens.len() % 2 == 0 {
        let mut pairs = BTreeMap::new();
        for pair in tokens.chunks(2) {
            pairs.insert(pair[0].to_string(), pair[1].to_string());
        }
        return Kind::Dict(pairs);
    }

    if tokens.len() > 1 {
        return Kind::List(tokens.iter().map(|t| t.to_string()).collect());
    }

    Kind::Str(value.to_string())
}
