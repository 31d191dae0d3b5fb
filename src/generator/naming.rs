//! Name derivation and literal rendering for emitted code.

/// Converts a snake_case method name to CamelCase for envelope type names.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Envelope type name for one (owner, method) pair, e.g.
/// `RespMyApiCreateOrder`.
pub fn envelope_name(owner: &str, method: &str) -> String {
    format!("Resp{}{}", owner, to_camel_case(method))
}

/// Renders a Rust string literal, quotes included.
///
/// Everything interpolated into emitted code from annotation text (routes,
/// aliases, defaults, enum members, messages) goes through here so a stray
/// quote or backslash cannot break the output.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("create_order"), "CreateOrder");
        assert_eq!(to_camel_case("profile"), "Profile");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_envelope_name() {
        assert_eq!(envelope_name("MyApi", "profile"), "RespMyApiProfile");
        assert_eq!(envelope_name("OtherApi", "create_user"), "RespOtherApiCreateUser");
    }

    #[test]
    fn test_quote_str_plain() {
        assert_eq!(quote_str("user"), "\"user\"");
    }

    #[test]
    fn test_quote_str_escapes() {
        assert_eq!(quote_str("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote_str("line\nbreak"), "\"line\\nbreak\"");
    }
}
