//! Per-field percent escaping.
//!
//! Escaping matches JavaScript's `encodeURIComponent` so that paths written by
//! the web UI and by this crate are byte-for-byte identical. It is applied to
//! each field or segment on its own, never to the composed path, otherwise the
//! structural delimiters would be escaped too.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::path::EXPLODE_MARKER;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escapes a single field or segment.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Escapes an ops query.
///
/// A leading `!` would read back as the explode marker, so it is written as
/// `%21`. Every other character is escaped as by `encode_component`.
pub fn encode_query(ops_query: &str) -> String {
    match ops_query.strip_prefix(EXPLODE_MARKER) {
        Some(rest) => format!("%21{}", encode_component(rest)),
        None => encode_component(ops_query),
    }
}

/// Unescapes a single field or segment.
///
/// Escapes that do not form valid UTF-8 leave the segment untouched rather
/// than failing, so hand-edited URLs still open.
pub fn decode_component(value: &str) -> String {
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            debug!(segment = value, error = %err, "keeping malformed escape verbatim");
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(encode_component("a+b"), "a%2Bb");
        assert_eq!(encode_component("a b/c@d"), "a%20b%2Fc%40d");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_leading_bang_in_query_is_escaped() {
        assert_eq!(encode_query("!foo"), "%21foo");
        assert_eq!(encode_query("foo!"), "foo!");
    }

    #[test]
    fn test_decode_reverses_encode() {
        assert_eq!(decode_component("some%20query"), "some query");
        assert_eq!(decode_component("%C3%A9"), "é");
        assert_eq!(decode_component("%21foo"), "!foo");
    }

    #[test]
    fn test_plus_is_not_a_space() {
        assert_eq!(decode_component("a+b"), "a+b");
    }

    #[test]
    fn test_malformed_escapes_do_not_fail() {
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%E0%A4%A"), "%E0%A4%A");
        assert_eq!(decode_component("%FF"), "%FF");
    }
}
