#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Charset-aware decode/encode behavior.
///
/// The codec decodes percent escapes to bytes and then interprets the
/// bytes in its configured charset; a pair whose bytes are invalid in
/// that charset is skipped, never a parse failure.
use parq::{ParamMap, QueryCodec, QueryError};

#[test]
fn test_default_charset_is_utf8() {
    assert_eq!(QueryCodec::new().charset(), "UTF-8");
    assert_eq!(QueryCodec::default().charset(), "UTF-8");
}

#[test]
fn test_empty_label_keeps_default() {
    let codec = QueryCodec::with_charset("").unwrap();
    assert_eq!(codec.charset(), "UTF-8");
}

#[test]
fn test_unknown_label_is_an_error() {
    assert_eq!(
        QueryCodec::with_charset("utf-99"),
        Err(QueryError::UnknownCharset)
    );
}

#[test]
fn test_label_aliases_resolve() {
    assert_eq!(QueryCodec::with_charset("latin1").unwrap().charset(), "windows-1252");
    assert_eq!(QueryCodec::with_charset("UTF-8").unwrap().charset(), "UTF-8");
}

#[test]
fn test_utf8_round_trip() {
    let codec = QueryCodec::new();
    let mut params = ParamMap::new();
    params.append("name", "최석균");

    let serialized = codec.serialize(&params, false);
    assert_eq!(serialized, "name=%EC%B5%9C%EC%84%9D%EA%B7%A0");
    assert_eq!(codec.parse(&serialized).params, params);
}

#[test]
fn test_windows_1252_round_trip() {
    let codec = QueryCodec::with_charset("windows-1252").unwrap();
    let mut params = ParamMap::new();
    params.append("name", "café");

    let serialized = codec.serialize(&params, false);
    assert_eq!(serialized, "name=caf%E9");
    assert_eq!(codec.parse(&serialized).params, params);
}

#[test]
fn test_charset_mismatch_skips_pair_only() {
    // windows-1252 bytes are not valid UTF-8, so the UTF-8 codec skips
    // the pair and keeps the rest of the fragment
    let parsed = QueryCodec::new().parse("name=caf%E9&page=1");
    assert!(!parsed.params.contains_key("name"));
    assert_eq!(parsed.params.get("page"), Some(&["1".to_owned()][..]));
    assert_eq!(parsed.skipped, vec!["name=caf%E9".to_owned()]);
}

#[test]
fn test_merge_keeps_best_effort_pairs() {
    let codec = QueryCodec::new();
    let target: ParamMap = [("page", "1")].into_iter().collect();
    // the undecodable pair drops out, the valid one still merges
    assert_eq!(
        codec.merge(Some(&target), "bad=%E9&mode=save", false),
        "page=1&mode=save"
    );
}

#[test]
fn test_plus_decodes_to_space() {
    let parsed = QueryCodec::new().parse("q=hello+world&raw=1%2B1");
    assert_eq!(parsed.params.get("q"), Some(&["hello world".to_owned()][..]));
    assert_eq!(parsed.params.get("raw"), Some(&["1+1".to_owned()][..]));
}

#[test]
fn test_malformed_percent_escape_passes_through() {
    let parsed = QueryCodec::new().parse("q=100%&p=%ZZ");
    assert_eq!(parsed.params.get("q"), Some(&["100%".to_owned()][..]));
    assert_eq!(parsed.params.get("p"), Some(&["%ZZ".to_owned()][..]));
}
