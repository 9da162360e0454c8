use encoding_rs::{Encoding, UTF_8};
use percent_encoding::percent_decode_str;

use crate::Result;
use crate::algebra::split_marker;
use crate::error::QueryError;
use crate::map::ParamMap;

/// Query-string codec bound to a decode charset.
///
/// The codec is immutable and all operations are pure functions of their
/// inputs, so a single instance can be shared freely across threads.
/// Construct it once (process start, per-request, wherever) instead of
/// mutating ambient charset state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCodec {
    encoding: &'static Encoding,
}

/// Best-effort parse result.
///
/// `params` holds every pair that parsed cleanly; `skipped` holds the raw
/// tokens that did not (no `=`, or bytes invalid in the codec's charset).
/// One bad token never aborts the rest of the fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub params: ParamMap,
    pub skipped: Vec<String>,
}

impl Default for QueryCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCodec {
    /// UTF-8 codec.
    pub fn new() -> Self {
        Self { encoding: UTF_8 }
    }

    /// Codec for a named charset label (`"euc-kr"`, `"windows-1252"`, ...).
    ///
    /// An empty label falls back to UTF-8; an unknown label is an error
    /// here, at construction, so parses can never fail on charset lookup.
    pub fn with_charset(label: &str) -> Result<Self> {
        if label.is_empty() {
            return Ok(Self::new());
        }
        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => Ok(Self { encoding }),
            None => Err(QueryError::UnknownCharset),
        }
    }

    /// Canonical name of the decode charset.
    pub fn charset(&self) -> &'static str {
        self.encoding.name()
    }

    /// Parse a query fragment into an ordered parameter map.
    ///
    /// A single leading `?` or `&` is ignored. Pairs split on the first
    /// `=`; the decoded value order is preserved per key and the key order
    /// is first-seen. An empty value registers the key with an empty value
    /// sequence.
    pub fn parse(&self, fragment: &str) -> ParsedQuery {
        let (_, fragment) = split_marker(fragment);
        self.parse_pairs(fragment)
    }

    /// Parse with the leading marker already stripped.
    pub(crate) fn parse_pairs(&self, fragment: &str) -> ParsedQuery {
        let mut params = ParamMap::new();
        let mut skipped = Vec::new();

        for token in fragment.split('&').filter(|token| !token.is_empty()) {
            let Some(idx) = memchr::memchr(b'=', token.as_bytes()) else {
                skipped.push(token.to_owned());
                continue;
            };
            let key = self.decode_component(&token[..idx]);
            let value = self.decode_component(&token[idx + 1..]);
            match (key, value) {
                (Some(key), Some(value)) => params.append(&key, &value),
                _ => skipped.push(token.to_owned()),
            }
        }

        ParsedQuery { params, skipped }
    }

    /// Serialize a parameter map back to a query fragment.
    ///
    /// Keys are emitted in map order, one `key=value` token per value,
    /// joined with `&`. A key with no values is dropped unless
    /// `allow_empty`, in which case it is emitted as `key=`. An empty map
    /// serializes to the empty string.
    pub fn serialize(&self, params: &ParamMap, allow_empty: bool) -> String {
        let mut result = String::new();
        for (key, values) in params.iter() {
            if values.is_empty() {
                if allow_empty {
                    if !result.is_empty() {
                        result.push('&');
                    }
                    self.encode_component_into(&mut result, key);
                    result.push('=');
                }
                continue;
            }
            for value in values {
                if !result.is_empty() {
                    result.push('&');
                }
                self.encode_component_into(&mut result, key);
                result.push('=');
                self.encode_component_into(&mut result, value);
            }
        }
        result
    }

    /// Decode one key or value: `+` means space, percent escapes decode to
    /// bytes, bytes decode in the codec's charset. Returns `None` when the
    /// bytes are not valid in the charset; malformed percent escapes pass
    /// through literally.
    fn decode_component(&self, raw: &str) -> Option<String> {
        let spaced = raw.replace('+', " ");
        let bytes: Vec<u8> = percent_decode_str(&spaced).collect();
        let (decoded, had_errors) = self.encoding.decode_without_bom_handling(&bytes);
        if had_errors {
            None
        } else {
            Some(decoded.into_owned())
        }
    }

    /// Encode one key or value, symmetric to `decode_component`: charset-
    /// encode to bytes, pass unreserved bytes through, space becomes `+`,
    /// everything else `%XX`.
    fn encode_component_into(&self, buffer: &mut String, component: &str) {
        use core::fmt::Write;

        let (bytes, _, _) = self.encoding.encode(component);
        buffer.reserve(bytes.len());
        for &byte in bytes.iter() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    buffer.push(byte as char);
                }
                b' ' => buffer.push('+'),
                _ => {
                    let _ = write!(buffer, "%{byte:02X}");
                }
            }
        }
    }
}
