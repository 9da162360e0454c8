use crate::codec::QueryCodec;
use crate::map::ParamMap;

/// Leading `?`/`&` carried over from a fragment argument to a result
/// string. Derived per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Marker {
    #[default]
    None,
    Question,
    Ampersand,
}

impl Marker {
    fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Question => "?",
            Self::Ampersand => "&",
        }
    }

    /// Reattach to a serialized result. An empty result never carries
    /// punctuation.
    fn attach(self, result: String) -> String {
        if result.is_empty() {
            result
        } else {
            let mut out = String::with_capacity(result.len() + 1);
            out.push_str(self.as_str());
            out.push_str(&result);
            out
        }
    }
}

/// Split a single leading `?` or `&` off a fragment.
pub(crate) fn split_marker(fragment: &str) -> (Marker, &str) {
    if let Some(rest) = fragment.strip_prefix('?') {
        (Marker::Question, rest)
    } else if let Some(rest) = fragment.strip_prefix('&') {
        (Marker::Ampersand, rest)
    } else {
        (Marker::None, fragment)
    }
}

impl QueryCodec {
    /// Overlay `fragment`'s parameters onto a copy of `target`.
    ///
    /// Every key in the fragment replaces the target's whole value
    /// sequence for that key; keys only in the target are untouched, keys
    /// only in the fragment are appended. Neither input is mutated. A
    /// fragment key with an empty value therefore leaves that key with an
    /// empty sequence, which `serialize` will drop by default.
    pub fn union(&self, target: Option<&ParamMap>, fragment: &str) -> ParamMap {
        let (_, fragment) = split_marker(fragment);
        let mut result = target.cloned().unwrap_or_default();
        for (key, values) in self.parse_pairs(fragment).params {
            result.insert(key, values);
        }
        result
    }

    /// Overlay `fragment` onto `target` and serialize the result.
    ///
    /// Names in the fragment overwrite or add to the target; a name with
    /// an empty value drops that name from the output unless
    /// `allow_empty`. The fragment's leading `?`/`&` is kept on a
    /// non-empty result.
    pub fn merge(&self, target: Option<&ParamMap>, fragment: &str, allow_empty: bool) -> String {
        let (marker, _) = split_marker(fragment);
        let serialized = self.serialize(&self.union(target, fragment), allow_empty);
        marker.attach(serialized)
    }

    /// Keep only the names listed in `fragment`.
    ///
    /// A name with an explicit value keeps it, regardless of the target.
    /// A name with an empty value is filled from the target's current
    /// value sequence, or dropped when the target has none. The
    /// fragment's leading `?`/`&` is kept on a non-empty result.
    pub fn pick(&self, target: Option<&ParamMap>, fragment: &str) -> String {
        let (marker, fragment) = split_marker(fragment);
        let mut result = ParamMap::new();
        for (key, values) in self.parse_pairs(fragment).params {
            if values.is_empty() {
                let filled = target
                    .and_then(|target| target.get(&key))
                    .map(<[String]>::to_vec)
                    .unwrap_or_default();
                result.insert(key, filled);
            } else {
                result.insert(key, values);
            }
        }
        marker.attach(self.serialize(&result, false))
    }
}
