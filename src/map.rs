use indexmap::IndexMap;
use indexmap::map::IntoIter;

/// Ordered multi-valued parameter map.
///
/// Keys keep first-insertion order and values keep the order they were
/// appended, because the serialized output order is observable. A key may
/// map to an empty sequence: that is how a name that only ever appeared as
/// `name=` is represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: IndexMap<String, Vec<String>>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Append one value under `key`, creating the key if absent.
    ///
    /// An empty value registers the key but is not stored, so the key ends
    /// up with an empty value sequence rather than a sequence containing
    /// `""`.
    pub fn append(&mut self, key: &str, value: &str) {
        let values = self.entries.entry(key.to_owned()).or_default();
        if !value.is_empty() {
            values.push(value.to_owned());
        }
    }

    /// Replace the whole value sequence for `key`.
    ///
    /// An existing key keeps its position in the order; a new key goes
    /// last. This is the overlay primitive `union` and `pick` are built on.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.entries.insert(key.into(), values);
    }

    /// Get the value sequence for a key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ParamMap {
    type Item = (String, Vec<String>);
    type IntoIter = IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.append(&key.into(), value.as_ref());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_key_order() {
        let mut map = ParamMap::new();
        map.append("page", "1");
        map.append("search", "choi");
        map.append("page", "2");
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["page", "search"]);
        assert_eq!(map.get("page"), Some(&["1".to_owned(), "2".to_owned()][..]));
    }

    #[test]
    fn test_append_empty_value_registers_key_only() {
        let mut map = ParamMap::new();
        map.append("search", "");
        assert!(map.contains_key("search"));
        assert_eq!(map.get("search"), Some(&[][..]));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = ParamMap::new();
        map.append("page", "1");
        map.append("search", "choi");
        map.append("search", "choi2");
        map.insert("search", Vec::new());
        map.insert("mode", vec!["save".to_owned()]);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["page", "search", "mode"]);
        assert_eq!(map.get("search"), Some(&[][..]));
    }

    #[test]
    fn test_from_iterator() {
        let map: ParamMap = [("page", "1"), ("search", "choi")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("search"), Some(&["choi".to_owned()][..]));
    }
}
