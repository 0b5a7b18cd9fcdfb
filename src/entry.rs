use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable key-value record produced by the sparse iterators.
///
/// A fresh `Entry` is built on every traversal step from the container's
/// key and value at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn accessors() {
        let entry = Entry::new(23, "x");
        assert_eq!(*entry.key(), 23);
        assert_eq!(*entry.value(), "x");
        assert_eq!(entry.into_parts(), (23, "x"));
    }

    #[test]
    fn tuple_conversions() {
        let entry: Entry<i64, bool> = (42, true).into();
        assert_eq!(entry, Entry::new(42, true));
        let (key, value): (i64, bool) = entry.into();
        assert_eq!((key, value), (42, true));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Entry::new(1, 2), Entry::new(1, 2));
        assert_ne!(Entry::new(1, 2), Entry::new(1, 3));
        assert_ne!(Entry::new(1, 2), Entry::new(2, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Entry::new(23, 7i64).to_string(), "23=7");
    }

    #[test]
    fn serde() {
        let entry = Entry::new(23, "x".to_string());
        let json = serde_json::to_string(&entry).expect("Failed serializing the entry");
        assert_eq!(json, r#"{"key":23,"value":"x"}"#);
        let decoded: Entry<i32, String> =
            serde_json::from_str(&json).expect("Failed deserializing the entry");
        assert_eq!(decoded, entry);
    }
}
