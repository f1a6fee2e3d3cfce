use std::fmt;

/// A stored key-value pair. Owned by the bucket it was appended to.
#[derive(Debug, Clone)]
pub(crate) struct Entry<V> {
    pub key: i64,
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new(key: i64, value: V) -> Entry<V> {
        Entry { key, value }
    }
}

impl<V: fmt::Display> fmt::Display for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

// Collisions share a slot and keep insertion order. `None` in the table
// stands for a bucket that has never been allocated or was emptied.
pub(crate) type Bucket<V> = Vec<Entry<V>>;
