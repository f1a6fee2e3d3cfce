use std::{fmt, mem};

use tracing::Level;

use crate::{
    config::LongMapConfig,
    error::LongMapError,
    longmap::entry::{Bucket, Entry},
};

mod entry;

/// A map from `i64` keys to values of type `V`.
///
/// Keys are spread over a fixed number of buckets by `key mod table_size`,
/// colliding keys are kept in insertion order within their bucket. The
/// table is never resized: the load factor is unbounded and a degenerate key
/// set will degrade every operation to a linear scan.
///
/// A missing key is always reported as `None`. `V` may itself be an
/// `Option<_>`, a stored `None` is still a present mapping.
#[derive(Debug, Clone)]
pub struct LongMap<V> {
    buckets: Box<[Option<Bucket<V>>]>,
    len: usize,
}

impl<V> Default for LongMap<V> {
    fn default() -> LongMap<V> {
        LongMap::new()
    }
}

impl<V> LongMap<V> {
    /// A map with the default table of 4096 buckets.
    pub fn new() -> LongMap<V> {
        LongMap {
            buckets: empty_table(LongMapConfig::default().table_size),
            len: 0,
        }
    }

    /// A map with `table_size` buckets. Fails when `table_size` is zero.
    pub fn with_table_size(table_size: usize) -> Result<LongMap<V>, LongMapError> {
        LongMap::with_config(LongMapConfig::with_table_size(table_size))
    }

    pub fn with_config(config: LongMapConfig) -> Result<LongMap<V>, LongMapError> {
        config.validate()?;
        tracing::event!(
            Level::DEBUG,
            name = "Allocated table",
            "table_size" = config.table_size
        );
        Ok(LongMap {
            buckets: empty_table(config.table_size),
            len: 0,
        })
    }

    /// Associates `value` with `key`, returning the value it replaced.
    pub fn put(&mut self, key: i64, value: V) -> Option<V> {
        let pos = self.slot(key);
        let bucket = self.buckets[pos].get_or_insert_with(Vec::new);
        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        if !bucket.is_empty() {
            tracing::event!(
                Level::TRACE,
                name = "Bucket collision",
                "slot" = pos,
                "depth" = bucket.len()
            );
        }
        bucket.push(Entry::new(key, value));
        self.len += 1;
        None
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        let pos = self.slot(key);
        let bucket = self.buckets[pos].as_ref()?;
        bucket.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let pos = self.slot(key);
        let bucket = self.buckets[pos].as_mut()?;
        bucket.iter_mut().find(|e| e.key == key).map(|e| &mut e.value)
    }

    /// Removes the mapping for `key`, returning its value if there was one.
    ///
    /// A bucket left without entries is released.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let pos = self.slot(key);
        let bucket = self.buckets[pos].as_mut()?;
        let idx = bucket.iter().position(|e| e.key == key)?;
        let entry = bucket.remove(idx);
        if bucket.is_empty() {
            self.buckets[pos] = None;
            tracing::event!(Level::TRACE, name = "Released bucket", "slot" = pos);
        }
        self.len -= 1;
        Some(entry.value)
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Scans every entry. O(n).
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries().any(|e| e.value == *value)
    }

    /// All keys in table order, then insertion order within a bucket.
    ///
    /// The i-th key belongs to the i-th element of [`LongMap::values`].
    pub fn keys(&self) -> Vec<i64> {
        self.entries().map(|e| e.key).collect()
    }

    /// All values, in the same order as [`LongMap::keys`].
    pub fn values(&self) -> Vec<&V> {
        self.entries().map(|e| &e.value).collect()
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry. The table keeps the bucket count it was built with.
    #[tracing::instrument(skip(self), fields(discarded = self.len))]
    pub fn clear(&mut self) {
        self.buckets = empty_table(self.buckets.len());
        self.len = 0;
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    // Table size fits in an i64 (checked at construction), and rem_euclid
    // keeps negative keys inside [0, table_size).
    fn slot(&self, key: i64) -> usize {
        key.rem_euclid(self.buckets.len() as i64) as usize
    }

    fn entries(&self) -> impl Iterator<Item = &Entry<V>> {
        self.buckets.iter().flatten().flatten()
    }
}

fn empty_table<V>(table_size: usize) -> Box<[Option<Bucket<V>>]> {
    (0..table_size).map(|_| None).collect()
}

// [[null, [1=Foo, 5=Bar], null, ...]]
impl<V: fmt::Display> fmt::Display for LongMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[")?;
        for (i, bucket) in self.buckets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let Some(entries) = bucket else {
                write!(f, "null")?;
                continue;
            };
            write!(f, "[")?;
            for (j, e) in entries.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{e}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]]")
    }
}
