use std::collections::BTreeMap;

/// Groups values by key. Unlike a set-backed multimap, values under one key keep the order they
/// were inserted in, since record order matters to callers.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiMap<K, V> {
    map: BTreeMap<K, Vec<V>>,
    empty: Vec<V>,
}

impl<K, V> MultiMap<K, V>
where
    K: Ord + Clone,
{
    pub fn new() -> MultiMap<K, V> {
        MultiMap {
            map: BTreeMap::new(),
            empty: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.map.entry(key).or_insert_with(Vec::new).push(value);
    }

    /// Returns an empty slice for missing keys.
    pub fn get(&self, key: &K) -> &[V] {
        self.map.get(key).unwrap_or(&self.empty)
    }

    /// The number of keys, not values.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V> Default for MultiMap<K, V>
where
    K: Ord + Clone,
{
    fn default() -> Self {
        MultiMap::new()
    }
}

/// Handles negative indices and anything past the end.
pub fn wraparound_get<T>(vec: &[T], idx: isize) -> &T {
    let len = vec.len() as isize;
    let idx = idx % len;
    let idx = if idx >= 0 { idx } else { idx + len };
    &vec[idx as usize]
}
