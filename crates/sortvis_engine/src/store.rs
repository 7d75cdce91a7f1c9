use std::cmp::Ordering;

use sortvis_core::Value;

/// The mutable array a run sorts in place.
///
/// Indices outside `0..len()` are a bug in the calling engine and panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceStore {
    values: Vec<Value>,
}

impl SequenceStore {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_at(&self, index: usize) -> Value {
        self.values[index]
    }

    pub fn compare(&self, i: usize, j: usize) -> Ordering {
        self.values[i].cmp(&self.values[j])
    }

    /// Direct overwrite, used by merge.
    pub fn set_value(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    /// Copies `from..=to` out, used for merge snapshots.
    pub fn snapshot(&self, from: usize, to: usize) -> Vec<Value> {
        self.values[from..=to].to_vec()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for SequenceStore {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_and_set_mutate_in_place() {
        let mut store = SequenceStore::new(vec![5, 3, 1]);
        store.swap(0, 2);
        assert_eq!(store.as_slice(), &[1, 3, 5]);
        store.set_value(1, 9);
        assert_eq!(store.value_at(1), 9);
        assert_eq!(store.compare(0, 1), Ordering::Less);
        assert_eq!(store.snapshot(1, 2), vec![9, 5]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        let store = SequenceStore::new(vec![1]);
        store.value_at(1);
    }
}
