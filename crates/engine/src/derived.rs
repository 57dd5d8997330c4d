//! Derived-value helpers.
//!
//! A derived node is a pure function of setting cell snapshots and
//! asynchronous query results. Nothing here observes cells directly: the
//! caller recomputes from current snapshots and uses `Derived` for
//! referential stability (no fresh allocation identity on every read) and
//! `combine` to zip per-key query results back together.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Shape of an asynchronous query result as seen by the engine.
///
/// The engine treats `is_fetching = true` as "do not fix up yet" and `data`
/// as the new available values once settled. A failed refetch keeps the last
/// good domain: the producer simply never pushes new data.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_fetching: bool,
    pub is_error: bool,
}

impl<T> QueryState<T> {
    /// Not started.
    pub fn idle() -> Self {
        Self {
            data: None,
            is_fetching: false,
            is_error: false,
        }
    }

    /// In flight, no data yet.
    pub fn loading() -> Self {
        Self {
            data: None,
            is_fetching: true,
            is_error: false,
        }
    }

    /// Settled successfully.
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            is_fetching: false,
            is_error: false,
        }
    }

    /// Refetching while the last good result is still shown as loading
    /// state, not as current data.
    pub fn refetching(data: T) -> Self {
        Self {
            data: Some(data),
            is_fetching: true,
            is_error: false,
        }
    }

    /// Failed.
    pub fn error() -> Self {
        Self {
            data: None,
            is_fetching: false,
            is_error: true,
        }
    }
}

impl<T> QueryState<Vec<T>> {
    /// The data, or a well-defined empty slice while not ready. Callers
    /// must never present a stale previous result as current.
    pub fn data_or_empty(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}

/// Zip per-key query results back onto their originating keys.
///
/// `is_fetching` is true if any constituent is fetching, `is_error` if any
/// errored, and `data` is present only when every constituent settled —
/// preserving input order.
pub fn combine<K, T>(parts: impl IntoIterator<Item = (K, QueryState<T>)>) -> QueryState<Vec<(K, T)>> {
    let mut is_fetching = false;
    let mut is_error = false;
    let mut items = Vec::new();
    let mut complete = true;
    for (key, query) in parts {
        is_fetching |= query.is_fetching;
        is_error |= query.is_error;
        match query.data {
            Some(data) => items.push((key, data)),
            None => complete = false,
        }
    }
    QueryState {
        data: if complete { Some(items) } else { None },
        is_fetching,
        is_error,
    }
}

/// Hash a tuple of inputs (cell revisions, query generations) into one
/// memoization fingerprint.
pub fn fingerprint<H: Hash>(inputs: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    inputs.hash(&mut hasher);
    hasher.finish()
}

/// Memoized derived node.
///
/// `get_or_compute` recomputes only when the fingerprint changed since the
/// last call and otherwise returns a reference to the cached value, so
/// repeated reads within a render cycle are referentially stable.
pub struct Derived<T> {
    cached: Option<(u64, T)>,
    computations: u64,
}

impl<T> Derived<T> {
    pub fn new() -> Self {
        Self {
            cached: None,
            computations: 0,
        }
    }

    pub fn get_or_compute(&mut self, fingerprint: u64, compute: impl FnOnce() -> T) -> &T {
        let stale = !matches!(&self.cached, Some((fp, _)) if *fp == fingerprint);
        if stale {
            self.computations += 1;
            self.cached = Some((fingerprint, compute()));
        }
        match self.cached.as_ref() {
            Some((_, value)) => value,
            None => unreachable!("cache populated above"),
        }
    }

    /// How many times the compute closure ran (test introspection).
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

impl<T> Default for Derived<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_preserves_input_order() {
        let combined = combine(vec![
            ("ens2", QueryState::ready(vec![4, 5])),
            ("ens1", QueryState::ready(vec![0, 1])),
        ]);
        assert_eq!(
            combined.data,
            Some(vec![("ens2", vec![4, 5]), ("ens1", vec![0, 1])])
        );
        assert!(!combined.is_fetching);
        assert!(!combined.is_error);
    }

    #[test]
    fn test_combine_is_fetching_if_any_constituent_is() {
        let combined = combine(vec![
            ("a", QueryState::ready(1)),
            ("b", QueryState::loading()),
        ]);
        assert!(combined.is_fetching);
        assert_eq!(combined.data, None);
    }

    #[test]
    fn test_combine_is_error_if_any_constituent_is() {
        let combined = combine(vec![("a", QueryState::ready(1)), ("b", QueryState::error())]);
        assert!(combined.is_error);
        assert_eq!(combined.data, None);
    }

    #[test]
    fn test_combine_of_nothing_is_settled_and_empty() {
        let combined: QueryState<Vec<(&str, i32)>> = combine(Vec::new());
        assert_eq!(combined.data, Some(Vec::new()));
        assert!(!combined.is_fetching);
    }

    #[test]
    fn test_data_or_empty_never_exposes_stale_values() {
        let loading: QueryState<Vec<i32>> = QueryState::loading();
        assert_eq!(loading.data_or_empty(), &[] as &[i32]);
        let ready = QueryState::ready(vec![1, 2]);
        assert_eq!(ready.data_or_empty(), &[1, 2]);
    }

    #[test]
    fn test_derived_computes_once_per_fingerprint() {
        let mut node = Derived::new();
        let fp = fingerprint(&(1u64, 7u64));

        assert_eq!(node.get_or_compute(fp, || vec![1, 2, 3]), &vec![1, 2, 3]);
        assert_eq!(node.get_or_compute(fp, || panic!("must not recompute")), &vec![1, 2, 3]);
        assert_eq!(node.computations(), 1);
    }

    #[test]
    fn test_derived_recomputes_when_inputs_change() {
        let mut node = Derived::new();
        node.get_or_compute(fingerprint(&(1u64,)), || 10);
        node.get_or_compute(fingerprint(&(2u64,)), || 20);
        assert_eq!(node.computations(), 2);
        assert_eq!(*node.get_or_compute(fingerprint(&(2u64,)), || 30), 20);
    }

    #[test]
    fn test_fingerprint_is_input_sensitive() {
        assert_ne!(fingerprint(&(1u64, 2u64)), fingerprint(&(2u64, 1u64)));
        assert_eq!(fingerprint(&(3u64, 4u64)), fingerprint(&(3u64, 4u64)));
    }
}
