//! Generic single- and multi-select policies.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::policy::{all_elements_available, fixup_to_all, fixup_to_first, SettingPolicy};

/// Scalar dropdown selection: the value must be one of the available values;
/// fixup falls back to the first available value.
///
/// Used for ensembles, realization numbers, and grid layers.
pub struct SingleSelectPolicy<V> {
    _marker: PhantomData<fn() -> V>,
}

impl<V> SingleSelectPolicy<V> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<V> Default for SingleSelectPolicy<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SettingPolicy for SingleSelectPolicy<V>
where
    V: Clone + fmt::Debug + fmt::Display + PartialEq + Serialize + DeserializeOwned + 'static,
{
    type Value = V;
    type Avail = V;

    fn is_value_valid(&self, available: &[V], value: &V) -> bool {
        available.contains(value)
    }

    fn fixup_value(&self, available: &[V], current: &V) -> V {
        fixup_to_first(available, current)
    }

    fn display_value(&self, value: &V) -> String {
        value.to_string()
    }
}

/// Multi-select: valid only if every selected element is individually
/// available (and the selection is non-empty while the domain is); fixup
/// degrades to the full available domain.
///
/// Used for attribute lists and ensemble sets.
pub struct MultiSelectPolicy<V> {
    _marker: PhantomData<fn() -> V>,
}

impl<V> MultiSelectPolicy<V> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<V> Default for MultiSelectPolicy<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SettingPolicy for MultiSelectPolicy<V>
where
    V: Clone + fmt::Debug + fmt::Display + PartialEq + Serialize + DeserializeOwned + 'static,
{
    type Value = Vec<V>;
    type Avail = V;

    fn is_value_valid(&self, available: &[V], value: &Vec<V>) -> bool {
        all_elements_available(available, value)
    }

    fn fixup_value(&self, available: &[V], _current: &Vec<V>) -> Vec<V> {
        fixup_to_all(available)
    }

    fn display_value(&self, value: &Vec<V>) -> String {
        value
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_select_validity() {
        let policy = SingleSelectPolicy::<i32>::new();
        assert!(policy.is_value_valid(&[0, 1, 2], &1));
        assert!(!policy.is_value_valid(&[0, 1, 2], &5));
        assert!(!policy.is_value_valid(&[], &0));
    }

    #[test]
    fn test_single_select_fixup_is_first_available() {
        let policy = SingleSelectPolicy::<i32>::new();
        assert_eq!(policy.fixup_value(&[4, 5, 6], &99), 4);
    }

    #[test]
    fn test_single_select_fixup_idempotent() {
        let policy = SingleSelectPolicy::<i32>::new();
        let avail = [4, 5, 6];
        let once = policy.fixup_value(&avail, &99);
        let twice = policy.fixup_value(&avail, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multi_select_partial_overlap_is_invalid() {
        let policy = MultiSelectPolicy::<String>::new();
        let avail = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let selection = vec!["A".to_string(), "D".to_string()];
        assert!(!policy.is_value_valid(&avail, &selection));
    }

    #[test]
    fn test_multi_select_fixup_degrades_to_full_domain() {
        let policy = MultiSelectPolicy::<String>::new();
        let avail = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let selection = vec!["A".to_string(), "D".to_string()];
        assert_eq!(policy.fixup_value(&avail, &selection), avail);
    }

    #[test]
    fn test_multi_select_display_joins() {
        let policy = MultiSelectPolicy::<String>::new();
        let selection = vec!["PORO".to_string(), "PERM".to_string()];
        assert_eq!(policy.display_value(&selection), "PORO, PERM");
    }

    #[test]
    fn test_serialization_defaults_to_json() {
        let policy = MultiSelectPolicy::<String>::new();
        let selection = vec!["A".to_string(), "B".to_string()];
        let raw = policy.serialize_value(&selection).unwrap();
        let back = policy.deserialize_value(&raw).unwrap();
        assert_eq!(back, selection);
    }
}
