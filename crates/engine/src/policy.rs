//! The per-setting-type strategy trait.
//!
//! One policy exists per setting kind (possibly parameterized, e.g. the
//! inline and crossline variants of the slice-range policy). Policies are
//! stateless: they judge validity against an externally supplied domain,
//! repair invalid values, and translate values to and from their persisted
//! string form. A policy never holds cell state and never observes other
//! cells.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Strategy object for one setting type.
///
/// `Value` is what the cell holds; `Avail` is one entry of the legal domain.
/// For scalar settings the two coincide; for multi-selects `Value` is a
/// `Vec` of the element type and `Avail` is the element type itself.
pub trait SettingPolicy: 'static {
    type Value: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + 'static;
    type Avail: Clone + fmt::Debug + PartialEq + 'static;

    /// Is `value` legal against the current domain?
    fn is_value_valid(&self, available: &[Self::Avail], value: &Self::Value) -> bool;

    /// Produce a replacement for an invalid `current` value. Only called
    /// with a non-empty domain; must be deterministic and idempotent
    /// (fixing up an already-fixed value returns it unchanged).
    fn fixup_value(&self, available: &[Self::Avail], current: &Self::Value) -> Self::Value;

    /// Value equality. Defaults to `==`; override for types where derived
    /// equality is wrong (e.g. NaN-safe float comparison).
    fn are_equal(&self, a: &Self::Value, b: &Self::Value) -> bool {
        a == b
    }

    /// Persisted string form. Defaults to JSON.
    fn serialize_value(&self, value: &Self::Value) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }

    /// Inverse of `serialize_value`. Defaults to JSON.
    fn deserialize_value(&self, raw: &str) -> Result<Self::Value, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Human-readable rendering for setting controls and annotations.
    fn display_value(&self, value: &Self::Value) -> String;
}

/// Default scalar fixup: the first available value, or `current` unchanged
/// when the domain is empty (callers skip fixup on empty domains anyway).
pub fn fixup_to_first<V: Clone>(available: &[V], current: &V) -> V {
    available.first().cloned().unwrap_or_else(|| current.clone())
}

/// Default array fixup: degrade to the full available domain.
pub fn fixup_to_all<V: Clone>(available: &[V]) -> Vec<V> {
    available.to_vec()
}

/// Element-wise array validity: every element must be present in the domain,
/// and an empty selection is only valid when the domain itself is empty.
pub fn all_elements_available<V: PartialEq>(available: &[V], selection: &[V]) -> bool {
    if selection.is_empty() {
        return available.is_empty();
    }
    selection.iter().all(|v| available.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixup_to_first_picks_head() {
        assert_eq!(fixup_to_first(&[3, 4, 5], &9), 3);
    }

    #[test]
    fn test_fixup_to_first_keeps_current_on_empty_domain() {
        let none: [i32; 0] = [];
        assert_eq!(fixup_to_first(&none, &9), 9);
    }

    #[test]
    fn test_all_elements_available() {
        let avail = ["a", "b", "c"];
        assert!(all_elements_available(&avail, &["a", "c"]));
        assert!(!all_elements_available(&avail, &["a", "d"]));
    }

    #[test]
    fn test_empty_selection_only_valid_on_empty_domain() {
        let avail = ["a"];
        assert!(!all_elements_available(&avail, &[] as &[&str]));
        assert!(all_elements_available(&[] as &[&str], &[] as &[&str]));
    }
}
