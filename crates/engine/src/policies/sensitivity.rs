//! Composite sensitivity (name, case) policy.
//!
//! Validity is composite: the pair is valid only when the sensitivity name
//! exists in the domain AND the case belongs to that specific sensitivity.
//! A case name on its own means nothing.

use fjordviz_core::{Sensitivity, SensitivityCasePair};

use crate::policy::SettingPolicy;

pub struct SensitivityPolicy;

impl SensitivityPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SensitivityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingPolicy for SensitivityPolicy {
    type Value = SensitivityCasePair;
    type Avail = Sensitivity;

    fn is_value_valid(&self, available: &[Sensitivity], value: &SensitivityCasePair) -> bool {
        value.is_in(available)
    }

    /// Keep the selected sensitivity when it survived and only the case is
    /// stale; otherwise fall back to the first sensitivity. Either way the
    /// case becomes that sensitivity's first case.
    fn fixup_value(
        &self,
        available: &[Sensitivity],
        current: &SensitivityCasePair,
    ) -> SensitivityCasePair {
        let target = available
            .iter()
            .find(|s| s.name == current.sensitivity_name)
            .or_else(|| available.first());
        match target {
            Some(s) => match s.cases.first() {
                Some(case) => SensitivityCasePair::new(s.name.clone(), case.clone()),
                None => current.clone(),
            },
            None => current.clone(),
        }
    }

    fn display_value(&self, value: &SensitivityCasePair) -> String {
        format!("{}: {}", value.sensitivity_name, value.case_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Vec<Sensitivity> {
        vec![
            Sensitivity::new("faultseal", vec!["low".into(), "high".into()]),
            Sensitivity::new("porosity", vec!["p10".into(), "p90".into()]),
        ]
    }

    #[test]
    fn test_composite_validity() {
        let policy = SensitivityPolicy::new();
        assert!(policy.is_value_valid(&domain(), &SensitivityCasePair::new("porosity", "p90")));
        // Case exists, but under the other sensitivity.
        assert!(!policy.is_value_valid(&domain(), &SensitivityCasePair::new("porosity", "low")));
    }

    #[test]
    fn test_fixup_keeps_surviving_sensitivity() {
        let policy = SensitivityPolicy::new();
        let fixed = policy.fixup_value(&domain(), &SensitivityCasePair::new("porosity", "gone"));
        assert_eq!(fixed, SensitivityCasePair::new("porosity", "p10"));
    }

    #[test]
    fn test_fixup_falls_back_to_first_sensitivity() {
        let policy = SensitivityPolicy::new();
        let fixed = policy.fixup_value(&domain(), &SensitivityCasePair::new("vanished", "low"));
        assert_eq!(fixed, SensitivityCasePair::new("faultseal", "low"));
    }

    #[test]
    fn test_fixup_idempotent() {
        let policy = SensitivityPolicy::new();
        let once = policy.fixup_value(&domain(), &SensitivityCasePair::new("vanished", "x"));
        assert_eq!(policy.fixup_value(&domain(), &once), once);
    }

    #[test]
    fn test_fixup_with_caseless_sensitivity_keeps_current() {
        let policy = SensitivityPolicy::new();
        let domain = vec![Sensitivity::new("empty", vec![])];
        let current = SensitivityCasePair::new("other", "x");
        assert_eq!(policy.fixup_value(&domain, &current), current);
    }
}
