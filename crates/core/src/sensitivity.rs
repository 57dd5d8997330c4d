//! Sensitivity analyses and their cases.
//!
//! A sensitivity run groups realizations into named cases (e.g. "low"/"high"
//! around a reference). A selection is always a (sensitivity, case) pair and
//! the pair is only meaningful as a whole: a case name is scoped to its
//! sensitivity.

use serde::{Deserialize, Serialize};

/// One sensitivity analysis with its available case names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensitivity {
    pub name: String,
    pub cases: Vec<String>,
}

impl Sensitivity {
    pub fn new(name: impl Into<String>, cases: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }
}

/// A selected (sensitivity, case) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensitivityCasePair {
    pub sensitivity_name: String,
    pub case_name: String,
}

impl SensitivityCasePair {
    pub fn new(sensitivity_name: impl Into<String>, case_name: impl Into<String>) -> Self {
        Self {
            sensitivity_name: sensitivity_name.into(),
            case_name: case_name.into(),
        }
    }

    /// True if this pair names an existing case of an existing sensitivity.
    pub fn is_in(&self, sensitivities: &[Sensitivity]) -> bool {
        sensitivities
            .iter()
            .find(|s| s.name == self.sensitivity_name)
            .map_or(false, |s| s.cases.iter().any(|c| c == &self.case_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensitivities() -> Vec<Sensitivity> {
        vec![
            Sensitivity::new("faultseal", vec!["low".into(), "high".into()]),
            Sensitivity::new("porosity", vec!["p10".into(), "p90".into()]),
        ]
    }

    #[test]
    fn test_pair_in_known_sensitivity() {
        let pair = SensitivityCasePair::new("faultseal", "high");
        assert!(pair.is_in(&sensitivities()));
    }

    #[test]
    fn test_case_is_scoped_to_its_sensitivity() {
        // "p10" exists, but not under "faultseal".
        let pair = SensitivityCasePair::new("faultseal", "p10");
        assert!(!pair.is_in(&sensitivities()));
    }

    #[test]
    fn test_unknown_sensitivity_is_invalid() {
        let pair = SensitivityCasePair::new("sealing", "low");
        assert!(!pair.is_in(&sensitivities()));
    }
}
