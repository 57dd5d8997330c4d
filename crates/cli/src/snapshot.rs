//! Snapshot inspection and validation.
//!
//! Validation here is purely structural: does each stored value parse as
//! the type its setting kind carries? Whether a value is still available in
//! the session's data is only decidable at restore time, by the cells.

use std::collections::BTreeMap;

use fjordviz_config::session::SessionSnapshot;
use fjordviz_core::{EnsembleIdent, SensitivityCasePair};
use fjordviz_engine::kind::SettingKind;

/// One validation finding for a stored setting value.
#[derive(Debug, PartialEq)]
pub enum Finding {
    /// Key does not name a known setting kind. Tolerated on restore
    /// (newer snapshots may carry kinds this build does not know).
    UnknownKey { module: String, key: String },
    /// Value does not parse as the kind's value type. Restore would
    /// silently skip it, leaving the cell at its default.
    BadValue {
        module: String,
        key: String,
        error: String,
    },
}

/// Check that a stored value parses as its kind's value type.
pub fn check_value(kind: SettingKind, raw: &str) -> Result<(), serde_json::Error> {
    match kind {
        SettingKind::Ensemble => serde_json::from_str::<EnsembleIdent>(raw).map(drop),
        SettingKind::EnsembleSet => serde_json::from_str::<Vec<EnsembleIdent>>(raw).map(drop),
        SettingKind::Realization => serde_json::from_str::<i32>(raw).map(drop),
        SettingKind::GridLayer => serde_json::from_str::<usize>(raw).map(drop),
        SettingKind::SeismicInline | SettingKind::SeismicCrossline => {
            serde_json::from_str::<i32>(raw).map(drop)
        }
        SettingKind::DepthSlice => serde_json::from_str::<f64>(raw).map(drop),
        SettingKind::SensitivityCase => {
            serde_json::from_str::<SensitivityCasePair>(raw).map(drop)
        }
        SettingKind::Attributes => serde_json::from_str::<Vec<String>>(raw).map(drop),
        SettingKind::ShowObserved => serde_json::from_str::<bool>(raw).map(drop),
    }
}

fn validate_record(module: &str, record: &BTreeMap<String, String>, findings: &mut Vec<Finding>) {
    for (key, raw) in record {
        match SettingKind::from_key(key) {
            None => findings.push(Finding::UnknownKey {
                module: module.to_string(),
                key: key.clone(),
            }),
            Some(kind) => {
                if let Err(e) = check_value(kind, raw) {
                    findings.push(Finding::BadValue {
                        module: module.to_string(),
                        key: key.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }
}

/// Validate every module record in a snapshot.
pub fn validate(snapshot: &SessionSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (module, record) in &snapshot.modules {
        validate_record(module, record, &mut findings);
    }
    findings
}

/// True when any finding would change restore behavior (a value restore
/// would drop). Unknown keys alone are not failures.
pub fn has_bad_values(findings: &[Finding]) -> bool {
    findings
        .iter()
        .any(|f| matches!(f, Finding::BadValue { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(module: &str, pairs: &[(&str, &str)]) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::new("test");
        let record = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        snapshot.set_module(module, record);
        snapshot
    }

    #[test]
    fn test_valid_snapshot_has_no_findings() {
        let snapshot = snapshot_with(
            "seismic_viewer",
            &[
                ("realization", "3"),
                ("seismic_inline", "120"),
                ("show_observed", "true"),
                ("attributes", r#"["PORO","PERM"]"#),
            ],
        );
        assert!(validate(&snapshot).is_empty());
    }

    #[test]
    fn test_unknown_key_is_reported_but_not_fatal() {
        let snapshot = snapshot_with("map_view", &[("hologram_mode", "true")]);
        let findings = validate(&snapshot);
        assert_eq!(findings.len(), 1);
        assert!(matches!(findings[0], Finding::UnknownKey { .. }));
        assert!(!has_bad_values(&findings));
    }

    #[test]
    fn test_bad_value_is_fatal() {
        let snapshot = snapshot_with("map_view", &[("realization", "\"three\"")]);
        let findings = validate(&snapshot);
        assert!(has_bad_values(&findings));
    }

    #[test]
    fn test_ensemble_value_must_be_uuid_double_colon_name() {
        let good = format!("\"{}::iter-0\"", uuid_nil());
        assert!(check_value(SettingKind::Ensemble, &good).is_ok());
        assert!(check_value(SettingKind::Ensemble, "\"not-an-ident\"").is_err());
    }

    fn uuid_nil() -> &'static str {
        "00000000-0000-0000-0000-000000000000"
    }
}
