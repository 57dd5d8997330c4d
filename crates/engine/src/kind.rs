//! Setting kind tags.
//!
//! A `SettingKind` identifies one logical setting type across the whole
//! application. It is the lookup key into the `SettingRegistry` and the key
//! under which a setting is stored in persisted session records. The set is
//! closed: adding a setting type means adding a variant here and a policy
//! registration in `SettingRegistry::builtin`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying a setting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    /// Single ensemble selection.
    Ensemble,
    /// Multi-ensemble selection (e.g. for cross-ensemble comparison).
    EnsembleSet,
    /// Realization number within the selected ensembles.
    Realization,
    /// Grid layer index (k-layer).
    GridLayer,
    /// Seismic inline number.
    SeismicInline,
    /// Seismic crossline number.
    SeismicCrossline,
    /// Depth slice (meters, from the cube's sampled depths).
    DepthSlice,
    /// Sensitivity analysis (name, case) pair.
    SensitivityCase,
    /// Surface/property attribute multi-select.
    Attributes,
    /// Toggle for showing observed data alongside simulated.
    ShowObserved,
}

impl SettingKind {
    /// Persistence record key for this kind.
    pub fn as_key(&self) -> &'static str {
        match self {
            SettingKind::Ensemble => "ensemble",
            SettingKind::EnsembleSet => "ensemble_set",
            SettingKind::Realization => "realization",
            SettingKind::GridLayer => "grid_layer",
            SettingKind::SeismicInline => "seismic_inline",
            SettingKind::SeismicCrossline => "seismic_crossline",
            SettingKind::DepthSlice => "depth_slice",
            SettingKind::SensitivityCase => "sensitivity_case",
            SettingKind::Attributes => "attributes",
            SettingKind::ShowObserved => "show_observed",
        }
    }

    /// Every kind, in a stable listing order.
    pub const ALL: [SettingKind; 10] = [
        SettingKind::Ensemble,
        SettingKind::EnsembleSet,
        SettingKind::Realization,
        SettingKind::GridLayer,
        SettingKind::SeismicInline,
        SettingKind::SeismicCrossline,
        SettingKind::DepthSlice,
        SettingKind::SensitivityCase,
        SettingKind::Attributes,
        SettingKind::ShowObserved,
    ];

    /// Inverse of `as_key`.
    pub fn from_key(key: &str) -> Option<SettingKind> {
        SettingKind::ALL.iter().copied().find(|k| k.as_key() == key)
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
