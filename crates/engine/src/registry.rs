//! Factory mapping setting kinds to their policies.
//!
//! The registry is populated once at startup (`builtin()` for the shipped
//! kinds) and treated as immutable afterwards. There are no global statics:
//! tests build their own registries deterministically.
//!
//! Registration conflicts, unknown kinds, and policy-type mismatches are
//! programmer errors and panic. Data-level problems (invalid values, failed
//! fetches) never reach this module.

use std::any::Any;

use rustc_hash::FxHashMap;

use fjordviz_core::{EnsembleIdent, SliceAxis};

use crate::cell::SettingCell;
use crate::kind::SettingKind;
use crate::policies::{
    MultiSelectPolicy, NumberSelectPolicy, SensitivityPolicy, SingleSelectPolicy, SliceRangePolicy,
    TogglePolicy,
};
use crate::policy::SettingPolicy;

struct RegisteredKind {
    label: String,
    static_domain: bool,
    build: Box<dyn Fn() -> Box<dyn Any>>,
}

/// Process-wide table of setting kinds and their policy factories.
pub struct SettingRegistry {
    entries: FxHashMap<SettingKind, RegisteredKind>,
}

impl SettingRegistry {
    /// An empty registry. Most callers want `builtin()`.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Register a kind whose domain arrives asynchronously.
    ///
    /// Panics if `kind` is already registered: each kind has exactly one
    /// policy for the process lifetime.
    pub fn register<P, F>(&mut self, kind: SettingKind, label: &str, factory: F)
    where
        P: SettingPolicy,
        F: Fn() -> P + 'static,
    {
        self.insert(kind, label, false, factory);
    }

    /// Register a kind with a static domain (cells are initialized from
    /// birth and never wait for available values).
    pub fn register_static<P, F>(&mut self, kind: SettingKind, label: &str, factory: F)
    where
        P: SettingPolicy,
        F: Fn() -> P + 'static,
    {
        self.insert(kind, label, true, factory);
    }

    fn insert<P, F>(&mut self, kind: SettingKind, label: &str, static_domain: bool, factory: F)
    where
        P: SettingPolicy,
        F: Fn() -> P + 'static,
    {
        if self.entries.contains_key(&kind) {
            panic!("setting kind `{kind}` registered twice");
        }
        self.entries.insert(
            kind,
            RegisteredKind {
                label: label.to_string(),
                static_domain,
                build: Box::new(move || Box::new(factory())),
            },
        );
    }

    /// Instantiate the registered policy for `kind` and wrap it in a fresh
    /// cell holding `default`.
    ///
    /// Panics if `kind` was never registered, or if `P` is not the policy
    /// type it was registered with.
    pub fn create<P: SettingPolicy>(&self, kind: SettingKind, default: P::Value) -> SettingCell<P> {
        let entry = self
            .entries
            .get(&kind)
            .unwrap_or_else(|| panic!("setting kind `{kind}` is not registered"));
        let policy = (entry.build)()
            .downcast::<P>()
            .unwrap_or_else(|_| panic!("setting kind `{kind}` is registered with a different policy type"));
        if entry.static_domain {
            SettingCell::new_static(kind, entry.label.clone(), *policy, default)
        } else {
            SettingCell::new(kind, entry.label.clone(), *policy, default)
        }
    }

    pub fn is_registered(&self, kind: SettingKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Display label for a registered kind.
    pub fn label(&self, kind: SettingKind) -> Option<&str> {
        self.entries.get(&kind).map(|e| e.label.as_str())
    }

    /// Registered kinds in stable listing order.
    pub fn kinds(&self) -> Vec<SettingKind> {
        let mut kinds: Vec<SettingKind> = self.entries.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// The shipped setting kinds. Called once at application startup.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        reg.register(
            SettingKind::Ensemble,
            "Ensemble",
            SingleSelectPolicy::<EnsembleIdent>::new,
        );
        reg.register(
            SettingKind::EnsembleSet,
            "Ensembles",
            MultiSelectPolicy::<EnsembleIdent>::new,
        );
        reg.register(
            SettingKind::Realization,
            "Realization",
            SingleSelectPolicy::<i32>::new,
        );
        reg.register(
            SettingKind::GridLayer,
            "Grid layer",
            SingleSelectPolicy::<usize>::new,
        );
        reg.register(SettingKind::SeismicInline, "Seismic inline", || {
            SliceRangePolicy::new(SliceAxis::Inline)
        });
        reg.register(SettingKind::SeismicCrossline, "Seismic crossline", || {
            SliceRangePolicy::new(SliceAxis::Crossline)
        });
        reg.register(SettingKind::DepthSlice, "Depth slice", NumberSelectPolicy::new);
        reg.register(
            SettingKind::SensitivityCase,
            "Sensitivity case",
            SensitivityPolicy::new,
        );
        reg.register(
            SettingKind::Attributes,
            "Attributes",
            MultiSelectPolicy::<String>::new,
        );
        reg.register_static(SettingKind::ShowObserved, "Show observed", TogglePolicy::new);
        reg
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
