//! The single-setting reactive state holder.
//!
//! A `SettingCell` reconciles four value sources — user edits, an external
//! override, a staged persisted value, and the policy's fixup — into one
//! effective value, and notifies observers per topic with no redundant
//! notifications.
//!
//! # Effective value precedence
//!
//! ```text
//! overridden  →  persisted (staged)  →  raw
//! ```
//!
//! Exactly one slot is active at a time. Changing which slot is active never
//! triggers fixup by itself: fixup only ever rewrites `raw`.
//!
//! # Invariants
//!
//! 1. `is_valid` equals `policy.is_value_valid(available, effective)` after
//!    every mutation completes. It is never stale across an observable
//!    transition.
//! 2. A staged persisted value is cleared exactly once: when judged valid
//!    against the current available values, or when the user explicitly
//!    changes the value. It cannot come back.
//! 3. All state is final before any observer callback fires; notifications
//!    are collected during the mutation and dispatched at its end, each
//!    topic at most once per mutation.

use std::fmt;

use crate::cell_id::CellId;
use crate::events::SettingTopic;
use crate::kind::SettingKind;
use crate::policy::SettingPolicy;
use crate::pubsub::{PublishSubscribeHub, SubscriptionId};

/// Reactive state holder for one logical setting of one module instance.
///
/// Created once per module instance (never per render) and discarded with
/// it. `available` and `overridden` may be replaced arbitrarily often during
/// that lifetime; `raw`/`persisted` transitions come only from user actions,
/// programmatic defaults, and persistence restore.
pub struct SettingCell<P: SettingPolicy> {
    id: CellId,
    kind: SettingKind,
    label: String,
    policy: P,
    raw: P::Value,
    persisted: Option<P::Value>,
    overridden: Option<P::Value>,
    available: Vec<P::Avail>,
    is_valid: bool,
    is_loading: bool,
    initialized: bool,
    static_domain: bool,
    revision: u64,
    hub: PublishSubscribeHub<SettingTopic>,
}

impl<P: SettingPolicy> SettingCell<P> {
    /// Create a cell whose domain arrives asynchronously. The cell starts
    /// uninitialized and (typically) invalid until `set_available_values`
    /// first runs.
    pub fn new(kind: SettingKind, label: impl Into<String>, policy: P, default: P::Value) -> Self {
        Self::build(kind, label.into(), policy, default, false)
    }

    /// Create a cell with a static domain: it never depends on external
    /// data and is initialized from birth.
    pub fn new_static(
        kind: SettingKind,
        label: impl Into<String>,
        policy: P,
        default: P::Value,
    ) -> Self {
        Self::build(kind, label.into(), policy, default, true)
    }

    fn build(
        kind: SettingKind,
        label: String,
        policy: P,
        default: P::Value,
        static_domain: bool,
    ) -> Self {
        let is_valid = policy.is_value_valid(&[], &default);
        Self {
            id: CellId::next(),
            kind,
            label,
            policy,
            raw: default,
            persisted: None,
            overridden: None,
            available: Vec::new(),
            is_valid,
            is_loading: false,
            initialized: static_domain,
            static_domain,
            revision: 0,
            hub: PublishSubscribeHub::new(),
        }
    }

    // ===== Snapshot getters (pull side of the observer contract) =====

    /// The effective value: `overridden` → staged `persisted` → `raw`.
    pub fn value(&self) -> &P::Value {
        self.overridden
            .as_ref()
            .or(self.persisted.as_ref())
            .unwrap_or(&self.raw)
    }

    pub fn raw_value(&self) -> &P::Value {
        &self.raw
    }

    pub fn persisted_value(&self) -> Option<&P::Value> {
        self.persisted.as_ref()
    }

    pub fn overridden_value(&self) -> Option<&P::Value> {
        self.overridden.as_ref()
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden.is_some()
    }

    pub fn available_values(&self) -> &[P::Avail] {
        &self.available
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn kind(&self) -> SettingKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Monotonic counter bumped on every observable change. Derived nodes
    /// use it as their memoization fingerprint input.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Human-readable rendering of the effective value.
    pub fn display_value(&self) -> String {
        self.policy.display_value(self.value())
    }

    // ===== Mutations =====

    /// Set the value from an explicit user action.
    ///
    /// A value equal to the current `raw` is a no-op (this is what breaks
    /// the value-change → notify → UI → set-value cycle). Otherwise any
    /// staged persisted value is discarded: the user has spoken.
    pub fn set_value(&mut self, value: P::Value) {
        if self.policy.are_equal(&self.raw, &value) {
            return;
        }
        let mut pending = Vec::new();
        if self.persisted.take().is_some() {
            pending.push(SettingTopic::PersistedStateChanged);
        }
        self.raw = value;
        self.refresh_validity(&mut pending);
        pending.push(SettingTopic::ValueChanged);
        self.dispatch(pending);
    }

    /// Replace the available-values domain.
    ///
    /// A domain equal to the current one on an already-initialized cell is a
    /// no-op with zero notifications (this is what keeps unrelated
    /// re-renders from causing notification storms). Otherwise: fix up an
    /// invalid raw value, promote a staged persisted value that became
    /// valid, and notify only what actually changed.
    pub fn set_available_values(&mut self, values: Vec<P::Avail>) {
        if self.initialized && values == self.available {
            return;
        }
        let before_value = self.value().clone();
        let mut pending = Vec::new();

        self.available = values;
        let first_init = !self.initialized;
        self.initialized = true;

        self.maybe_fixup_value();
        self.try_promote_persisted(&mut pending);
        self.refresh_validity(&mut pending);

        if first_init {
            pending.push(SettingTopic::InitStateChanged);
        }
        pending.push(SettingTopic::AvailableValuesChanged);
        if !self.policy.are_equal(self.value(), &before_value) {
            pending.push(SettingTopic::ValueChanged);
        }
        self.dispatch(pending);
    }

    /// Apply or release an externally forced value (cross-module sync).
    ///
    /// While an override is present it outranks everything and the cell is
    /// read-only from the UI's perspective. Releasing it lets a staged
    /// persisted value regain priority and gives fixup a chance to repair
    /// the raw value.
    pub fn set_overridden(&mut self, value: Option<P::Value>) {
        let unchanged = match (&self.overridden, &value) {
            (None, None) => true,
            (Some(a), Some(b)) => self.policy.are_equal(a, b),
            _ => false,
        };
        if unchanged {
            return;
        }
        let before_value = self.value().clone();
        let releasing = value.is_none();
        self.overridden = value;

        let mut pending = vec![SettingTopic::OverriddenChanged];
        if releasing {
            self.try_promote_persisted(&mut pending);
            self.maybe_fixup_value();
        }
        self.refresh_validity(&mut pending);
        if !self.policy.are_equal(self.value(), &before_value) {
            pending.push(SettingTopic::ValueChanged);
        }
        self.dispatch(pending);
    }

    /// Track whether the domain producer is still resolving.
    pub fn set_loading(&mut self, loading: bool) {
        if self.is_loading == loading {
            return;
        }
        self.is_loading = loading;
        self.dispatch(vec![SettingTopic::LoadingStateChanged]);
    }

    /// Persisted string form of the effective value.
    pub fn serialize_value(&self) -> Result<String, serde_json::Error> {
        self.policy.serialize_value(self.value())
    }

    /// Stage a restored value. It becomes effective immediately (shadowing
    /// `raw`) but is only *consumed* — moved into `raw` — once judged valid
    /// against the current available values. Malformed input is ignored:
    /// old snapshots must never corrupt a cell.
    pub fn deserialize_value(&mut self, raw: &str) {
        let Ok(value) = self.policy.deserialize_value(raw) else {
            return;
        };
        let before_value = self.value().clone();
        self.persisted = Some(value);
        let mut pending = vec![SettingTopic::PersistedStateChanged];
        self.try_promote_persisted(&mut pending);
        self.refresh_validity(&mut pending);
        if !self.policy.are_equal(self.value(), &before_value) {
            pending.push(SettingTopic::ValueChanged);
        }
        self.dispatch(pending);
    }

    // ===== Observation =====

    /// Subscribe to one topic. The callback takes no payload; re-read the
    /// matching snapshot getter.
    pub fn subscribe(
        &mut self,
        topic: SettingTopic,
        callback: impl FnMut() + 'static,
    ) -> SubscriptionId {
        self.hub.subscribe(topic, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }

    // ===== Internal helpers =====

    /// Fixup fires only against `raw`, and only when there is something
    /// sensible to do: never while a persisted value is staged (persistence
    /// outranks fixup — a restorable user choice is not silently
    /// discarded), never on an empty domain, never when already valid, and
    /// a candidate equal to the current value is a no-op.
    fn maybe_fixup_value(&mut self) -> bool {
        if self.persisted.is_some() {
            return false;
        }
        if self.available.is_empty() {
            return false;
        }
        if self.policy.is_value_valid(&self.available, &self.raw) {
            return false;
        }
        let candidate = self.policy.fixup_value(&self.available, &self.raw);
        if self.policy.are_equal(&candidate, &self.raw) {
            return false;
        }
        self.raw = candidate;
        true
    }

    /// Consume the staged persisted value if it is now valid against the
    /// current domain. This is the only place (besides an explicit user
    /// `set_value`) where `persisted` is cleared.
    fn try_promote_persisted(&mut self, pending: &mut Vec<SettingTopic>) {
        if !self.initialized {
            return;
        }
        let valid = match &self.persisted {
            Some(p) => self.policy.is_value_valid(&self.available, p),
            None => return,
        };
        if valid {
            if let Some(p) = self.persisted.take() {
                self.raw = p;
                pending.push(SettingTopic::PersistedStateChanged);
            }
        }
    }

    fn refresh_validity(&mut self, pending: &mut Vec<SettingTopic>) {
        let now_valid = self.policy.is_value_valid(&self.available, self.value());
        if now_valid != self.is_valid {
            self.is_valid = now_valid;
            pending.push(SettingTopic::ValidityChanged);
        }
    }

    /// Dispatch collected notifications after all state is final. Each
    /// topic fires at most once per mutation; intermediate states within
    /// one mutation are not separately observable.
    fn dispatch(&mut self, pending: Vec<SettingTopic>) {
        if pending.is_empty() {
            return;
        }
        self.revision += 1;
        let mut seen = [false; SettingTopic::ALL.len()];
        for topic in pending {
            if seen[topic.index()] {
                continue;
            }
            seen[topic.index()] = true;
            self.hub.notify(topic);
        }
    }
}

impl<P: SettingPolicy> fmt::Debug for SettingCell<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingCell")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("raw", &self.raw)
            .field("persisted", &self.persisted)
            .field("overridden", &self.overridden)
            .field("available", &self.available.len())
            .field("is_valid", &self.is_valid)
            .field("is_loading", &self.is_loading)
            .field("initialized", &self.initialized)
            .field("revision", &self.revision)
            .finish()
    }
}
