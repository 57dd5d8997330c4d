//! Notification topics for setting cell changes.
//!
//! Observers subscribe to individual topics and re-read the corresponding
//! snapshot getter when notified. Callbacks carry no payload: pulling the
//! value from the cell guarantees the observer always sees the latest state,
//! even when several mutations land in one host-loop turn.

/// A category of observable setting cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingTopic {
    /// The effective value changed (re-read `value()`).
    ValueChanged,
    /// The cached validity flag changed (re-read `is_valid()`).
    ValidityChanged,
    /// The available-values domain was replaced (re-read `available_values()`).
    AvailableValuesChanged,
    /// An override was applied, replaced, or released (re-read `overridden_value()`).
    OverriddenChanged,
    /// The loading flag changed (re-read `is_loading()`).
    LoadingStateChanged,
    /// The cell became initialized (re-read `is_initialized()`).
    InitStateChanged,
    /// A persisted value was staged or consumed (re-read `persisted_value()`).
    PersistedStateChanged,
}

impl SettingTopic {
    /// Every topic, in dispatch-dedup index order.
    pub const ALL: [SettingTopic; 7] = [
        SettingTopic::ValueChanged,
        SettingTopic::ValidityChanged,
        SettingTopic::AvailableValuesChanged,
        SettingTopic::OverriddenChanged,
        SettingTopic::LoadingStateChanged,
        SettingTopic::InitStateChanged,
        SettingTopic::PersistedStateChanged,
    ];

    /// Stable index for dedup bitsets.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_all_ordering() {
        for (i, topic) in SettingTopic::ALL.iter().enumerate() {
            assert_eq!(topic.index(), i);
        }
    }
}
