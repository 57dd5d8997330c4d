//! Boolean toggle policy for static-domain settings.

use crate::policy::SettingPolicy;

/// On/off switch. The domain is static (both values always legal), so cells
/// using this policy are created static and never wait for available values.
pub struct TogglePolicy;

impl TogglePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TogglePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingPolicy for TogglePolicy {
    type Value = bool;
    // Unused: the domain never arrives from outside.
    type Avail = bool;

    fn is_value_valid(&self, _available: &[bool], _value: &bool) -> bool {
        true
    }

    fn fixup_value(&self, _available: &[bool], current: &bool) -> bool {
        *current
    }

    fn display_value(&self, value: &bool) -> String {
        if *value { "On" } else { "Off" }.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_valid() {
        let policy = TogglePolicy::new();
        assert!(policy.is_value_valid(&[], &true));
        assert!(policy.is_value_valid(&[], &false));
    }

    #[test]
    fn test_display() {
        let policy = TogglePolicy::new();
        assert_eq!(policy.display_value(&true), "On");
        assert_eq!(policy.display_value(&false), "Off");
    }
}
