//! Floating-point selection policy (e.g. depth slices).

use ordered_float::OrderedFloat;

use crate::policy::SettingPolicy;

/// Selection from a sampled list of floats.
///
/// Equality and membership go through `OrderedFloat` so NaN payloads and
/// negative zero cannot make a cell oscillate between equal values.
pub struct NumberSelectPolicy;

impl NumberSelectPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NumberSelectPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingPolicy for NumberSelectPolicy {
    type Value = f64;
    type Avail = f64;

    fn is_value_valid(&self, available: &[f64], value: &f64) -> bool {
        available
            .iter()
            .any(|a| OrderedFloat(*a) == OrderedFloat(*value))
    }

    /// Nearest available sample; ties resolve to the lower one. A NaN
    /// current value snaps to the first available sample.
    fn fixup_value(&self, available: &[f64], current: &f64) -> f64 {
        let mut best: Option<f64> = None;
        for &candidate in available {
            let better = match best {
                None => true,
                Some(b) => {
                    if current.is_nan() {
                        false
                    } else {
                        let (dc, db) = ((candidate - current).abs(), (b - current).abs());
                        OrderedFloat(dc) < OrderedFloat(db)
                            || (OrderedFloat(dc) == OrderedFloat(db) && candidate < b)
                    }
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best.unwrap_or(*current)
    }

    fn are_equal(&self, a: &f64, b: &f64) -> bool {
        OrderedFloat(*a) == OrderedFloat(*b)
    }

    fn display_value(&self, value: &f64) -> String {
        format!("{} m", value)
    }
}
