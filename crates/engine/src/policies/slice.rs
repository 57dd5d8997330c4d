//! Parameterized slice-range policy.
//!
//! One policy type covers inline, crossline, and any other integer-numbered
//! slice axis; the axis is a constructor argument, not a separate type. The
//! fixup clamps to the nearest available number instead of jumping to the
//! first, so a survey refetch that shifts the range keeps the user close to
//! where they were.

use fjordviz_core::SliceAxis;

use crate::policy::SettingPolicy;

/// Integer slice number constrained to a sampled axis.
pub struct SliceRangePolicy {
    axis: SliceAxis,
}

impl SliceRangePolicy {
    pub fn new(axis: SliceAxis) -> Self {
        Self { axis }
    }

    pub fn axis(&self) -> SliceAxis {
        self.axis
    }
}

impl SettingPolicy for SliceRangePolicy {
    type Value = i32;
    type Avail = i32;

    fn is_value_valid(&self, available: &[i32], value: &i32) -> bool {
        available.contains(value)
    }

    /// Nearest available number; ties resolve to the lower one.
    fn fixup_value(&self, available: &[i32], current: &i32) -> i32 {
        let mut best: Option<i32> = None;
        for &candidate in available {
            let better = match best {
                None => true,
                Some(b) => {
                    let (dc, db) = (
                        (candidate as i64 - *current as i64).abs(),
                        (b as i64 - *current as i64).abs(),
                    );
                    dc < db || (dc == db && candidate < b)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best.unwrap_or(*current)
    }

    fn display_value(&self, value: &i32) -> String {
        format!("{} {}", self.axis.label(), value)
    }
}
