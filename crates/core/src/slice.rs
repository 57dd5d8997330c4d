//! Seismic slice axes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis along which a seismic cube is sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceAxis {
    Inline,
    Crossline,
    Depth,
}

impl SliceAxis {
    /// Short label used in setting controls.
    pub fn label(&self) -> &'static str {
        match self {
            SliceAxis::Inline => "Inline",
            SliceAxis::Crossline => "Crossline",
            SliceAxis::Depth => "Depth",
        }
    }
}

impl fmt::Display for SliceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
