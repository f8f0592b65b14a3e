//! Wire layer configuration.

use serde::{Deserialize, Serialize};

/// Sizing hints and encoding defaults for the wire layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    /// Entries kept by [`crate::TimestampCache`]; zero is treated as one.
    pub timestamp_cache_capacity: usize,

    /// Written to `manualAnnotation` on encoded actions.
    pub manual_annotation: bool,

    /// Written to `shouldPropagate` on encoded actions.
    pub should_propagate: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            timestamp_cache_capacity: 256,
            manual_annotation: true,
            should_propagate: false,
        }
    }
}
