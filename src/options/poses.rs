use serde::{Deserialize, Serialize};

/// Housing and lid placement. Offsets are added to the assembled origins
/// to get the exploded poses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PoseOptions {
    /// Assembled housing position.
    pub housing_origin: [f32; 3],
    /// Assembled lid position.
    pub lid_origin: [f32; 3],
    /// Housing displacement when exploded.
    pub housing_drop: [f32; 3],
    /// Lid displacement when exploded.
    pub lid_lift: [f32; 3],
}

impl Default for PoseOptions {
    fn default() -> Self {
        Self {
            housing_origin: [0.0; 3],
            lid_origin: [0.0; 3],
            housing_drop: [0.0, -2.2, 0.0],
            lid_lift: [0.0, 2.4, 0.0],
        }
    }
}
