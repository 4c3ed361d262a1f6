use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Fuel-unit slot layout in the assembled and exploded arrangements.
pub struct LayoutOptions {
    /// Number of fuel units loaded into the assembly.
    #[schemars(title = "Fuel Units", range(min = 0, max = 64))]
    pub fuel_units: usize,
    /// Slot spacing while assembled.
    #[schemars(title = "Assembled Spacing", range(min = 0.0, max = 10.0), extend("step" = 0.01))]
    pub assembled_spacing: f32,
    /// Slot spacing once separated.
    #[schemars(title = "Exploded Spacing", range(min = 0.0, max = 20.0), extend("step" = 0.05))]
    pub exploded_spacing: f32,
    /// Rotation of the ring around the vertical axis, in degrees.
    #[schemars(title = "Ring Rotation", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub rotation_degrees: f32,
    /// Spread the fuel units after the housing and lid split.
    #[schemars(title = "Separate Fuel Units")]
    pub separate_fuel_units: bool,
    /// World position of the group's central slot.
    #[schemars(skip)]
    pub group_center: [f32; 3],
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            fuel_units: 7,
            assembled_spacing: 0.32,
            exploded_spacing: 1.1,
            rotation_degrees: 30.0,
            separate_fuel_units: true,
            group_center: [0.0; 3],
        }
    }
}
