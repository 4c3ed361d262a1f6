use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::parts::PartKind;

/// Which part kinds can be selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
pub struct PickingOptions {
    /// Housing is selectable.
    #[schemars(title = "Housing")]
    pub housing: bool,
    /// Lid is selectable.
    #[schemars(title = "Lid")]
    pub lid: bool,
    /// Fuel units are selectable.
    #[schemars(title = "Fuel Units")]
    pub fuel_units: bool,
}

impl PickingOptions {
    /// Whether parts of `kind` are interactive.
    #[must_use]
    pub fn is_interactive(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Housing => self.housing,
            PartKind::Lid => self.lid,
            PartKind::FuelUnit { .. } => self.fuel_units,
        }
    }
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            housing: true,
            lid: true,
            fuel_units: true,
        }
    }
}
