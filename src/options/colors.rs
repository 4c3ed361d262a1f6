use serde::{Deserialize, Serialize};

use crate::parts::PartKind;
use crate::util::color::{Rgb, NEUTRAL_GRAY};

/// Assembled (neutral) and exploded (vibrant) part colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Color of every part while assembled.
    pub neutral: Rgb,
    /// Exploded housing color.
    pub housing: Rgb,
    /// Exploded lid color.
    pub lid: Rgb,
    /// Exploded fuel-unit color.
    pub fuel_unit: Rgb,
}

impl ColorOptions {
    /// Vibrant color for a part kind.
    #[must_use]
    pub fn highlight(&self, kind: PartKind) -> Rgb {
        match kind {
            PartKind::Housing => self.housing,
            PartKind::Lid => self.lid,
            PartKind::FuelUnit { .. } => self.fuel_unit,
        }
    }
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            neutral: NEUTRAL_GRAY,
            housing: [0.20, 0.47, 0.86],
            lid: [0.93, 0.55, 0.16],
            fuel_unit: [0.18, 0.80, 0.44],
        }
    }
}
