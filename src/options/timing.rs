use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Phase durations and easing.
pub struct TimingOptions {
    /// Color change at the start of disassembly and end of assembly.
    #[schemars(title = "Recolor (ms)", range(min = 0, max = 10000))]
    pub recolor_ms: u64,
    /// Housing drop / lid lift, and their return.
    #[schemars(title = "Split (ms)", range(min = 0, max = 10000))]
    pub split_ms: u64,
    /// Pause between the split finishing and the fuel units moving.
    #[schemars(title = "Separation Delay (ms)", range(min = 0, max = 10000))]
    pub separation_delay_ms: u64,
    /// Fuel-unit spread and regroup.
    #[schemars(title = "Separate (ms)", range(min = 0, max = 10000))]
    pub separate_ms: u64,
    /// Easing curve shared by every phase.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Housing opacity while exploded.
    #[schemars(title = "Exploded Housing Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub housing_exploded_opacity: f32,
}

impl TimingOptions {
    /// Recolor phase duration.
    #[must_use]
    pub fn recolor(&self) -> Duration {
        Duration::from_millis(self.recolor_ms)
    }

    /// Split/close phase duration.
    #[must_use]
    pub fn split(&self) -> Duration {
        Duration::from_millis(self.split_ms)
    }

    /// Delay before the separate phase.
    #[must_use]
    pub fn separation_delay(&self) -> Duration {
        Duration::from_millis(self.separation_delay_ms)
    }

    /// Separate/regroup phase duration.
    #[must_use]
    pub fn separate(&self) -> Duration {
        Duration::from_millis(self.separate_ms)
    }
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            recolor_ms: 600,
            split_ms: 1500,
            separation_delay_ms: 400,
            separate_ms: 1200,
            easing: EasingFunction::DEFAULT,
            housing_exploded_opacity: 0.35,
        }
    }
}
