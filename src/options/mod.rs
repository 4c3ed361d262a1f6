//! Centralized tuning options with TOML preset support.
//!
//! Every tweakable number (slot spacing, poses, phase durations, colors,
//! camera, pick toggles, key bindings) lives here. Options serialize to and
//! from TOML so each reactor variant is a named preset file rather than a
//! separate build.

mod camera;
mod colors;
mod layout;
mod picking;
mod poses;
mod timing;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use layout::LayoutOptions;
pub use picking::PickingOptions;
pub use poses::PoseOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::ReactorError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Fuel-unit slot layout.
    pub layout: LayoutOptions,
    /// Housing and lid poses.
    #[schemars(skip)]
    pub poses: PoseOptions,
    /// Phase durations and easing.
    pub timing: TimingOptions,
    /// Part palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Pick toggles per part kind.
    pub picking: PickingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ReactorError> {
        let content = std::fs::read_to_string(path).map_err(ReactorError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ReactorError> {
        toml::from_str(content)
            .map_err(|e| ReactorError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ReactorError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ReactorError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ReactorError::Io)?;
        }
        std::fs::write(path, content).map_err(ReactorError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values that would produce a broken assembly or camera.
    pub fn validate(&self) -> Result<(), ReactorError> {
        let layout = &self.layout;
        for (name, value) in [
            ("layout.assembled_spacing", layout.assembled_spacing),
            ("layout.exploded_spacing", layout.exploded_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ReactorError::InvalidOptions(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !layout.rotation_degrees.is_finite() {
            return Err(ReactorError::InvalidOptions(
                "layout.rotation_degrees must be finite".to_owned(),
            ));
        }

        let opacity = self.timing.housing_exploded_opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ReactorError::InvalidOptions(format!(
                "timing.housing_exploded_opacity must be in [0, 1], got {opacity}"
            )));
        }

        let cam = &self.camera;
        if !(cam.znear > 0.0 && cam.zfar > cam.znear) {
            return Err(ReactorError::InvalidOptions(format!(
                "camera clip range must satisfy 0 < znear < zfar, got {}..{}",
                cam.znear, cam.zfar
            )));
        }
        if !(cam.fovy > 0.0 && cam.fovy < 180.0) {
            return Err(ReactorError::InvalidOptions(format!(
                "camera.fovy must be in (0, 180), got {}",
                cam.fovy
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineCommand;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[timing]
split_ms = 2000
easing = "linear"

[layout]
separate_fuel_units = false
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.timing.split_ms, 2000);
        assert_eq!(opts.timing.easing, EasingFunction::Linear);
        assert!(!opts.layout.separate_fuel_units);
        // Everything else should be default
        assert_eq!(opts.timing.recolor_ms, 600);
        assert_eq!(opts.layout.fuel_units, 7);
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[timing]\nsplit_ms = \"slow\"").unwrap_err();
        assert!(matches!(err, ReactorError::OptionsParse(_)));
    }

    #[test]
    fn validate_rejects_broken_values() {
        assert!(Options::default().validate().is_ok());

        let mut opts = Options::default();
        opts.layout.exploded_spacing = -1.0;
        assert!(matches!(
            opts.validate(),
            Err(ReactorError::InvalidOptions(_))
        ));

        let mut opts = Options::default();
        opts.camera.znear = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.timing.housing_exploded_opacity = 1.5;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyD"),
            Some(EngineCommand::Disassemble)
        );
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(EngineCommand::ClearSelection)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("reactor-view-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.layout.exploded_spacing = 1.6;
        opts.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("compact.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["compact", "wide"]);
        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("layout"));
        assert!(props.contains_key("timing"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("picking"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("poses"));
        assert!(!props.contains_key("keybindings"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("home_eye").is_none());
        assert!(camera.get("znear").is_none());
    }
}
