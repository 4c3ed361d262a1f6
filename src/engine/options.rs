//! Options methods for [`AssemblyEngine`].

use std::path::Path;

use super::AssemblyEngine;
use crate::error::ReactorError;
use crate::options::Options;

impl AssemblyEngine {
    /// Validate and replace options, then push camera settings to the
    /// controller. Invalid options leave the engine untouched.
    ///
    /// Layout, pose, color and pick settings are baked into the parts at
    /// load time; they take effect on the next [`load`](Self::load).
    pub fn set_options(&mut self, new: Options) -> Result<(), ReactorError> {
        new.validate()?;
        self.options = new;
        self.camera.apply_options(&self.options.camera);
        Ok(())
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("Loaded preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Name of the last preset loaded, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }
}
