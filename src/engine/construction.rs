//! Loading parts and building the engine.

use glam::Vec3;

use super::{AssemblyEngine, AssemblyState, Status, DEFAULT_VIEWPORT};
use crate::camera::CameraController;
use crate::error::ReactorError;
use crate::layout;
use crate::loader::AssetLoader;
use crate::markers::MarkerSet;
use crate::options::Options;
use crate::parts::{PartKind, PartPose, PartRegistry, PartSpec, PartSubtree};
use crate::picking::Picker;

/// Outcome of [`boot`].
pub enum Session {
    /// Parts loaded; the engine is assembled and idle.
    Ready(Box<AssemblyEngine>),
    /// Loading failed. Terminal: there is no retry.
    Failed {
        /// Status line to show (`Status::Error`).
        status: Status,
        /// What went wrong.
        error: ReactorError,
    },
}

impl Session {
    /// Status line for either outcome.
    #[must_use]
    pub fn status(&self) -> &Status {
        match self {
            Self::Ready(engine) => engine.status(),
            Self::Failed { status, .. } => status,
        }
    }
}

/// Load every part through `loader` and build an engine, turning any
/// failure into a terminal [`Session::Failed`].
pub fn boot(loader: &mut dyn AssetLoader, options: Options) -> Session {
    match AssemblyEngine::load(loader, options) {
        Ok(engine) => Session::Ready(Box::new(engine)),
        Err(error) => {
            log::error!("failed to load assembly: {error}");
            Session::Failed {
                status: Status::Error(error.to_string()),
                error,
            }
        }
    }
}

impl AssemblyEngine {
    /// Validate `options`, load the housing, lid and fuel-unit models, and
    /// compute every part's assembled and exploded pose.
    ///
    /// The fuel-unit model is loaded once and shared by every slot.
    pub fn load(
        loader: &mut dyn AssetLoader,
        options: Options,
    ) -> Result<Self, ReactorError> {
        options.validate()?;

        let housing = loader.load_part(PartKind::Housing.asset_name())?;
        let lid = loader.load_part(PartKind::Lid.asset_name())?;
        let fuel_count = options.layout.fuel_units;
        let fuel_unit = if fuel_count > 0 {
            Some(loader.load_part(PartKind::FuelUnit { index: 0 }.asset_name())?)
        } else {
            None
        };

        let specs = part_specs(&options, housing, lid, fuel_unit.as_ref());
        let registry = PartRegistry::from_specs(specs)?;
        log::info!(
            "assembly loaded: {} parts, {} meshes",
            registry.len(),
            registry.meshes().count()
        );
        Ok(Self::from_registry(registry, options))
    }

    /// Engine over an already-built registry, assembled and idle.
    #[must_use]
    pub fn from_registry(registry: PartRegistry, options: Options) -> Self {
        let camera = CameraController::new(&options.camera, DEFAULT_VIEWPORT);
        Self {
            options,
            registry,
            state: AssemblyState::Assembled,
            status: Status::Assembled,
            sequence: None,
            fuel_units_separated: false,
            picker: Picker::new(),
            markers: MarkerSet::new(),
            camera,
            viewport: DEFAULT_VIEWPORT,
            selected: None,
            active_preset: None,
        }
    }
}

fn part_specs(
    options: &Options,
    housing: PartSubtree,
    lid: PartSubtree,
    fuel_unit: Option<&PartSubtree>,
) -> Vec<PartSpec> {
    let poses = &options.poses;
    let spec = |kind: PartKind, subtree: PartSubtree, pose: PartPose| PartSpec {
        kind,
        subtree,
        pose,
        base_color: options.colors.neutral,
        highlight_color: options.colors.highlight(kind),
        interactive: options.picking.is_interactive(kind),
    };

    let housing_origin = Vec3::from(poses.housing_origin);
    let lid_origin = Vec3::from(poses.lid_origin);
    let mut specs = vec![
        spec(
            PartKind::Housing,
            housing,
            PartPose {
                assembled: housing_origin,
                exploded: housing_origin + Vec3::from(poses.housing_drop),
            },
        ),
        spec(
            PartKind::Lid,
            lid,
            PartPose {
                assembled: lid_origin,
                exploded: lid_origin + Vec3::from(poses.lid_lift),
            },
        ),
    ];

    let Some(fuel_unit) = fuel_unit else {
        return specs;
    };
    let layout_opts = &options.layout;
    let center = Vec3::from(layout_opts.group_center);
    let tight = layout::generate(
        layout_opts.fuel_units,
        layout_opts.assembled_spacing,
        layout_opts.rotation_degrees,
    );
    let wide = layout::generate(
        layout_opts.fuel_units,
        layout_opts.exploded_spacing,
        layout_opts.rotation_degrees,
    );

    for (index, (near, far)) in tight.into_iter().zip(wide).enumerate() {
        let mut subtree = fuel_unit.clone();
        subtree.info.title = format!("{} {}", subtree.info.title, index + 1);
        specs.push(spec(
            PartKind::FuelUnit { index },
            subtree,
            PartPose {
                assembled: center + near,
                exploded: center + far,
            },
        ));
    }
    specs
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::engine::tests::test_loader;
    use crate::loader::MemoryLoader;

    #[test]
    fn poses_follow_layout_and_offsets() {
        let options = Options::default();
        let engine = AssemblyEngine::load(&mut test_loader(), options.clone()).unwrap();
        let reg = engine.registry();

        assert_eq!(reg.fuel_units().count(), 7);
        let wide = layout::generate(7, options.layout.exploded_spacing, 30.0);
        for (unit, slot) in reg.fuel_units().zip(&wide) {
            assert_relative_eq!(unit.pose.exploded.x, slot.x, epsilon = 1e-6);
            assert_relative_eq!(unit.pose.exploded.z, slot.z, epsilon = 1e-6);
            assert_eq!(unit.transform.position, unit.pose.assembled);
        }
        assert_eq!(reg.housing().pose.exploded, Vec3::new(0.0, -2.2, 0.0));
        assert_eq!(reg.lid().pose.exploded, Vec3::new(0.0, 2.4, 0.0));
        assert_eq!(reg.housing().color, options.colors.neutral);
        assert_eq!(reg.lid().highlight_color, options.colors.lid);
    }

    #[test]
    fn fuel_units_get_numbered_titles() {
        let engine = AssemblyEngine::load(&mut test_loader(), Options::default()).unwrap();
        let titles: Vec<_> = engine
            .registry()
            .fuel_units()
            .map(|u| u.info.title.clone())
            .collect();
        assert_eq!(titles[0], "Fuel assembly 1");
        assert_eq!(titles[6], "Fuel assembly 7");
    }

    #[test]
    fn missing_part_fails_boot_with_error_status() {
        let mut loader = MemoryLoader::new();
        let session = boot(&mut loader, Options::default());
        match session {
            Session::Failed { status, error } => {
                assert!(matches!(error, ReactorError::AssetLoad { .. }));
                assert_eq!(
                    status.to_string(),
                    "Error: failed to load part 'housing': not registered"
                );
            }
            Session::Ready(_) => panic!("boot should fail without parts"),
        }
    }

    #[test]
    fn invalid_options_fail_before_loading() {
        let mut options = Options::default();
        options.camera.zfar = 0.0;
        let session = boot(&mut test_loader(), options);
        assert!(matches!(
            session,
            Session::Failed {
                error: ReactorError::InvalidOptions(_),
                ..
            }
        ));
    }

    #[test]
    fn zero_fuel_units_is_allowed() {
        let mut options = Options::default();
        options.layout.fuel_units = 0;
        let session = boot(&mut test_loader(), options);
        assert_eq!(*session.status(), Status::Assembled);
    }
}
