//! Drives a full disassemble → select → assemble cycle without a window,
//! logging every state change.
//!
//! ```text
//! RUST_LOG=debug cargo run --example headless [manifest.toml] [preset.toml]
//! ```
//!
//! Without a manifest a small built-in model is used.

use std::path::Path;

use glam::Vec3;
use reactor_view::engine::{boot, AssemblyEngine, EngineCommand, Session};
use reactor_view::error::ReactorError;
use reactor_view::loader::{AssetLoader, ManifestLoader, MemoryLoader};
use reactor_view::markers::project;
use reactor_view::options::Options;
use reactor_view::parts::{MeshNode, MeshShape, PartInfo, PartSubtree};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_micros(16_667);

fn part(title: &str, description: &str, shape: MeshShape) -> PartSubtree {
    PartSubtree {
        info: PartInfo {
            title: title.to_owned(),
            description: description.to_owned(),
            facts: Vec::new(),
        },
        meshes: vec![MeshNode {
            name: "body".to_owned(),
            shape,
        }],
    }
}

fn builtin_model() -> MemoryLoader {
    MemoryLoader::new()
        .with_part(
            "housing",
            part(
                "Reactor vessel",
                "Steel pressure vessel holding the core.",
                MeshShape::Box {
                    min: Vec3::new(-1.0, 0.0, -1.0),
                    max: Vec3::new(1.0, 1.5, 1.0),
                },
            ),
        )
        .with_part(
            "lid",
            part(
                "Vessel head",
                "Removable closure head.",
                MeshShape::Box {
                    min: Vec3::new(-0.8, 0.0, -0.8),
                    max: Vec3::new(0.8, 0.2, 0.8),
                },
            ),
        )
        .with_part(
            "fuel_unit",
            part(
                "Fuel assembly",
                "Bundle of fuel rods.",
                MeshShape::Sphere {
                    center: Vec3::new(0.0, 0.5, 0.0),
                    radius: 0.12,
                },
            ),
        )
}

fn run_until_idle(engine: &mut AssemblyEngine, mut now: Instant) -> Instant {
    engine.tick(now);
    while engine.is_animating() {
        now += FRAME;
        engine.tick(now);
    }
    now
}

fn main() -> Result<(), ReactorError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut loader: Box<dyn AssetLoader> = match args.next() {
        Some(manifest) => Box::new(ManifestLoader::from_path(Path::new(&manifest))?),
        None => Box::new(builtin_model()),
    };
    let options = match args.next() {
        Some(preset) => Options::load(Path::new(&preset))?,
        None => Options::default(),
    };

    let mut engine = match boot(loader.as_mut(), options) {
        Session::Ready(engine) => engine,
        Session::Failed { status, error } => {
            log::error!("{status}");
            return Err(error);
        }
    };
    log::info!("status: {}", engine.status());

    let _ = engine.execute(EngineCommand::Disassemble);
    let now = run_until_idle(&mut engine, Instant::now());
    log::info!("status: {}", engine.status());

    let targets: Vec<_> = engine
        .registry()
        .fuel_units()
        .filter_map(|unit| engine.registry().world_bounds(unit.id))
        .map(|bounds| project(bounds.center(), engine.camera(), engine.viewport()))
        .filter(|screen| screen.visible)
        .collect();
    for screen in targets {
        let _ = engine.execute(EngineCommand::SelectAt {
            x: screen.x.round() as i32,
            y: screen.y.round() as i32,
        });
        if let Some(info) = engine.selected_info() {
            log::info!("picked '{}': {}", info.title, info.description);
        }
    }

    for marker in engine.markers().iter() {
        log::debug!(
            "marker '{}' at ({:.0}, {:.0}) visible={}",
            marker.label,
            marker.screen.x,
            marker.screen.y,
            marker.screen.visible
        );
    }

    let _ = engine.execute(EngineCommand::Assemble);
    let _ = run_until_idle(&mut engine, now);
    log::info!("status: {}", engine.status());
    Ok(())
}
