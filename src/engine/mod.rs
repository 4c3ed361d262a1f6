//! The assembly engine: state machine, choreography and interaction.
//!
//! [`AssemblyEngine`] owns every piece of engine state (parts, the running
//! phase sequence, picker, markers, camera and options). The host drives
//! it with [`tick`](AssemblyEngine::tick) once per frame and forwards UI
//! requests through [`execute`](AssemblyEngine::execute).

mod accessors;
mod choreography;
mod command;
mod construction;
mod input;
mod options;
mod state;

use glam::UVec2;
use web_time::Instant;

pub use self::choreography::{assembly_phases, disassembly_phases};
pub use self::command::EngineCommand;
pub use self::construction::{boot, Session};
pub use self::state::{AssemblyState, Status};
use crate::animation::{PhaseKind, Sequence, SequenceEvent};
use crate::camera::CameraController;
use crate::markers::MarkerSet;
use crate::options::Options;
use crate::parts::{PartId, PartRegistry};
use crate::picking::Picker;

/// Viewport assumed until the host reports its size.
const DEFAULT_VIEWPORT: UVec2 = UVec2::new(1280, 720);

/// One explorable assembly.
pub struct AssemblyEngine {
    options: Options,
    registry: PartRegistry,
    state: AssemblyState,
    status: Status,
    /// The running transition. At most one exists at a time.
    sequence: Option<Sequence>,
    /// Whether the fuel units sit at their wide layout. Follows the
    /// Separate and Regroup phases actually played.
    fuel_units_separated: bool,
    picker: Picker,
    markers: MarkerSet,
    camera: CameraController,
    viewport: UVec2,
    selected: Option<PartId>,
    active_preset: Option<String>,
}

impl AssemblyEngine {
    /// Advance the running transition to `now` and refresh markers.
    ///
    /// Call once per rendered frame.
    pub fn tick(&mut self, now: Instant) {
        let events = match self.sequence.as_mut() {
            Some(sequence) => sequence.tick(&mut self.registry, now),
            None => Vec::new(),
        };
        for event in events {
            self.on_sequence_event(event);
        }

        if !self.markers.is_empty() {
            self.markers
                .update(&self.registry, self.camera.camera(), self.viewport);
        }
    }

    fn on_sequence_event(&mut self, event: SequenceEvent) {
        match (self.state, event) {
            (_, SequenceEvent::PhaseStarted(kind)) => {
                log::debug!("{} phase running", kind);
            }
            (
                AssemblyState::Disassembling,
                SequenceEvent::PhaseCompleted(PhaseKind::Split),
            ) => {
                self.status = Status::Disassembled;
            }
            (_, SequenceEvent::PhaseCompleted(PhaseKind::Separate)) => {
                self.fuel_units_separated = true;
            }
            (_, SequenceEvent::PhaseCompleted(PhaseKind::Regroup)) => {
                self.fuel_units_separated = false;
            }
            (_, SequenceEvent::PhaseCompleted(_)) => {}
            (AssemblyState::Disassembling, SequenceEvent::Finished) => {
                self.sequence = None;
                if self.fuel_units_separated {
                    self.set_state(
                        AssemblyState::GroupSeparated,
                        Status::FuelUnitsSeparated,
                    );
                } else {
                    self.set_state(AssemblyState::Disassembled, Status::Disassembled);
                }
                self.markers.populate(&self.registry);
            }
            (AssemblyState::Assembling, SequenceEvent::Finished) => {
                self.sequence = None;
                self.set_state(AssemblyState::Assembled, Status::Assembled);
            }
            (state, SequenceEvent::Finished) => {
                log::warn!("sequence finished while {state}");
                self.sequence = None;
            }
        }
    }

    /// Move to `state`, updating the status line and picker.
    fn set_state(&mut self, state: AssemblyState, status: Status) {
        log::info!("assembly {} -> {} ({status})", self.state, state);
        self.state = state;
        self.status = status;
        self.picker.set_enabled(state.allows_picking());
    }

    /// Dispatch a UI command. Returns whether it did any work.
    pub fn execute(&mut self, command: EngineCommand) -> bool {
        match command {
            EngineCommand::Disassemble => self.disassemble(),
            EngineCommand::Assemble => self.assemble(),
            EngineCommand::SelectAt { x, y } => self.select_at(x, y),
            EngineCommand::ClearSelection => self.clear_selection(),
            EngineCommand::ResetView => {
                self.reset_view();
                true
            }
            EngineCommand::RotateCamera { delta } => {
                self.camera.rotate(delta);
                true
            }
            EngineCommand::PanCamera { delta } => {
                self.camera.pan(delta);
                true
            }
            EngineCommand::Zoom { delta } => {
                self.camera.zoom(delta);
                true
            }
            EngineCommand::Resize { width, height } => self.resize(width, height),
        }
    }
}
