//! Phase lists for both transitions, and the commands that start them.
//!
//! The phase builders are pure: they read target poses and colors from the
//! registry and options and return data. Start values are captured later,
//! when each phase actually starts.

use super::{AssemblyEngine, AssemblyState, Status};
use crate::animation::{Phase, PhaseKind, Sequence, Track};
use crate::options::Options;
use crate::parts::PartRegistry;

/// Recolor → split → (delay) → separate.
#[must_use]
pub fn disassembly_phases(registry: &PartRegistry, options: &Options) -> Vec<Phase> {
    let timing = &options.timing;
    let housing = registry.housing();
    let lid = registry.lid();

    let mut phases = vec![
        Phase::new(PhaseKind::Recolor, timing.recolor(), timing.easing).with_tracks(
            registry
                .all()
                .map(|part| Track::color(part.id, part.highlight_color)),
        ),
        Phase::new(PhaseKind::Split, timing.split(), timing.easing).with_tracks([
            Track::position(housing.id, housing.pose.exploded),
            Track::opacity(housing.id, timing.housing_exploded_opacity),
            Track::position(lid.id, lid.pose.exploded),
        ]),
    ];

    if options.layout.separate_fuel_units {
        phases.push(
            Phase::new(PhaseKind::Separate, timing.separate(), timing.easing)
                .with_tracks(
                    registry
                        .fuel_units()
                        .map(|unit| Track::position(unit.id, unit.pose.exploded)),
                )
                .after(timing.separation_delay()),
        );
    }
    phases
}

/// (Regroup) → close → restore colors. Regroup only runs when the fuel
/// units were spread out.
#[must_use]
pub fn assembly_phases(
    registry: &PartRegistry,
    options: &Options,
    separated: bool,
) -> Vec<Phase> {
    let timing = &options.timing;
    let housing = registry.housing();
    let lid = registry.lid();

    let mut phases = Vec::with_capacity(3);
    if separated {
        phases.push(
            Phase::new(PhaseKind::Regroup, timing.separate(), timing.easing).with_tracks(
                registry
                    .fuel_units()
                    .map(|unit| Track::position(unit.id, unit.pose.assembled)),
            ),
        );
    }
    phases.push(
        Phase::new(PhaseKind::Close, timing.split(), timing.easing).with_tracks([
            Track::position(housing.id, housing.pose.assembled),
            Track::opacity(housing.id, 1.0),
            Track::position(lid.id, lid.pose.assembled),
        ]),
    );
    phases.push(
        Phase::new(PhaseKind::Restore, timing.recolor(), timing.easing)
            .with_tracks(registry.all().map(|part| Track::color(part.id, part.base_color))),
    );
    phases
}

impl AssemblyEngine {
    /// Start opening the assembly. Returns `false` (and does nothing)
    /// unless the assembly is at rest in [`AssemblyState::Assembled`].
    pub fn disassemble(&mut self) -> bool {
        if self.state != AssemblyState::Assembled {
            log::debug!("disassemble ignored while {}", self.state);
            return false;
        }
        let phases = disassembly_phases(&self.registry, &self.options);
        self.sequence = Some(Sequence::new(phases));
        self.set_state(AssemblyState::Disassembling, Status::Disassembling);
        true
    }

    /// Start closing the assembly. Returns `false` (and does nothing)
    /// unless it is at rest in [`AssemblyState::Disassembled`] or
    /// [`AssemblyState::GroupSeparated`].
    pub fn assemble(&mut self) -> bool {
        if !matches!(
            self.state,
            AssemblyState::Disassembled | AssemblyState::GroupSeparated
        ) {
            log::debug!("assemble ignored while {}", self.state);
            return false;
        }
        let separated = self.fuel_units_separated;
        self.markers.clear();
        self.selected = None;

        let phases = assembly_phases(&self.registry, &self.options, separated);
        self.sequence = Some(Sequence::new(phases));
        self.set_state(AssemblyState::Assembling, Status::Assembling);
        true
    }
}
