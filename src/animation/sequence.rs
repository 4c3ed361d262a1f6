//! Ordered playback of phases.

use std::collections::VecDeque;

use web_time::{Duration, Instant};

use super::phase::{Phase, PhaseKind, PhaseRunner};
use crate::parts::PartRegistry;

/// Something that happened during one [`Sequence::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    /// A phase captured its start values and began animating.
    PhaseStarted(PhaseKind),
    /// Every tween of a phase reported completion.
    PhaseCompleted(PhaseKind),
    /// The last phase completed. Emitted once.
    Finished,
}

/// A one-shot timer polled from the frame loop.
#[derive(Debug, Clone, Copy)]
struct Deferred {
    due: Instant,
    fired: bool,
}

impl Deferred {
    fn new(anchor: Instant, delay: Duration) -> Self {
        Self {
            due: anchor + delay,
            fired: false,
        }
    }

    /// `true` exactly once, on the first poll at or after the due time.
    fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.due {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Plays phases one after another.
///
/// A phase starts only after the previous phase's barrier opened and its
/// own delay elapsed, measured from the tick that observed the opening.
/// The first phase is anchored at the first tick.
pub struct Sequence {
    queued: VecDeque<Phase>,
    active: Option<PhaseRunner>,
    gate: Option<Deferred>,
    last_completion: Option<Instant>,
    next_tween_id: u32,
    finished: bool,
}

impl Sequence {
    /// Sequence over `phases`, idle until the first tick.
    #[must_use]
    pub fn new(phases: Vec<Phase>) -> Self {
        Self {
            queued: phases.into(),
            active: None,
            gate: None,
            last_completion: None,
            next_tween_id: 0,
            finished: false,
        }
    }

    /// Drive the sequence to `now`, writing animated values into
    /// `registry`.
    ///
    /// Several phases may start and complete within one tick when their
    /// durations and delays are already covered by `now`.
    pub fn tick(&mut self, registry: &mut PartRegistry, now: Instant) -> Vec<SequenceEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }

        loop {
            if let Some(runner) = &mut self.active {
                if !runner.advance(registry, now) {
                    break;
                }
                let kind = runner.kind();
                log::debug!("phase {kind} complete");
                self.active = None;
                self.last_completion = Some(now);
                events.push(SequenceEvent::PhaseCompleted(kind));
                continue;
            }

            let Some(next) = self.queued.front() else {
                self.finished = true;
                events.push(SequenceEvent::Finished);
                break;
            };

            let anchor = self.last_completion.unwrap_or(now);
            let gate = self
                .gate
                .get_or_insert_with(|| Deferred::new(anchor, next.delay));
            if !gate.poll(now) {
                break;
            }
            self.gate = None;

            let Some(phase) = self.queued.pop_front() else {
                break;
            };
            let runner =
                PhaseRunner::start(&phase, registry, now, &mut self.next_tween_id);
            log::debug!(
                "phase {} started: {} tracks over {:?}",
                phase.kind,
                runner.pending(),
                phase.duration
            );
            events.push(SequenceEvent::PhaseStarted(phase.kind));
            self.active = Some(runner);
        }

        events
    }

    /// Whether every phase has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Phase currently animating, if any.
    #[must_use]
    pub fn active_kind(&self) -> Option<PhaseKind> {
        self.active.as_ref().map(PhaseRunner::kind)
    }

    /// Phases not yet started.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queued.len()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::animation::phase::Track;
    use crate::parts::tests::subtree;
    use crate::parts::{MeshShape, PartKind, PartPose, PartSpec};
    use crate::util::easing::EasingFunction;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn registry() -> PartRegistry {
        let spec = |kind: PartKind| PartSpec {
            kind,
            subtree: subtree(
                kind.asset_name(),
                MeshShape::Sphere {
                    center: Vec3::ZERO,
                    radius: 0.2,
                },
            ),
            pose: PartPose {
                assembled: Vec3::ZERO,
                exploded: Vec3::Y,
            },
            base_color: [0.5; 3],
            highlight_color: [1.0, 0.2, 0.2],
            interactive: true,
        };
        PartRegistry::from_specs(vec![
            spec(PartKind::Housing),
            spec(PartKind::Lid),
            spec(PartKind::FuelUnit { index: 0 }),
        ])
        .unwrap()
    }

    #[test]
    fn next_phase_waits_for_barrier_and_delay() {
        use SequenceEvent::*;

        let mut reg = registry();
        let lid = reg.lid().id;
        let unit = reg.fuel_units().next().unwrap().id;
        let mut seq = Sequence::new(vec![
            Phase::new(PhaseKind::Split, ms(100), EasingFunction::Linear)
                .with_tracks([Track::position(lid, Vec3::Y)]),
            Phase::new(PhaseKind::Separate, ms(100), EasingFunction::Linear)
                .with_tracks([Track::position(unit, Vec3::X)])
                .after(ms(50)),
        ]);

        let t0 = Instant::now();
        assert_eq!(seq.tick(&mut reg, t0), vec![PhaseStarted(PhaseKind::Split)]);
        assert_eq!(seq.active_kind(), Some(PhaseKind::Split));
        assert!(seq.tick(&mut reg, t0 + ms(99)).is_empty());
        assert_eq!(reg.get(unit).unwrap().transform.position, Vec3::ZERO);

        assert_eq!(
            seq.tick(&mut reg, t0 + ms(100)),
            vec![PhaseCompleted(PhaseKind::Split)]
        );
        assert_eq!(reg.lid().transform.position, Vec3::Y);
        assert_eq!(seq.active_kind(), None);

        assert!(seq.tick(&mut reg, t0 + ms(149)).is_empty());
        assert_eq!(
            seq.tick(&mut reg, t0 + ms(150)),
            vec![PhaseStarted(PhaseKind::Separate)]
        );
        assert_eq!(
            seq.tick(&mut reg, t0 + ms(250)),
            vec![PhaseCompleted(PhaseKind::Separate), Finished]
        );
        assert_eq!(reg.get(unit).unwrap().transform.position, Vec3::X);
        assert!(seq.is_finished());
        assert!(seq.tick(&mut reg, t0 + ms(400)).is_empty());
    }

    #[test]
    fn delay_is_measured_from_observed_completion() {
        let mut reg = registry();
        let lid = reg.lid().id;
        let mut seq = Sequence::new(vec![
            Phase::new(PhaseKind::Split, ms(100), EasingFunction::Linear)
                .with_tracks([Track::position(lid, Vec3::Y)]),
            Phase::new(PhaseKind::Separate, ms(100), EasingFunction::Linear)
                .after(ms(50)),
        ]);

        let t0 = Instant::now();
        let _ = seq.tick(&mut reg, t0);
        // A long stall: the first phase completes late.
        let events = seq.tick(&mut reg, t0 + ms(1000));
        assert_eq!(events, vec![SequenceEvent::PhaseCompleted(PhaseKind::Split)]);
        assert!(seq.tick(&mut reg, t0 + ms(1049)).is_empty());
        assert_eq!(seq.remaining(), 1);
        assert!(!seq.tick(&mut reg, t0 + ms(1050)).is_empty());
    }

    #[test]
    fn covered_phases_run_within_one_tick() {
        let mut reg = registry();
        let lid = reg.lid().id;
        let housing = reg.housing().id;
        let mut seq = Sequence::new(vec![
            Phase::new(PhaseKind::Close, Duration::ZERO, EasingFunction::Linear)
                .with_tracks([Track::position(lid, Vec3::ZERO)]),
            Phase::new(PhaseKind::Restore, Duration::ZERO, EasingFunction::Linear)
                .with_tracks([Track::color(housing, [0.1; 3])]),
        ]);
        let events = seq.tick(&mut reg, Instant::now());
        assert_eq!(events.len(), 5);
        assert_eq!(events.last(), Some(&SequenceEvent::Finished));
        assert_eq!(reg.housing().color, [0.1; 3]);
    }

    #[test]
    fn empty_sequence_finishes_once() {
        let mut reg = registry();
        let mut seq = Sequence::new(Vec::new());
        let t0 = Instant::now();
        assert_eq!(seq.tick(&mut reg, t0), vec![SequenceEvent::Finished]);
        assert!(seq.tick(&mut reg, t0).is_empty());
    }

    #[test]
    fn deferred_fires_once() {
        let t0 = Instant::now();
        let mut d = Deferred::new(t0, ms(10));
        assert!(!d.poll(t0 + ms(9)));
        assert!(d.poll(t0 + ms(10)));
        assert!(!d.poll(t0 + ms(20)));
    }
}
