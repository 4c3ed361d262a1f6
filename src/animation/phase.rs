//! Phases: pure descriptions of one barrier-synchronized animation step,
//! and the runner that plays one against the part registry.

use std::fmt;

use glam::Vec3;
use web_time::{Duration, Instant};

use super::barrier::{Barrier, TweenId};
use super::tween::Tween;
use crate::parts::{PartId, PartRegistry};
use crate::util::color::Rgb;
use crate::util::easing::EasingFunction;

/// Which step of a transition a phase implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Neutral colors → vibrant colors.
    Recolor,
    /// Housing drops, lid lifts.
    Split,
    /// Fuel units spread into the wide layout.
    Separate,
    /// Fuel units return to the tight layout.
    Regroup,
    /// Housing and lid return to their assembled poses.
    Close,
    /// Vibrant colors → neutral colors.
    Restore,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recolor => "recolor",
            Self::Split => "split",
            Self::Separate => "separate",
            Self::Regroup => "regroup",
            Self::Close => "close",
            Self::Restore => "restore",
        };
        f.write_str(name)
    }
}

/// End value for one animated property of a part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    /// World position.
    Position(Vec3),
    /// Opacity.
    Opacity(f32),
    /// Color.
    Color(Rgb),
}

/// One property of one part animated by a phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Target part.
    pub part: PartId,
    /// Property and its end value.
    pub channel: Channel,
}

impl Track {
    /// Position track.
    #[must_use]
    pub fn position(part: PartId, to: Vec3) -> Self {
        Self {
            part,
            channel: Channel::Position(to),
        }
    }

    /// Opacity track.
    #[must_use]
    pub fn opacity(part: PartId, to: f32) -> Self {
        Self {
            part,
            channel: Channel::Opacity(to),
        }
    }

    /// Color track.
    #[must_use]
    pub fn color(part: PartId, to: Rgb) -> Self {
        Self {
            part,
            channel: Channel::Color(to),
        }
    }
}

/// A batch of concurrent tracks sharing one duration and easing.
///
/// Start values are not part of the description: they are read from the
/// registry when the phase starts, so a phase list can be built up front
/// and still pick up wherever the previous phase left each part.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    /// Which step this is.
    pub kind: PhaseKind,
    /// Animated properties.
    pub tracks: Vec<Track>,
    /// Duration of every track.
    pub duration: Duration,
    /// Easing of every track.
    pub easing: EasingFunction,
    /// Pause between the previous phase's completion and this phase's start.
    pub delay: Duration,
}

impl Phase {
    /// Empty phase without a delay.
    #[must_use]
    pub fn new(kind: PhaseKind, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            kind,
            tracks: Vec::new(),
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    /// Wait `delay` after the previous phase completes.
    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Append tracks.
    #[must_use]
    pub fn with_tracks(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    /// Parts touched by this phase (may repeat).
    pub fn parts(&self) -> impl Iterator<Item = PartId> + '_ {
        self.tracks.iter().map(|t| t.part)
    }
}

enum ActiveTween {
    Position(Tween<Vec3>),
    Opacity(Tween<f32>),
    Color(Tween<Rgb>),
}

struct RunningTrack {
    id: TweenId,
    part: PartId,
    tween: ActiveTween,
}

/// Plays one [`Phase`] against the registry.
pub struct PhaseRunner {
    kind: PhaseKind,
    tracks: Vec<RunningTrack>,
    barrier: Barrier,
}

impl PhaseRunner {
    /// Capture start values from `registry` and start every track at
    /// `now`. Tracks for unknown parts are dropped.
    ///
    /// `next_id` supplies tween ids and is advanced past the ones used.
    pub fn start(
        phase: &Phase,
        registry: &PartRegistry,
        now: Instant,
        next_id: &mut u32,
    ) -> Self {
        let mut tracks = Vec::with_capacity(phase.tracks.len());
        for track in &phase.tracks {
            let Some(part) = registry.get(track.part) else {
                log::warn!("{} phase: skipping unknown {}", phase.kind, track.part);
                continue;
            };
            let (duration, easing) = (phase.duration, phase.easing);
            let tween = match track.channel {
                Channel::Position(to) => ActiveTween::Position(Tween::start(
                    part.transform.position,
                    to,
                    duration,
                    easing,
                    now,
                )),
                Channel::Opacity(to) => ActiveTween::Opacity(Tween::start(
                    part.transform.opacity,
                    to,
                    duration,
                    easing,
                    now,
                )),
                Channel::Color(to) => ActiveTween::Color(Tween::start(
                    part.color, to, duration, easing, now,
                )),
            };
            tracks.push(RunningTrack {
                id: TweenId(*next_id),
                part: track.part,
                tween,
            });
            *next_id += 1;
        }

        let barrier = Barrier::new(tracks.iter().map(|t| t.id));
        Self {
            kind: phase.kind,
            tracks,
            barrier,
        }
    }

    /// Advance every track to `now`, write values to the registry, and
    /// report whether the barrier is open.
    pub fn advance(&mut self, registry: &mut PartRegistry, now: Instant) -> bool {
        for track in &mut self.tracks {
            let completed = match &mut track.tween {
                ActiveTween::Position(tween) => {
                    let step = tween.advance(now);
                    let _ = registry.set_position(track.part, step.value);
                    step.completed
                }
                ActiveTween::Opacity(tween) => {
                    let step = tween.advance(now);
                    let _ = registry.set_opacity(track.part, step.value);
                    step.completed
                }
                ActiveTween::Color(tween) => {
                    let step = tween.advance(now);
                    let _ = registry.set_color(track.part, step.value);
                    step.completed
                }
            };
            if completed {
                let _ = self.barrier.arrive(track.id);
            }
        }
        self.barrier.is_open()
    }

    /// Which phase is running.
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        self.kind
    }

    /// Lowest progress across all tracks (1.0 for an empty phase).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.tracks
            .iter()
            .map(|t| match &t.tween {
                ActiveTween::Position(tw) => tw.progress(),
                ActiveTween::Opacity(tw) => tw.progress(),
                ActiveTween::Color(tw) => tw.progress(),
            })
            .fold(1.0, f32::min)
    }

    /// Tracks whose tweens have not yet reported completion.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.barrier.pending()
    }
}
