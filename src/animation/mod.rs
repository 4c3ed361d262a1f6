//! Barrier-synchronized tween phases.
//!
//! The pieces compose bottom-up:
//!
//! - [`Tween`] interpolates one value against the frame clock.
//! - [`Barrier`] joins the completion signals of a set of tweens.
//! - [`Phase`] describes a batch of concurrent tracks; [`PhaseRunner`]
//!   plays one against the part registry.
//! - [`Sequence`] plays phases in order, honoring per-phase delays.

mod barrier;
mod phase;
mod sequence;
mod tween;

pub use barrier::{Barrier, TweenId};
pub use phase::{Channel, Phase, PhaseKind, PhaseRunner, Track};
pub use sequence::{Sequence, SequenceEvent};
pub use tween::{Lerp, Tween, TweenStep};
