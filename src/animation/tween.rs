//! Time-based interpolation of a single value.
//!
//! A [`Tween`] is driven by the host's frame clock: every call to
//! [`advance`](Tween::advance) recomputes progress from wall-clock elapsed
//! time rather than counting fixed steps, so frame drops never slow an
//! animation down.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::util::color::{lerp_rgb, Rgb};
use crate::util::easing::EasingFunction;

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    /// Interpolate from `self` toward `end` by `t` in [0, 1].
    #[must_use]
    fn lerp_to(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for Rgb {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        lerp_rgb(self, end, t)
    }
}

/// Output of one [`Tween::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep<T> {
    /// Interpolated value to write back to the target.
    pub value: T,
    /// Raw (un-eased) progress in [0, 1].
    pub progress: f32,
    /// `true` on exactly one call: the tick on which progress reached 1.
    pub completed: bool,
}

/// Interpolates from a start value to an end value over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    start: T,
    end: T,
    duration: Duration,
    started_at: Instant,
    easing: EasingFunction,
    /// Highest progress observed so far; never decreases.
    progress: f32,
    resolved: bool,
}

impl<T: Lerp> Tween<T> {
    /// Start a tween at `now`.
    pub fn start(
        from: T,
        to: T,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) -> Self {
        Self {
            start: from,
            end: to,
            duration,
            started_at: now,
            easing,
            progress: 0.0,
            resolved: false,
        }
    }

    /// Progress implied by the clock alone, without the monotonic clamp.
    #[must_use]
    pub fn raw_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Advance to `now` and return the value to apply.
    pub fn advance(&mut self, now: Instant) -> TweenStep<T> {
        self.progress = self.progress.max(self.raw_progress(now));
        let completed = self.progress >= 1.0 && !self.resolved;
        if completed {
            self.resolved = true;
        }
        TweenStep {
            value: self.value_at(self.progress),
            progress: self.progress,
            completed,
        }
    }

    /// Eased value at raw progress `t`. Exactly the end value at `t >= 1`.
    #[must_use]
    pub fn value_at(&self, t: f32) -> T {
        if t >= 1.0 {
            self.end
        } else {
            self.start.lerp_to(self.end, self.easing.evaluate(t))
        }
    }

    /// Highest progress reached so far.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the tween has reported completion.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Value captured when the tween started.
    #[must_use]
    pub fn start_value(&self) -> T {
        self.start
    }

    /// Value the tween resolves to.
    #[must_use]
    pub fn end_value(&self) -> T {
        self.end
    }

    /// Configured duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn progress_follows_clock_and_caps_at_one() {
        let t0 = Instant::now();
        let mut tween =
            Tween::start(0.0_f32, 10.0, ms(100), EasingFunction::Linear, t0);

        let step = tween.advance(t0 + ms(25));
        assert_relative_eq!(step.progress, 0.25, epsilon = 1e-4);
        assert_relative_eq!(step.value, 2.5, epsilon = 1e-3);
        assert!(!step.completed);

        let step = tween.advance(t0 + ms(500));
        assert_eq!(step.progress, 1.0);
        assert_eq!(step.value, 10.0);
    }

    #[test]
    fn resolves_exactly_once() {
        let t0 = Instant::now();
        let mut tween =
            Tween::start(Vec3::ZERO, Vec3::X, ms(50), EasingFunction::DEFAULT, t0);

        assert!(!tween.advance(t0 + ms(10)).completed);
        assert!(tween.advance(t0 + ms(50)).completed);
        assert!(!tween.advance(t0 + ms(60)).completed);
        assert!(!tween.advance(t0 + ms(70)).completed);
        assert!(tween.is_resolved());
    }

    #[test]
    fn progress_is_monotonic_when_clock_goes_backwards() {
        let t0 = Instant::now();
        let mut tween =
            Tween::start(0.0_f32, 1.0, ms(100), EasingFunction::Linear, t0);

        let later = tween.advance(t0 + ms(60)).progress;
        let earlier = tween.advance(t0 + ms(20)).progress;
        assert_eq!(later, earlier);
    }

    #[test]
    fn lands_exactly_on_end_value() {
        let t0 = Instant::now();
        let end = Vec3::new(0.1, -2.2, 0.3);
        let mut tween = Tween::start(
            Vec3::new(7.7, 1.0, -3.3),
            end,
            ms(300),
            EasingFunction::CubicInOut,
            t0,
        );
        assert_eq!(tween.advance(t0 + ms(300)).value, end);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let t0 = Instant::now();
        let mut tween = Tween::start(
            [0.0, 0.0, 0.0],
            [1.0, 0.5, 0.25],
            Duration::ZERO,
            EasingFunction::Linear,
            t0,
        );
        let step = tween.advance(t0);
        assert!(step.completed);
        assert_eq!(step.value, [1.0, 0.5, 0.25]);
    }

    #[test]
    fn easing_shapes_the_value_not_the_progress() {
        let t0 = Instant::now();
        let mut tween =
            Tween::start(0.0_f32, 1.0, ms(100), EasingFunction::CubicInOut, t0);
        let step = tween.advance(t0 + ms(25));
        assert_relative_eq!(step.progress, 0.25, epsilon = 1e-4);
        assert_relative_eq!(step.value, 0.0625, epsilon = 1e-3);
    }
}
