//! The appearance animation of an overlay.
use crate::time::{Duration, Instant};

/// The fade used when none is given.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(1);

/// The response of the critically damped spring, in seconds.
const SPRING_RESPONSE: f32 = 0.55;

/// Fades an overlay in after it is presented.
///
/// The opacity is an ease-in-ease-out fade multiplied by the position of a
/// critically damped spring. A zero duration disables the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started: Option<Instant>,
    duration: Duration,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl Transition {
    /// Creates an idle [`Transition`] with the given fade duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
        }
    }

    /// Returns the fade duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts appearing at `at`, unless already started.
    pub fn appear(&mut self, at: Instant) {
        if self.started.is_none() {
            self.started = Some(at);
        }
    }

    /// Forgets the appearance, so the next one animates again.
    pub fn reset(&mut self) {
        self.started = None;
    }

    /// Returns whether the transition has started.
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Returns the opacity at `at`, in `[0, 1]`.
    pub fn opacity(&self, at: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let Some(started) = self.started else {
            return 0.0;
        };

        let elapsed = at.saturating_duration_since(started);

        if elapsed >= self.settle() {
            return 1.0;
        }

        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);

        (ease_in_out(progress) * spring(elapsed.as_secs_f32())).clamp(0.0, 1.0)
    }

    /// Returns whether the opacity is still changing at `at`.
    pub fn is_animating(&self, at: Instant) -> bool {
        match self.started {
            Some(started) if !self.duration.is_zero() => {
                at.saturating_duration_since(started) < self.settle()
            }
            _ => false,
        }
    }

    fn settle(&self) -> Duration {
        self.duration
            .max(Duration::from_secs_f32(SPRING_RESPONSE * 2.0))
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn spring(seconds: f32) -> f32 {
    let omega = std::f32::consts::TAU / SPRING_RESPONSE;
    let decay = omega * seconds;

    1.0 - (1.0 + decay) * (-decay).exp()
}
