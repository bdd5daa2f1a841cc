//! The presentation state machine of a label.
use crate::registry::{Context, Overlay};
use crate::{Latch, Snapshot};

/// The visible state of a label's overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing is shown.
    #[default]
    Hidden,
    /// The overlay has been requested.
    Presenting,
}

/// A pending change for the enclosing presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Present the overlay of the label.
    Present,
    /// Dismiss the overlay of the label, if it is still the active one.
    Dismiss,
}

/// When a presented overlay asks its caller to be dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Behavior {
    /// Ask for dismissal when a press lands outside the overlay content.
    pub dismiss_on_external_tap: bool,
    /// Ask for dismissal when the label is removed from the tree.
    pub dismiss_on_disappear: bool,
}

impl Behavior {
    /// Dismisses on both external taps and disappearance.
    pub const DISMISSIBLE: Self = Self {
        dismiss_on_external_tap: true,
        dismiss_on_disappear: true,
    };
}

/// Turns a boolean presentation signal into [`Request`]s.
///
/// The signal is owned by the caller. [`set_signal`] is the only way to
/// change the [`Phase`]; taps and disappearance only ever suggest a new
/// signal value, which the caller is expected to write back.
///
/// [`set_signal`]: Presentation::set_signal
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    phase: Phase,
    latch: Latch,
    pending: Option<Request>,
    behavior: Behavior,
}

impl Presentation {
    /// Creates a hidden [`Presentation`].
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    /// Feeds the current value of the signal.
    ///
    /// Returns the [`Request`] queued by a transition, if the signal changed.
    pub fn set_signal(&mut self, is_presenting: bool) -> Option<Request> {
        let (phase, request) = if is_presenting {
            (Phase::Presenting, Request::Present)
        } else {
            (Phase::Hidden, Request::Dismiss)
        };

        if self.phase == phase {
            return None;
        }

        self.phase = phase;
        self.pending = Some(request);

        Some(request)
    }

    /// Returns the current [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the signal is set.
    pub fn is_presenting(&self) -> bool {
        self.phase == Phase::Presenting
    }

    /// Returns the request waiting for [`commit`](Self::commit).
    pub fn pending(&self) -> Option<Request> {
        self.pending
    }

    /// Returns the [`Behavior`].
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Replaces the [`Behavior`].
    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    /// Latches the geometry of the label, measuring it on first use only.
    pub fn measure(&self, measure: impl FnOnce() -> Snapshot) -> Snapshot {
        *self.latch.capture(measure)
    }

    /// Returns the latched geometry of the label.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.latch.get().copied()
    }

    /// Applies the pending request to the enclosing `context`.
    ///
    /// `overlay` builds the overlay from the latched geometry and `owns`
    /// tells whether an active overlay belongs to this label. A present
    /// waits until geometry has been latched; without a context the request
    /// is dropped.
    pub fn commit<T>(
        &mut self,
        context: Option<&mut Context<T>>,
        overlay: impl FnOnce(&Snapshot) -> Overlay<T>,
        owns: impl FnOnce(&Overlay<T>) -> bool,
    ) -> Option<Request> {
        let request = self.pending.take()?;

        let Some(context) = context else {
            log::debug!("No presenter in scope, skipping {request:?}");
            return None;
        };

        match request {
            Request::Present => {
                let Some(snapshot) = self.latch.get() else {
                    self.pending = Some(request);
                    return None;
                };

                let overlay = overlay(snapshot);
                log::debug!("Presenting overlay at {:?}", overlay.placement);

                if context.present(overlay).is_some() {
                    log::debug!("Replaced the active overlay");
                }
            }
            Request::Dismiss => {
                if context.dismiss_if(owns).is_some() {
                    log::debug!("Dismissed overlay");
                }
            }
        }

        Some(request)
    }

    /// Handles a press outside the overlay content.
    ///
    /// Returns the signal value the caller should write, if any.
    pub fn external_tap(&self) -> Option<bool> {
        (self.behavior.dismiss_on_external_tap && self.is_presenting()).then_some(false)
    }

    /// Handles the removal of the label.
    ///
    /// Returns the signal value the caller should write, if any.
    pub fn disappear(&self) -> Option<bool> {
        (self.behavior.dismiss_on_disappear && self.is_presenting()).then_some(false)
    }
}
