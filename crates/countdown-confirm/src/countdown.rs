//! Countdown state machine for delayed-confirmation delete buttons.
//!
//! DOM-free on purpose: the browser layer owns the elements and the
//! interval, drives `press`/`tick`/`cancel` here and applies the returned
//! outcomes to the page. One instance per bound button; instances never
//! share state.

/// Seconds between pressing a delete button and the form submission.
pub const DEFAULT_SECONDS: u32 = 7;

/// Label of a delete button while nothing is pending.
pub const IDLE_LABEL: &str = "Delete";

/// Label of the dynamically inserted cancel button.
pub const CANCEL_LABEL: &str = "Cancel";

/// Label shown while the countdown is running.
pub fn counting_label(seconds: u32) -> String {
    format!("Deleting in {seconds} seconds...")
}

/// Lifecycle of one bound delete button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a press.
    Idle,
    /// Ticking down; `remaining` is always at least 1 in this phase.
    Counting { remaining: u32 },
    /// The final tick fired; form submission is in flight.
    Submitting,
}

/// What the browser layer must do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Show the remaining seconds and keep ticking.
    Continue { seconds_shown: u32 },
    /// Show the last second, stop the interval and submit the enclosing form.
    Submit { seconds_shown: u32 },
}

/// Per-button countdown: a single transition table instead of the layered
/// click handlers this behavior is usually written with, so re-entrant
/// presses and stale timer callbacks are inert by construction.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    phase: Phase,
    seconds: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            phase: Phase::Idle,
            // A zero-length countdown would submit without ever labelling.
            seconds: seconds.max(1),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.phase, Phase::Counting { .. })
    }

    /// Primary press. Idle → Counting; returns `false` (press ignored) while
    /// a countdown is already running or the form is submitting.
    pub fn press(&mut self) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Counting {
                    remaining: self.seconds,
                };
                true
            }
            Phase::Counting { .. } | Phase::Submitting => false,
        }
    }

    /// One periodic tick. The label always shows the count *before* the
    /// decrement, so a 7-second countdown reads 7, 6, .., 1 and submits on
    /// the tick that shows 1. Ticks outside Counting return `None`.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        match self.phase {
            Phase::Counting { remaining } => {
                let seconds_shown = remaining;
                if remaining <= 1 {
                    self.phase = Phase::Submitting;
                    Some(TickOutcome::Submit { seconds_shown })
                } else {
                    self.phase = Phase::Counting {
                        remaining: remaining - 1,
                    };
                    Some(TickOutcome::Continue { seconds_shown })
                }
            }
            Phase::Idle | Phase::Submitting => None,
        }
    }

    /// Abort a running countdown. Counting → Idle; returns `false` when
    /// there is nothing to cancel (already idle, or the final tick fired).
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            Phase::Counting { .. } => {
                self.phase = Phase::Idle;
                true
            }
            Phase::Idle | Phase::Submitting => false,
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS)
    }
}
