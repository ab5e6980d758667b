//! Delayed-confirmation countdown for delete buttons inside forms.
//!
//! A page marks its delete buttons with `data-countdown-delete`; binding
//! them replaces "submit immediately" with a cancellable countdown: the
//! button disables, its label counts down from 7 and a Cancel button
//! appears next to it. Cancelling restores the button and resets the form;
//! letting the countdown run out submits the enclosing form exactly once.

pub mod browser;
pub mod countdown;

pub use browser::binder::{BinderConfig, DELETE_TRIGGER_SELECTOR, bind_buttons, bind_document};
pub use browser::binding::{BOUND_MARKER_ATTRIBUTE, CountdownBinding};
pub use countdown::{Countdown, DEFAULT_SECONDS, Phase, TickOutcome, counting_label};

pub use zoon;
