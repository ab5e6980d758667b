//! Per-button countdown interaction.
//!
//! Owns the primary click listener, the active interval timer and the
//! Cancel affordance for one delete button. This is mutable browser-side
//! state driven from event callbacks, so it lives behind `Rc<RefCell<>>`
//! on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::{Event, HtmlButtonElement, HtmlElement, HtmlFormElement};
use zoon::{Task, document, eprintln};

use crate::browser::binder::BinderConfig;
use crate::countdown::{CANCEL_LABEL, Countdown, IDLE_LABEL, TickOutcome, counting_label};

/// Marker attribute set on bound buttons so a second scan skips them.
pub const BOUND_MARKER_ATTRIBUTE: &str = "data-countdown-bound";

/// One bound delete button. Dropping the binding removes the click
/// listener and tears down a still-running countdown.
pub struct CountdownBinding {
    inner: Rc<RefCell<BindingInner>>,
    press_closure: Closure<dyn FnMut(Event)>,
}

struct BindingInner {
    button: HtmlButtonElement,
    form: HtmlFormElement,
    countdown: Countdown,
    tick_ms: i32,
    /// `Some` exactly while the countdown phase is Counting or Submitting.
    armed: Option<ArmedCountdown>,
}

/// Artifacts of one countdown attempt; at most one per button.
struct ArmedCountdown {
    timer: TimerHandle,
    cancel_button: HtmlElement,
    _cancel_closure: Closure<dyn FnMut(Event)>,
}

impl Drop for ArmedCountdown {
    fn drop(&mut self) {
        // No-op when the cancel handler already detached the element.
        self.cancel_button.remove();
    }
}

/// A `setInterval` registration, cleared on drop so cancellation and
/// teardown always release the timer.
struct TimerHandle {
    interval_id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl TimerHandle {
    fn clear(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.interval_id);
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.clear();
    }
}

impl CountdownBinding {
    /// Install the interaction on one delete button. Returns `None` when
    /// the button is already bound or has no enclosing form; the latter
    /// page is broken anyway, so it degrades to a warning instead of an
    /// error path.
    pub fn bind(button: HtmlButtonElement, config: &BinderConfig) -> Option<Self> {
        if button.has_attribute(BOUND_MARKER_ATTRIBUTE) {
            return None;
        }
        let Some(form) = button.closest("form").ok().flatten() else {
            eprintln!("Delete button without an enclosing form; not binding it");
            return None;
        };
        // closest("form") can only match a <form>.
        let form: HtmlFormElement = form.unchecked_into();

        let inner = Rc::new(RefCell::new(BindingInner {
            button: button.clone(),
            form,
            countdown: Countdown::new(config.seconds),
            tick_ms: config.tick_ms,
            armed: None,
        }));

        let press_closure = Closure::wrap(Box::new({
            let inner = Rc::clone(&inner);
            move |event: Event| {
                event.prevent_default();
                on_press(&inner);
            }
        }) as Box<dyn FnMut(Event)>);

        button
            .add_event_listener_with_callback("click", press_closure.as_ref().unchecked_ref())
            .unwrap_throw();
        button
            .set_attribute(BOUND_MARKER_ATTRIBUTE, "")
            .unwrap_throw();

        Some(Self {
            inner,
            press_closure,
        })
    }

    /// The button this binding is attached to.
    pub fn button(&self) -> HtmlButtonElement {
        self.inner.borrow().button.clone()
    }
}

impl Drop for CountdownBinding {
    fn drop(&mut self) {
        let inner = self.inner.borrow();
        let _ = inner.button.remove_event_listener_with_callback(
            "click",
            self.press_closure.as_ref().unchecked_ref(),
        );
        let _ = inner.button.remove_attribute(BOUND_MARKER_ATTRIBUTE);
        if inner.countdown.is_counting() {
            // Torn down mid-count: leave the button usable again. The
            // interval and the Cancel element are released with `armed`.
            inner.button.set_disabled(false);
            inner.button.set_text_content(Some(IDLE_LABEL));
        }
    }
}

fn on_press(inner: &Rc<RefCell<BindingInner>>) {
    if !inner.borrow_mut().countdown.press() {
        // The button is disabled while counting; a programmatic click must
        // not restart the countdown either.
        return;
    }
    inner.borrow().button.set_disabled(true);
    match arm(inner) {
        Ok(armed) => inner.borrow_mut().armed = Some(armed),
        Err(error) => {
            eprintln!("Failed to arm delete countdown: {error:?}");
            let mut inner_mut = inner.borrow_mut();
            inner_mut.countdown.cancel();
            inner_mut.button.set_disabled(false);
        }
    }
}

/// Creates the Cancel affordance and starts the tick interval.
fn arm(inner: &Rc<RefCell<BindingInner>>) -> Result<ArmedCountdown, JsValue> {
    let (button, tick_ms) = {
        let inner_ref = inner.borrow();
        (inner_ref.button.clone(), inner_ref.tick_ms)
    };

    let cancel_button: HtmlElement = document().create_element("button")?.unchecked_into();
    cancel_button.set_text_content(Some(CANCEL_LABEL));
    cancel_button.class_list().add_2("btn", "btn-warning")?;
    cancel_button.style().set_property("margin-left", ".5rem")?;
    let _ = button.insert_adjacent_element("afterend", &cancel_button)?;

    let cancel_closure = Closure::wrap(Box::new({
        let inner = Rc::downgrade(inner);
        move |event: Event| {
            event.prevent_default();
            if let Some(inner) = inner.upgrade() {
                on_cancel(&inner);
            }
        }
    }) as Box<dyn FnMut(Event)>);
    cancel_button
        .add_event_listener_with_callback("click", cancel_closure.as_ref().unchecked_ref())?;

    let tick_closure = Closure::wrap(Box::new({
        let inner = Rc::downgrade(inner);
        move || {
            if let Some(inner) = inner.upgrade() {
                on_tick(&inner);
            }
        }
    }) as Box<dyn FnMut()>);
    let interval_id = web_sys::window()
        .unwrap_throw()
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick_closure.as_ref().unchecked_ref(),
            tick_ms,
        )?;

    Ok(ArmedCountdown {
        timer: TimerHandle {
            interval_id,
            _closure: tick_closure,
        },
        cancel_button,
        _cancel_closure: cancel_closure,
    })
}

fn on_tick(inner: &Rc<RefCell<BindingInner>>) {
    let outcome = inner.borrow_mut().countdown.tick();
    match outcome {
        Some(TickOutcome::Continue { seconds_shown }) => {
            inner
                .borrow()
                .button
                .set_text_content(Some(&counting_label(seconds_shown)));
        }
        Some(TickOutcome::Submit { seconds_shown }) => {
            let form = {
                let inner_ref = inner.borrow();
                inner_ref
                    .button
                    .set_text_content(Some(&counting_label(seconds_shown)));
                // Stop the interval before navigation kicks in. Only the
                // registration is cleared; the closure running right now
                // stays alive inside the armed artifacts.
                if let Some(armed) = &inner_ref.armed {
                    armed.timer.clear();
                }
                inner_ref.form.clone()
            };
            // Real form submission: the intentional escape from the
            // prevent-default applied to the initial click.
            if let Err(error) = form.submit() {
                eprintln!("Failed to submit delete form: {error:?}");
            }
        }
        None => {}
    }
}

fn on_cancel(inner: &Rc<RefCell<BindingInner>>) {
    let (armed, form) = {
        let mut inner_mut = inner.borrow_mut();
        if !inner_mut.countdown.cancel() {
            return;
        }
        let armed = inner_mut.armed.take();
        if let Some(armed) = &armed {
            armed.timer.clear();
            armed.cancel_button.remove();
        }
        inner_mut.button.set_disabled(false);
        inner_mut.button.set_text_content(Some(IDLE_LABEL));
        (armed, inner_mut.form.clone())
    };
    // Fires a synchronous `reset` event; the borrow is released first.
    form.reset();
    // The closure executing right now lives inside `armed`, and wasm-bindgen
    // forbids destroying a closure during its own invocation; drop it on the
    // next microtask instead.
    Task::start(async move {
        drop(armed);
    });
}
