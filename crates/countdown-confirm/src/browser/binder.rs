//! Binds the countdown interaction to delete-trigger buttons.
//!
//! The page-ready entry point is [`bind_document`]; hosting code that
//! already holds its buttons calls [`bind_buttons`] directly. Each bound
//! button gets its own independent interaction.

use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;
use zoon::{document, eprintln};

use crate::browser::binding::CountdownBinding;
use crate::countdown::DEFAULT_SECONDS;

/// Default selector for the delete-trigger role marker.
pub const DELETE_TRIGGER_SELECTOR: &str = "form button[data-countdown-delete]";

const TICK_MS: i32 = 1_000;

/// How the binder finds buttons and how the countdown runs.
#[derive(Clone, Debug)]
pub struct BinderConfig {
    /// CSS selector identifying delete-trigger buttons.
    pub selector: String,
    /// Seconds between the press and the form submission.
    pub seconds: u32,
    /// Milliseconds between ticks. Production pages keep the default;
    /// browser tests shrink it.
    pub tick_ms: i32,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            selector: DELETE_TRIGGER_SELECTOR.to_owned(),
            seconds: DEFAULT_SECONDS,
            tick_ms: TICK_MS,
        }
    }
}

/// Scan the page for delete-trigger buttons and bind each one.
/// A page without matching buttons is a no-op.
pub fn bind_document(config: &BinderConfig) -> Vec<CountdownBinding> {
    let node_list = match document().query_selector_all(&config.selector) {
        Ok(node_list) => node_list,
        Err(error) => {
            eprintln!(
                "Invalid delete-trigger selector {:?}: {error:?}",
                config.selector
            );
            return Vec::new();
        }
    };
    let buttons = (0..node_list.length())
        .filter_map(|index| node_list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlButtonElement>().ok());
    bind_buttons(buttons, config)
}

/// Bind an explicit collection of buttons. Already-bound buttons and
/// buttons without an enclosing form are skipped.
pub fn bind_buttons(
    buttons: impl IntoIterator<Item = HtmlButtonElement>,
    config: &BinderConfig,
) -> Vec<CountdownBinding> {
    buttons
        .into_iter()
        .filter_map(|button| CountdownBinding::bind(button, config))
        .collect()
}
