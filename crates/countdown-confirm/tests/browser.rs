//! In-browser behavior tests for the countdown binder.
//!
//! `form.submit()` would navigate the harness page away, so the submission
//! path itself is covered by the state machine's unit tests; everything up
//! to the final tick runs here against the real DOM.

#![cfg(target_arch = "wasm32")]

use countdown_confirm::zoon::{Timer, document};
use countdown_confirm::{BinderConfig, CountdownBinding, bind_buttons, bind_document};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const TEST_TICK_MS: i32 = 50;

fn test_config() -> BinderConfig {
    BinderConfig {
        seconds: 3,
        tick_ms: TEST_TICK_MS,
        ..BinderConfig::default()
    }
}

/// Waits long enough for `ticks` interval callbacks to have fired.
async fn after_ticks(ticks: u32) {
    Timer::sleep(ticks * TEST_TICK_MS as u32 + 25).await;
}

/// Appends `<form><input value="keep me"><button data-countdown-delete>`
/// to the test page, standing in for the hosting page's template.
fn install_delete_form() -> (HtmlFormElement, HtmlButtonElement, HtmlInputElement) {
    let document = document();
    let form: HtmlFormElement = document
        .create_element("form")
        .unwrap()
        .unchecked_into();
    form.set_inner_html(
        r#"<input name="title" value="keep me">
           <button type="submit" data-countdown-delete>Delete</button>"#,
    );
    document.body().unwrap().append_child(&form).unwrap();

    let button: HtmlButtonElement = form
        .query_selector("button")
        .unwrap()
        .unwrap()
        .unchecked_into();
    let input: HtmlInputElement = form
        .query_selector("input")
        .unwrap()
        .unwrap()
        .unchecked_into();
    (form, button, input)
}

fn cancel_affordance(button: &HtmlButtonElement) -> Option<Element> {
    button
        .next_element_sibling()
        .filter(|element| element.text_content().as_deref() == Some("Cancel"))
}

#[wasm_bindgen_test]
fn press_disables_button_and_inserts_one_cancel_affordance() {
    let (form, button, _input) = install_delete_form();
    let bindings = bind_buttons([button.clone()], &test_config());
    assert_eq!(bindings.len(), 1);

    button.click();

    assert!(button.disabled());
    let cancel = cancel_affordance(&button).expect("cancel affordance inserted after the button");
    assert!(cancel.class_list().contains("btn"));
    assert!(cancel.class_list().contains("btn-warning"));
    let cancel: HtmlElement = cancel.unchecked_into();
    // CSSOM may normalize ".5rem" to "0.5rem"; only the presence matters.
    assert!(!cancel.style().get_property_value("margin-left").is_empty());

    // A disabled button swallows user clicks, but a dispatched event still
    // reaches the listener; the countdown must not re-arm.
    button
        .dispatch_event(&Event::new("click").unwrap())
        .unwrap();
    assert!(cancel_affordance(&button).is_some());
    assert!(
        cancel.next_element_sibling().is_none(),
        "only one cancel affordance"
    );

    form.remove();
}

#[wasm_bindgen_test]
async fn labels_follow_the_tick_sequence() {
    let (form, button, _input) = install_delete_form();
    let _bindings = bind_buttons([button.clone()], &test_config());

    button.click();
    // The first label appears one tick period after the press.
    assert_eq!(button.text_content().as_deref(), Some("Delete"));

    after_ticks(1).await;
    assert_eq!(
        button.text_content().as_deref(),
        Some("Deleting in 3 seconds...")
    );

    // One more tick period lands mid-way between the second tick and the
    // final (submitting) one.
    Timer::sleep(TEST_TICK_MS as u32).await;
    assert_eq!(
        button.text_content().as_deref(),
        Some("Deleting in 2 seconds...")
    );

    // Abort before the final tick submits the form.
    let cancel: HtmlElement = cancel_affordance(&button).unwrap().unchecked_into();
    cancel.click();
    form.remove();
}

#[wasm_bindgen_test]
async fn cancel_restores_button_label_and_form_fields() {
    let (form, button, input) = install_delete_form();
    let _bindings = bind_buttons([button.clone()], &test_config());

    input.set_value("scratch edits");
    button.click();
    after_ticks(1).await;

    let cancel: HtmlElement = cancel_affordance(&button).unwrap().unchecked_into();
    cancel.click();

    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Delete"));
    assert!(cancel_affordance(&button).is_none());
    assert_eq!(input.value(), "keep me");

    // No stray interval keeps relabelling after the abort.
    after_ticks(2).await;
    assert_eq!(button.text_content().as_deref(), Some("Delete"));
    assert!(!button.disabled());

    form.remove();
}

#[wasm_bindgen_test]
async fn bound_buttons_count_down_independently() {
    let (first_form, first_button, _) = install_delete_form();
    let (second_form, second_button, _) = install_delete_form();
    let _bindings = bind_buttons(
        [first_button.clone(), second_button.clone()],
        &test_config(),
    );

    first_button.click();
    assert!(first_button.disabled());
    assert!(!second_button.disabled());

    second_button.click();
    after_ticks(1).await;

    // Cancelling the first countdown leaves the second one running.
    let cancel: HtmlElement = cancel_affordance(&first_button).unwrap().unchecked_into();
    cancel.click();
    assert!(!first_button.disabled());
    assert!(second_button.disabled());
    assert_eq!(
        second_button.text_content().as_deref(),
        Some("Deleting in 3 seconds...")
    );

    let cancel: HtmlElement = cancel_affordance(&second_button).unwrap().unchecked_into();
    cancel.click();
    first_form.remove();
    second_form.remove();
}

#[wasm_bindgen_test]
fn rebinding_a_scanned_document_is_a_noop() {
    let (form, button, _input) = install_delete_form();
    button.set_attribute("data-case", "rebind").unwrap();
    let config = BinderConfig {
        selector: "form button[data-countdown-delete][data-case=rebind]".to_owned(),
        ..test_config()
    };

    let first: Vec<CountdownBinding> = bind_document(&config);
    assert_eq!(first.len(), 1);

    let second = bind_document(&config);
    assert!(second.is_empty());

    // Still exactly one interaction: one press, one cancel affordance.
    button.click();
    assert!(cancel_affordance(&button).is_some());
    let cancel: HtmlElement = cancel_affordance(&button).unwrap().unchecked_into();
    assert!(cancel.next_element_sibling().is_none());

    cancel.click();
    form.remove();
}

#[wasm_bindgen_test]
fn button_without_an_enclosing_form_is_skipped() {
    let document = document();
    let orphan: HtmlButtonElement = document
        .create_element("button")
        .unwrap()
        .unchecked_into();
    orphan.set_attribute("data-countdown-delete", "").unwrap();
    document.body().unwrap().append_child(&orphan).unwrap();

    let bindings = bind_buttons([orphan.clone()], &test_config());
    assert!(bindings.is_empty());

    orphan.click();
    assert!(!orphan.disabled());
    assert!(cancel_affordance(&orphan).is_none());

    orphan.remove();
}
