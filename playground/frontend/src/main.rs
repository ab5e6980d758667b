//! Demo page for the countdown-confirm binder.
//!
//! Stands in for the server-rendered template that normally supplies the
//! markup contract: forms whose delete buttons carry the
//! `data-countdown-delete` role marker. The page styles `btn`/`btn-warning`
//! itself since no external stylesheet is loaded here.

use std::cell::RefCell;

use countdown_confirm::zoon::{println, *};
use countdown_confirm::{BinderConfig, CountdownBinding, bind_document};

// The bindings own the click listeners and timers; the page keeps them
// alive for its whole life.
thread_local! {
    static BINDINGS: RefCell<Vec<CountdownBinding>> = RefCell::new(Vec::new());
}

static DEMO_MARKUP: &str = r#"
<style>
    .btn { padding: 4px 12px; border-radius: 4px; border: 1px solid #888; }
    .btn-warning { background: #ffc107; border-color: #d39e00; }
</style>
<h2>Threads</h2>
<form action="" method="post">
    <label>Title <input name="title" value="Weekly discussion"></label>
    <button type="submit" data-countdown-delete>Delete</button>
</form>
<form action="" method="post">
    <label>Title <input name="title" value="Release notes"></label>
    <button type="submit" data-countdown-delete>Delete</button>
</form>
"#;

fn main() {
    start_app("app", root);
}

fn root() -> impl Element {
    El::new()
        .s(Padding::all(24))
        .update_raw_el(|raw_el| {
            raw_el.after_insert(|element| {
                element.set_inner_html(DEMO_MARKUP);
                install_countdowns();
            })
        })
}

fn install_countdowns() {
    let bindings = bind_document(&BinderConfig::default());
    println!("Bound {} delete button(s)", bindings.len());
    BINDINGS.with(|cell| cell.borrow_mut().extend(bindings));
}
