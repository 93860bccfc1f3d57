//! Toast notifications for request outcomes.
//!
//! Toasts stack in a fixed container at the end of `<body>` and dismiss
//! themselves after a few seconds; nothing blocks the page.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use wordclock_domain::outcome::Outcome;

const CONTAINER_ID: &str = "toast-container";
const DISMISS_AFTER_MS: u32 = 5000;

/// Show `outcome` as a success or error toast.
pub fn show_outcome(document: &Document, outcome: &Outcome) {
    show(document, outcome.text(), outcome.is_ok());
}

/// Show an informational toast.
pub fn show_info(document: &Document, text: &str) {
    show(document, text, true);
}

fn show(document: &Document, text: &str, ok: bool) {
    let Some(container) = container(document) else {
        web_sys::console::warn_1(&format!("cannot show notification: {text}").into());
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(if ok { "toast" } else { "toast toast-error" });
    toast.set_text_content(Some(text));
    if container.append_child(&toast).is_err() {
        return;
    }

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
        toast.remove();
    });
}

fn container(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        return Some(existing);
    }
    let body = document.body()?;
    let container = document.create_element("div").ok()?;
    container.set_id(CONTAINER_ID);
    body.append_child(&container).ok()?;
    Some(container)
}
