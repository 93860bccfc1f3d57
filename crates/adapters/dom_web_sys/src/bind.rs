//! Button bindings for the device's settings page.
//!
//! Each form is optional: a page that lacks a button simply gets no handler
//! for it.

use std::future::Future;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlInputElement, HtmlSelectElement};

use wordclock_domain::color;
use wordclock_domain::endpoint::{Endpoint, RESTARTING_TO_CONNECT};
use wordclock_domain::settings::{BrightnessSetting, TimezoneSetting, WifiCredential};

use crate::api::make_request;
use crate::toast;

/// Attach click handlers to every panel button present in `document`.
///
/// Returns how many buttons were bound.
pub fn bind_panel(document: &Document) -> usize {
    let bound = [
        on_click(document, "button.sendColor", submit_color),
        on_click(document, "button.sendTimezone", submit_timezone),
        on_click(document, "button.sendBrightness", submit_brightness),
        on_click(document, "button.connect", submit_connect),
    ];
    bound.into_iter().filter(|bound| *bound).count()
}

async fn submit_color(document: Document) {
    let value = input_value(&document, r#"input[name="color"]"#);
    let payload = color::decompose(&value);
    report(&document, Endpoint::ControlColor, &payload).await;
}

async fn submit_timezone(document: Document) {
    let setting = TimezoneSetting::new(
        select_value(&document, r#"select[name="timezone"]"#),
        input_checked(&document, r#"input[name="auto_dst"]"#),
    );
    report(&document, Endpoint::SetTimeZone, &setting).await;
}

async fn submit_brightness(document: Document) {
    let setting = BrightnessSetting::new(
        input_checked(&document, r#"input[name="auto_brightness"]"#),
        input_value(&document, r#"input[name="brightness"]"#),
    );
    report(&document, Endpoint::SetBrightness, &setting).await;
}

/// The request is not awaited before telling the user the device restarts.
async fn submit_connect(document: Document) {
    let credential = WifiCredential::new(
        select_value(&document, r#"select[name="ssid"]"#),
        input_value(&document, r#"input[name="password"]"#),
    );
    let request_document = document.clone();
    spawn_local(async move {
        report(&request_document, Endpoint::Connect, &credential).await;
    });
    toast::show_info(&document, RESTARTING_TO_CONNECT);
}

async fn report<P: serde::Serialize>(document: &Document, endpoint: Endpoint, payload: &P) {
    let outcome = make_request(endpoint, payload).await;
    if !outcome.is_ok() {
        web_sys::console::warn_1(&format!("{endpoint}: {outcome}").into());
    }
    toast::show_outcome(document, &outcome);
}

/// Bind `handler` to clicks on the element matching `selector`, if any.
fn on_click<F, Fut>(document: &Document, selector: &str, handler: F) -> bool
where
    F: Fn(Document) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(button) = document.query_selector(selector).ok().flatten() else {
        return false;
    };

    let handler_document = document.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        spawn_local(handler(handler_document.clone()));
    });

    if button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&format!("failed to bind {selector}").into());
        return false;
    }
    // the listener lives as long as the page
    on_click.forget();
    true
}

fn input_value(document: &Document, selector: &str) -> String {
    query::<HtmlInputElement>(document, selector)
        .map(|input| input.value())
        .unwrap_or_default()
}

fn input_checked(document: &Document, selector: &str) -> bool {
    query::<HtmlInputElement>(document, selector).is_some_and(|input| input.checked())
}

fn select_value(document: &Document, selector: &str) -> String {
    query::<HtmlSelectElement>(document, selector)
        .map(|select| select.value())
        .unwrap_or_default()
}

fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}
