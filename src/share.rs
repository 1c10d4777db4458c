//! Share button behavior: Web Share API first, then the asynchronous
//! clipboard, then the legacy temp-input copy dance.

use gloo_utils::{document, window};
use js_sys::Reflect;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlInputElement, ShareData};

/// Share the current page's title and URL.
pub async fn share_current_page() {
    let window = window();
    let title = document().title();
    let url = window.location().href().unwrap_or_default();
    let navigator = window.navigator();

    if Reflect::has(navigator.as_ref(), &"share".into()).unwrap_or(false) {
        let data = ShareData::new();
        data.set_title(&title);
        data.set_url(&url);
        // Rejection includes the user dismissing the share sheet; nothing to do.
        let _ = JsFuture::from(navigator.share_with_data(&data)).await;
        return;
    }

    if Reflect::has(navigator.as_ref(), &"clipboard".into()).unwrap_or(false) {
        match JsFuture::from(navigator.clipboard().write_text(&url)).await {
            Ok(_) => notify("Link copied!"),
            Err(err) => {
                warn!("clipboard write failed: {err:?}");
                notify("Could not copy the link");
            }
        }
        return;
    }

    legacy_copy(&url);
}

/// Old-browser fallback: select the URL inside a throwaway input and copy it.
fn legacy_copy(url: &str) {
    let document = document();
    let Some(body) = document.body() else {
        return;
    };
    let input: HtmlInputElement = match document.create_element("input") {
        Ok(element) => element.unchecked_into(),
        Err(err) => {
            warn!("could not create copy buffer element: {err:?}");
            return;
        }
    };
    input.set_value(url);
    if body.append_child(&input).is_err() {
        return;
    }
    input.select();
    match document.unchecked_into::<HtmlDocument>().exec_command("copy") {
        Ok(true) => notify("Link copied!"),
        _ => notify("Could not copy the link"),
    }
    let _ = body.remove_child(&input);
}

fn notify(message: &str) {
    let _ = window().alert_with_message(message);
}
