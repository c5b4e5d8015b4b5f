use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Element;

use crate::config::RuntimeConfig;
use crate::error::{describe_js, SiteError};
use crate::utils::dom;

const COPY_BUTTON: &str = ".copy-btn";
const PAYLOAD_ATTR: &str = "data-clipboard-text";
pub const COPIED_ICON: &str = r#"<i class="fas fa-check"></i>"#;

pub async fn write_text(text: &str) -> Result<(), SiteError> {
    let navigator = dom::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(SiteError::ClipboardUnavailable);
    }
    let write = Reflect::get(&clipboard, &"writeText".into())?
        .dyn_into::<Function>()
        .map_err(|_| SiteError::ClipboardUnavailable)?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()
        .map_err(SiteError::js)?;
    JsFuture::from(promise)
        .await
        .map_err(|err| SiteError::Clipboard(describe_js(&err)))?;
    Ok(())
}

async fn copy_with_feedback(
    button: Element,
    original_icon: String,
    text: String,
    feedback_ms: u32,
) {
    match write_text(&text).await {
        Ok(()) => {
            button.set_inner_html(COPIED_ICON);
            TimeoutFuture::new(feedback_ms).await;
            button.set_inner_html(&original_icon);
        }
        Err(err) => log::error!("{err}"),
    }
}

pub fn init(scope: &Element, cfg: &RuntimeConfig) -> Result<(), SiteError> {
    for button in dom::query_all_in(scope, COPY_BUTTON)? {
        let original_icon = button.inner_html();
        let target = button.clone();
        let feedback_ms = cfg.copy_feedback_ms;
        dom::listen(&button, "click", move |_| {
            let text = target.get_attribute(PAYLOAD_ATTR).unwrap_or_default();
            spawn_local(copy_with_feedback(
                target.clone(),
                original_icon.clone(),
                text,
                feedback_ms,
            ));
        })?;
    }
    Ok(())
}
