use crate::dom;
use crate::overlay;
use crate::SharedApp;
use hongbao_core::{route, ShareEnv, SharePayload, ShareRoute};
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Share the current greeting through `navigator.share`, falling back to
/// the instructions overlay whenever that is unavailable or fails.
pub fn share_greeting(app: &SharedApp) {
    let Some(window) = web::window() else {
        return;
    };
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let url = window.location().href().unwrap_or_default();
    let share_fn = Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok());

    let env = ShareEnv {
        user_agent: &user_agent,
        url: &url,
        has_native_share: share_fn.is_some(),
    };
    let greeting = app.borrow().card.greeting();
    match (route(&env, Some(greeting)), share_fn) {
        (ShareRoute::Native(payload), Some(share)) => native_share(&navigator, &share, &payload),
        _ => show_instructions(),
    }
}

fn payload_object(payload: &SharePayload) -> Result<Object, JsValue> {
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &payload.title.as_str().into())?;
    Reflect::set(&data, &"text".into(), &payload.text.as_str().into())?;
    Reflect::set(&data, &"url".into(), &payload.url.as_str().into())?;
    Ok(data)
}

fn native_share(navigator: &web::Navigator, share: &Function, payload: &SharePayload) {
    let promise = payload_object(payload)
        .and_then(|data| share.call1(navigator, &data))
        .and_then(|v| v.dyn_into::<Promise>());
    match promise {
        Ok(p) => spawn_local(async move {
            if let Err(e) = JsFuture::from(p).await {
                log::warn!("[share] failed: {:?}", e);
                show_instructions();
            }
        }),
        Err(e) => {
            log::warn!("[share] failed: {:?}", e);
            show_instructions();
        }
    }
}

fn show_instructions() {
    if let Some(document) = dom::window_document() {
        overlay::show(&document);
    }
}
