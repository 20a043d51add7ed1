use crate::constants::*;
use crate::dom;
use crate::frame::FireworksView;
use crate::overlay;
use crate::share;
use crate::ui;
use crate::{App, SharedApp};
use hongbao_core::{PageHide, OPENING_DELAY_MS};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn rerender(app: &SharedApp) {
    if let Some(document) = dom::window_document() {
        ui::render_card(&document, &app.borrow().card);
    }
}

pub fn wire_card_buttons(document: &web::Document, app: &SharedApp) {
    let app_open = app.clone();
    dom::add_click_listener(document, ENVELOPE_ID, move || on_open(&app_open));

    let app_refresh = app.clone();
    dom::add_click_listener(document, REFRESH_BUTTON_ID, move || on_refresh(&app_refresh));

    let app_share = app.clone();
    dom::add_click_listener(document, SHARE_BUTTON_ID, move || {
        share::share_greeting(&app_share)
    });

    let app_mute = app.clone();
    dom::add_click_listener(document, MUTE_BUTTON_ID, move || {
        let muted = app_mute.borrow_mut().sfx.toggle_mute();
        if let Some(d) = dom::window_document() {
            ui::render_mute(&d, muted);
        }
    });

    dom::add_click_listener(document, SHARE_OVERLAY_ID, || {
        if let Some(d) = dom::window_document() {
            overlay::hide(&d);
        }
    });
}

fn on_open(app: &SharedApp) {
    let opened = {
        let mut guard = app.borrow_mut();
        let App { card, sfx } = &mut *guard;
        card.open(sfx)
    };
    if !opened {
        return;
    }
    rerender(app);

    let app_later = app.clone();
    let finish = Closure::once_into_js(move || {
        {
            let mut guard = app_later.borrow_mut();
            let App { card, sfx } = &mut *guard;
            card.finish_opening(sfx);
        }
        rerender(&app_later);
    });
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            finish.unchecked_ref(),
            OPENING_DELAY_MS,
        );
    }
}

fn on_refresh(app: &SharedApp) {
    {
        let mut guard = app.borrow_mut();
        let App { card, sfx } = &mut *guard;
        let greeting = card.refresh(sfx);
        log::info!("[card] refreshed: {}", greeting.title);
    }
    rerender(app);

    // refill the greeting buffer off the click handler
    let app_prefetch = app.clone();
    spawn_local(async move {
        app_prefetch.borrow_mut().card.prefetch();
    });
}

/// Tear the fireworks view down when the page is unloaded. A page entering
/// the back/forward cache keeps its view so a restore resumes the loop.
pub fn wire_teardown(window: &web::Window, view: Option<FireworksView>) {
    let view = RefCell::new(view);
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        let hide = PageHide::from_persisted(ev.persisted());
        if hide.tears_down() {
            log::info!("[fireworks] pagehide: unloading, releasing view");
            drop(view.borrow_mut().take());
        } else {
            log::info!("[fireworks] pagehide: cached, keeping view");
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
