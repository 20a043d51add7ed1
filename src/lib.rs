#![cfg(target_arch = "wasm32")]
use hongbao_core::{Card, SoundFx};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod share;
mod ui;

use audio::WebAudio;
use constants::CANVAS_ID;

/// UI-owned state: the card and the single sound library instance.
pub struct App {
    pub card: Card,
    pub sfx: SoundFx<WebAudio>,
}

pub(crate) type SharedApp = Rc<RefCell<App>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hongbao-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let seed: u64 = rand::random();
    let app: SharedApp = Rc::new(RefCell::new(App {
        card: Card::new(seed),
        sfx: SoundFx::new(WebAudio::new(), seed ^ 0x9E37_79B9_7F4A_7C15),
    }));
    {
        let a = app.borrow();
        ui::render_card(&document, &a.card);
        ui::render_mute(&document, a.sfx.is_muted());
    }
    events::wire_card_buttons(&document, &app);

    let view = match document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(canvas) => frame::FireworksView::mount(&canvas, app.clone(), seed.rotate_left(17)),
        None => {
            log::warn!("missing #{}, fireworks disabled", CANVAS_ID);
            None
        }
    };
    events::wire_teardown(&window, view);
    Ok(())
}
