use crate::canvas::CanvasSurface;
use crate::dom;
use crate::SharedApp;
use hongbao_core::{FrameDriver, SimParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Mounted fireworks canvas: the requestAnimationFrame loop plus the
/// resize listener keeping the canvas at viewport size.
///
/// Dropping the view cancels the pending frame and detaches the listener.
pub struct FireworksView {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
    resize: Closure<dyn FnMut()>,
}

impl FireworksView {
    /// Start the loop. Returns `None` (and never runs) without a 2D context.
    pub fn mount(canvas: &web::HtmlCanvasElement, app: SharedApp, seed: u64) -> Option<Self> {
        let window = web::window()?;
        dom::sync_canvas_to_viewport(canvas);
        let Some(mut surface) = CanvasSurface::new(canvas) else {
            log::warn!("[fireworks] no 2d context, animation disabled");
            return None;
        };

        let canvas_resize = canvas.clone();
        let resize = Closure::wrap(Box::new(move || {
            dom::sync_canvas_to_viewport(&canvas_resize);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

        let mut driver = FrameDriver::new(SimParams::default(), seed);
        let raf_id = Rc::new(Cell::new(None));
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let raf_id_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                let mut app = app.borrow_mut();
                let active = app.card.is_active();
                driver.frame(&mut surface, active, &mut app.sfx);
            }
            raf_id_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        raf_id.set(request_frame(&tick));
        log::info!("[fireworks] loop started");

        Some(Self {
            raf_id,
            tick,
            resize,
        })
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

impl Drop for FireworksView {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            if let Some(id) = self.raf_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
            let _ = window
                .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        }
        // the tick closure holds a handle to itself
        self.tick.borrow_mut().take();
        log::info!("[fireworks] loop stopped");
    }
}
