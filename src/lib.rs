#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use instant::Instant;
use room_core::constants::RASTER_SIZE;
use room_core::{ModeController, RoomLayers, SceneState, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod layout;
mod overlay;
mod render;

/// Size the canvas to the space below the toolbar and tell the controller.
fn apply_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    controller: &RefCell<ModeController>,
) {
    let (w, h) = dom::viewport_css_size(window);
    dom::sync_canvas_size(window, canvas, w, h);
    controller
        .borrow_mut()
        .resize(Viewport::new(w as f32, h as f32));
    log::info!("[resize] viewport {}x{}", w, h);
}

fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    controller: &Rc<RefCell<ModeController>>,
) {
    apply_viewport(window, canvas, controller);
    let window_resize = window.clone();
    let canvas_resize = canvas.clone();
    let controller_resize = controller.clone();
    dom::add_resize_listener(window, move || {
        apply_viewport(&window_resize, &canvas_resize, &controller_resize);
    });
}

/// Button label and body class follow the active theme.
fn sync_chrome(document: &web::Document, state: &SceneState) {
    dom::set_text(document, TOGGLE_BUTTON_ID, state.button_label());
    let other = state.theme.toggled();
    if let Some(class) = other.profile().body_class {
        dom::set_body_class(document, class, false);
    }
    if let Some(class) = state.theme.profile().body_class {
        dom::set_body_class(document, class, true);
    }
}

fn wire_toggle(
    document: &web::Document,
    controller: &Rc<RefCell<ModeController>>,
    started: Instant,
) {
    let document_click = document.clone();
    let controller_click = controller.clone();
    dom::add_click_listener(document, TOGGLE_BUTTON_ID, move || {
        let mut c = controller_click.borrow_mut();
        c.toggle(started.elapsed());
        sync_chrome(&document_click, c.state());
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let container = dom::element_by_id(&document, CONTAINER_ID)?;
    let started = Instant::now();

    let (w, h) = dom::viewport_css_size(&window);
    let controller = Rc::new(RefCell::new(ModeController::new(Viewport::new(
        w as f32, h as f32,
    ))));
    wire_resize(&window, &canvas, &controller);

    let text_overlay = overlay::create(&document, &container)?;
    let backdrop = canvas::load_image(BACKDROP_IMAGE_URL)?;
    let layers = RoomLayers::new(
        |id| {
            log::debug!("[layers] creating {}", id.label());
            canvas::CanvasSurface::new(&document, RASTER_SIZE as u32)
        },
        backdrop,
        rand::random(),
    )?;

    sync_chrome(&document, controller.borrow().state());
    wire_toggle(&document, &controller, started);

    // Without WebGPU the page keeps its toolbar and text overlay.
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        layers,
        gpu,
        canvas,
        text_overlay,
        started,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
