use crate::layout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("no #{} to attach a click listener to", element_id);
    }
}

pub fn add_resize_listener(window: &web::Window, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// CSS size of the viewport below the toolbar.
pub fn viewport_css_size(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0)
    };
    layout::viewport_css_size(read(window.inner_width()), read(window.inner_height()))
}

/// Show the canvas at `css_*` and size its backing store to match the display.
pub fn sync_canvas_size(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    css_width: f64,
    css_height: f64,
) {
    _ = canvas.set_attribute("style", &layout::canvas_style(css_width, css_height));
    let (w_px, h_px) = layout::backing_size(css_width, css_height, window.device_pixel_ratio());
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let list = body.class_list();
        _ = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }
}
