use crate::canvas::CanvasSurface;
use crate::overlay;
use crate::render;
use instant::Instant;
use room_core::{LayerId, ModeController, RoomLayers};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<ModeController>>,
    pub layers: RoomLayers<CanvasSurface>,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub text_overlay: web::Element,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.started.elapsed();
        let mut controller = self.controller.borrow_mut();
        controller.tick(now, &mut self.layers);

        if let Some(g) = &mut self.gpu {
            let state = controller.state();
            let rebound = state.materials.needs_update();
            if rebound {
                g.bind_materials(&state.materials);
            }
            for id in LayerId::ALL {
                if !self.layers.take_dirty(id) {
                    continue;
                }
                match self.layers.surface(id).read_pixels() {
                    Ok(pixels) => g.upload_layer(id, &pixels),
                    Err(e) => log::error!("[frame] {} readback failed: {:?}", id.label(), e),
                }
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.update_scene(state);
            match g.render(state.snow_visible) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
            if rebound {
                controller.acknowledge_materials();
            }
        }

        overlay::apply(&self.text_overlay, &controller.state().overlay, now);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
