//! Canvas 2D backing for the raster layers, plus the backdrop image loader.

use glam::Vec2;
use room_core::surface::{FontSpec, Rect, Rgba, Segment, StrokeStyle, Surface};
use room_core::{AssetError, ImageSlot};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Offscreen `<canvas>` with its 2D context. Never attached to the page.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(document: &web::Document, size: u32) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_width(size);
        canvas.set_height(size);
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            size: Vec2::splat(size as f32),
        })
    }

    /// Whole buffer as tightly packed RGBA8 rows, top row first.
    pub fn read_pixels(&self) -> anyhow::Result<Vec<u8>> {
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, self.size.x as f64, self.size.y as f64)
            .map_err(|e| anyhow::anyhow!(format!("get_image_data: {:?}", e)))?;
        Ok(data.data().0)
    }
}

impl Surface for CanvasSurface {
    type Image = web::HtmlImageElement;

    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_text(&mut self, text: &str, origin: Vec2, font: FontSpec, color: Rgba) {
        self.ctx.set_font(&font.to_css());
        self.ctx.set_fill_style_str(&color.to_css());
        _ = self.ctx.fill_text(text, origin.x as f64, origin.y as f64);
    }

    fn draw_image(&mut self, image: &Self::Image, dest: Rect) {
        _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            dest.x as f64,
            dest.y as f64,
            dest.width as f64,
            dest.height as f64,
        );
    }

    fn stroke_segments(&mut self, segments: &[Segment], style: StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color.to_css());
        self.ctx.set_line_width(style.width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.begin_path();
        for s in segments {
            self.ctx.move_to(s.from.x as f64, s.from.y as f64);
            self.ctx.line_to(s.to.x as f64, s.to.y as f64);
        }
        self.ctx.stroke();
    }
}

/// Start fetching `url`. The slot settles from the element's load callbacks;
/// animators poll it on every tick.
pub fn load_image(url: &str) -> anyhow::Result<ImageSlot<web::HtmlImageElement>> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let slot = ImageSlot::pending();

    let onload = {
        let slot = slot.clone();
        let loaded = img.clone();
        let url = url.to_string();
        Closure::wrap(Box::new(move || {
            log::info!("[image] loaded {}", url);
            slot.resolve(loaded.clone());
        }) as Box<dyn FnMut()>)
    };
    let onerror = {
        let slot = slot.clone();
        let url = url.to_string();
        Closure::wrap(Box::new(move || {
            slot.fail(AssetError::LoadFailed { url: url.clone() });
        }) as Box<dyn FnMut()>)
    };
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    img.set_src(url);
    Ok(slot)
}
