//! Drawing seam between the animators and whatever backs a raster layer.
//!
//! The web front-end implements [`Surface`] on top of a 2D canvas context. The
//! [`RecordingSurface`] keeps every call as a [`DrawOp`], which makes it a
//! headless target for tests and tooling.

use glam::Vec2;

/// Canvas paint colour: 8-bit RGB with a floating alpha, like CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RAIN_GREEN: Rgba = Rgba::rgb(0x00, 0xff, 0x00);
    pub const SNOW_BLUE: Rgba = Rgba::rgb(0xa0, 0xd8, 0xf1);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Axis-aligned rectangle in layer units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(size: f32) -> Self {
        Self::new(0.0, 0.0, size, size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size_px: f32,
    pub family: &'static str,
}

impl FontSpec {
    pub fn to_css(self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
}

/// A straight line from `from` to `to` in layer units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Immediate-mode 2D drawing target backing one raster layer.
pub trait Surface {
    /// Decoded image type that [`Surface::draw_image`] can composite.
    type Image;

    fn size(&self) -> Vec2;
    /// Reset every pixel to fully transparent.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    /// Draws `text` with its alphabetic baseline at `origin`.
    fn fill_text(&mut self, text: &str, origin: Vec2, font: FontSpec, color: Rgba);
    fn draw_image(&mut self, image: &Self::Image, dest: Rect);
    /// Strokes all segments as one path with round caps.
    fn stroke_segments(&mut self, segments: &[Segment], style: StrokeStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect(Rect, Rgba),
    FillText {
        text: String,
        origin: Vec2,
        color: Rgba,
    },
    DrawImage(Rect),
    Stroke {
        segments: Vec<Segment>,
        style: StrokeStyle,
    },
}

/// Surface that records draw calls instead of rasterising them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    type Image = ();

    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn fill_text(&mut self, text: &str, origin: Vec2, _font: FontSpec, color: Rgba) {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            origin,
            color,
        });
    }

    fn draw_image(&mut self, _image: &(), dest: Rect) {
        self.ops.push(DrawOp::DrawImage(dest));
    }

    fn stroke_segments(&mut self, segments: &[Segment], style: StrokeStyle) {
        self.ops.push(DrawOp::Stroke {
            segments: segments.to_vec(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings_match_canvas_syntax() {
        assert_eq!(Rgba::BLACK.with_alpha(0.05).to_css(), "rgba(0,0,0,0.05)");
        assert_eq!(Rgba::SNOW_BLUE.to_css(), "rgba(160,216,241,1)");
        let font = FontSpec {
            size_px: 14.0,
            family: "monospace",
        };
        assert_eq!(font.to_css(), "14px monospace");
    }

    #[test]
    fn recording_surface_drains_ops() {
        let mut s = RecordingSurface::new(4.0, 4.0);
        s.clear();
        s.fill_rect(Rect::square(4.0), Rgba::WHITE);
        assert_eq!(s.ops().len(), 2);
        assert_eq!(s.take_ops()[0], DrawOp::Clear);
        assert!(s.ops().is_empty());
    }
}
