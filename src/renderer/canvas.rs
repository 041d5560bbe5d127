//! HTML canvas 2D backend (wasm32 only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::DrawSurface;
use crate::color::Paint;
use crate::sim::SurfaceSize;

/// A canvas element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context. `None` if the canvas refuses one.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Set the backing store size in pixels
    pub fn set_pixel_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> Option<SurfaceSize> {
        if !self.canvas.is_connected() {
            return None;
        }
        SurfaceSize::new(self.canvas.width() as f32, self.canvas.height() as f32).ok()
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, factor: f32) {
        let _ = self.ctx.scale(factor as f64, factor as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.ctx.set_fill_style_str(&paint.to_css());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, point: Vec2) {
        self.ctx.move_to(point.x as f64, point.y as f64);
    }

    fn bezier_to(&mut self, control1: Vec2, control2: Vec2, end: Vec2) {
        self.ctx.bezier_curve_to(
            control1.x as f64,
            control1.y as f64,
            control2.x as f64,
            control2.y as f64,
            end.x as f64,
            end.y as f64,
        );
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ctx.fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }
}
