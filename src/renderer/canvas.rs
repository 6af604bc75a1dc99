//! Canvas 2D backend (wasm32 only)

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::DrawingSurface;

/// `DrawingSurface` over a browser 2D rendering context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl DrawingSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        if let Err(e) = self.ctx.translate(x as f64, y as f64) {
            log::warn!("translate failed: {:?}", e);
        }
    }

    fn rotate(&mut self, radians: f32) {
        if let Err(e) = self.ctx.rotate(radians as f64) {
            log::warn!("rotate failed: {:?}", e);
        }
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        if let Err(e) = self.ctx.scale(sx as f64, sy as f64) {
            log::warn!("scale failed: {:?}", e);
        }
    }

    fn fill_circle(&mut self, radius: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(0.0, 0.0, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }
}
