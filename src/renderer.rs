// Renderer struct that draws onto a canvas through its 2d context. The canvas
// backing store is the surface size: resizing it also clears it.

use crate::color::Color;
use crate::error::FieldError;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Fails when the canvas has no 2d context to give (detached, or already
    // bound to another context type)
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(FieldError::SurfaceUnavailable)?;

        Ok(CanvasRenderer { canvas, context })
    }
}

impl Surface for CanvasRenderer {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.begin_path();
        if self.context.arc(x, y, radius, 0.0, PI * 2.0).is_ok() {
            self.context.fill();
        }
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, width: f64) {
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
