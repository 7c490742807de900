// Drawing surface backed by a 2d canvas context on the DOM

use crate::color::Color;
use crate::surface::DrawingSurface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context from the canvas, fails if the canvas already has
    // a different kind of context bound to it
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("context is not a CanvasRenderingContext2d"))?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    // Changing the backing size also wipes whatever was drawn
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl DrawingSurface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), JsValue> {
        self.context
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
        Ok(())
    }

    fn draw_filled_circle(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center_x, center_y, radius, 0.0, PI * 2.0)?;
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css_hex()));
        self.context.set_global_alpha(opacity);
        self.context.fill();
        Ok(())
    }
}
